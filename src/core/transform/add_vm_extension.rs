use clap::Parser;

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;
use crate::core::transform::{split_csv, Transformation};

/// Appends VM extensions to an instance group. Append-only: existing
/// entries and their order are preserved, and nothing is deduplicated.
#[derive(Debug)]
pub struct VmExtensionAdder {
    instance_group: String,
    extensions: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "add-vm-extension", no_binary_name = true)]
struct VmExtensionAdderFlags {
    /// Name of the instance group
    #[arg(long, value_name = "NAME")]
    instance_group: Option<String>,

    /// Name(s) of the vm extension (comma-separate multiple values)
    #[arg(long, value_name = "NAMES")]
    name: Option<String>,
}

impl Transformation for VmExtensionAdder {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError> {
        let group = manifest
            .instance_group_mut(&self.instance_group)
            .ok_or_else(|| TransformError::UnknownInstanceGroup(self.instance_group.clone()))?;

        group.vm_extensions.extend(self.extensions.iter().cloned());
        Ok(())
    }
}

/// Builds the 'add-vm-extension' transformation.
pub fn build(args: &[String]) -> Result<Box<dyn Transformation>, TransformError> {
    let flags = VmExtensionAdderFlags::try_parse_from(args)?;

    let instance_group = flags
        .instance_group
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("instance-group"))?;
    let raw = flags
        .name
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("name"))?;

    let extensions = split_csv(&raw);
    if extensions.is_empty() {
        return Err(TransformError::EmptyExtensionList);
    }

    Ok(Box::new(VmExtensionAdder {
        instance_group,
        extensions,
    }))
}
