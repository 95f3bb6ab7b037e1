use clap::Parser;

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;
use crate::core::transform::Transformation;

/// Duplicates an instance group under a new name. The copy owns its own job
/// and network lists; it is a point-in-time duplicate, not an alias.
#[derive(Debug)]
pub struct Cloner {
    instance_group: String,
    clone: String,
}

#[derive(Debug, Parser)]
#[command(name = "clone", no_binary_name = true)]
struct ClonerFlags {
    /// Name of the instance group to clone
    #[arg(long, value_name = "NAME")]
    instance_group: Option<String>,

    /// The name to use for the copy
    #[arg(long, value_name = "NAME")]
    clone: Option<String>,
}

impl Transformation for Cloner {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError> {
        let group = manifest
            .instance_group(&self.instance_group)
            .ok_or_else(|| TransformError::UnknownInstanceGroup(self.instance_group.clone()))?;

        let mut copy = group.clone();
        copy.name = self.clone.clone();
        manifest.add_instance_group(copy)
    }
}

/// Builds the 'clone' transformation.
pub fn build(args: &[String]) -> Result<Box<dyn Transformation>, TransformError> {
    let flags = ClonerFlags::try_parse_from(args)?;

    let instance_group = flags
        .instance_group
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("instance-group"))?;
    let clone = flags
        .clone
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("clone"))?;

    Ok(Box::new(Cloner {
        instance_group,
        clone,
    }))
}
