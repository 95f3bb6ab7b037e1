use clap::Parser;

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;
use crate::core::transform::{split_csv, Transformation};

/// Replaces an instance group's availability-zone list wholesale.
#[derive(Debug)]
pub struct AzChanger {
    instance_group: String,
    azs: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "change-az", no_binary_name = true)]
struct AzChangerFlags {
    /// Name of the instance group
    #[arg(long, value_name = "NAME")]
    instance_group: Option<String>,

    /// Comma-separated list of az names
    #[arg(long, value_name = "AZS")]
    az: Option<String>,
}

impl Transformation for AzChanger {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError> {
        let group = manifest
            .instance_group_mut(&self.instance_group)
            .ok_or_else(|| TransformError::UnknownInstanceGroup(self.instance_group.clone()))?;

        group.azs = self.azs.clone();
        Ok(())
    }
}

/// Builds the 'change-az' transformation.
pub fn build(args: &[String]) -> Result<Box<dyn Transformation>, TransformError> {
    let flags = AzChangerFlags::try_parse_from(args)?;

    let instance_group = flags
        .instance_group
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("instance-group"))?;
    let raw = flags
        .az
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("az"))?;

    if raw.contains(' ') {
        return Err(TransformError::AzContainsSpace);
    }
    let azs = split_csv(&raw);
    if azs.is_empty() {
        return Err(TransformError::EmptyAzList);
    }

    Ok(Box::new(AzChanger { instance_group, azs }))
}
