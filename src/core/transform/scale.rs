use clap::Parser;

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;
use crate::core::transform::Transformation;

/// Sets an instance group's instance count, replacing whatever was there.
#[derive(Debug)]
pub struct ScaleInstance {
    instance_group: String,
    instances: u32,
}

#[derive(Debug, Parser)]
#[command(name = "scale", no_binary_name = true)]
struct ScaleInstanceFlags {
    /// Name of the instance group
    #[arg(long, value_name = "NAME")]
    instance_group: Option<String>,

    /// Number of instances
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    instances: Option<i64>,
}

impl Transformation for ScaleInstance {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError> {
        let group = manifest
            .instance_group_mut(&self.instance_group)
            .ok_or_else(|| TransformError::UnknownInstanceGroup(self.instance_group.clone()))?;

        group.instances = Some(self.instances);
        Ok(())
    }
}

/// Builds the 'scale' transformation.
pub fn build(args: &[String]) -> Result<Box<dyn Transformation>, TransformError> {
    let flags = ScaleInstanceFlags::try_parse_from(args)?;

    let instance_group = flags
        .instance_group
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("instance-group"))?;
    let count = flags
        .instances
        .ok_or(TransformError::MissingFlag("instances"))?;
    let instances =
        u32::try_from(count).map_err(|_| TransformError::InvalidInstanceCount(count))?;

    Ok(Box::new(ScaleInstance {
        instance_group,
        instances,
    }))
}
