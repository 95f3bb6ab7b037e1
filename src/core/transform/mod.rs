pub mod add_tags;
pub mod add_vm_extension;
pub mod change_az;
pub mod change_network;
pub mod clone;
pub mod registry;
pub mod scale;

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;

/// An action applied to a manifest.
pub trait Transformation: std::fmt::Debug {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError>;
}

/// Builds a transformation from its CLI arguments, fully validating them
/// before anything touches a manifest.
pub type TransformationBuilder =
    fn(&[String]) -> Result<Box<dyn Transformation>, TransformError>;

/// Splits on commas, discarding empty entries. Callers decide whether an
/// empty result is itself an error.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
