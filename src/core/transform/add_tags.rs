use clap::Parser;

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;
use crate::core::transform::Transformation;

/// Upserts manifest-level tags from key=value arguments, in the order given.
#[derive(Debug)]
pub struct TagAdder {
    entries: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "add-tags", no_binary_name = true)]
struct TagAdderFlags {
    /// Tags to set, each in key=value form
    #[arg(value_name = "KEY=VALUE")]
    tags: Vec<String>,
}

impl Transformation for TagAdder {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError> {
        for entry in &self.entries {
            // The builder already rejected malformed entries; any straggler
            // is skipped rather than aborting a half-applied tag set.
            let Some((key, value)) = parse_tag(entry) else {
                continue;
            };
            manifest.add_tag(key, value);
        }
        Ok(())
    }
}

/// Builds the 'add-tags' transformation.
pub fn build(args: &[String]) -> Result<Box<dyn Transformation>, TransformError> {
    let flags = TagAdderFlags::try_parse_from(args)?;

    if flags.tags.is_empty() {
        return Err(TransformError::MissingTagSpecifiers);
    }
    for entry in &flags.tags {
        if parse_tag(entry).is_none() {
            return Err(TransformError::InvalidTagSpecifier(entry.clone()));
        }
    }

    Ok(Box::new(TagAdder { entries: flags.tags }))
}

/// A valid specifier has exactly one '=' with non-empty key and value.
fn parse_tag(entry: &str) -> Option<(&str, &str)> {
    if entry.matches('=').count() != 1 {
        return None;
    }
    let (key, value) = entry.split_once('=')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
