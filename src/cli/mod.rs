pub mod flags;

use std::io::{Read, Write};

use crate::core::error::TransformError;
use crate::core::manifest::DeploymentManifest;
use crate::core::transform::registry::Registry;

const NAME: &str = env!("CARGO_PKG_NAME");

/// Runs one transformation over a manifest stream and returns the process
/// exit code. The manifest is read in full from `input` and written in full
/// to `output` only on success; diagnostics go to stderr.
pub fn run(
    args: &[String],
    registry: &Registry,
    input: &mut dyn Read,
    output: &mut dyn Write,
) -> i32 {
    if args.len() == 2 && args[1].ends_with("version") {
        if let Err(err) = writeln!(output, "{NAME} v{}", crate::VERSION) {
            eprintln!("ERROR: {err}");
            return 1;
        }
        return 0;
    }

    let program = args.first().map(String::as_str).unwrap_or(NAME);
    let Some(name) = args.get(1) else {
        eprintln!("Usage: {program} <transform> [args...]");
        print_transforms(registry);
        return 1;
    };

    let Some(builder) = registry.get(name) else {
        eprintln!("Usage: {program} <transform> [args...]");
        eprintln!("ERROR: unknown transform {name:?}");
        print_transforms(registry);
        return 1;
    };

    let transform_args = flags::normalize_long_flags(&args[2..]);
    let transform = match builder(&transform_args) {
        Ok(transform) => transform,
        Err(TransformError::Usage(err)) => {
            // clap renders its own usage-style message, including -help output
            eprintln!("{err}");
            return 1;
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            return 1;
        }
    };

    let mut raw = String::new();
    if let Err(err) = input.read_to_string(&mut raw) {
        eprintln!("ERROR: {err}");
        return 1;
    }
    tracing::debug!(transform = %name, bytes = raw.len(), "read manifest");

    let mut manifest = match DeploymentManifest::from_yaml(&raw) {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("ERROR: invalid input manifest: {err}");
            return 1;
        }
    };

    if let Err(err) = transform.apply(&mut manifest) {
        eprintln!("ERROR: {err}");
        return 1;
    }
    tracing::info!(transform = %name, "transformation applied");

    let rendered = match manifest.to_yaml() {
        Ok(rendered) => rendered,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return 1;
        }
    };
    if let Err(err) = output.write_all(rendered.as_bytes()) {
        eprintln!("ERROR: {err}");
        return 1;
    }
    0
}

fn print_transforms(registry: &Registry) {
    eprintln!("Transforms:");
    for name in registry.names() {
        eprintln!("  {name}");
    }
}
