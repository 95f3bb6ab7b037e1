use std::net::IpAddr;

use clap::Parser;

use crate::core::error::TransformError;
use crate::core::manifest::{DeploymentManifest, InstanceGroup};
use crate::core::transform::{split_csv, Transformation};

/// Moves one instance group, or every group with a given lifecycle, onto a
/// different network, optionally replacing its static IPs.
#[derive(Debug)]
pub struct NetworkMover {
    target: Target,
    network: String,
    static_ips: Vec<String>,
}

#[derive(Debug)]
enum Target {
    InstanceGroup(String),
    Lifecycle(String),
}

#[derive(Debug, Parser)]
#[command(name = "change-network", no_binary_name = true)]
struct NetworkMoverFlags {
    /// Apply the transformation to the instance group with this name
    #[arg(long, value_name = "NAME")]
    instance_group: Option<String>,

    /// Apply the transformation to all instance groups with this lifecycle
    #[arg(long, value_name = "LIFECYCLE")]
    lifecycle: Option<String>,

    /// The name of the network to use
    #[arg(long, value_name = "NAME")]
    network: Option<String>,

    /// Comma-separated list of static IP ranges to set on the network
    #[arg(long, value_name = "IPS")]
    static_ips: Option<String>,
}

impl Transformation for NetworkMover {
    fn apply(&self, manifest: &mut DeploymentManifest) -> Result<(), TransformError> {
        match &self.target {
            Target::InstanceGroup(name) => {
                let group = manifest
                    .instance_group_mut(name)
                    .ok_or_else(|| TransformError::UnknownInstanceGroup(name.clone()))?;
                self.apply_to_group(group)
            }
            Target::Lifecycle(lifecycle) => {
                // Matching groups are mutated in order; a mid-loop failure
                // leaves the earlier ones already moved.
                for group in manifest.instance_groups.iter_mut() {
                    if group.lifecycle.as_deref() != Some(lifecycle.as_str()) {
                        continue;
                    }
                    if let Err(err) = self.apply_to_group(group) {
                        return Err(TransformError::GroupApply {
                            group: group.name.clone(),
                            source: Box::new(err),
                        });
                    }
                    tracing::debug!(group = %group.name, network = %self.network, "moved instance group");
                }
                Ok(())
            }
        }
    }
}

impl NetworkMover {
    fn apply_to_group(&self, group: &mut InstanceGroup) -> Result<(), TransformError> {
        if group.networks.len() != 1 {
            return Err(TransformError::UnexpectedNetworkCount(group.networks.len()));
        }

        group.networks[0].name = self.network.clone();

        if !self.static_ips.is_empty() {
            group.networks[0].static_ips = self.static_ips.clone();
        }
        Ok(())
    }
}

/// Builds the 'change-network' transformation.
pub fn build(args: &[String]) -> Result<Box<dyn Transformation>, TransformError> {
    let flags = NetworkMoverFlags::try_parse_from(args)?;

    let instance_group = flags.instance_group.filter(|value| !value.is_empty());
    let lifecycle = flags.lifecycle.filter(|value| !value.is_empty());
    let target = match (instance_group, lifecycle) {
        (Some(name), None) => Target::InstanceGroup(name),
        (None, Some(lifecycle)) => Target::Lifecycle(lifecycle),
        _ => return Err(TransformError::AmbiguousTarget),
    };

    let network = flags
        .network
        .filter(|value| !value.is_empty())
        .ok_or(TransformError::MissingFlag("network"))?;

    // An empty or all-comma value means "leave the existing IPs alone";
    // only non-empty malformed entries are rejected.
    let mut static_ips = Vec::new();
    if let Some(raw) = flags.static_ips.filter(|value| !value.is_empty()) {
        static_ips = split_csv(&raw);
        for entry in &static_ips {
            validate_ip_range(entry)?;
        }
    }

    Ok(Box::new(NetworkMover {
        target,
        network,
        static_ips,
    }))
}

/// An entry is a bare IP literal or an "IP-IP" range with a single dash;
/// every token must parse as an IPv4/IPv6 address.
fn validate_ip_range(entry: &str) -> Result<(), TransformError> {
    if entry.matches('-').count() > 1 {
        return Err(TransformError::InvalidIpRange(entry.to_string()));
    }
    for token in entry.split('-') {
        if token.parse::<IpAddr>().is_err() {
            return Err(TransformError::InvalidIpAddress(token.to_string()));
        }
    }
    Ok(())
}
