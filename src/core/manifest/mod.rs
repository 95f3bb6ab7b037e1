use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::core::error::TransformError;

/// A deployment manifest: named instance groups plus manifest-level tags.
///
/// Only the fields the transformations touch are modeled; everything else in
/// the document survives round-tripping through the flattened mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentManifest {
    #[serde(flatten)]
    pub extra: Mapping,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_groups: Vec<InstanceGroup>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, String>,
}

/// A named unit of deployable work: jobs, network placement, lifecycle,
/// scale, and VM extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstanceGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub azs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<Network>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vm_extensions: Vec<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Network placement of an instance group. Static IP entries are either a
/// single IP literal or an "IP-IP" range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_ips: Vec<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl DeploymentManifest {
    pub fn from_yaml(input: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn instance_group(&self, name: &str) -> Option<&InstanceGroup> {
        self.instance_groups.iter().find(|group| group.name == name)
    }

    pub fn instance_group_mut(&mut self, name: &str) -> Option<&mut InstanceGroup> {
        self.instance_groups
            .iter_mut()
            .find(|group| group.name == name)
    }

    /// Appends a group, rejecting a name that is already taken. Group names
    /// are unique within a manifest.
    pub fn add_instance_group(&mut self, group: InstanceGroup) -> Result<(), TransformError> {
        if self.instance_group(&group.name).is_some() {
            return Err(TransformError::DuplicateInstanceGroup(group.name));
        }
        self.instance_groups.push(group);
        Ok(())
    }

    /// Upserts a manifest-level tag. A repeated key overwrites the previous
    /// value and keeps its original position.
    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }
}
