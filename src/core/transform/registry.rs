use indexmap::IndexMap;

use crate::core::error::TransformError;
use crate::core::transform::{
    add_tags, add_vm_extension, change_az, change_network, clone, scale, TransformationBuilder,
};

/// Immutable name -> builder mapping, constructed once at process entry and
/// handed to dispatch as a value. Iteration order is registration order.
pub struct Registry {
    builders: IndexMap<&'static str, TransformationBuilder>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            builders: IndexMap::new(),
        }
    }

    /// Registers a builder under `name`. Registering the same name twice is
    /// a construction-time error, not a runtime surprise.
    pub fn register(
        &mut self,
        name: &'static str,
        builder: TransformationBuilder,
    ) -> Result<(), TransformError> {
        if self.builders.contains_key(name) {
            return Err(TransformError::DuplicateTransformation(name.to_string()));
        }
        self.builders.insert(name, builder);
        Ok(())
    }

    /// The full set of built-in transformations.
    pub fn with_builtins() -> Result<Self, TransformError> {
        let mut registry = Registry::new();
        registry.register("change-network", change_network::build)?;
        registry.register("clone", clone::build)?;
        registry.register("change-az", change_az::build)?;
        registry.register("add-tags", add_tags::build)?;
        registry.register("add-vm-extension", add_vm_extension::build)?;
        registry.register("scale", scale::build)?;
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<TransformationBuilder> {
        self.builders.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builders.keys().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
