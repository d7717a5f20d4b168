//! Named registry of shared warehouse instances.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::warehouse::Warehouse;

/// Name of the warehouse returned by [`WarehouseRegistry::default_instance`].
pub const DEFAULT_WAREHOUSE: &str = "DefaultWarehouse";

/// Shared handle to a warehouse.
///
/// The registry hands out clones of one handle per distinct name, so every
/// caller sees the same product state. Mutation goes through the handle's own
/// lock.
pub type SharedWarehouse = Arc<RwLock<Warehouse>>;

/// Registry of warehouses: one shared instance per distinct name.
///
/// Explicitly constructed and owned by the application root rather than hidden
/// behind a static. [`WarehouseRegistry::reset`] exists for callers that do
/// share one long-lived registry; isolated tests can simply build a fresh one.
///
/// ## Thread safety
///
/// The interior lock strengthens the single-threaded source design so the
/// registry can be shared across threads behind `&self`.
#[derive(Debug, Default)]
pub struct WarehouseRegistry {
    instances: RwLock<HashMap<String, SharedWarehouse>>,
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered warehouse for `name`, created and registered on first
    /// use.
    ///
    /// The empty name is special-cased: it always yields a brand-new,
    /// unregistered warehouse that later callers never see. Callers relying on
    /// shared state must use a non-empty name.
    pub fn get_instance(&self, name: &str) -> SharedWarehouse {
        if name.is_empty() {
            return Arc::new(RwLock::new(Warehouse::new(name)));
        }

        if let Some(instance) = self.instances.read().unwrap().get(name) {
            return Arc::clone(instance);
        }

        let mut instances = self.instances.write().unwrap();
        // Re-check under the write lock: another caller may have registered
        // the name between the two lock acquisitions.
        Arc::clone(instances.entry(name.to_owned()).or_insert_with_key(|key| {
            tracing::debug!(warehouse = %key, "registered new warehouse");
            Arc::new(RwLock::new(Warehouse::new(key)))
        }))
    }

    /// Shorthand for [`WarehouseRegistry::get_instance`] with
    /// [`DEFAULT_WAREHOUSE`].
    pub fn default_instance(&self) -> SharedWarehouse {
        self.get_instance(DEFAULT_WAREHOUSE)
    }

    /// Clear the registry.
    ///
    /// Handles already obtained stay valid and keep their products; the next
    /// `get_instance` for a cleared name registers a fresh, empty instance.
    pub fn reset(&self) {
        self.instances.write().unwrap().clear();
        tracing::debug!("warehouse registry reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryInterner;

    #[test]
    fn same_name_resolves_to_the_same_instance() {
        let registry = WarehouseRegistry::new();

        let first = registry.get_instance("Central");
        let second = registry.get_instance("Central");

        assert!(Arc::ptr_eq(&first, &second));

        // Product state is shared through either handle.
        let interner = CategoryInterner::new();
        first
            .write()
            .unwrap()
            .add_product(None, "Hammer", interner.of("tools"), None)
            .unwrap();
        assert!(!second.read().unwrap().is_empty());
    }

    #[test]
    fn empty_name_always_yields_a_fresh_instance() {
        let registry = WarehouseRegistry::new();

        let first = registry.get_instance("");
        let second = registry.get_instance("");

        assert!(!Arc::ptr_eq(&first, &second));

        let interner = CategoryInterner::new();
        first
            .write()
            .unwrap()
            .add_product(None, "Hammer", interner.of("tools"), None)
            .unwrap();
        assert!(second.read().unwrap().is_empty());
    }

    #[test]
    fn default_instance_uses_the_default_name() {
        let registry = WarehouseRegistry::new();

        let warehouse = registry.default_instance();
        assert_eq!(warehouse.read().unwrap().name(), DEFAULT_WAREHOUSE);

        assert!(Arc::ptr_eq(
            &warehouse,
            &registry.get_instance(DEFAULT_WAREHOUSE)
        ));
    }

    #[test]
    fn reset_clears_registrations_but_not_held_handles() {
        let registry = WarehouseRegistry::new();
        let interner = CategoryInterner::new();

        let before = registry.get_instance("Central");
        before
            .write()
            .unwrap()
            .add_product(None, "Hammer", interner.of("tools"), None)
            .unwrap();

        registry.reset();

        let after = registry.get_instance("Central");
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(after.read().unwrap().is_empty());

        // The handle obtained before the reset keeps its products.
        assert!(!before.read().unwrap().is_empty());
    }
}
