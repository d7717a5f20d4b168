//! Named product containers with price-change tracking.

use rust_decimal::Decimal;

use warekeep_core::{DomainError, DomainResult, Entity, ProductId};

use crate::category::Category;
use crate::product::Product;

/// Named container of products with pending-change tracking.
///
/// Products are kept in insertion order and ids are unique per warehouse.
/// A price update replaces the stored record (position retained) and parks the
/// pre-update snapshot in the changed-set until the next
/// [`Warehouse::changed_products`] drain.
///
/// ## Thread safety
///
/// A `Warehouse` is a plain single-threaded value: mutators take `&mut self`
/// and nothing locks. Shared access goes through the handles a
/// [`WarehouseRegistry`](crate::registry::WarehouseRegistry) hands out.
#[derive(Debug)]
pub struct Warehouse {
    name: String,
    products: Vec<Product>,
    changed: Vec<Product>,
}

impl Warehouse {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            products: Vec::new(),
            changed: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True iff no products are registered.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Snapshot of all products in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Register a new product.
    ///
    /// An omitted `id` gets a fresh random identifier; an omitted `price`
    /// defaults to zero. The name is validated trimmed but stored as given.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when the name is blank, the
    /// price is negative, or a product with the resolved id already exists.
    /// Validation happens before any state change.
    pub fn add_product(
        &mut self,
        id: Option<ProductId>,
        name: &str,
        category: Category,
        price: Option<Decimal>,
    ) -> DomainResult<Product> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "product name can't be empty",
            ));
        }

        let price = price.unwrap_or(Decimal::ZERO);
        if price < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "product price can't be negative",
            ));
        }

        let id = id.unwrap_or_else(ProductId::new);
        if self.products.iter().any(|p| p.id() == id) {
            return Err(DomainError::invalid_argument(
                "product with that id already exists, use update_product_price for updates",
            ));
        }

        let product = Product::new(id, name.to_owned(), category, price);
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace the price of an existing product.
    ///
    /// Setting the current price again is a complete no-op. Otherwise the
    /// pre-update record is parked in the changed-set (only the first snapshot
    /// per drain cycle is kept) and the stored record is replaced by a new one
    /// carrying the same id, name and category.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when no product with `id`
    /// exists or the new price is negative.
    pub fn update_product_price(&mut self, id: ProductId, new_price: Decimal) -> DomainResult<()> {
        let position = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| DomainError::invalid_argument("product with that id doesn't exist"))?;

        if new_price < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "product price can't be negative",
            ));
        }

        let current = &self.products[position];
        if current.price() == new_price {
            return Ok(());
        }

        if !self.changed.iter().any(|p| p.id() == id) {
            self.changed.push(current.clone());
        }

        self.products[position] = current.with_price(new_price);
        Ok(())
    }

    /// Drain the pending pre-update snapshots, in first-insertion order.
    ///
    /// The pending set is cleared on return, so each snapshot is delivered at
    /// most once per drain cycle.
    pub fn changed_products(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.changed)
    }

    /// The product with the given id, if it currently exists.
    pub fn product_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id() == id).cloned()
    }

    /// All current products in the given category, in registry order.
    pub fn products_by(&self, category: &Category) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    /// All current products grouped by category.
    ///
    /// Groups appear in the order their category was first encountered;
    /// products keep registry order within each group. An ordered sequence of
    /// pairs stands in for an insertion-ordered map, so iteration order never
    /// depends on hash-table internals.
    pub fn products_grouped_by_category(&self) -> Vec<(Category, Vec<Product>)> {
        let mut groups: Vec<(Category, Vec<Product>)> = Vec::new();
        for product in &self.products {
            match groups
                .iter_mut()
                .find(|(category, _)| category == product.category())
            {
                Some((_, members)) => members.push(product.clone()),
                None => groups.push((product.category().clone(), vec![product.clone()])),
            }
        }
        groups
    }
}

impl Entity for Warehouse {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
