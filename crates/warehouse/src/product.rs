//! Immutable product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use warekeep_core::{ProductId, ValueObject};

use crate::category::Category;

/// Immutable product record: id, name, category, price.
///
/// A price "update" never mutates the record in place: [`Product::with_price`]
/// builds the replacement and the owning warehouse swaps the stored entry.
/// Snapshots held in the changed-set therefore keep their pre-update price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: String, category: Category, price: Decimal) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// The same product (id, name, category) with a different price.
    pub(crate) fn with_price(&self, price: Decimal) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }
}

impl ValueObject for Product {}
