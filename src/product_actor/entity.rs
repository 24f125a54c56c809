//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use serde_json::Value;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Error = ProductError;

    fn id(&self) -> ProductId {
        self.id
    }

    /// One past the largest id currently stored, or 1 for an empty collection.
    ///
    /// A stored `i64::MAX` leaves nothing to allocate; that is reported as
    /// [`ProductError::IdsExhausted`].
    fn next_id(existing: &[Self]) -> Result<ProductId, ProductError> {
        match existing.iter().map(|p| p.id.0).max() {
            None => Ok(ProductId(1)),
            Some(max) => max
                .checked_add(1)
                .map(ProductId)
                .ok_or(ProductError::IdsExhausted),
        }
    }

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.is_empty() || params.price.is_null() {
            return Err(ProductError::MissingRequiredFields);
        }
        Ok(Self::new(id, params.name, params.price, params.extra))
    }

    /// Shallow-merges the update over the stored record.
    ///
    /// # Fields Updated
    /// - `name`, `price`: replaced when present
    /// - any other field: inserted or replaced, keeping the position of existing keys
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = Value::String(name);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        for (key, value) in update.extra {
            self.extra.insert(key, value);
        }
        Ok(())
    }
}
