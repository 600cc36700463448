//! Data access for the `products` table.
//!
//! Handlers only see [`ProductRepository`]; the Postgres implementation
//! lives in [`product`] and owns the pool it was given.

pub mod product;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::{NewProduct, Product};

pub use product::PgProductRepository;

/// Failure talking to storage. The cause is kept as text and not classified.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

/// One statement per operation; absence is `Ok(None)`, never an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in storage order. Empty is a valid result.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Option<Product>, RepositoryError>;

    /// Inserts the record and returns the stored row with its new id.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Replaces every mutable column of `id`.
    async fn update(&self, id: i32, product: &NewProduct)
        -> Result<Option<Product>, RepositoryError>;

    /// Removes `id`, returning the row as it was before deletion.
    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
}
