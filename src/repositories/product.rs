// src/repositories/product.rs
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{ProductRepository, RepositoryError};
use crate::models::product::{NewProduct, Product};

/// Columns cast to fixed widths so decoding does not depend on whether the
/// table uses smallint/real or int/double.
const PRODUCT_COLUMNS: &str = "product_id::INT4        AS product_id,
                product_name,
                supplier_id::INT4       AS supplier_id,
                category_id::INT4       AS category_id,
                quantity_per_unit,
                unit_price::FLOAT8      AS unit_price,
                units_in_stock::INT4    AS units_in_stock,
                units_on_order::INT4    AS units_on_order,
                reorder_level::INT4     AS reorder_level,
                discontinued::INT4      AS discontinued";

/// Postgres-backed product storage.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO products
                (product_name, supplier_id, category_id, quantity_per_unit, unit_price,
                 units_in_stock, units_on_order, reorder_level, discontinued)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PRODUCT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.product_name)
            .bind(product.supplier_id)
            .bind(product.category_id)
            .bind(&product.quantity_per_unit)
            .bind(product.unit_price)
            .bind(product.units_in_stock)
            .bind(product.units_on_order)
            .bind(product.reorder_level)
            .bind(product.discontinued)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        product: &NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let sql = format!(
            "UPDATE products SET
                product_name = $1,
                supplier_id = $2,
                category_id = $3,
                quantity_per_unit = $4,
                unit_price = $5,
                units_in_stock = $6,
                units_on_order = $7,
                reorder_level = $8,
                discontinued = $9
             WHERE product_id = $10
             RETURNING {PRODUCT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.product_name)
            .bind(product.supplier_id)
            .bind(product.category_id)
            .bind(&product.quantity_per_unit)
            .bind(product.unit_price)
            .bind(product.units_in_stock)
            .bind(product.units_on_order)
            .bind(product.reorder_level)
            .bind(product.discontinued)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("DELETE FROM products WHERE product_id = $1 RETURNING {PRODUCT_COLUMNS}");
        let deleted = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }
}
