//! In-process stand-in for [`PgProductRepository`](super::PgProductRepository)
//! used by router tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ProductRepository, RepositoryError};
use crate::models::product::{NewProduct, Product};

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<BTreeMap<i32, Product>>,
    next_id: Mutex<i32>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later call returns a storage error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

fn stored(product_id: i32, new: &NewProduct) -> Product {
    Product {
        product_id,
        product_name: new.product_name.clone(),
        supplier_id: new.supplier_id,
        category_id: new.category_id,
        quantity_per_unit: new.quantity_per_unit.clone(),
        unit_price: new.unit_price,
        units_in_stock: new.units_in_stock,
        units_on_order: new.units_on_order,
        reorder_level: new.reorder_level,
        discontinued: new.discontinued,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        self.enter()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let row = stored(id, product);
        self.rows.lock().unwrap().insert(id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        product: &NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            *row = stored(id, product);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().remove(&id))
    }
}
