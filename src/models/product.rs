use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `products` table.
///
/// Optional columns serialize as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Product {
    /// Assigned by the database on insert.
    pub product_id: i32,
    pub product_name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i32>,
    pub units_on_order: Option<i32>,
    pub reorder_level: Option<i32>,
    /// 0 for active, 1 for discontinued.
    pub discontinued: i32,
}

/// The nine mutable columns of a product, ready to bind.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub product_name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i32>,
    pub units_on_order: Option<i32>,
    pub reorder_level: Option<i32>,
    pub discontinued: i32,
}
