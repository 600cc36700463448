// src/dtos/product.rs
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Fields are kept as raw JSON so that numbers sent as strings ("19.99")
/// and explicit nulls both reach validation untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[schema(value_type = String, example = "Chai")]
    pub product_name: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub supplier_id: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub category_id: Option<Value>,
    #[schema(value_type = Option<String>, example = "10 boxes x 20 bags")]
    pub quantity_per_unit: Option<Value>,
    #[schema(value_type = Option<f64>, example = 18.0)]
    pub unit_price: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub units_in_stock: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub units_on_order: Option<Value>,
    #[schema(value_type = Option<i32>)]
    pub reorder_level: Option<Value>,
    /// 0 for false, 1 for true. An explicit `null` is kept as
    /// `Some(Value::Null)` so it can be told apart from a missing key.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = i32, required = true, example = 0)]
    pub discontinued: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
