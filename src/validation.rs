// src/validation.rs
//! Checks and normalizes product payloads before anything touches storage.

use serde_json::Value;
use thiserror::Error;

use crate::dtos::product::ProductPayload;
use crate::models::product::NewProduct;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn invalid_number(field: &str) -> Self {
        Self(format!("Invalid numeric value for {field}"))
    }

    fn invalid_text(field: &str) -> Self {
        Self(format!("Invalid text value for {field}"))
    }
}

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: product_name, discontinued";

/// Turns a raw payload into a record with every column explicitly set.
///
/// For optional fields only a missing key or a JSON `null` counts as absent;
/// `0`, `false` and `""` are values. `discontinued` is absent only when the
/// key is missing, and an explicit `null` reads as 0.
pub fn normalize_product(payload: ProductPayload) -> Result<NewProduct, ValidationError> {
    let product_name = match payload.product_name {
        None => None,
        Some(Value::String(name)) => Some(name),
        Some(_) => return Err(ValidationError::invalid_text("product_name")),
    };
    let product_name = match product_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError(MISSING_REQUIRED_FIELDS.to_string())),
    };
    let Some(discontinued) = payload.discontinued else {
        return Err(ValidationError(MISSING_REQUIRED_FIELDS.to_string()));
    };

    let unit_price = optional_number(payload.unit_price.as_ref(), "unit_price")?;
    let units_in_stock = optional_int(payload.units_in_stock.as_ref(), "units_in_stock")?;
    let units_on_order = optional_int(payload.units_on_order.as_ref(), "units_on_order")?;
    let reorder_level = optional_int(payload.reorder_level.as_ref(), "reorder_level")?;

    let supplier_id = optional_int(payload.supplier_id.as_ref(), "supplier_id")?;
    let category_id = optional_int(payload.category_id.as_ref(), "category_id")?;
    let quantity_per_unit = match payload.quantity_per_unit {
        None => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => return Err(ValidationError::invalid_text("quantity_per_unit")),
    };

    let discontinued = match to_number(&discontinued) {
        Some(n) if n == 0.0 => 0,
        Some(n) if n == 1.0 => 1,
        _ => {
            return Err(ValidationError(
                "Invalid value for discontinued: expected 0 or 1".to_string(),
            ))
        }
    };

    Ok(NewProduct {
        product_name,
        supplier_id,
        category_id,
        quantity_per_unit,
        unit_price,
        units_in_stock,
        units_on_order,
        reorder_level,
        discontinued,
    })
}

/// Numeric reading of a JSON scalar. `None` when it has no finite value.
///
/// Blank strings and `null` read as 0.
fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Some(0.0);
            }
            // `f64::from_str` also accepts "inf" and "NaN" spellings
            if !s.bytes().any(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn optional_number(value: Option<&Value>, field: &str) -> Result<Option<f64>, ValidationError> {
    value
        .map(|v| to_number(v).ok_or_else(|| ValidationError::invalid_number(field)))
        .transpose()
}

fn optional_int(value: Option<&Value>, field: &str) -> Result<Option<i32>, ValidationError> {
    let Some(n) = optional_number(value, field)? else {
        return Ok(None);
    };
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return Err(ValidationError::invalid_number(field));
    }
    Ok(Some(n as i32))
}
