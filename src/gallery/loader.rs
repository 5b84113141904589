//! Field List Loader
//!
//! One read of the whole collection per gallery activation. Anything other
//! than a clean array of fields leaves the gallery empty.

use serde_json::Value;

use crate::api::FieldsApi;
use crate::error::ApiResult;
use crate::models::Field;

/// Fields from a list payload; empty on error or on any unexpected shape
pub fn fields_from_payload(payload: ApiResult<Value>) -> Vec<Field> {
    let value = match payload {
        Ok(value) => value,
        Err(e) => {
            log::error!("[Gallery] Error fetching fields: {}", e);
            return Vec::new();
        }
    };

    if !value.is_array() {
        log::warn!("[Gallery] Field list payload is not an array, showing none");
        return Vec::new();
    }

    match serde_json::from_value::<Vec<Field>>(value) {
        Ok(fields) => fields,
        Err(e) => {
            log::error!("[Gallery] Field list has malformed records: {}", e);
            Vec::new()
        }
    }
}

pub async fn load_fields<A: FieldsApi + ?Sized>(api: &A) -> Vec<Field> {
    let fields = fields_from_payload(api.list_fields().await);
    log::info!("[Gallery] Loaded {} fields", fields.len());
    fields
}
