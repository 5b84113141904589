//! In-memory `FieldsApi` for workflow tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::FieldsApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Field, FieldId, NewFieldRecord, ReverseGeocode};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewFieldRecord),
    Delete(FieldId),
    ReverseGeocode(FieldId, Value),
}

/// Scripted responses; every call is recorded in order
#[derive(Default)]
pub struct FakeFieldsApi {
    list: RefCell<Option<ApiResult<Value>>>,
    create: RefCell<Option<ApiResult<Field>>>,
    deletes: RefCell<HashMap<FieldId, ApiResult<()>>>,
    geocodes: RefCell<HashMap<FieldId, ApiResult<ReverseGeocode>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeFieldsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, response: ApiResult<Value>) -> Self {
        *self.list.borrow_mut() = Some(response);
        self
    }

    pub fn with_create(self, response: ApiResult<Field>) -> Self {
        *self.create.borrow_mut() = Some(response);
        self
    }

    pub fn with_delete(self, id: FieldId, response: ApiResult<()>) -> Self {
        self.deletes.borrow_mut().insert(id, response);
        self
    }

    pub fn with_geocode(self, id: FieldId, response: ApiResult<ReverseGeocode>) -> Self {
        self.geocodes.borrow_mut().insert(id, response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FieldsApi for FakeFieldsApi {
    async fn list_fields(&self) -> ApiResult<Value> {
        self.calls.borrow_mut().push(Call::List);
        self.list.borrow().clone().unwrap_or_else(|| Ok(Value::Array(Vec::new())))
    }

    async fn create_field(&self, record: &NewFieldRecord) -> ApiResult<Field> {
        self.calls.borrow_mut().push(Call::Create(record.clone()));
        self.create.borrow().clone().unwrap_or_else(|| {
            Ok(Field {
                id: 1,
                name: record.name.clone(),
                size: record.size.to_string(),
                location: record.location.clone(),
                geojson: serde_json::to_value(&record.geojson).unwrap_or(Value::Null),
            })
        })
    }

    async fn delete_field(&self, id: FieldId) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.deletes.borrow().get(&id).cloned().unwrap_or(Ok(()))
    }

    async fn reverse_geocode(&self, id: FieldId, geometry: &Value) -> ApiResult<ReverseGeocode> {
        self.calls.borrow_mut().push(Call::ReverseGeocode(id, geometry.clone()));
        self.geocodes
            .borrow()
            .get(&id)
            .cloned()
            .unwrap_or(Err(ApiError::Status { status: 404, message: None }))
    }
}
