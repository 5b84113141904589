//! Geometry Submission
//!
//! Validates the editor form and the drawing, builds the field record and
//! posts it. Nothing is sent unless every check passes; the form is only
//! cleared once the backend has stored the field.

use std::fmt;

use crate::api::FieldsApi;
use crate::editor::area::field_size;
use crate::error::ApiError;
use crate::geojson::FeatureCollection;
use crate::models::{Field, NewFieldRecord};
use crate::notification::NotificationState;

/// Rejections found before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    EmptyName,
    NothingDrawn,
    EmptyGeometry,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::EmptyName => write!(f, "Please enter a field name"),
            SubmissionError::NothingDrawn => write!(f, "Please draw a field on the map first"),
            SubmissionError::EmptyGeometry => write!(f, "Error creating GeoJSON data"),
        }
    }
}

impl std::error::Error for SubmissionError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Invalid(SubmissionError),
    Api(ApiError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(e) => write!(f, "{}", e),
            SubmitError::Api(e) => write!(f, "Eroare la salvarea terenului: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<SubmissionError> for SubmitError {
    fn from(e: SubmissionError) -> Self {
        SubmitError::Invalid(e)
    }
}

impl From<ApiError> for SubmitError {
    fn from(e: ApiError) -> Self {
        SubmitError::Api(e)
    }
}

/// The group of shapes the user drew
pub trait DrawingLayer {
    fn layer_count(&self) -> usize;

    /// Every drawn shape as GeoJSON, first drawn first
    fn feature_collection(&self) -> FeatureCollection;

    fn clear(&self);
}

/// No drawing surface (the map failed to start): nothing is ever drawn
impl<D: DrawingLayer> DrawingLayer for Option<D> {
    fn layer_count(&self) -> usize {
        self.as_ref().map_or(0, |drawing| drawing.layer_count())
    }

    fn feature_collection(&self) -> FeatureCollection {
        self.as_ref().map(|drawing| drawing.feature_collection()).unwrap_or_default()
    }

    fn clear(&self) {
        if let Some(drawing) = self {
            drawing.clear();
        }
    }
}

/// Name plus drawing, as the editor holds them
#[derive(Debug, Clone)]
pub struct FieldDraft<D> {
    pub name: String,
    pub drawing: D,
}

impl<D: DrawingLayer> FieldDraft<D> {
    pub fn new(name: impl Into<String>, drawing: D) -> Self {
        Self { name: name.into(), drawing }
    }

    /// Record for the first drawn polygon, or the first failing check
    pub fn prepare(&self, location: &str) -> Result<NewFieldRecord, SubmissionError> {
        if self.name.trim().is_empty() {
            return Err(SubmissionError::EmptyName);
        }
        if self.drawing.layer_count() == 0 {
            return Err(SubmissionError::NothingDrawn);
        }
        let collection = self.drawing.feature_collection();
        let feature = collection.first().ok_or(SubmissionError::EmptyGeometry)?;

        Ok(NewFieldRecord {
            name: self.name.clone(),
            location: location.to_string(),
            size: field_size(feature),
            geojson: feature.clone(),
        })
    }

    /// Clear on success, keep everything on failure; returns the notification to show
    pub fn settle(&mut self, outcome: &Result<Field, SubmitError>) -> NotificationState {
        match outcome {
            Ok(field) => {
                self.name.clear();
                self.drawing.clear();
                NotificationState::success(format!("Terenul \"{}\" a fost salvat cu succes!", field.name))
            }
            Err(e) => NotificationState::error(e.to_string()),
        }
    }
}

/// Text the name input should hold once a save settles; `None` leaves the input alone
pub fn name_after_save(outcome: &Result<Field, SubmitError>) -> Option<String> {
    outcome.as_ref().ok().map(|_| String::new())
}

pub async fn submit_draft<A, D>(api: &A, draft: &FieldDraft<D>, location: &str) -> Result<Field, SubmitError>
where
    A: FieldsApi + ?Sized,
    D: DrawingLayer,
{
    let record = draft.prepare(location)?;
    log::info!("[Editor] Saving field \"{}\" ({} ha)", record.name, record.size);
    match api.create_field(&record).await {
        Ok(field) => {
            log::info!("[Editor] Saved field {}", field.id);
            Ok(field)
        }
        Err(e) => {
            log::error!("[Editor] Saving field failed: {}", e);
            Err(e.into())
        }
    }
}
