//! Deletion Workflow
//!
//! Confirm, then delete. The field leaves the gallery only after the
//! backend confirms; on any failure it stays.

use crate::api::FieldsApi;
use crate::error::ApiError;
use crate::models::{FieldId, GalleryEntry};
use crate::notification::NotificationState;

pub const DELETED: &str = "Parcela a fost ștearsă cu succes.";
pub const NOT_DELETED: &str = "Parcela nu a putut fi ștearsă.";
pub const DELETE_FAILED: &str = "A apărut o eroare la ștergere.";

/// Shared confirmation prompt; at most one field pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    pending: Option<FieldId>,
}

impl DeletePrompt {
    /// Open the prompt for `id`, replacing any earlier request
    pub fn request(&mut self, id: FieldId) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<FieldId> {
        self.pending
    }

    /// Close the prompt, handing out the field to delete
    pub fn confirm(&mut self) -> Option<FieldId> {
        self.pending.take()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeletionOutcome {
    Deleted(FieldId),
    Failed(FieldId, ApiError),
}

impl DeletionOutcome {
    /// Update the gallery and produce the notification to show
    pub fn apply(&self, entries: &mut Vec<GalleryEntry>) -> NotificationState {
        match self {
            DeletionOutcome::Deleted(id) => {
                entries.retain(|entry| entry.id() != *id);
                NotificationState::success(DELETED)
            }
            DeletionOutcome::Failed(_, err) if err.is_transport() => NotificationState::error(DELETE_FAILED),
            DeletionOutcome::Failed(_, _) => NotificationState::error(NOT_DELETED),
        }
    }
}

pub async fn delete_field<A: FieldsApi + ?Sized>(api: &A, id: FieldId) -> DeletionOutcome {
    match api.delete_field(id).await {
        Ok(()) => {
            log::info!("[Gallery] Deleted field {}", id);
            DeletionOutcome::Deleted(id)
        }
        Err(e) => {
            log::error!("[Gallery] Deleting field {} failed: {}", id, e);
            DeletionOutcome::Failed(id, e)
        }
    }
}
