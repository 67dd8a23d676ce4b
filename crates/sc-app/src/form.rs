//! Form state machine.

use crate::notify::Notification;
use crate::submit::SubmitError;
use chrono::{DateTime, Utc};
use sc_core::Score;
use sc_record::{
    InspectionRecord, MetadataField, SubmissionPayload, validate_for_submit,
};
use sc_store::DraftStore;

/// Coarse lifecycle of the form.
///
/// There is no observable "saving" state: the draft store is a synchronous
/// local write. A successful submission resets straight back to `Empty`;
/// there is no archived or read-only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Empty,
    Editing,
    Submitting,
}

/// Single owner of the session's [`InspectionRecord`].
///
/// Edits arrive through the named operations below; user-visible outcomes
/// are queued as [`Notification`]s for the display layer to drain.
pub struct FormState {
    record: InspectionRecord,
    submitting: bool,
    notices: Vec<Notification>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            record: InspectionRecord::new(),
            submitting: false,
            notices: Vec::new(),
        }
    }

    pub fn record(&self) -> &InspectionRecord {
        &self.record
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else if self.record.is_empty() {
            FormPhase::Empty
        } else {
            FormPhase::Editing
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Queued notifications, oldest first. Draining is the display layer's
    /// job; the queue only grows between drains.
    pub fn take_notices(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notices)
    }

    pub fn set_metadata(&mut self, field: MetadataField, value: impl Into<String>) {
        self.record.set_metadata(field, value);
    }

    pub fn set_score(&mut self, id: &str, score: Score) {
        self.record.set_score(id, score);
    }

    pub fn set_remark(&mut self, id: &str, text: impl Into<String>) {
        self.record.set_remark(id, text);
    }

    /// Write the full record to the draft store, unconditionally, and tell
    /// the user. The record itself is never altered by a save.
    pub fn save_draft(&mut self, store: Option<&DraftStore>) {
        let Some(store) = store else {
            self.notices
                .push(Notification::error("Draft storage is unavailable"));
            return;
        };
        match store.save_draft(&self.record) {
            Ok(()) => self
                .notices
                .push(Notification::success("Form data saved locally")),
            Err(err) => {
                tracing::warn!(error = %err, "draft save failed");
                self.notices
                    .push(Notification::error("Could not save the draft locally"));
            }
        }
    }

    /// Session-start restore. A parseable stored draft replaces the record
    /// wholesale; a malformed one is logged and otherwise ignored, leaving
    /// the empty default in place.
    pub fn restore_draft(&mut self, store: Option<&DraftStore>) {
        let Some(store) = store else { return };
        match store.load_draft() {
            Ok(Some(record)) => {
                self.record = record;
                self.notices
                    .push(Notification::info("Previously saved data loaded"));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "stored draft is unreadable, starting empty");
            }
        }
    }

    /// Run the validation gate and, if it passes, produce the payload for
    /// the single network request, entering the `Submitting` phase.
    ///
    /// Validation failure queues the user-facing explanation and returns
    /// `None`; no network request must be made. A submission already in
    /// flight also returns `None`.
    pub fn prepare_submission(&mut self, now: DateTime<Utc>) -> Option<SubmissionPayload> {
        if self.submitting {
            return None;
        }

        use sc_record::ValidationError;
        match validate_for_submit(&self.record, sc_catalog::parameters()) {
            Ok(()) => {}
            Err(ValidationError::MissingBasicInfo { .. }) => {
                self.notices.push(Notification::error(
                    "Please fill in all basic information fields",
                ));
                return None;
            }
            Err(ValidationError::IncompleteParameters { missing }) => {
                self.notices.push(Notification::error(format!(
                    "Please score all parameters. Missing: {missing} items"
                )));
                return None;
            }
        }

        self.submitting = true;
        Some(SubmissionPayload::new(
            self.record.clone(),
            now,
            sc_catalog::max_possible_score(),
        ))
    }

    /// Apply a success response: notify, reset to the empty default, drop
    /// the stored draft.
    pub fn complete_submission(&mut self, store: Option<&DraftStore>) {
        self.submitting = false;
        self.record.reset();
        if let Some(store) = store
            && let Err(err) = store.clear_draft()
        {
            tracing::warn!(error = %err, "could not clear draft after submission");
        }
        self.notices
            .push(Notification::success("Score card submitted successfully"));
    }

    /// Apply a failed response or transport error: notify and leave the
    /// record and the stored draft exactly as they were.
    pub fn fail_submission(&mut self, error: &SubmitError) {
        self.submitting = false;
        tracing::warn!(error = %error, "submission failed");
        self.notices.push(Notification::error(
            "Failed to submit score card. Please try again",
        ));
    }
}
