//! sc-app: the inspection form's state machine and submission service.
//!
//! This crate is the single owner of the [`sc_record::InspectionRecord`]
//! during a session. Display layers read the record through [`FormState`],
//! push edits through its named operations, and drain the notification
//! queue it produces; nothing else mutates the record.

pub mod form;
pub mod notify;
pub mod submit;

pub use form::{FormPhase, FormState};
pub use notify::{Notification, NotifyLevel};
pub use submit::{DEFAULT_ENDPOINT, SubmitClient, SubmitError};
