//! profiles application
//!
//! The profile document model, the form that edits it, and the components
//! that load it for editing or read-only display.

pub mod forms;
pub mod models;
pub mod views;

pub use forms::{FieldErrors, ProfileDraft, ProfileForm};
pub use models::Profile;
pub use views::{EditorOutcome, ProfileDetail, ProfileEditor, ProfileViewer, ViewerState};
