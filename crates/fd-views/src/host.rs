//! Collaborators the controllers call into
//!
//! The UI shell implements these; tests use in-memory fakes.

use std::io;

use fd_core::{EntityKind, Identity, Notifier};
use fd_data::schema::{schema, FieldSpec};
use fd_data::Draft;

/// Whether a form creates a record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Identity),
}

/// An open form: what it edits and the text entered so far
#[derive(Debug, Clone, PartialEq)]
pub struct FormRequest {
    pub kind: EntityKind,
    pub mode: FormMode,
    pub title: String,
    pub draft: Draft,
}

impl FormRequest {
    /// Fields shown by the form, in schema order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        schema(self.kind)
            .fields
            .iter()
            .filter(|f| f.kind != fd_data::FieldKind::Derived)
    }

    pub fn value(&self, field: &str) -> &str {
        self.draft.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        if let Some(slot) = self.draft.get_mut(field) {
            *slot = value.into();
        }
    }
}

/// An action waiting on a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Remove { kind: EntityKind, identity: Identity },
}

/// Presents and dismisses the edit form
pub trait FormHost {
    fn open_form(&mut self, request: FormRequest);
    fn close_form(&mut self);
}

/// Asks the user to confirm a pending action; nothing happens on dismissal
pub trait ConfirmHost {
    fn confirm(&mut self, message: &str, action: PendingAction);
}

/// Re-renders the named view from the current state and store
pub trait Renderer {
    fn render_view(&mut self, kind: EntityKind);
}

/// Saves an exported file
pub trait FileSink {
    fn save(&mut self, bytes: &[u8], filename: &str) -> io::Result<()>;
}

/// Everything the CRUD controller needs from the shell
pub trait CrudHost: Notifier + FormHost + ConfirmHost + Renderer {}

impl<T: Notifier + FormHost + ConfirmHost + Renderer + ?Sized> CrudHost for T {}
