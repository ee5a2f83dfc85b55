//! Create, edit and delete through the form and confirmation hosts
//!
//! One controller serves every entity; the entity schema supplies the field
//! set, validation, identity scheme and derived fields.

use fd_core::{EntityKind, Identity, Record, Severity};
use fd_data::schema::{schema, EntitySchema};
use fd_data::{DataError, Draft, EntityStore, ValidationError};
use thiserror::Error;
use tracing::{info, warn};

use crate::host::{CrudHost, FormMode, FormRequest, PendingAction};

#[cfg(test)]
mod tests;

/// Errors surfaced by CRUD operations
#[derive(Error, Debug)]
pub enum CrudError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} record {identity} no longer exists")]
    NotFound { kind: EntityKind, identity: Identity },

    #[error("{kind} records cannot be {action}")]
    NotPermitted {
        kind: EntityKind,
        action: &'static str,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Drives the CRUD flows of every entity against one store
pub struct CrudController<'a, H: CrudHost + ?Sized> {
    store: &'a mut EntityStore,
    host: &'a mut H,
}

impl<'a, H: CrudHost + ?Sized> CrudController<'a, H> {
    pub fn new(store: &'a mut EntityStore, host: &'a mut H) -> Self {
        Self { store, host }
    }

    fn permitted(
        &mut self,
        kind: EntityKind,
        allowed: impl Fn(&EntitySchema) -> bool,
        action: &'static str,
    ) -> Result<&'static EntitySchema, CrudError> {
        let entity = schema(kind);
        if allowed(entity) {
            Ok(entity)
        } else {
            Err(self.fail(CrudError::NotPermitted { kind, action }))
        }
    }

    /// Report an error to the user and hand it back
    fn fail(&mut self, error: CrudError) -> CrudError {
        warn!(%error, "crud operation rejected");
        self.host.notify(&error.to_string(), Severity::Error);
        error
    }

    fn not_found(&mut self, kind: EntityKind, identity: &Identity) -> CrudError {
        self.fail(CrudError::NotFound {
            kind,
            identity: identity.clone(),
        })
    }

    /// Open an empty form prefilled with field defaults
    pub fn begin_create(&mut self, kind: EntityKind) -> Result<(), CrudError> {
        let entity = self.permitted(kind, |s| s.creatable, "created")?;
        self.host.open_form(FormRequest {
            kind,
            mode: FormMode::Create,
            title: format!("Add {}", kind.noun()),
            draft: entity.draft_for(None),
        });
        Ok(())
    }

    /// Open a form prefilled with the current values of `identity`
    pub fn begin_edit(&mut self, kind: EntityKind, identity: &Identity) -> Result<(), CrudError> {
        let entity = self.permitted(kind, |s| s.editable, "edited")?;
        let Some(record) = self.store.find(kind, identity) else {
            return Err(self.not_found(kind, identity));
        };
        let draft = entity.draft_for(Some(record));
        self.host.open_form(FormRequest {
            kind,
            mode: FormMode::Edit(identity.clone()),
            title: format!("Edit {} {}", kind.noun(), identity),
            draft,
        });
        Ok(())
    }

    /// Validate `draft`, allocate an identity and append the new record
    pub fn create(&mut self, kind: EntityKind, draft: &Draft) -> Result<Record, CrudError> {
        let entity = self.permitted(kind, |s| s.creatable, "created")?;
        let values = entity
            .validate_create(draft)
            .map_err(|e| self.fail(e.into()))?;

        let identity = self.store.allocate_identity(kind, &entity.identity);
        let mut record = entity.new_record(&identity, values);
        let alert = entity.apply_derivation(&mut record);
        self.store
            .append(kind, record.clone())
            .map_err(|e| self.fail(e.into()))?;

        info!(%kind, %identity, "record created");
        self.finish(kind, format!("Added {} {}", kind.noun(), identity), alert);
        Ok(record)
    }

    /// Overwrite the fields present in `draft`, keeping identity and the rest
    pub fn update(&mut self, kind: EntityKind, identity: &Identity, draft: &Draft) -> Result<Record, CrudError> {
        let entity = self.permitted(kind, |s| s.editable, "edited")?;
        let values = entity
            .validate_update(&entity.editable_draft(draft))
            .map_err(|e| self.fail(e.into()))?;

        let Some(record) = self.store.find_mut(kind, identity) else {
            return Err(self.not_found(kind, identity));
        };
        for (field, value) in values {
            record.set(field, value);
        }
        let alert = entity.apply_derivation(record);
        let updated = record.clone();

        info!(%kind, %identity, "record updated");
        self.finish(kind, format!("Updated {} {}", kind.noun(), identity), alert);
        Ok(updated)
    }

    /// Dispatch a submitted form; the form closes only on success
    pub fn submit(&mut self, form: &FormRequest) -> Result<Record, CrudError> {
        let result = match &form.mode {
            FormMode::Create => self.create(form.kind, &form.draft),
            FormMode::Edit(identity) => self.update(form.kind, identity, &form.draft),
        };
        if result.is_ok() {
            self.host.close_form();
        }
        result
    }

    /// Ask for confirmation before deleting
    pub fn request_remove(&mut self, kind: EntityKind, identity: &Identity) -> Result<(), CrudError> {
        self.permitted(kind, |s| s.deletable, "deleted")?;
        if self.store.find(kind, identity).is_none() {
            return Err(self.not_found(kind, identity));
        }
        let message = format!("Delete {} {}? This cannot be undone.", kind.noun(), identity);
        self.host.confirm(
            &message,
            PendingAction::Remove {
                kind,
                identity: identity.clone(),
            },
        );
        Ok(())
    }

    /// Hard-delete the first record with `identity`
    pub fn remove(&mut self, kind: EntityKind, identity: &Identity) -> Result<Record, CrudError> {
        self.permitted(kind, |s| s.deletable, "deleted")?;
        let Some(removed) = self.store.remove(kind, identity) else {
            return Err(self.not_found(kind, identity));
        };
        self.finish(kind, format!("Deleted {} {}", kind.noun(), identity), None);
        Ok(removed)
    }

    /// Run an action the user confirmed
    pub fn confirmed(&mut self, action: PendingAction) -> Result<Record, CrudError> {
        match action {
            PendingAction::Remove { kind, identity } => self.remove(kind, &identity),
        }
    }

    fn finish(&mut self, kind: EntityKind, message: String, alert: Option<String>) {
        self.host.render_view(kind);
        self.host.notify(&message, Severity::Success);
        if let Some(alert) = alert {
            self.host.notify(&alert, Severity::Warning);
        }
    }
}
