//! Data handling for the admin dashboard
//!
//! The in-memory entity store, the query pipeline (filter, sort, paginate),
//! the pagination descriptor, CSV export, entity schemas and the seed
//! catalog.

pub mod config;
pub mod export;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod seed;
pub mod store;

use fd_core::{EntityKind, Identity, StateError};
use thiserror::Error;

// Re-exports
pub use config::DashboardConfig;
pub use export::CsvExport;
pub use pagination::{PageButton, PaginationPlan, RangeSummary};
pub use query::{Query, QueryResult};
pub use schema::{Draft, EntitySchema, FieldKind, FieldSpec, FilterSpec, IdentityScheme};
pub use seed::{Catalog, DashboardFigures};
pub use store::EntityStore;

/// Form input that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { field: String, label: String },

    #[error("{label} must be a whole number, got '{input}'")]
    NotNumeric {
        field: String,
        label: String,
        input: String,
    },

    #[error("{label} must be at least {min}")]
    TooSmall { field: String, label: String, min: i64 },

    #[error("{label} must be at most {max}")]
    TooLarge { field: String, label: String, max: i64 },

    #[error("'{value}' is not a valid {label}")]
    InvalidChoice {
        field: String,
        label: String,
        value: String,
    },

    #[error("{field} is not an editable field")]
    UnknownField { field: String },
}

impl ValidationError {
    /// Field the error refers to
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::TooSmall { field, .. }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::InvalidChoice { field, .. }
            | ValidationError::UnknownField { field } => field,
        }
    }
}

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} record {identity} already exists")]
    DuplicateIdentity { kind: EntityKind, identity: Identity },

    #[error("{kind} record has no usable identity")]
    MissingIdentity { kind: EntityKind },

    #[error("nothing to export")]
    EmptyExport,

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                DataError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => DataError::Csv(error.to_string()),
        }
    }
}
