//! Core functionality for the fast-food admin dashboard
//!
//! This crate provides the record model, the explicit view state and the
//! navigation, debounce and notification primitives the views build on.

pub mod debounce;
pub mod entity;
pub mod navigation;
pub mod notify;
pub mod record;
pub mod state;

// Re-export commonly used types
pub use debounce::Debouncer;
pub use entity::{EntityKind, ViewLayout};
pub use navigation::{ActiveView, MainTab, NavigationChange, Navigator};
pub use notify::{Notification, NotificationCenter, Notifier, Severity};
pub use record::{Identity, Record, Value};
pub use state::{FilterSet, PageSizes, SortDirection, SortSpec, StateError, ViewState};
