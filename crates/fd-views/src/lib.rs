//! View layer for the admin dashboard
//!
//! Turns view state and store contents into render-ready descriptions and
//! drives the CRUD and export flows through host traits, so everything here
//! runs without a window.

pub mod crud;
pub mod dashboard;
pub mod export;
pub mod grid;
pub mod host;
pub mod stats;

pub use crud::{CrudController, CrudError};
pub use dashboard::DashboardOverview;
pub use export::export_view;
pub use grid::{render, Column, Format, GridView, RenderedView};
pub use host::{ConfirmHost, CrudHost, FileSink, FormHost, FormMode, FormRequest, PendingAction, Renderer};
pub use stats::{StatCard, Tone};
