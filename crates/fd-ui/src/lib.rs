//! egui widgets for the admin dashboard
//!
//! Every widget paints a render-ready description from `fd-views` and hands
//! back what the user asked for as a [`ViewIntent`]. Applying intents to the
//! state and store is left to the application.

pub mod confirm;
pub mod dashboard;
pub mod form;
pub mod grid;
pub mod pagination;
pub mod shell;
pub mod theme;
pub mod toasts;
pub mod toolbar;

use fd_core::{EntityKind, Identity, MainTab};

pub use confirm::confirm_dialog;
pub use dashboard::dashboard_view;
pub use form::{form_window, FormOutcome};
pub use grid::grid_view;
pub use pagination::pagination_bar;
pub use shell::{main_tabs, sub_tabs};
pub use theme::{apply_theme, Theme};
pub use toasts::toast_stack;
pub use toolbar::{toolbar, SearchBox};

/// Something the user asked for during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum ViewIntent {
    SwitchMain(MainTab),
    SwitchSub(EntityKind),
    /// The search box changed; applied after the debounce period
    Search(String),
    /// `None` selects the "all" option
    Filter {
        field: &'static str,
        value: Option<String>,
    },
    Sort(&'static str),
    Page(usize),
    Create,
    Edit(Identity),
    Delete(Identity),
    Export,
}

/// Intents collected over one frame, applied in order
pub type Intents = Vec<ViewIntent>;
