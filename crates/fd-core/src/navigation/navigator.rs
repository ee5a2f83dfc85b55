//! Tab navigation

use tracing::debug;

use super::{ActiveView, MainTab, NavigationChange};
use crate::debounce::Debouncer;
use crate::entity::EntityKind;
use crate::state::{StateError, ViewState};

/// Tracks the active main tab and sub tab and applies the state resets
/// that go with each switch.
#[derive(Debug, Clone)]
pub struct Navigator {
    main: MainTab,
    sub: Option<EntityKind>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            main: MainTab::Dashboard,
            sub: None,
        }
    }

    pub fn main_tab(&self) -> MainTab {
        self.main
    }

    pub fn sub_tab(&self) -> Option<EntityKind> {
        self.sub
    }

    pub fn active_view(&self) -> ActiveView {
        match self.sub {
            Some(kind) => ActiveView::Entity(kind),
            None => ActiveView::Dashboard,
        }
    }

    /// Switch the top-level tab.
    ///
    /// Resets page, search and sort, keeps the current sub tab when it
    /// belongs to the new tab and otherwise selects the first one.
    pub fn switch_main_tab(
        &mut self,
        tab: MainTab,
        state: &mut ViewState,
        search_debounce: &mut Debouncer,
    ) -> NavigationChange {
        let from = self.active_view();
        let cancelled_search = search_debounce.cancel();

        state.enter_main_tab();
        self.main = tab;
        self.sub = match self.sub {
            Some(kind) if tab.contains(kind) => Some(kind),
            _ => tab.sub_tabs().first().copied(),
        };
        if let Some(kind) = self.sub {
            state.enter_entity(kind);
        }

        let to = self.active_view();
        debug!(?from, ?to, cancelled_search, "main tab switched");
        NavigationChange {
            from,
            to,
            cancelled_search,
        }
    }

    /// Switch the sub tab within the current main tab
    pub fn switch_sub_tab(
        &mut self,
        kind: EntityKind,
        state: &mut ViewState,
        search_debounce: &mut Debouncer,
    ) -> Result<NavigationChange, StateError> {
        if !self.main.contains(kind) {
            return Err(StateError::NotInTab {
                kind,
                tab: self.main.label().to_string(),
            });
        }

        let from = self.active_view();
        let cancelled_search = search_debounce.cancel();
        self.sub = Some(kind);
        state.enter_entity(kind);

        let to = self.active_view();
        debug!(?from, ?to, cancelled_search, "sub tab switched");
        Ok(NavigationChange {
            from,
            to,
            cancelled_search,
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
