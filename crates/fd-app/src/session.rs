//! Window-independent application state
//!
//! The session owns navigation, view state, the debounced search and the
//! modal hosts, and applies the intents the widgets report each frame.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::NaiveDate;
use fd_core::{ActiveView, Debouncer, EntityKind, Navigator, NotificationCenter, Value, ViewState};
use fd_data::{DashboardConfig, DashboardFigures, EntityStore};
use fd_ui::{SearchBox, ViewIntent};
use fd_views::{export_view, render, CrudController, DashboardOverview, FileSink, GridView, RenderedView};
use parking_lot::RwLock;
use tracing::{debug, error, warn};

use crate::host::ShellHost;

pub struct Session {
    pub store: Arc<RwLock<EntityStore>>,
    pub figures: DashboardFigures,
    pub navigator: Navigator,
    pub state: ViewState,
    pub search: SearchBox,
    pub debounce: Debouncer,
    pub host: ShellHost,
    /// Last rendering of the active entity view
    pub view: Option<RenderedView>,
}

impl Session {
    pub fn new(config: &DashboardConfig, store: EntityStore, figures: DashboardFigures) -> Result<Self> {
        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            figures,
            navigator: Navigator::new(),
            state: ViewState::with_page_sizes(config.page_sizes()?),
            search: SearchBox::default(),
            debounce: Debouncer::new(config.search_debounce()),
            host: ShellHost::new(NotificationCenter::new(config.notification_ttl())),
            view: None,
        })
    }

    pub fn active_entity(&self) -> Option<EntityKind> {
        self.navigator.active_view().entity()
    }

    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview::build(&self.store.read(), &self.figures)
    }

    /// Re-render the active entity view from the current state and store
    pub fn rerender(&mut self) {
        let Some(kind) = self.active_entity() else {
            self.view = None;
            return;
        };
        let store = self.store.read();
        match render(kind, self.state.clone(), &store) {
            Ok((view, state)) => {
                self.view = Some(view);
                self.state = state;
            }
            Err(error) => error!(%kind, %error, "view render failed"),
        }
    }

    /// Per-frame housekeeping: fire a due search, expire notifications and
    /// refresh views whose data changed
    pub fn tick(&mut self, now: Instant) {
        if self.debounce.fire_if_due(now) {
            debug!(term = %self.state.search_term(), "search rendered");
            self.rerender();
        }
        self.host.notifications.expire(now);

        let stale = self.host.take_stale();
        if self.active_entity().map_or(false, |kind| stale.contains(&kind)) {
            self.rerender();
        }
    }

    /// How long the window may sleep before the next timed event
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let search = self.debounce.remaining(now);
        let toast = self.host.notifications.next_expiry(now);
        match (search, toast) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn apply(&mut self, intent: ViewIntent, now: Instant, today: NaiveDate, sink: &mut dyn FileSink) {
        match intent {
            ViewIntent::SwitchMain(tab) => {
                self.navigator
                    .switch_main_tab(tab, &mut self.state, &mut self.debounce);
                self.search.reset(self.state.search_term());
                self.rerender();
            }
            ViewIntent::SwitchSub(kind) => {
                match self
                    .navigator
                    .switch_sub_tab(kind, &mut self.state, &mut self.debounce)
                {
                    Ok(_) => {
                        self.search.reset(self.state.search_term());
                        self.rerender();
                    }
                    Err(error) => warn!(%error, "sub tab switch rejected"),
                }
            }
            ViewIntent::Search(text) => {
                // the term applies at once; only the re-render waits
                self.state.set_search(text.as_str());
                self.search.text = text;
                self.debounce.schedule(now);
            }
            ViewIntent::Filter { field, value } => {
                if let Some(kind) = self.active_entity() {
                    self.state.set_filter(kind, field, value.map(Value::from));
                    self.rerender();
                }
            }
            ViewIntent::Sort(field) => match self.active_entity() {
                Some(kind) if GridView::for_kind(kind).is_sortable(field) => {
                    self.state.toggle_sort(field);
                    self.rerender();
                }
                _ => warn!(field, "sort on a column that does not sort"),
            },
            ViewIntent::Page(page) => match self.state.go_to_page(page) {
                Ok(()) => self.rerender(),
                Err(error) => warn!(%error, "page change rejected"),
            },
            ViewIntent::Create => self.with_crud(|crud, kind| crud.begin_create(kind)),
            ViewIntent::Edit(identity) => {
                self.with_crud(|crud, kind| crud.begin_edit(kind, &identity))
            }
            ViewIntent::Delete(identity) => {
                self.with_crud(|crud, kind| crud.request_remove(kind, &identity))
            }
            ViewIntent::Export => {
                if let Some(kind) = self.active_entity() {
                    let store = self.store.read();
                    // outcome already reported through the notifications
                    let _ = export_view(kind, &self.state, &store, today, sink, &mut self.host);
                }
            }
        }
    }

    fn with_crud<F>(&mut self, run: F)
    where
        F: FnOnce(&mut CrudController<'_, ShellHost>, EntityKind) -> Result<(), fd_views::CrudError>,
    {
        let ActiveView::Entity(kind) = self.navigator.active_view() else {
            return;
        };
        let mut store = self.store.write();
        let mut crud = CrudController::new(&mut store, &mut self.host);
        if let Err(error) = run(&mut crud, kind) {
            debug!(%error, "crud request ended with an error");
        }
    }

    /// Submit the open form; it stays open when validation fails
    pub fn submit_form(&mut self) {
        let Some(form) = self.host.form.clone() else {
            return;
        };
        let mut store = self.store.write();
        if let Err(error) = CrudController::new(&mut store, &mut self.host).submit(&form) {
            debug!(%error, "form submission rejected");
        }
    }

    pub fn cancel_form(&mut self) {
        self.host.form = None;
    }

    /// Answer the open confirmation; only `true` runs the action
    pub fn answer_confirm(&mut self, confirmed: bool) {
        let Some((_, action)) = self.host.confirm.take() else {
            return;
        };
        if !confirmed {
            return;
        }
        let mut store = self.store.write();
        if let Err(error) = CrudController::new(&mut store, &mut self.host).confirmed(action) {
            debug!(%error, "confirmed action failed");
        }
    }
}
