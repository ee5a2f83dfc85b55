use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

mod navigator;

pub use navigator::Navigator;

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainTab {
    Dashboard,
    Products,
    OrdersDelivery,
    Operations,
    CustomerService,
}

impl MainTab {
    pub const ALL: [MainTab; 5] = [
        MainTab::Dashboard,
        MainTab::Products,
        MainTab::OrdersDelivery,
        MainTab::Operations,
        MainTab::CustomerService,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Products => "Products",
            MainTab::OrdersDelivery => "Orders & Delivery",
            MainTab::Operations => "Operations",
            MainTab::CustomerService => "Customer Service",
        }
    }

    /// Sub tabs in display order; empty for the dashboard
    pub fn sub_tabs(&self) -> &'static [EntityKind] {
        match self {
            MainTab::Dashboard => &[],
            MainTab::Products => &[EntityKind::Menu],
            MainTab::OrdersDelivery => &[EntityKind::Orders, EntityKind::Delivery],
            MainTab::Operations => &[
                EntityKind::Restaurants,
                EntityKind::Inventory,
                EntityKind::Staff,
            ],
            MainTab::CustomerService => &[EntityKind::Users, EntityKind::Reviews],
        }
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.sub_tabs().contains(&kind)
    }
}

impl fmt::Display for MainTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the content area currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveView {
    Dashboard,
    Entity(EntityKind),
}

impl ActiveView {
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            ActiveView::Dashboard => None,
            ActiveView::Entity(kind) => Some(*kind),
        }
    }
}

/// Result of a tab switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationChange {
    pub from: ActiveView,
    pub to: ActiveView,
    /// A pending search re-render was dropped
    pub cancelled_search: bool,
}
