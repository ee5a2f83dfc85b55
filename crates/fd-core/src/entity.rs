//! Entity kinds managed by the dashboard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::StateError;

/// How a view lays out its page of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLayout {
    /// Row-per-record table
    Table,
    /// Card grid
    Cards,
}

/// Every entity collection held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Menu,
    Orders,
    Restaurants,
    Users,
    Inventory,
    Staff,
    Reviews,
    Delivery,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Menu,
        EntityKind::Orders,
        EntityKind::Restaurants,
        EntityKind::Users,
        EntityKind::Inventory,
        EntityKind::Staff,
        EntityKind::Reviews,
        EntityKind::Delivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Menu => "menu",
            EntityKind::Orders => "orders",
            EntityKind::Restaurants => "restaurants",
            EntityKind::Users => "users",
            EntityKind::Inventory => "inventory",
            EntityKind::Staff => "staff",
            EntityKind::Reviews => "reviews",
            EntityKind::Delivery => "delivery",
        }
    }

    /// Sub-tab label
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Menu => "Menu",
            EntityKind::Orders => "Orders",
            EntityKind::Restaurants => "Restaurants",
            EntityKind::Users => "Customers",
            EntityKind::Inventory => "Inventory",
            EntityKind::Staff => "Staff",
            EntityKind::Reviews => "Reviews",
            EntityKind::Delivery => "Delivery",
        }
    }

    /// Singular noun used in notifications
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Menu => "menu item",
            EntityKind::Orders => "order",
            EntityKind::Restaurants => "restaurant",
            EntityKind::Users => "customer",
            EntityKind::Inventory => "ingredient",
            EntityKind::Staff => "staff member",
            EntityKind::Reviews => "review",
            EntityKind::Delivery => "driver",
        }
    }

    /// Base name of exported CSV files
    pub fn export_basename(&self) -> &'static str {
        self.as_str()
    }

    pub fn layout(&self) -> ViewLayout {
        match self {
            EntityKind::Menu | EntityKind::Restaurants => ViewLayout::Cards,
            _ => ViewLayout::Table,
        }
    }

    /// Name of the identity field
    pub fn identity_field(&self) -> &'static str {
        "id"
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| StateError::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("pizza".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_card_layouts() {
        assert_eq!(EntityKind::Restaurants.layout(), ViewLayout::Cards);
        assert_eq!(EntityKind::Orders.layout(), ViewLayout::Table);
    }
}
