//! Seed catalog loaded into the store at startup

use std::collections::BTreeMap;
use std::path::Path;

use fd_core::{EntityKind, Record};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::schema::schema;
use crate::store::EntityStore;
use crate::DataError;

/// Catalog compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../assets/seed.json");

/// Best-seller row on the dashboard overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: i64,
    pub revenue: i64,
}

/// Daily figures that are not derived from any collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFigures {
    pub today_sales: i64,
    pub today_orders: i64,
    pub average_order_value: i64,
    pub top_products: Vec<TopProduct>,
}

/// Records per entity plus the dashboard figures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub dashboard: DashboardFigures,
    pub entities: BTreeMap<EntityKind, Vec<Record>>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(text: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build a store, recomputing derived fields of every record
    pub fn into_store(self) -> Result<(EntityStore, DashboardFigures), DataError> {
        let mut store = EntityStore::new();
        for (kind, mut records) in self.entities {
            let schema = schema(kind);
            for record in &mut records {
                schema.apply_derivation(record);
            }
            store.seed(kind, records)?;
        }
        let counts: Vec<_> = EntityKind::ALL
            .iter()
            .map(|k| format!("{}={}", k, store.len(*k)))
            .collect();
        info!(collections = %counts.join(" "), "store seeded");
        Ok((store, self.dashboard))
    }
}
