//! Dashboard overview figures

use fd_core::EntityKind;
use fd_data::{DashboardFigures, EntityStore};

use crate::grid::group_thousands;
use crate::stats::{self, Tone};

/// Best seller with its share of the top seller's volume
#[derive(Debug, Clone, PartialEq)]
pub struct TopProductRow {
    pub rank: usize,
    pub name: String,
    pub sales: String,
    pub revenue: String,
    /// 0.0 to 1.0, relative to the best seller
    pub share: f32,
}

/// One "n of m" progress line
#[derive(Debug, Clone, PartialEq)]
pub struct QuickStatus {
    pub label: &'static str,
    pub value: String,
    pub fraction: f32,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub today_sales: String,
    pub today_orders: String,
    pub average_order_value: String,
    pub active_orders: usize,
    pub low_stock: usize,
    pub open_complaints: usize,
    pub record_counts: Vec<(EntityKind, usize)>,
    pub top_products: Vec<TopProductRow>,
    pub quick_status: Vec<QuickStatus>,
}

impl DashboardOverview {
    pub fn build(store: &EntityStore, figures: &DashboardFigures) -> Self {
        let best = figures
            .top_products
            .iter()
            .map(|p| p.sales)
            .max()
            .unwrap_or(0);
        let top_products = figures
            .top_products
            .iter()
            .enumerate()
            .map(|(i, p)| TopProductRow {
                rank: i + 1,
                name: p.name.clone(),
                sales: format!("{} sold", group_thousands(p.sales)),
                revenue: format!("¥{}", group_thousands(p.revenue)),
                share: if best > 0 { p.sales as f32 / best as f32 } else { 0.0 },
            })
            .collect();

        let delivery = store.records(EntityKind::Delivery);
        let delivering = stats::drivers_delivering(delivery);
        let mut quick_status = vec![
            ratio("Restaurants", store.len(EntityKind::Restaurants), store.len(EntityKind::Restaurants), Tone::Good),
            ratio("Staff on roster", store.len(EntityKind::Staff), store.len(EntityKind::Staff), Tone::Good),
            ratio("Drivers delivering", delivering, delivery.len(), Tone::Warn),
        ];
        if let Some(rating) = stats::average_rating(store.records(EntityKind::Reviews)) {
            quick_status.push(QuickStatus {
                label: "Customer satisfaction",
                value: format!("{rating:.1} ★"),
                fraction: (rating / 5.0) as f32,
                tone: Tone::Good,
            });
        }

        Self {
            today_sales: format!("¥{}", group_thousands(figures.today_sales)),
            today_orders: format!("{} orders", group_thousands(figures.today_orders)),
            average_order_value: format!("¥{}", group_thousands(figures.average_order_value)),
            active_orders: stats::active_order_count(store.records(EntityKind::Orders)),
            low_stock: stats::low_stock_count(store.records(EntityKind::Inventory)),
            open_complaints: stats::open_complaint_count(store.records(EntityKind::Reviews)),
            record_counts: EntityKind::ALL.iter().map(|k| (*k, store.len(*k))).collect(),
            top_products,
            quick_status,
        }
    }

    /// Alert line: low stock first, all clear otherwise
    pub fn alert(&self) -> String {
        if self.low_stock > 0 {
            format!("Low stock: {} items", self.low_stock)
        } else {
            "All systems normal".to_string()
        }
    }
}

fn ratio(label: &'static str, n: usize, of: usize, tone: Tone) -> QuickStatus {
    QuickStatus {
        label,
        value: format!("{n}/{of}"),
        fraction: if of > 0 { n as f32 / of as f32 } else { 0.0 },
        tone,
    }
}
