//! Summary statistics shown above entity views

use fd_core::{EntityKind, Record, Value};
use fd_data::schema::labels;

/// Good / warning / bad colouring of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
}

/// A labelled figure in the summary strip
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: Option<Tone>,
}

impl StatCard {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
            tone: None,
        }
    }

    fn toned(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

/// 90 and above is good, 80 and above a warning, anything lower bad
pub fn score_tone(score: f64) -> Tone {
    if score >= 90.0 {
        Tone::Good
    } else if score >= 80.0 {
        Tone::Warn
    } else {
        Tone::Bad
    }
}

/// `round(stock / minStock * 100)`; `None` when the minimum is zero or missing
pub fn stock_percentage(record: &Record) -> Option<i64> {
    let stock = record.get("stock").and_then(Value::as_f64)?;
    let min = record.get("minStock").and_then(Value::as_f64)?;
    if min == 0.0 {
        return None;
    }
    Some((stock / min * 100.0).round() as i64)
}

pub fn stock_tone(percentage: i64) -> Tone {
    if percentage < 100 {
        Tone::Bad
    } else {
        Tone::Good
    }
}

fn count_where(records: &[Record], field: &str, value: &str) -> usize {
    records
        .iter()
        .filter(|r| r.get(field).and_then(Value::as_text) == Some(value))
        .count()
}

fn average(records: &[Record], field: &str) -> Option<f64> {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|r| r.get(field).and_then(Value::as_f64))
        .collect();
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Inventory rows whose status asks for a restock
pub fn low_stock_count(inventory: &[Record]) -> usize {
    count_where(inventory, "status", labels::INVENTORY_RESTOCK)
}

/// Orders not yet completed
pub fn active_order_count(orders: &[Record]) -> usize {
    orders
        .iter()
        .filter(|r| r.get("status").and_then(Value::as_text) != Some(labels::ORDER_COMPLETED))
        .count()
}

/// Complaints still being handled
pub fn open_complaint_count(reviews: &[Record]) -> usize {
    reviews
        .iter()
        .filter(|r| {
            r.get("type").and_then(Value::as_text) == Some(labels::REVIEW_COMPLAINT)
                && r.get("status").and_then(Value::as_text) == Some(labels::REVIEW_PENDING)
        })
        .count()
}

pub fn drivers_delivering(delivery: &[Record]) -> usize {
    count_where(delivery, "status", labels::DRIVER_DELIVERING)
}

pub fn average_rating(reviews: &[Record]) -> Option<f64> {
    average(reviews, "rating")
}

/// Summary strip for `kind`, computed over the whole collection
pub fn summarize(kind: EntityKind, records: &[Record]) -> Vec<StatCard> {
    match kind {
        EntityKind::Inventory => {
            let low = low_stock_count(records);
            let card = StatCard::new("Items needing restock", low);
            vec![if low > 0 { card.toned(Tone::Bad) } else { card.toned(Tone::Good) }]
        }
        EntityKind::Reviews => {
            let rating = average_rating(records)
                .map(|r| format!("{r:.1} ★"))
                .unwrap_or_else(|| "—".to_string());
            vec![
                StatCard::new("Average rating", rating),
                StatCard::new("Total reviews", records.len()),
                StatCard::new("Complaints", count_where(records, "type", labels::REVIEW_COMPLAINT)),
                StatCard::new("Pending", count_where(records, "status", labels::REVIEW_PENDING)),
            ]
        }
        EntityKind::Delivery => {
            let in_delivery: i64 = records
                .iter()
                .filter_map(|r| r.get("orders").and_then(Value::as_i64))
                .sum();
            let mut cards = vec![
                StatCard::new("Active drivers", drivers_delivering(records)),
                StatCard::new("Orders in delivery", in_delivery),
            ];
            if let Some(eff) = average(records, "efficiency") {
                cards.push(StatCard::new("Average efficiency", format!("{eff:.1}%")).toned(score_tone(eff)));
            }
            cards
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::record;

    #[test]
    fn test_score_bands() {
        assert_eq!(score_tone(95.0), Tone::Good);
        assert_eq!(score_tone(90.0), Tone::Good);
        assert_eq!(score_tone(85.0), Tone::Warn);
        assert_eq!(score_tone(79.9), Tone::Bad);
    }

    #[test]
    fn test_stock_percentage() {
        let lettuce = record! { "stock" => 85, "minStock" => 100 };
        assert_eq!(stock_percentage(&lettuce), Some(85));
        assert_eq!(stock_tone(85), Tone::Bad);

        let buns = record! { "stock" => 1200, "minStock" => 500 };
        assert_eq!(stock_percentage(&buns), Some(240));

        let odd = record! { "stock" => 5, "minStock" => 0 };
        assert_eq!(stock_percentage(&odd), None);
    }

    #[test]
    fn test_review_summary() {
        let reviews = vec![
            record! { "rating" => 5, "type" => "Rating", "status" => "Resolved" },
            record! { "rating" => 2, "type" => "Complaint", "status" => "In progress" },
            record! { "rating" => 1, "type" => "Complaint", "status" => "Resolved" },
        ];
        let cards = summarize(EntityKind::Reviews, &reviews);
        assert_eq!(cards[0].value, "2.7 ★");
        assert_eq!(cards[1].value, "3");
        assert_eq!(cards[2].value, "2");
        assert_eq!(cards[3].value, "1");
        assert_eq!(open_complaint_count(&reviews), 1);
    }

    #[test]
    fn test_delivery_summary() {
        let drivers = vec![
            record! { "status" => "Delivering", "orders" => 3, "efficiency" => 92 },
            record! { "status" => "Standby", "orders" => 0, "efficiency" => 88 },
            record! { "status" => "Delivering", "orders" => 2, "efficiency" => 95 },
        ];
        let cards = summarize(EntityKind::Delivery, &drivers);
        assert_eq!(cards[0].value, "2");
        assert_eq!(cards[1].value, "5");
        assert_eq!(cards[2].value, "91.7%");
        assert_eq!(cards[2].tone, Some(Tone::Good));
    }

    #[test]
    fn test_empty_reviews_have_no_average() {
        let cards = summarize(EntityKind::Reviews, &[]);
        assert_eq!(cards[0].value, "—");
    }
}
