use fd_core::{Record, Value};

use crate::stats::{score_tone, stock_percentage, stock_tone, Tone};

/// How a cell value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    /// `¥1,234`
    Currency,
    /// Value followed by a fixed unit, e.g. `525 kcal`
    Suffix(&'static str),
    /// `1,250pt`
    Points,
    /// `92%`
    Percent,
    /// `★★★★☆`
    Stars,
    /// Value followed by the unit stored in another field, e.g. `450 kg`
    WithUnit(&'static str),
    /// Stock as a percentage of the minimum stock
    StockRatio,
}

/// Colouring rule of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneRule {
    #[default]
    None,
    /// 90/80 score bands
    Score,
    /// Below 100% of the minimum is bad
    Stock,
}

/// Group an integer with thousands separators
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn grouped(value: &Value) -> String {
    match value.as_i64() {
        Some(n) => group_thousands(n),
        None => value.to_string(),
    }
}

pub fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Display text of `field` in `record` under `format`
pub fn format_cell(format: Format, record: &Record, field: &str) -> String {
    if format == Format::StockRatio {
        return stock_percentage(record)
            .map(|p| format!("{p}%"))
            .unwrap_or_else(|| "—".to_string());
    }

    let Some(value) = record.get(field) else {
        return String::new();
    };
    if value.is_empty() {
        return String::new();
    }

    match format {
        Format::Plain | Format::StockRatio => value.to_string(),
        Format::Currency => format!("¥{}", grouped(value)),
        Format::Suffix(unit) => format!("{value}{unit}"),
        Format::Points => format!("{}pt", grouped(value)),
        Format::Percent => format!("{value}%"),
        Format::Stars => match value.as_i64() {
            Some(n) => stars(n),
            None => value.to_string(),
        },
        Format::WithUnit(unit_field) => {
            let unit = record.display(unit_field);
            if unit.is_empty() {
                value.to_string()
            } else {
                format!("{value} {unit}")
            }
        }
    }
}

/// Tone of `field` in `record` under `rule`
pub fn cell_tone(rule: ToneRule, record: &Record, field: &str) -> Option<Tone> {
    match rule {
        ToneRule::None => None,
        ToneRule::Score => record.get(field).and_then(Value::as_f64).map(score_tone),
        ToneRule::Stock => stock_percentage(record).map(stock_tone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::record;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(2847600), "2,847,600");
        assert_eq!(group_thousands(-1500), "-1,500");
    }

    #[test]
    fn test_formats() {
        let r = record! {
            "price" => 1580, "points" => 1250, "calories" => 525,
            "efficiency" => 92, "rating" => 4, "stock" => 450, "unit" => "kg",
            "minStock" => 200,
        };
        assert_eq!(format_cell(Format::Currency, &r, "price"), "¥1,580");
        assert_eq!(format_cell(Format::Points, &r, "points"), "1,250pt");
        assert_eq!(format_cell(Format::Suffix(" kcal"), &r, "calories"), "525 kcal");
        assert_eq!(format_cell(Format::Percent, &r, "efficiency"), "92%");
        assert_eq!(format_cell(Format::Stars, &r, "rating"), "★★★★☆");
        assert_eq!(format_cell(Format::WithUnit("unit"), &r, "stock"), "450 kg");
        assert_eq!(format_cell(Format::StockRatio, &r, "stock"), "225%");
        assert_eq!(format_cell(Format::Plain, &r, "missing"), "");
    }

    #[test]
    fn test_tones() {
        let r = record! { "performance" => 85, "stock" => 45, "minStock" => 50 };
        assert_eq!(cell_tone(ToneRule::Score, &r, "performance"), Some(Tone::Warn));
        assert_eq!(cell_tone(ToneRule::Stock, &r, "stock"), Some(Tone::Bad));
        assert_eq!(cell_tone(ToneRule::None, &r, "stock"), None);
    }
}
