use fd_core::EntityKind;

use super::{Column, Format};

const MENU: &[Column] = &[
    Column::new("name", "Name"),
    Column::new("nameEn", "English name"),
    Column::new("category", "Category"),
    Column::new("price", "Price").format(Format::Currency).sortable(),
    Column::new("calories", "Calories").format(Format::Suffix(" kcal")).sortable(),
];

const ORDERS: &[Column] = &[
    Column::new("id", "Order").sortable(),
    Column::new("user", "Customer").sortable(),
    Column::new("type", "Type"),
    Column::new("status", "Status"),
    Column::new("total", "Total").format(Format::Currency).sortable(),
    Column::new("time", "Time").sortable(),
];

const RESTAURANTS: &[Column] = &[
    Column::new("name", "Name").sortable(),
    Column::new("address", "Address"),
    Column::new("status", "Status"),
    Column::new("orders", "Orders today").format(Format::Suffix(" orders")).sortable(),
];

const USERS: &[Column] = &[
    Column::new("id", "ID"),
    Column::new("name", "Name").sortable(),
    Column::new("level", "Level"),
    Column::new("points", "Points").format(Format::Points).sortable(),
    Column::new("orders", "Orders").sortable(),
];

const INVENTORY: &[Column] = &[
    Column::new("name", "Ingredient").sortable(),
    Column::new("stock", "Stock").format(Format::WithUnit("unit")).sortable(),
    Column::new("minStock", "Minimum").format(Format::WithUnit("unit")),
    Column::new("stock", "Level").format(Format::StockRatio).stock_tone(),
    Column::new("status", "Status"),
    Column::new("consumption", "Daily use").format(Format::WithUnit("unit")).sortable(),
];

const STAFF: &[Column] = &[
    Column::new("name", "Name").sortable(),
    Column::new("position", "Position"),
    Column::new("hours", "Hours").format(Format::Suffix(" h")).sortable(),
    Column::new("performance", "Performance").format(Format::Percent).sortable().score_tone(),
    Column::new("shift", "Shift"),
];

const REVIEWS: &[Column] = &[
    Column::new("user", "Customer"),
    Column::new("rating", "Rating").format(Format::Stars).sortable(),
    Column::new("comment", "Comment"),
    Column::new("date", "Date").sortable(),
    Column::new("type", "Type"),
    Column::new("status", "Status"),
];

const DELIVERY: &[Column] = &[
    Column::new("driver", "Driver"),
    Column::new("status", "Status"),
    Column::new("orders", "Orders").sortable(),
    Column::new("location", "Area"),
    Column::new("efficiency", "Efficiency").format(Format::Percent).sortable().score_tone(),
    Column::new("time", "ETA"),
    Column::new("route", "Route"),
];

pub(super) fn columns(kind: EntityKind) -> &'static [Column] {
    match kind {
        EntityKind::Menu => MENU,
        EntityKind::Orders => ORDERS,
        EntityKind::Restaurants => RESTAURANTS,
        EntityKind::Users => USERS,
        EntityKind::Inventory => INVENTORY,
        EntityKind::Staff => STAFF,
        EntityKind::Reviews => REVIEWS,
        EntityKind::Delivery => DELIVERY,
    }
}
