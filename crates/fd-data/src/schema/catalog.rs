use fd_core::{EntityKind, Record, Value};

use super::{EntitySchema, FieldSpec, FilterSpec, IdentityScheme};

/// Choice lists and status labels used across the dashboard
pub mod labels {
    pub const MENU_CATEGORIES: &[&str] = &["Burgers", "Breakfast", "Sides", "Drinks", "Desserts"];

    pub const ORDER_TYPES: &[&str] = &["Mobile Order", "Delivery", "Takeout"];
    pub const ORDER_STATUSES: &[&str] = &["Confirmed", "Cooking", "Ready", "Delivering", "Completed"];
    pub const ORDER_COMPLETED: &str = "Completed";

    pub const RESTAURANT_STATUSES: &[&str] = &["Open", "Preparing", "Closed"];

    pub const USER_LEVELS: &[&str] = &["Bronze", "Silver", "Gold", "Platinum"];

    pub const INVENTORY_OK: &str = "OK";
    pub const INVENTORY_RESTOCK: &str = "Restock needed";
    pub const INVENTORY_STATUSES: &[&str] = &[INVENTORY_OK, INVENTORY_RESTOCK];

    pub const STAFF_POSITIONS: &[&str] = &["Store Manager", "Manager", "Kitchen", "Counter", "Delivery"];

    pub const REVIEW_RATING: &str = "Rating";
    pub const REVIEW_COMPLAINT: &str = "Complaint";
    pub const REVIEW_TYPES: &[&str] = &[REVIEW_RATING, REVIEW_COMPLAINT];
    pub const REVIEW_PENDING: &str = "In progress";
    pub const REVIEW_RESOLVED: &str = "Resolved";
    pub const REVIEW_STATUSES: &[&str] = &[REVIEW_PENDING, REVIEW_RESOLVED];

    pub const DRIVER_DELIVERING: &str = "Delivering";
    pub const DRIVER_STATUSES: &[&str] = &[DRIVER_DELIVERING, "Standby", "On break"];
}

use labels::*;

const MENU_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name"),
    FieldSpec::text("nameEn", "English name"),
    FieldSpec::integer("price", "Price"),
    FieldSpec::choice("category", "Category", MENU_CATEGORIES),
    FieldSpec::integer("calories", "Calories"),
    FieldSpec::text("image", "Image URL").optional(),
];

const ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("user", "Customer"),
    FieldSpec::choice("type", "Order type", ORDER_TYPES),
    FieldSpec::choice("status", "Status", ORDER_STATUSES),
    FieldSpec::integer("total", "Total"),
    FieldSpec::text("time", "Time"),
];

const RESTAURANT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name"),
    FieldSpec::text("address", "Address"),
    FieldSpec::choice("status", "Status", RESTAURANT_STATUSES),
    FieldSpec::integer("orders", "Orders today").with_default("0"),
];

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name"),
    FieldSpec::choice("level", "Level", USER_LEVELS),
    FieldSpec::integer("points", "Points").with_default("0"),
    FieldSpec::integer("orders", "Orders").with_default("0"),
];

const INVENTORY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Ingredient"),
    FieldSpec::integer("stock", "Stock"),
    FieldSpec::text("unit", "Unit"),
    FieldSpec::integer("minStock", "Minimum stock"),
    FieldSpec::derived("status", "Status"),
    FieldSpec::integer("consumption", "Daily consumption"),
];

const STAFF_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name"),
    FieldSpec::choice("position", "Position", STAFF_POSITIONS),
    FieldSpec::integer("hours", "Hours this month").with_default("0"),
    FieldSpec::ranged("performance", "Performance", 0, 100).with_default("80"),
    FieldSpec::text("shift", "Shift"),
];

const REVIEW_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("user", "Customer").read_only(),
    FieldSpec::ranged("rating", "Rating", 1, 5).read_only(),
    FieldSpec::text("comment", "Comment").read_only(),
    FieldSpec::text("date", "Date").read_only(),
    FieldSpec::choice("type", "Type", REVIEW_TYPES).read_only(),
    FieldSpec::choice("status", "Status", REVIEW_STATUSES),
];

const DELIVERY_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("driver", "Driver").read_only(),
    FieldSpec::choice("status", "Status", DRIVER_STATUSES).read_only(),
    FieldSpec::integer("orders", "Orders").read_only(),
    FieldSpec::text("location", "Area").read_only(),
    FieldSpec::integer("efficiency", "Efficiency").read_only(),
    FieldSpec::text("time", "ETA").read_only(),
    FieldSpec::text("route", "Route").read_only(),
];

fn derive_inventory_status(record: &mut Record) -> Option<String> {
    let stock = record.get("stock").and_then(Value::as_f64)?;
    let min_stock = record.get("minStock").and_then(Value::as_f64)?;
    if stock < min_stock {
        record.set("status", INVENTORY_RESTOCK);
        Some(format!("{} needs restocking", record.display("name")))
    } else {
        record.set("status", INVENTORY_OK);
        None
    }
}

static SCHEMAS: [EntitySchema; 8] = [
    EntitySchema {
        kind: EntityKind::Menu,
        identity: IdentityScheme::Numeric,
        fields: MENU_FIELDS,
        filters: &[FilterSpec {
            field: "category",
            all_label: "All categories",
            options: MENU_CATEGORIES,
        }],
        derive: None,
        creatable: true,
        editable: true,
        deletable: true,
    },
    EntitySchema {
        kind: EntityKind::Orders,
        identity: IdentityScheme::Sequence {
            prefix: "ORD-",
            width: 3,
        },
        fields: ORDER_FIELDS,
        filters: &[
            FilterSpec {
                field: "status",
                all_label: "All statuses",
                options: ORDER_STATUSES,
            },
            FilterSpec {
                field: "type",
                all_label: "All types",
                options: ORDER_TYPES,
            },
        ],
        derive: None,
        creatable: true,
        editable: true,
        deletable: true,
    },
    EntitySchema {
        kind: EntityKind::Restaurants,
        identity: IdentityScheme::Numeric,
        fields: RESTAURANT_FIELDS,
        filters: &[],
        derive: None,
        creatable: true,
        editable: true,
        deletable: true,
    },
    EntitySchema {
        kind: EntityKind::Users,
        identity: IdentityScheme::Numeric,
        fields: USER_FIELDS,
        filters: &[FilterSpec {
            field: "level",
            all_label: "All levels",
            options: USER_LEVELS,
        }],
        derive: None,
        creatable: true,
        editable: true,
        deletable: true,
    },
    EntitySchema {
        kind: EntityKind::Inventory,
        identity: IdentityScheme::Numeric,
        fields: INVENTORY_FIELDS,
        filters: &[FilterSpec {
            field: "status",
            all_label: "All statuses",
            options: INVENTORY_STATUSES,
        }],
        derive: Some(derive_inventory_status),
        creatable: true,
        editable: true,
        deletable: true,
    },
    EntitySchema {
        kind: EntityKind::Staff,
        identity: IdentityScheme::Numeric,
        fields: STAFF_FIELDS,
        filters: &[FilterSpec {
            field: "position",
            all_label: "All positions",
            options: STAFF_POSITIONS,
        }],
        derive: None,
        creatable: true,
        editable: true,
        deletable: true,
    },
    EntitySchema {
        kind: EntityKind::Reviews,
        identity: IdentityScheme::Numeric,
        fields: REVIEW_FIELDS,
        filters: &[
            FilterSpec {
                field: "type",
                all_label: "All types",
                options: REVIEW_TYPES,
            },
            FilterSpec {
                field: "status",
                all_label: "All statuses",
                options: REVIEW_STATUSES,
            },
        ],
        derive: None,
        creatable: false,
        editable: true,
        deletable: false,
    },
    EntitySchema {
        kind: EntityKind::Delivery,
        identity: IdentityScheme::Numeric,
        fields: DELIVERY_FIELDS,
        filters: &[FilterSpec {
            field: "status",
            all_label: "All statuses",
            options: DRIVER_STATUSES,
        }],
        derive: None,
        creatable: false,
        editable: false,
        deletable: false,
    },
];

pub(super) fn schema(kind: EntityKind) -> &'static EntitySchema {
    let index = match kind {
        EntityKind::Menu => 0,
        EntityKind::Orders => 1,
        EntityKind::Restaurants => 2,
        EntityKind::Users => 3,
        EntityKind::Inventory => 4,
        EntityKind::Staff => 5,
        EntityKind::Reviews => 6,
        EntityKind::Delivery => 7,
    };
    &SCHEMAS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::record;

    #[test]
    fn test_every_kind_maps_to_its_schema() {
        for kind in EntityKind::ALL {
            assert_eq!(schema(kind).kind, kind);
        }
    }

    #[test]
    fn test_inventory_derivation() {
        let mut lettuce = record! { "id" => 3, "name" => "Lettuce", "stock" => 85, "minStock" => 100, "status" => "" };
        let alert = derive_inventory_status(&mut lettuce);
        assert_eq!(lettuce.display("status"), INVENTORY_RESTOCK);
        assert_eq!(alert.as_deref(), Some("Lettuce needs restocking"));

        let mut patty = record! { "id" => 1, "name" => "Beef patty", "stock" => 450, "minStock" => 200, "status" => "" };
        assert!(derive_inventory_status(&mut patty).is_none());
        assert_eq!(patty.display("status"), INVENTORY_OK);
    }

    #[test]
    fn test_stock_equal_to_minimum_is_ok() {
        let mut r = record! { "name" => "Pickles", "stock" => 30, "minStock" => 30 };
        assert!(derive_inventory_status(&mut r).is_none());
        assert_eq!(r.display("status"), INVENTORY_OK);
    }

    #[test]
    fn test_reviews_only_status_accepts_input() {
        let names: Vec<_> = schema(EntityKind::Reviews)
            .input_fields()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["status"]);
        assert_eq!(schema(EntityKind::Delivery).input_fields().count(), 0);
    }
}
