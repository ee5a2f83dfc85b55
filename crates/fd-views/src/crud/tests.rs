use fd_core::{record, Notifier, Value};
use fd_data::schema::labels;

use super::*;
use crate::host::{ConfirmHost, FormHost, Renderer};

#[derive(Default)]
struct FakeHost {
    notes: Vec<(String, Severity)>,
    form: Option<FormRequest>,
    closed: usize,
    confirms: Vec<(String, PendingAction)>,
    renders: Vec<EntityKind>,
}

impl FakeHost {
    fn last_note(&self) -> Option<&(String, Severity)> {
        self.notes.last()
    }

    fn severities(&self) -> Vec<Severity> {
        self.notes.iter().map(|(_, s)| *s).collect()
    }
}

impl Notifier for FakeHost {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.notes.push((message.to_string(), severity));
    }
}

impl FormHost for FakeHost {
    fn open_form(&mut self, request: FormRequest) {
        self.form = Some(request);
    }

    fn close_form(&mut self) {
        self.form = None;
        self.closed += 1;
    }
}

impl ConfirmHost for FakeHost {
    fn confirm(&mut self, message: &str, action: PendingAction) {
        self.confirms.push((message.to_string(), action));
    }
}

impl Renderer for FakeHost {
    fn render_view(&mut self, kind: EntityKind) {
        self.renders.push(kind);
    }
}

fn draft(pairs: &[(&str, &str)]) -> Draft {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn store() -> EntityStore {
    let mut store = EntityStore::new();
    store
        .seed(
            EntityKind::Menu,
            vec![
                record! { "id" => 1, "name" => "ビッグマック", "nameEn" => "Big Mac", "price" => 450, "category" => "Burgers", "calories" => 525, "image" => "" },
                record! { "id" => 2, "name" => "チーズバーガー", "nameEn" => "Cheeseburger", "price" => 150, "category" => "Burgers", "calories" => 307, "image" => "" },
            ],
        )
        .unwrap();
    store
        .seed(
            EntityKind::Orders,
            vec![
                record! { "id" => "ORD-001", "user" => "Taro Yamada", "type" => "Takeout", "status" => "Cooking", "total" => 890, "time" => "14:30" },
                record! { "id" => "ORD-015", "user" => "Yosuke Inoue", "type" => "Delivery", "status" => "Delivering", "total" => 760, "time" => "14:12" },
            ],
        )
        .unwrap();
    store
        .seed(
            EntityKind::Inventory,
            vec![record! { "id" => 1, "name" => "Beef patty", "stock" => 450, "unit" => "kg", "minStock" => 200, "status" => "OK", "consumption" => 85 }],
        )
        .unwrap();
    store
        .seed(
            EntityKind::Reviews,
            vec![record! { "id" => 3, "user" => "Ichiro Suzuki", "rating" => 2, "comment" => "The wait was far too long", "date" => "2026-01-18", "type" => "Complaint", "status" => "In progress" }],
        )
        .unwrap();
    store
}

fn menu_draft() -> Draft {
    draft(&[
        ("name", "てりやきマックバーガー"),
        ("nameEn", "Teriyaki McBurger"),
        ("price", "380"),
        ("category", "Burgers"),
        ("calories", "478"),
        ("image", ""),
    ])
}

#[test]
fn test_create_appends_with_next_id() {
    let mut store = store();
    let mut host = FakeHost::default();
    let record = CrudController::new(&mut store, &mut host)
        .create(EntityKind::Menu, &menu_draft())
        .unwrap();

    assert_eq!(record.get("id"), Some(&Value::Int(3)));
    assert_eq!(record.get("price"), Some(&Value::Int(380)));
    assert_eq!(store.len(EntityKind::Menu), 3);
    assert_eq!(host.renders, vec![EntityKind::Menu]);
    assert_eq!(host.last_note().unwrap().1, Severity::Success);
}

#[test]
fn test_create_order_uses_key_sequence() {
    let mut store = store();
    let mut host = FakeHost::default();
    let order = draft(&[
        ("user", "Aoi Mori"),
        ("type", "Mobile Order"),
        ("status", "Confirmed"),
        ("total", "1200"),
        ("time", "15:00"),
    ]);
    let record = CrudController::new(&mut store, &mut host)
        .create(EntityKind::Orders, &order)
        .unwrap();
    assert_eq!(record.display("id"), "ORD-016");
}

#[test]
fn test_create_then_remove_restores_collection() {
    let mut store = store();
    let before = store.records(EntityKind::Menu).to_vec();
    let mut host = FakeHost::default();

    let mut crud = CrudController::new(&mut store, &mut host);
    let record = crud.create(EntityKind::Menu, &menu_draft()).unwrap();
    let identity = record.identity("id").unwrap();
    crud.remove(EntityKind::Menu, &identity).unwrap();

    assert_eq!(store.records(EntityKind::Menu), before.as_slice());
}

#[test]
fn test_non_numeric_input_keeps_form_open() {
    let mut store = store();
    let mut host = FakeHost::default();
    let mut crud = CrudController::new(&mut store, &mut host);
    crud.begin_create(EntityKind::Menu).unwrap();

    let mut form = menu_draft();
    form.insert("price".into(), "four hundred".into());
    let request = FormRequest {
        kind: EntityKind::Menu,
        mode: FormMode::Create,
        title: "Add menu item".into(),
        draft: form,
    };
    let err = crud.submit(&request).unwrap_err();

    assert!(matches!(err, CrudError::Validation(ValidationError::NotNumeric { .. })));
    assert_eq!(store.len(EntityKind::Menu), 2);
    assert!(host.form.is_some());
    assert_eq!(host.closed, 0);
    assert_eq!(host.last_note().unwrap().1, Severity::Error);
}

#[test]
fn test_submit_closes_form_on_success() {
    let mut store = store();
    let mut host = FakeHost::default();
    let mut crud = CrudController::new(&mut store, &mut host);
    crud.begin_edit(EntityKind::Menu, &Identity::Numeric(2)).unwrap();

    let mut form = host_form(&mut crud);
    form.set_value("price", "170");
    crud.submit(&form).unwrap();

    assert!(host.form.is_none());
    assert_eq!(host.closed, 1);
    let burger = store.find(EntityKind::Menu, &Identity::Numeric(2)).unwrap();
    assert_eq!(burger.get("price"), Some(&Value::Int(170)));
    assert_eq!(burger.display("nameEn"), "Cheeseburger");
}

fn host_form(crud: &mut CrudController<'_, FakeHost>) -> FormRequest {
    crud.host.form.clone().unwrap()
}

#[test]
fn test_begin_edit_prefills_current_values() {
    let mut store = store();
    let mut host = FakeHost::default();
    CrudController::new(&mut store, &mut host)
        .begin_edit(EntityKind::Orders, &Identity::from("ORD-015"))
        .unwrap();

    let form = host.form.unwrap();
    assert_eq!(form.mode, FormMode::Edit(Identity::from("ORD-015")));
    assert_eq!(form.value("user"), "Yosuke Inoue");
    assert_eq!(form.value("total"), "760");
}

#[test]
fn test_update_missing_identity_notifies() {
    let mut store = store();
    let mut host = FakeHost::default();
    let err = CrudController::new(&mut store, &mut host)
        .update(EntityKind::Orders, &Identity::from("ORD-404"), &draft(&[("status", "Ready")]))
        .unwrap_err();

    assert!(matches!(err, CrudError::NotFound { .. }));
    assert_eq!(host.severities(), vec![Severity::Error]);
    assert!(host.renders.is_empty());
}

#[test]
fn test_remove_missing_identity_notifies() {
    let mut store = store();
    let mut host = FakeHost::default();
    let err = CrudController::new(&mut store, &mut host)
        .remove(EntityKind::Menu, &Identity::Numeric(99))
        .unwrap_err();
    assert!(matches!(err, CrudError::NotFound { .. }));
    assert_eq!(host.severities(), vec![Severity::Error]);
}

#[test]
fn test_remove_goes_through_confirmation() {
    let mut store = store();
    let mut host = FakeHost::default();
    let mut crud = CrudController::new(&mut store, &mut host);
    crud.request_remove(EntityKind::Menu, &Identity::Numeric(1)).unwrap();
    assert_eq!(crud.store.len(EntityKind::Menu), 2);

    let (_, action) = crud.host.confirms.pop().unwrap();
    let removed = crud.confirmed(action).unwrap();
    assert_eq!(removed.display("nameEn"), "Big Mac");
    assert_eq!(store.len(EntityKind::Menu), 1);
    assert_eq!(host.renders, vec![EntityKind::Menu]);
}

#[test]
fn test_inventory_update_derives_status_and_warns() {
    let mut store = store();
    let mut host = FakeHost::default();
    let record = CrudController::new(&mut store, &mut host)
        .update(EntityKind::Inventory, &Identity::Numeric(1), &draft(&[("stock", "150")]))
        .unwrap();

    assert_eq!(record.display("status"), labels::INVENTORY_RESTOCK);
    assert_eq!(host.severities(), vec![Severity::Success, Severity::Warning]);
}

#[test]
fn test_inventory_create_derives_status() {
    let mut store = store();
    let mut host = FakeHost::default();
    let record = CrudController::new(&mut store, &mut host)
        .create(
            EntityKind::Inventory,
            &draft(&[
                ("name", "Buns"),
                ("stock", "1200"),
                ("unit", "pcs"),
                ("minStock", "500"),
                ("consumption", "320"),
            ]),
        )
        .unwrap();
    assert_eq!(record.display("status"), labels::INVENTORY_OK);
    assert_eq!(host.severities(), vec![Severity::Success]);
}

#[test]
fn test_reviews_accept_status_only() {
    let mut store = store();
    let mut host = FakeHost::default();
    let mut crud = CrudController::new(&mut store, &mut host);

    assert!(matches!(
        crud.begin_create(EntityKind::Reviews),
        Err(CrudError::NotPermitted { .. })
    ));

    let record = crud
        .update(
            EntityKind::Reviews,
            &Identity::Numeric(3),
            &draft(&[("status", labels::REVIEW_RESOLVED), ("comment", "edited")]),
        )
        .unwrap();
    assert_eq!(record.display("status"), labels::REVIEW_RESOLVED);
    assert_eq!(record.display("comment"), "The wait was far too long");
}

#[test]
fn test_delivery_is_read_only() {
    let mut store = store();
    let mut host = FakeHost::default();
    let err = CrudController::new(&mut store, &mut host)
        .request_remove(EntityKind::Delivery, &Identity::Numeric(1))
        .unwrap_err();
    assert!(matches!(err, CrudError::NotPermitted { action: "deleted", .. }));
}
