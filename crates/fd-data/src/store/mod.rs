//! In-memory entity store
//!
//! One ordered collection per entity kind. Insertion order is the order the
//! query pipeline sees when no sort is active.

use ahash::AHashMap;
use fd_core::{EntityKind, Identity, Record};
use tracing::{debug, info};

use crate::schema::IdentityScheme;
use crate::DataError;

/// Named collections of records
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    collections: AHashMap<EntityKind, Vec<Record>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection of `kind`, rejecting missing or repeated identities
    pub fn seed(&mut self, kind: EntityKind, records: Vec<Record>) -> Result<(), DataError> {
        let field = kind.identity_field();
        let mut seen = ahash::AHashSet::with_capacity(records.len());
        for record in &records {
            let identity = record
                .identity(field)
                .ok_or(DataError::MissingIdentity { kind })?;
            if !seen.insert(identity.clone()) {
                return Err(DataError::DuplicateIdentity { kind, identity });
            }
        }
        debug!(%kind, count = records.len(), "collection seeded");
        self.collections.insert(kind, records);
        Ok(())
    }

    /// Records of `kind` in insertion order
    pub fn records(&self, kind: EntityKind) -> &[Record] {
        self.collections.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.records(kind).len()
    }

    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.records(kind).is_empty()
    }

    pub fn position(&self, kind: EntityKind, identity: &Identity) -> Option<usize> {
        let field = kind.identity_field();
        self.records(kind)
            .iter()
            .position(|r| r.identity(field).as_ref() == Some(identity))
    }

    /// First record of `kind` with the given identity
    pub fn find(&self, kind: EntityKind, identity: &Identity) -> Option<&Record> {
        self.position(kind, identity)
            .map(|index| &self.records(kind)[index])
    }

    pub fn find_mut(&mut self, kind: EntityKind, identity: &Identity) -> Option<&mut Record> {
        let index = self.position(kind, identity)?;
        self.collections.get_mut(&kind).map(|c| &mut c[index])
    }

    /// Append a record to the end of its collection
    pub fn append(&mut self, kind: EntityKind, record: Record) -> Result<Identity, DataError> {
        let identity = record
            .identity(kind.identity_field())
            .ok_or(DataError::MissingIdentity { kind })?;
        if self.position(kind, &identity).is_some() {
            return Err(DataError::DuplicateIdentity { kind, identity });
        }
        info!(%kind, %identity, "record appended");
        self.collections.entry(kind).or_default().push(record);
        Ok(identity)
    }

    /// Remove the first record with the given identity
    pub fn remove(&mut self, kind: EntityKind, identity: &Identity) -> Option<Record> {
        let index = self.position(kind, identity)?;
        let removed = self.collections.get_mut(&kind).map(|c| c.remove(index));
        if removed.is_some() {
            info!(%kind, %identity, "record removed");
        }
        removed
    }

    /// Largest numeric identity plus one; 1 for an empty collection
    pub fn next_numeric_id(&self, kind: EntityKind) -> i64 {
        let field = kind.identity_field();
        self.records(kind)
            .iter()
            .filter_map(|r| match r.identity(field) {
                Some(Identity::Numeric(n)) => Some(n),
                _ => None,
            })
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Next key of a prefixed sequence such as `ORD-016`
    pub fn next_key(&self, kind: EntityKind, prefix: &str, width: usize) -> String {
        let field = kind.identity_field();
        let next = self
            .records(kind)
            .iter()
            .filter_map(|r| match r.identity(field) {
                Some(Identity::Key(key)) => key.strip_prefix(prefix)?.parse::<u64>().ok(),
                _ => None,
            })
            .max()
            .map_or(1, |max| max + 1);
        format!("{prefix}{next:0width$}")
    }

    /// Allocate an identity for a new record of `kind`
    pub fn allocate_identity(&self, kind: EntityKind, scheme: &IdentityScheme) -> Identity {
        match scheme {
            IdentityScheme::Numeric => Identity::Numeric(self.next_numeric_id(kind)),
            IdentityScheme::Sequence { prefix, width } => {
                Identity::Key(self.next_key(kind, prefix, *width))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_core::record;

    fn orders() -> Vec<Record> {
        vec![
            record! { "id" => "ORD-001", "user" => "Taro", "total" => 890 },
            record! { "id" => "ORD-015", "user" => "Yosuke", "total" => 760 },
            record! { "id" => "ORD-004", "user" => "Misaki", "total" => 1580 },
        ]
    }

    #[test]
    fn test_seed_rejects_duplicates() {
        let mut store = EntityStore::new();
        let records = vec![record! { "id" => 1 }, record! { "id" => 1 }];
        let err = store.seed(EntityKind::Menu, records).unwrap_err();
        assert!(matches!(err, DataError::DuplicateIdentity { kind: EntityKind::Menu, .. }));
        assert!(store.is_empty(EntityKind::Menu));
    }

    #[test]
    fn test_seed_rejects_missing_identity() {
        let mut store = EntityStore::new();
        let err = store
            .seed(EntityKind::Users, vec![record! { "name" => "x" }])
            .unwrap_err();
        assert!(matches!(err, DataError::MissingIdentity { .. }));
    }

    #[test]
    fn test_next_numeric_id_uses_max() {
        let mut store = EntityStore::new();
        assert_eq!(store.next_numeric_id(EntityKind::Menu), 1);
        store
            .seed(
                EntityKind::Menu,
                vec![record! { "id" => 3 }, record! { "id" => 32 }, record! { "id" => 7 }],
            )
            .unwrap();
        assert_eq!(store.next_numeric_id(EntityKind::Menu), 33);
    }

    #[test]
    fn test_next_key_formats_sequence() {
        let mut store = EntityStore::new();
        assert_eq!(store.next_key(EntityKind::Orders, "ORD-", 3), "ORD-001");
        store.seed(EntityKind::Orders, orders()).unwrap();
        assert_eq!(store.next_key(EntityKind::Orders, "ORD-", 3), "ORD-016");

        let scheme = IdentityScheme::Sequence { prefix: "ORD-", width: 3 };
        assert_eq!(
            store.allocate_identity(EntityKind::Orders, &scheme),
            Identity::from("ORD-016")
        );
    }

    #[test]
    fn test_next_key_grows_past_width() {
        let mut store = EntityStore::new();
        store
            .seed(EntityKind::Orders, vec![record! { "id" => "ORD-999" }])
            .unwrap();
        assert_eq!(store.next_key(EntityKind::Orders, "ORD-", 3), "ORD-1000");
    }

    #[test]
    fn test_append_find_remove() {
        let mut store = EntityStore::new();
        store.seed(EntityKind::Orders, orders()).unwrap();

        let id = store
            .append(EntityKind::Orders, record! { "id" => "ORD-016", "user" => "Aoi" })
            .unwrap();
        assert_eq!(store.len(EntityKind::Orders), 4);
        assert_eq!(store.records(EntityKind::Orders)[3].display("user"), "Aoi");
        assert!(store.append(EntityKind::Orders, record! { "id" => "ORD-016" }).is_err());

        let removed = store.remove(EntityKind::Orders, &id).unwrap();
        assert_eq!(removed.display("user"), "Aoi");
        assert!(store.find(EntityKind::Orders, &id).is_none());
        assert!(store.remove(EntityKind::Orders, &id).is_none());
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut store = EntityStore::new();
        store.seed(EntityKind::Orders, orders()).unwrap();
        let id = Identity::from("ORD-015");
        store
            .find_mut(EntityKind::Orders, &id)
            .unwrap()
            .set("total", 800);
        assert_eq!(store.position(EntityKind::Orders, &id), Some(1));
        assert_eq!(store.find(EntityKind::Orders, &id).unwrap().display("total"), "800");
    }
}
