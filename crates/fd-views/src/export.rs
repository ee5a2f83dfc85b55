//! Export of the active view to CSV

use chrono::NaiveDate;
use fd_core::{EntityKind, Notifier, Severity, ViewState};
use fd_data::export::to_csv;
use fd_data::query::Query;
use fd_data::{DataError, EntityStore};
use tracing::{info, warn};

use crate::host::FileSink;

/// Export the filtered and sorted records of `kind`, ignoring pagination.
///
/// Outcomes are reported through `notifier`; the returned error is for
/// callers that want to react further.
pub fn export_view<S, N>(
    kind: EntityKind,
    state: &ViewState,
    store: &EntityStore,
    today: NaiveDate,
    sink: &mut S,
    notifier: &mut N,
) -> Result<usize, DataError>
where
    S: FileSink + ?Sized,
    N: Notifier + ?Sized,
{
    let matched = Query::for_view(kind, state).matching(store.records(kind));

    let export = match to_csv(&matched, kind.export_basename(), today) {
        Ok(export) => export,
        Err(DataError::EmptyExport) => {
            warn!(%kind, "export skipped, no records");
            notifier.notify("There is no data to export", Severity::Warning);
            return Err(DataError::EmptyExport);
        }
        Err(error) => {
            notifier.notify(&format!("Export failed: {error}"), Severity::Error);
            return Err(error);
        }
    };

    if let Err(error) = sink.save(&export.bytes, &export.filename) {
        warn!(%kind, %error, filename = %export.filename, "export not saved");
        notifier.notify(&format!("Could not save {}: {}", export.filename, error), Severity::Error);
        return Err(error.into());
    }

    info!(%kind, rows = export.rows, filename = %export.filename, "view exported");
    notifier.notify(&format!("Exported {} records", export.rows), Severity::Success);
    Ok(export.rows)
}

#[cfg(test)]
mod tests {
    use std::io;

    use fd_core::{record, Value};

    use super::*;

    #[derive(Default)]
    struct MemorySink {
        files: Vec<(String, Vec<u8>)>,
        fail: bool,
    }

    impl FileSink for MemorySink {
        fn save(&mut self, bytes: &[u8], filename: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.files.push((filename.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Notes(Vec<(String, Severity)>);

    impl Notifier for Notes {
        fn notify(&mut self, message: &str, severity: Severity) {
            self.0.push((message.to_string(), severity));
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()
    }

    fn store() -> EntityStore {
        let mut store = EntityStore::new();
        store
            .seed(
                EntityKind::Users,
                vec![
                    record! { "id" => 1, "name" => "Taro Yamada", "level" => "Gold", "points" => 1250, "orders" => 28 },
                    record! { "id" => 2, "name" => "Hanako Sato", "level" => "Silver", "points" => 680, "orders" => 15 },
                    record! { "id" => 3, "name" => "Yui Yamamoto", "level" => "Gold", "points" => 1690, "orders" => 36 },
                ],
            )
            .unwrap();
        store
    }

    #[test]
    fn test_exports_filtered_sorted_set_ignoring_pages() {
        let mut state = ViewState::new(1, 6).unwrap();
        state.set_filter(EntityKind::Users, "level", Some(Value::from("Gold")));
        state.toggle_sort("points");
        state.toggle_sort("points");

        let mut sink = MemorySink::default();
        let mut notes = Notes::default();
        let rows = export_view(EntityKind::Users, &state, &store(), today(), &mut sink, &mut notes).unwrap();

        assert_eq!(rows, 2);
        let (filename, bytes) = &sink.files[0];
        assert_eq!(filename, "users_2026-01-19.csv");
        let text = String::from_utf8_lossy(&bytes[3..]);
        assert_eq!(
            text,
            "id,name,level,points,orders\n3,Yui Yamamoto,Gold,1690,36\n1,Taro Yamada,Gold,1250,28\n"
        );
        assert_eq!(notes.0, vec![("Exported 2 records".to_string(), Severity::Success)]);
    }

    #[test]
    fn test_empty_export_warns_without_saving() {
        let mut state = ViewState::default();
        state.set_search("nobody");
        let mut sink = MemorySink::default();
        let mut notes = Notes::default();

        let err = export_view(EntityKind::Users, &state, &store(), today(), &mut sink, &mut notes).unwrap_err();
        assert!(matches!(err, DataError::EmptyExport));
        assert!(sink.files.is_empty());
        assert_eq!(notes.0[0].1, Severity::Warning);
    }

    #[test]
    fn test_sink_failure_reports_error() {
        let state = ViewState::default();
        let mut sink = MemorySink {
            fail: true,
            ..MemorySink::default()
        };
        let mut notes = Notes::default();

        let err = export_view(EntityKind::Users, &state, &store(), today(), &mut sink, &mut notes).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
        assert_eq!(notes.0[0].1, Severity::Error);
    }
}
