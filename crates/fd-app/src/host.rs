//! Shell-side implementations of the controller hosts

use std::io;
use std::path::PathBuf;

use fd_core::{EntityKind, NotificationCenter, Notifier, Severity};
use fd_views::{ConfirmHost, FileSink, FormHost, FormRequest, PendingAction, Renderer};

/// Modal state and notifications owned by the window
#[derive(Debug, Default)]
pub struct ShellHost {
    pub notifications: NotificationCenter,
    pub form: Option<FormRequest>,
    pub confirm: Option<(String, PendingAction)>,
    /// Views whose data changed since the last frame
    pub stale: Vec<EntityKind>,
}

impl ShellHost {
    pub fn new(notifications: NotificationCenter) -> Self {
        Self {
            notifications,
            ..Self::default()
        }
    }

    pub fn take_stale(&mut self) -> Vec<EntityKind> {
        std::mem::take(&mut self.stale)
    }
}

impl Notifier for ShellHost {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.notifications.notify(message, severity);
    }
}

impl FormHost for ShellHost {
    fn open_form(&mut self, request: FormRequest) {
        self.form = Some(request);
    }

    fn close_form(&mut self) {
        self.form = None;
    }
}

impl ConfirmHost for ShellHost {
    fn confirm(&mut self, message: &str, action: PendingAction) {
        self.confirm = Some((message.to_string(), action));
    }
}

impl Renderer for ShellHost {
    fn render_view(&mut self, kind: EntityKind) {
        if !self.stale.contains(&kind) {
            self.stale.push(kind);
        }
    }
}

/// Saves exports through the native save dialog
#[derive(Debug, Clone, Default)]
pub struct DialogSink {
    pub start_dir: Option<PathBuf>,
}

impl FileSink for DialogSink {
    fn save(&mut self, bytes: &[u8], filename: &str) -> io::Result<()> {
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(filename)
            .add_filter("CSV", &["csv"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        match dialog.save_file() {
            Some(path) => std::fs::write(path, bytes),
            None => Err(io::Error::new(io::ErrorKind::Interrupted, "save cancelled")),
        }
    }
}
