use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use application::ports::out_::{GameNotification, GameNotifier};

/// Writes each notification as one line of JSON.
pub struct JsonLinesNotifier<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesNotifier<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> GameNotifier for JsonLinesNotifier<W> {
    fn notify(
        &self,
        notification: GameNotification,
    ) {
        let message = match serde_json::to_string(&notification) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Failed to serialize notification");
                return;
            }
        };
        debug!(message = %message, "-> Writing");

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{message}").and_then(|()| writer.flush()) {
            warn!(error = %e, "Failed to write notification");
        }
    }
}
