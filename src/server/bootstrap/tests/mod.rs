
use std::cell::RefCell;

/// Collects `(source, message)` pairs passed to a bootstrap logger.
#[derive(Default)]
pub struct RecordingLogger {
    pub lines: RefCell<Vec<(String, String)>>,
}

impl crate::server::bootstrap::BootstrapLogger for RecordingLogger {
    fn log(&self, message: &str, source: &str) {
        self.lines
            .borrow_mut()
            .push((source.to_string(), message.to_string()));
    }
}

impl RecordingLogger {
    pub fn messages_from(&self, source: &str) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(line_source, _)| line_source == source)
            .map(|(_, message)| message.clone())
            .collect()
    }
}
