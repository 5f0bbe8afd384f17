use solid_core::{Console, DesignResult};

use super::r#trait::Sink;

/// Stand-in for a file-backed store. Emits the entry; touches no file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    console: Console,
}

impl FileStorage {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Sink for FileStorage {
    fn destination(&self) -> &str {
        "File"
    }

    fn write(&self, entry: &str) -> DesignResult<()> {
        tracing::info!(destination = self.destination(), entry, "sink write");
        self.console.line(&format!("File write: {entry}"))
    }
}
