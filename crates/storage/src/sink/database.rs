use solid_core::{Console, DesignResult};

use super::r#trait::Sink;

/// Stand-in for a database-backed store. Emits the entry; opens no connection.
#[derive(Debug, Clone)]
pub struct DatabaseStorage {
    console: Console,
}

impl DatabaseStorage {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Sink for DatabaseStorage {
    fn destination(&self) -> &str {
        "Database"
    }

    fn write(&self, entry: &str) -> DesignResult<()> {
        tracing::info!(destination = self.destination(), entry, "sink write");
        self.console.line(&format!("Database write: {entry}"))
    }
}
