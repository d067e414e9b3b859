//! In-memory state store, used by tests that exercise the reconciliation
//! logic without a SQLite file.

use crate::errors::AppResult;
use crate::store::StateStore;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pub audit_lines: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn audited(&self, operation: &str) -> bool {
        self.audit_lines.iter().any(|(op, _, _)| op == operation)
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.audit_lines.push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
        Ok(())
    }
}
