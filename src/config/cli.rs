use crate::core::Storage;
use crate::utils::error::{FixtureError, Result};
use std::fs;
use std::path::Path;

/// Storage on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        // No create_dir_all: a missing parent must fail the write.
        fs::write(path, text.as_bytes()).map_err(|e| FixtureError::io(path, e))
    }
}
