use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Creates or truncates `path` and writes `text` as UTF-8.
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn destination(&self) -> &Path;
}
