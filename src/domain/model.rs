use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content(&'static str);

impl Content {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Counts Unicode scalar values, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn byte_len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Content {
    fn default() -> Self {
        Self(crate::domain::fixture::PAGE_CONTENT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(PathBuf);

impl Destination {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::new(crate::domain::fixture::DEFAULT_DESTINATION)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub destination: PathBuf,
    pub chars: usize,
    pub bytes: usize,
}

impl WriteReport {
    pub fn confirmation(&self) -> String {
        format!("Written {} chars", self.chars)
    }
}
