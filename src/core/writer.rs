use crate::core::{Content, Destination, Storage, WriteReport};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// Writes one fixed piece of content to one destination.
pub struct FileWriter<S: Storage> {
    storage: S,
    content: Content,
    destination: Destination,
}

impl<S: Storage> FileWriter<S> {
    pub fn new(storage: S, content: Content, destination: Destination) -> Self {
        Self {
            storage,
            content,
            destination,
        }
    }

    /// Builds a writer for the built-in page, pointed at the configured destination.
    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self::new(
            storage,
            Content::default(),
            Destination::new(config.destination()),
        )
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Overwrites the destination with the content. Parent directories are never created.
    pub fn write(&self) -> Result<WriteReport> {
        let path = self.destination.path();
        tracing::debug!("Writing {} bytes to {}", self.content.byte_len(), path.display());

        self.storage.write_text(path, self.content.as_str())?;

        let report = WriteReport {
            destination: path.to_path_buf(),
            chars: self.content.char_count(),
            bytes: self.content.byte_len(),
        };
        tracing::info!("📁 Wrote {}", report.destination.display());
        Ok(report)
    }
}
