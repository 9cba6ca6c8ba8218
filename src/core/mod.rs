pub mod writer;

pub use crate::domain::model::{Content, Destination, WriteReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
