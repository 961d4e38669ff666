pub mod discover;
pub mod scanner;
pub mod translator;

pub use crate::domain::model::{ModuleRecord, Require, ScanReport, ScanResult, Translation};
pub use crate::domain::ports::{ConfigProvider, Notes};
pub use crate::utils::error::Result;
