pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CollectedNotes, NoopNotes, TracingNotes};
pub use config::RootManifest;
pub use crate::core::discover::{build_requires, discover_requires, Discovery};
pub use crate::core::scanner::{default_scanner, scan, scan_report, ContribScanner};
pub use crate::core::translator::{translate, VersionTranslator};
pub use domain::model::{ModuleOutcome, ModuleRecord, Require, ScanReport, ScanResult, Translation};
pub use utils::error::{DiscoverError, Result};
