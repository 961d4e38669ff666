use crate::config::manifest::RootManifest;
use crate::core::scanner::default_scanner;
use crate::domain::model::{Require, ScanReport, ScanResult};
use crate::domain::ports::{ConfigProvider, Notes};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Vendor prefix Drupal projects are published under.
pub const DEFAULT_NAMESPACE: &str = "drupal";

/// Result of one discovery run against a root manifest.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub contrib_dir: Option<PathBuf>,
    pub requires: BTreeMap<String, Require>,
    pub report: ScanReport,
}

/// `<namespace>/<package>` require links from the root package to each scanned package.
pub fn build_requires(root_name: &str, namespace: &str, versions: &ScanResult) -> BTreeMap<String, Require> {
    versions
        .iter()
        .map(|(package_name, version)| {
            let target = format!("{}/{}", namespace, package_name);
            (
                target.clone(),
                Require::new(root_name, target, version.clone()),
            )
        })
        .collect()
}

/// Scans the configured contrib directory and builds the require links.
/// Without a contrib directory nothing is discovered.
pub fn discover_requires<C, N>(manifest: &RootManifest, config: &C, notes: &N) -> Result<Discovery>
where
    C: ConfigProvider + ?Sized,
    N: Notes + ?Sized,
{
    // A command-line override is relative to the working directory, the
    // manifest option to the manifest's directory.
    let contrib_dir = match config.contrib_dir() {
        Some(dir) => Some(dir.to_path_buf()),
        None => manifest.contrib_dir(),
    };

    let Some(dir) = contrib_dir else {
        tracing::info!("No contrib directory configured, skipping discovery");
        return Ok(Discovery::default());
    };

    tracing::info!("🔍 Scanning {}", dir.display());
    let report = default_scanner().scan_report(&dir, notes)?;
    let requires = build_requires(manifest.name(), config.namespace(), &report.versions);

    tracing::info!(
        "Discovered {} require(s) from {} module file(s)",
        requires.len(),
        report.records.len()
    );

    Ok(Discovery {
        contrib_dir: Some(dir),
        requires,
        report,
    })
}
