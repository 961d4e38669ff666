use crate::core::discover::DEFAULT_NAMESPACE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "discover-d7-contrib")]
#[command(about = "Add Drupal 7 contrib modules found on disk to composer.json requires")]
pub struct CliConfig {
    /// Root composer.json
    #[arg(long, default_value = "composer.json")]
    pub manifest: PathBuf,

    /// Directory to scan instead of extra.discover-d7-contrib, relative to
    /// the working directory. An empty value keeps the manifest option.
    #[arg(long)]
    pub contrib_dir: Option<String>,

    /// Vendor prefix for discovered packages
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Write the merged manifest back instead of printing it
    #[arg(long)]
    pub write: bool,

    /// Print every scanned module and its outcome to stderr
    #[arg(long)]
    pub report: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn manifest_path(&self) -> &Path {
        &self.manifest
    }

    fn contrib_dir(&self) -> Option<&Path> {
        self.contrib_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(Path::new)
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("manifest", &self.manifest.to_string_lossy())?;
        if let Some(dir) = self.contrib_dir() {
            validation::validate_path("contrib_dir", &dir.to_string_lossy())?;
        }
        validation::validate_vendor_name("namespace", &self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["discover-d7-contrib"]);

        assert_eq!(config.manifest_path(), Path::new("composer.json"));
        assert_eq!(config.contrib_dir(), None);
        assert_eq!(config.namespace(), "drupal");
        assert!(!config.write);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "discover-d7-contrib",
            "--manifest",
            "site/composer.json",
            "--contrib-dir",
            "/var/www/sites/all/modules/contrib",
            "--write",
            "--report",
        ]);

        assert_eq!(
            config.contrib_dir(),
            Some(Path::new("/var/www/sites/all/modules/contrib"))
        );
        assert!(config.write);
        assert!(config.report);
    }

    #[test]
    fn test_empty_contrib_dir_keeps_manifest_option() {
        let config = CliConfig::parse_from(["discover-d7-contrib", "--contrib-dir", ""]);

        assert_eq!(config.contrib_dir(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_namespace() {
        let config = CliConfig::parse_from(["discover-d7-contrib", "--namespace", "drupal/x"]);
        assert!(config.validate().is_err());
    }
}
