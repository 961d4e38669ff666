use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Package name -> semantic version. Only converted modules appear.
pub type ScanResult = BTreeMap<String, String>;

/// Outcome of running a legacy version token through the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Converted(String),
    Unconvertible,
}

impl Translation {
    pub fn converted(&self) -> Option<&str> {
        match self {
            Translation::Converted(version) => Some(version),
            Translation::Unconvertible => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome {
    NoVersion,
    Converted(String),
    Unconvertible,
}

/// One `.info` file seen during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    pub package_name: String,
    pub module_name: String,
    pub path: PathBuf,
    pub legacy_version: Option<String>,
    pub outcome: ModuleOutcome,
}

impl ModuleRecord {
    /// Where the module lives relative to a Drupal 7 docroot's `vendor` sibling.
    pub fn install_path(&self) -> String {
        format!(
            "../sites/all/modules/contrib/{}/{}.info",
            self.package_name, self.module_name
        )
    }
}

impl fmt::Display for ModuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: ", self.package_name, self.module_name)?;
        match (&self.outcome, &self.legacy_version) {
            (ModuleOutcome::Converted(semver), Some(token)) => write!(f, "{} <- {}", semver, token),
            (ModuleOutcome::Converted(semver), None) => write!(f, "{}", semver),
            (ModuleOutcome::Unconvertible, Some(token)) => write!(f, "? <- {}", token),
            (ModuleOutcome::Unconvertible, None) => write!(f, "?"),
            (ModuleOutcome::NoVersion, _) => write!(f, "(no version)"),
        }
    }
}

/// Every record of one scan plus the resulting mapping.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub records: Vec<ModuleRecord>,
    pub versions: ScanResult,
}

impl ScanReport {
    pub fn skipped(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.records
            .iter()
            .filter(|record| !matches!(record.outcome, ModuleOutcome::Converted(_)))
    }

    pub fn into_versions(self) -> ScanResult {
        self.versions
    }
}

/// A `require` link from the root package to a discovered module package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Require {
    pub source: String,
    pub target: String,
    pub constraint: String,
    pub description: String,
}

impl Require {
    pub fn new(source: &str, target: String, constraint: String) -> Self {
        Self {
            source: source.to_string(),
            target,
            constraint,
            description: "requires".to_string(),
        }
    }
}

impl fmt::Display for Require {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.source, self.description, self.target, self.constraint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_converted() {
        assert_eq!(Translation::Converted("3.2.0".to_string()).converted(), Some("3.2.0"));
        assert_eq!(Translation::Unconvertible.converted(), None);
    }
}
