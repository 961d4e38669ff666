//! Walks `<root>/<package>/<module>.info` and collects module versions.

use crate::core::translator::VersionTranslator;
use crate::domain::model::{ModuleOutcome, ModuleRecord, ScanReport, ScanResult};
use crate::domain::ports::Notes;
use crate::utils::error::{DiscoverError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const INFO_EXTENSION: &str = "info";
const VERSION_LINE: &str = r#"(?m)^version = "7\.x-([0-9]+\..+)"\r?$"#;

pub struct ContribScanner {
    translator: VersionTranslator,
    version_line: Regex,
}

impl ContribScanner {
    pub fn new() -> Result<Self> {
        let version_line = Regex::new(VERSION_LINE).map_err(|source| DiscoverError::RuleError {
            pattern: VERSION_LINE.to_string(),
            source,
        })?;

        Ok(Self {
            translator: VersionTranslator::new()?,
            version_line,
        })
    }

    pub fn scan<N: Notes + ?Sized>(&self, root_dir: &Path, notes: &N) -> Result<ScanResult> {
        self.scan_report(root_dir, notes).map(ScanReport::into_versions)
    }

    /// Like [`scan`](Self::scan) but keeps a record for every `.info` file seen.
    pub fn scan_report<N: Notes + ?Sized>(&self, root_dir: &Path, notes: &N) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        if !root_dir.is_dir() {
            tracing::debug!("Contrib directory {} not found, nothing to scan", root_dir.display());
            return Ok(report);
        }

        for package_dir in list_entries(root_dir, |path| path.is_dir())? {
            let package_name = file_name(&package_dir);

            for info_file in list_entries(&package_dir, is_info_file)? {
                let record = self.inspect(package_name.clone(), &info_file, notes)?;

                if let ModuleOutcome::Converted(version) = &record.outcome {
                    // Several .info files in one package: the last one read wins.
                    report
                        .versions
                        .insert(record.package_name.clone(), version.clone());
                }
                report.records.push(record);
            }
        }

        tracing::debug!(
            "Scanned {} module(s), {} with usable versions",
            report.records.len(),
            report.versions.len()
        );

        Ok(report)
    }

    fn inspect<N: Notes + ?Sized>(
        &self,
        package_name: String,
        info_file: &Path,
        notes: &N,
    ) -> Result<ModuleRecord> {
        let module_name = info_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let bytes = fs::read(info_file).map_err(|e| DiscoverError::io(info_file, e))?;
        let contents = String::from_utf8_lossy(&bytes);

        let mut record = ModuleRecord {
            package_name,
            module_name,
            path: info_file.to_path_buf(),
            legacy_version: None,
            outcome: ModuleOutcome::NoVersion,
        };

        let Some(token) = self.legacy_version(&contents) else {
            notes.note(&format!(
                "No module version found in '{}'. Skipping.",
                record.install_path()
            ));
            return Ok(record);
        };

        tracing::debug!("{}: found legacy version {}", info_file.display(), token);

        let translation = self.translator.translate(&token);
        record.outcome = match translation.converted() {
            Some(version) => ModuleOutcome::Converted(version.to_string()),
            None => {
                let shape = self.translator.classify(&token);
                if shape.is_dev_snapshot() {
                    tracing::debug!("{}: dev snapshot ({:?}), no release to require", token, shape);
                } else {
                    tracing::debug!("{}: unrecognized version format", token);
                }
                notes.note(&format!(
                    "Invalid version string '{}' found in '{}'. Skipping.",
                    token,
                    record.install_path()
                ));
                ModuleOutcome::Unconvertible
            }
        };
        record.legacy_version = Some(token);

        Ok(record)
    }

    /// Token after `7.x-` on the first matching `version = "..."` line.
    pub fn legacy_version(&self, contents: &str) -> Option<String> {
        self.version_line
            .captures(contents)
            .map(|caps| caps[1].to_string())
    }
}

static DEFAULT_SCANNER: LazyLock<ContribScanner> =
    LazyLock::new(|| ContribScanner::new().expect("built-in scanner patterns must compile"));

/// Process-wide scanner with the built-in rules, compiled on first use.
pub fn default_scanner() -> &'static ContribScanner {
    &DEFAULT_SCANNER
}

/// Scan with the built-in rules.
pub fn scan<N: Notes + ?Sized>(root_dir: impl AsRef<Path>, notes: &N) -> Result<ScanResult> {
    default_scanner().scan(root_dir.as_ref(), notes)
}

pub fn scan_report<N: Notes + ?Sized>(root_dir: impl AsRef<Path>, notes: &N) -> Result<ScanReport> {
    default_scanner().scan_report(root_dir.as_ref(), notes)
}

/// Non-hidden entries of `dir` accepted by `keep`, sorted by name.
fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| DiscoverError::io(dir, e))? {
        let path = entry.map_err(|e| DiscoverError::io(dir, e))?.path();
        if file_name(&path).starts_with('.') {
            continue;
        }
        if keep(&path) {
            entries.push(path);
        }
    }

    entries.sort();
    Ok(entries)
}

fn is_info_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == INFO_EXTENSION)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> ContribScanner {
        ContribScanner::new().unwrap()
    }

    #[test]
    fn test_version_line_in_body() {
        let contents = "name = Views\ncore = 7.x\nversion = \"7.x-3.20\"\nproject = \"views\"\n";
        assert_eq!(scanner().legacy_version(contents).as_deref(), Some("3.20"));
    }

    #[test]
    fn test_version_line_with_crlf() {
        let contents = "name = Token\r\nversion = \"7.x-1.7\"\r\nproject = \"token\"\r\n";
        assert_eq!(scanner().legacy_version(contents).as_deref(), Some("1.7"));
    }

    #[test]
    fn test_version_line_requires_7x_prefix() {
        assert_eq!(scanner().legacy_version("\nversion = \"6.x-1.0\"\n"), None);
        assert_eq!(scanner().legacy_version("\nversion = \"1.0\"\n"), None);
    }

    #[test]
    fn test_version_line_must_fill_whole_line() {
        assert_eq!(scanner().legacy_version("\n; version = \"7.x-1.0\"\n"), None);
        assert_eq!(scanner().legacy_version("\nversion = \"7.x-1.0\" ; note\n"), None);
        assert_eq!(scanner().legacy_version("\nversion=\"7.x-1.0\"\n"), None);
    }

    #[test]
    fn test_default_scanner_is_shared() {
        assert!(std::ptr::eq(default_scanner(), default_scanner()));
        assert_eq!(
            default_scanner().legacy_version("\nversion = \"7.x-1.0\"\n").as_deref(),
            Some("1.0")
        );
    }

    #[test]
    fn test_dev_token_captured_for_translation() {
        assert_eq!(
            scanner().legacy_version("\nversion = \"7.x-2.x-dev\"\n").as_deref(),
            Some("2.x-dev")
        );
    }
}
