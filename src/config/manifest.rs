use crate::domain::model::Require;
use crate::utils::error::{DiscoverError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// `extra` key naming the contrib directory to scan.
pub const CONTRIB_DIR_OPTION: &str = "discover-d7-contrib";

/// Composer's name for a root package without a `name` field.
const DEFAULT_ROOT_NAME: &str = "__root__";

/// 根套件的 composer.json，保留原本的欄位順序
#[derive(Debug, Clone)]
pub struct RootManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl RootManifest {
    /// 從 composer.json 載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DiscoverError::io(path, e))?;
        Self::from_json_str(path, &content)
    }

    /// 從 JSON 字串解析；`path` 用來解析相對的 contrib 目錄
    pub fn from_json_str<P: AsRef<Path>>(path: P, content: &str) -> Result<Self> {
        match serde_json::from_str(content)? {
            Value::Object(document) => Ok(Self {
                path: path.as_ref().to_path_buf(),
                document,
            }),
            _ => Err(DiscoverError::manifest("top level must be a JSON object")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        self.document
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ROOT_NAME)
    }

    /// `extra.discover-d7-contrib`, resolved against the manifest's directory.
    /// Missing, empty or non-string values disable discovery.
    pub fn contrib_dir(&self) -> Option<PathBuf> {
        let value = self.document.get("extra")?.get(CONTRIB_DIR_OPTION)?;

        let Some(dir) = value.as_str() else {
            tracing::debug!("extra.{} is not a string, ignoring", CONTRIB_DIR_OPTION);
            return None;
        };
        if dir.is_empty() {
            return None;
        }

        Some(self.resolve(Path::new(dir)))
    }

    /// Relative paths are taken from the manifest's directory.
    pub fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            return dir.to_path_buf();
        }
        match self.path.parent() {
            Some(base) if !base.as_os_str().is_empty() => base.join(dir),
            _ => dir.to_path_buf(),
        }
    }

    /// Current `require` constraints, in file order.
    pub fn requires(&self) -> Result<Vec<(String, String)>> {
        let Some(require) = self.document.get("require") else {
            return Ok(Vec::new());
        };
        let require = require
            .as_object()
            .ok_or_else(|| DiscoverError::manifest("\"require\" must be an object"))?;

        Ok(require
            .iter()
            .map(|(name, constraint)| {
                let constraint = match constraint {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), constraint)
            })
            .collect())
    }

    /// Adds discovered requires; constraints already present are left untouched.
    /// Returns the names that were added.
    pub fn merge_requires(&mut self, discovered: &BTreeMap<String, Require>) -> Result<Vec<String>> {
        let require = self
            .document
            .entry("require")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| DiscoverError::manifest("\"require\" must be an object"))?;

        let mut added = Vec::new();
        for (name, link) in discovered {
            if require.contains_key(name) {
                tracing::debug!("{} already required, keeping existing constraint", name);
                continue;
            }
            require.insert(name.clone(), Value::String(link.constraint.clone()));
            added.push(name.clone());
        }

        Ok(added)
    }

    /// Composer layout: four-space indent, trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.document.serialize(&mut serializer)?;

        let mut output = String::from_utf8(buf)
            .map_err(|e| DiscoverError::manifest(format!("non UTF-8 output: {}", e)))?;
        output.push('\n');
        Ok(output)
    }

    pub fn save(&self) -> Result<()> {
        let content = self.to_pretty_string()?;
        std::fs::write(&self.path, content).map_err(|e| DiscoverError::io(&self.path, e))
    }
}
