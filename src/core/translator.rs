//! Legacy Drupal 7 version tokens to semantic versions.
//!
//! A token is the part after `7.x-` in an `.info` file's `version` line,
//! e.g. `3.2`, `3.0-alpha1`, `2.x-dev` or `1.4+12-dev`. Rules are tried in
//! order and the first matching one decides the result.

use crate::domain::model::Translation;
use crate::utils::error::{DiscoverError, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Which rule a token matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// `3.2`
    Release,
    /// `3.0-alpha1`, `2.1-rc2`
    PreRelease,
    /// `2.x-dev`
    BranchDev,
    /// `3.2+100-dev`, `3.0-beta1+4-dev`
    BuildDev,
    Unrecognized,
}

impl TokenShape {
    pub fn is_dev_snapshot(self) -> bool {
        matches!(self, TokenShape::BranchDev | TokenShape::BuildDev)
    }
}

type Transform = fn(&Captures) -> Translation;

const RULES: &[(TokenShape, &str, Transform)] = &[
    (TokenShape::Release, r"^([0-9]+\.[0-9]+)$", append_patch),
    (
        TokenShape::PreRelease,
        r"^([0-9]+\.[0-9]+-[A-Za-z0-9_]+[0-9]*)$",
        keep_token,
    ),
    (TokenShape::BranchDev, r"^([0-9]+)\.x-dev$", reject),
    (
        TokenShape::BuildDev,
        r"^([0-9]+\.[0-9]+)(-[A-Za-z0-9_]+[0-9]*)?\+([0-9]+)-dev$",
        reject,
    ),
];

fn append_patch(caps: &Captures) -> Translation {
    Translation::Converted(format!("{}.0", &caps[1]))
}

fn keep_token(caps: &Captures) -> Translation {
    Translation::Converted(caps[1].to_string())
}

fn reject(_caps: &Captures) -> Translation {
    Translation::Unconvertible
}

struct Rule {
    shape: TokenShape,
    pattern: Regex,
    transform: Transform,
}

/// Ordered rule table, compiled once.
pub struct VersionTranslator {
    rules: Vec<Rule>,
}

impl VersionTranslator {
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|&(shape, pattern, transform)| -> Result<Rule> {
                let pattern = Regex::new(pattern).map_err(|source| DiscoverError::RuleError {
                    pattern: pattern.to_string(),
                    source,
                })?;
                Ok(Rule {
                    shape,
                    pattern,
                    transform,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn classify(&self, legacy_version: &str) -> TokenShape {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(legacy_version))
            .map(|rule| rule.shape)
            .unwrap_or(TokenShape::Unrecognized)
    }

    pub fn translate(&self, legacy_version: &str) -> Translation {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(legacy_version) {
                return (rule.transform)(&caps);
            }
        }
        Translation::Unconvertible
    }
}

static DEFAULT_TRANSLATOR: LazyLock<VersionTranslator> =
    LazyLock::new(|| VersionTranslator::new().expect("built-in version rules must compile"));

/// Translate with the built-in rule table.
pub fn translate(legacy_version: &str) -> Translation {
    DEFAULT_TRANSLATOR.translate(legacy_version)
}

pub fn classify(legacy_version: &str) -> TokenShape {
    DEFAULT_TRANSLATOR.classify(legacy_version)
}
