use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Section;
use crate::constraints::{Audience, Constraints, Depth, Tone};
use crate::mode::Mode;

/// Everything the renderer consumes.
///
/// A record is never mutated in place by the UI: each edit goes through
/// [`InputRecord::apply`], which returns the next record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawInputRecord", rename_all = "camelCase")]
pub struct InputRecord {
    /// Selected documentation task
    pub mode: Mode,
    /// Subsystem name, only used in Domain mode
    pub domain_focus: String,
    /// High-level description of the project or component
    pub description: String,
    /// Pasted source files, snippets or directory tree
    pub files: String,
    /// Existing documentation to align with
    pub old_docs: String,
    /// Audience, tone, depth and optional content
    pub constraints: Constraints,
    /// Enabled section ids, interpreted against `mode`'s catalog
    pub enabled_sections: BTreeSet<String>,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Switch mode and reset sections to the new catalog's defaults
    SetMode(Mode),
    SetDomainFocus(String),
    SetDescription(String),
    SetFiles(String),
    SetOldDocs(String),
    SetAudience(Audience),
    SetTone(Tone),
    SetDepth(Depth),
    SetIncludeCommands(bool),
    SetIncludeEnvDetails(bool),
    /// Add the id if absent, remove it if present
    ToggleSection(String),
    /// Enable the full catalog, or clear it if already fully enabled
    ToggleAll,
    /// Replace the enabled set
    SetSections(Vec<String>),
}

impl InputRecord {
    /// Creates an empty record in `mode` with that mode's default sections.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            domain_focus: String::new(),
            description: String::new(),
            files: String::new(),
            old_docs: String::new(),
            constraints: Constraints::default(),
            enabled_sections: mode.default_section_ids().into_iter().collect(),
        }
    }

    /// Applies one edit and returns the resulting record.
    pub fn apply(self, edit: Edit) -> Self {
        match edit {
            Edit::SetMode(mode) => self.with_mode(mode),
            Edit::SetDomainFocus(focus) => Self {
                domain_focus: focus,
                ..self
            },
            Edit::SetDescription(description) => Self {
                description,
                ..self
            },
            Edit::SetFiles(files) => Self { files, ..self },
            Edit::SetOldDocs(old_docs) => Self { old_docs, ..self },
            Edit::SetAudience(audience) => self.with_constraints(|c| c.audience = audience),
            Edit::SetTone(tone) => self.with_constraints(|c| c.tone = tone),
            Edit::SetDepth(length) => self.with_constraints(|c| c.length = length),
            Edit::SetIncludeCommands(on) => self.with_constraints(|c| c.include_commands = on),
            Edit::SetIncludeEnvDetails(on) => {
                self.with_constraints(|c| c.include_env_details = on)
            }
            Edit::ToggleSection(id) => self.toggle_section(&id),
            Edit::ToggleAll => self.toggle_all(),
            Edit::SetSections(ids) => Self {
                enabled_sections: ids.into_iter().collect(),
                ..self
            },
        }
    }

    /// Switches mode, resetting enabled sections to the new catalog's defaults.
    pub fn with_mode(self, mode: Mode) -> Self {
        tracing::debug!(from = %self.mode, to = %mode, "switching mode");
        Self {
            mode,
            enabled_sections: mode.default_section_ids().into_iter().collect(),
            ..self
        }
    }

    fn with_constraints(mut self, f: impl FnOnce(&mut Constraints)) -> Self {
        f(&mut self.constraints);
        self
    }

    /// Symmetric-difference update of the enabled set for one id.
    pub fn toggle_section(mut self, id: &str) -> Self {
        if !self.enabled_sections.remove(id) {
            self.enabled_sections.insert(id.to_string());
        }
        self
    }

    /// Clears the enabled set when every catalog section is enabled,
    /// otherwise enables the whole catalog.
    ///
    /// Stale ids from another catalog do not count towards "everything
    /// enabled" and are dropped either way.
    pub fn toggle_all(mut self) -> Self {
        if self.all_sections_enabled() {
            self.enabled_sections.clear();
        } else {
            self.enabled_sections = self
                .mode
                .catalog()
                .iter()
                .map(|s| s.id.to_string())
                .collect();
        }
        self
    }

    /// True when every section of the current catalog is enabled.
    pub fn all_sections_enabled(&self) -> bool {
        self.mode
            .catalog()
            .iter()
            .all(|s| self.enabled_sections.contains(s.id))
    }

    /// Whether `id` is currently enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled_sections.contains(id)
    }

    /// Enabled sections of the current catalog, in catalog order.
    ///
    /// Ids that do not belong to the current catalog are skipped.
    pub fn active_sections(&self) -> Vec<&'static Section> {
        self.mode
            .catalog()
            .iter()
            .filter(|s| self.enabled_sections.contains(s.id))
            .collect()
    }

    /// Enabled ids that the current catalog does not know.
    pub fn stale_section_ids(&self) -> Vec<&str> {
        let catalog = self.mode.catalog();
        self.enabled_sections
            .iter()
            .map(String::as_str)
            .filter(|id| !catalog.iter().any(|s| s.id == *id))
            .collect()
    }

    /// Loads a record from a `.json`, `.yaml` or `.yml` file.
    ///
    /// Missing fields take their defaults; when `enabledSections` is absent
    /// the defaults of the record's mode are used.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            _ => Err(InputError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Serializes the record as pretty JSON.
    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wire shape of [`InputRecord`] before mode-dependent defaults are applied.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawInputRecord {
    mode: Mode,
    domain_focus: String,
    description: String,
    files: String,
    old_docs: String,
    constraints: Constraints,
    enabled_sections: Option<BTreeSet<String>>,
}

impl Default for RawInputRecord {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            domain_focus: String::new(),
            description: String::new(),
            files: String::new(),
            old_docs: String::new(),
            constraints: Constraints::default(),
            enabled_sections: None,
        }
    }
}

impl From<RawInputRecord> for InputRecord {
    fn from(raw: RawInputRecord) -> Self {
        let enabled_sections = raw
            .enabled_sections
            .unwrap_or_else(|| raw.mode.default_section_ids().into_iter().collect());

        Self {
            mode: raw.mode,
            domain_focus: raw.domain_focus,
            description: raw.description,
            files: raw.files,
            old_docs: raw.old_docs,
            constraints: raw.constraints,
            enabled_sections,
        }
    }
}

/// Errors that can occur while loading an input record.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported input format (expected .json, .yaml or .yml): {0}")]
    UnsupportedFormat(PathBuf),
}

impl InputError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_text_edits() {
        let record = InputRecord::default()
            .apply(Edit::SetDomainFocus("Job Scheduler".into()))
            .apply(Edit::SetDescription("Runs cron jobs".into()));

        assert_eq!(record.domain_focus, "Job Scheduler");
        assert_eq!(record.description, "Runs cron jobs");
        assert!(record.files.is_empty());
    }

    #[test]
    fn test_constraint_edits_are_independent() {
        let record = InputRecord::default()
            .apply(Edit::SetTone(Tone::Strict))
            .apply(Edit::SetIncludeCommands(false));

        assert_eq!(record.constraints.tone, Tone::Strict);
        assert!(!record.constraints.include_commands);
        assert_eq!(record.constraints.audience, Audience::Mixed);
        assert!(record.constraints.include_env_details);
    }

    #[test]
    fn test_set_sections_replaces() {
        let record =
            InputRecord::default().apply(Edit::SetSections(vec!["usage".into(), "goals".into()]));
        assert_eq!(record.enabled_sections.len(), 2);
        assert!(record.is_enabled("usage"));
        assert!(!record.is_enabled("overview"));
    }

    #[test]
    fn test_stale_ids() {
        let mut record = InputRecord::for_mode(Mode::Readme);
        record.enabled_sections.insert("overview".into());
        assert_eq!(record.stale_section_ids(), vec!["overview"]);
    }

    #[test]
    fn test_raw_defaults_follow_mode() {
        let record: InputRecord = serde_json::from_str(r#"{"mode":"readme"}"#).unwrap();
        assert_eq!(record.mode, Mode::Readme);
        assert!(record.is_enabled("quickstart"));
        assert!(!record.is_enabled("runtime"));
    }
}
