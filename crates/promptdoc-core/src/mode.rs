use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Section, DOMAIN_SECTIONS, README_SECTIONS};
use crate::error::ParseValueError;

/// Which documentation task the prompt describes.
///
/// Each mode carries its own section catalog and task sentence:
/// Domain → one subsystem in depth, Readme → the whole repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Deep technical documentation for a single component
    #[default]
    Domain,
    /// A README.md for the repository
    Readme,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Domain, Mode::Readme];

    /// Returns the ordered section catalog for this mode.
    pub fn catalog(self) -> &'static [Section] {
        match self {
            Mode::Domain => DOMAIN_SECTIONS,
            Mode::Readme => README_SECTIONS,
        }
    }

    /// Ids of the catalog entries enabled by default, in catalog order.
    pub fn default_section_ids(self) -> Vec<String> {
        self.catalog()
            .iter()
            .filter(|s| s.default_enabled)
            .map(|s| s.id.to_string())
            .collect()
    }

    /// Renders the task sentence for the prompt's objective block.
    ///
    /// `focus` is only used in Domain mode; an empty focus falls back
    /// to a generic subsystem name.
    pub fn task_description(self, focus: &str) -> String {
        match self {
            Mode::Domain => {
                let focus = if focus.is_empty() {
                    "specified subsystem"
                } else {
                    focus
                };
                format!("Create deep technical documentation for the \"{focus}\" component.")
            }
            Mode::Readme => "Create a comprehensive README.md for the repository.".to_string(),
        }
    }

    /// The literal value used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Domain => "domain",
            Mode::Readme => "readme",
        }
    }

    /// Heading shown above the form.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Domain => "Domain Documentation",
            Mode::Readme => "README Builder",
        }
    }

    /// Short label for mode pickers.
    pub fn button_label(self) -> &'static str {
        match self {
            Mode::Domain => "Domain / API Docs",
            Mode::Readme => "README / Repo",
        }
    }

    /// The other mode.
    pub fn other(self) -> Mode {
        match self {
            Mode::Domain => Mode::Readme,
            Mode::Readme => Mode::Domain,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError::new("mode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_description_domain() {
        assert_eq!(
            Mode::Domain.task_description("Auth Layer"),
            "Create deep technical documentation for the \"Auth Layer\" component."
        );
        assert_eq!(
            Mode::Domain.task_description(""),
            "Create deep technical documentation for the \"specified subsystem\" component."
        );
    }

    #[test]
    fn test_task_description_readme_ignores_focus() {
        assert_eq!(
            Mode::Readme.task_description("Auth Layer"),
            "Create a comprehensive README.md for the repository."
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("readme".parse::<Mode>().unwrap(), Mode::Readme);
        assert_eq!("Domain".parse::<Mode>().unwrap(), Mode::Domain);
        assert!("wiki".parse::<Mode>().is_err());
    }
}
