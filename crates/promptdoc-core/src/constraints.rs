//! Enumerated knobs that shape the requested documentation.
//!
//! Every enum renders into the prompt as its literal lowercase value
//! (`as_str`), never as its display label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseValueError;

/// Who the documentation is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Mixed,
    Junior,
    Senior,
    Ops,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::Mixed,
        Audience::Junior,
        Audience::Senior,
        Audience::Ops,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Mixed => "mixed",
            Audience::Junior => "junior",
            Audience::Senior => "senior",
            Audience::Ops => "ops",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Audience::Mixed => "Mixed / General",
            Audience::Junior => "Junior Developers (More explanation)",
            Audience::Senior => "Senior Developers (Concise)",
            Audience::Ops => "DevOps / SRE",
        }
    }

    /// Next value in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

/// Voice of the documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Opinionated,
    Strict,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Neutral, Tone::Opinionated, Tone::Strict];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Opinionated => "opinionated",
            Tone::Strict => "strict",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral & Professional",
            Tone::Opinionated => "Opinionated / Guide-like",
            Tone::Strict => "Strict & Formal",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

/// How much detail to request. Shown as "Depth" in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Short,
    #[default]
    Medium,
    Deep,
}

impl Depth {
    pub const ALL: [Depth; 3] = [Depth::Short, Depth::Medium, Depth::Deep];

    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Short => "short",
            Depth::Medium => "medium",
            Depth::Deep => "deep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Depth::Short => "Short (TL;DR)",
            Depth::Medium => "Medium (Standard)",
            Depth::Deep => "Deep Dive",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

fn parse_from<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    kind: &'static str,
    s: &str,
) -> Result<T, ParseValueError> {
    let wanted = s.trim();
    all.iter()
        .copied()
        .find(|v| as_str(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseValueError::new(kind, s))
}

impl FromStr for Audience {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(&Self::ALL, Self::as_str, "audience", s)
    }
}

impl FromStr for Tone {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(&Self::ALL, Self::as_str, "tone", s)
    }
}

impl FromStr for Depth {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(&Self::ALL, Self::as_str, "depth", s)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent constraints on the requested documentation.
///
/// No field depends on another; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraints {
    pub audience: Audience,
    pub tone: Tone,
    /// Detail level ("depth" in the form)
    pub length: Depth,
    /// Ask for executable CLI commands in code blocks
    pub include_commands: bool,
    /// Ask for environment variables and configuration to be documented
    pub include_env_details: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            audience: Audience::Mixed,
            tone: Tone::Neutral,
            length: Depth::Medium,
            include_commands: true,
            include_env_details: true,
        }
    }
}

/// Form label for the commands toggle.
pub const INCLUDE_COMMANDS_LABEL: &str = "Include CLI/Make commands";

/// Form label for the environment toggle.
pub const INCLUDE_ENV_DETAILS_LABEL: &str = "Include detailed Env Config";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constraints() {
        let c = Constraints::default();
        assert_eq!(c.audience, Audience::Mixed);
        assert_eq!(c.tone, Tone::Neutral);
        assert_eq!(c.length, Depth::Medium);
        assert!(c.include_commands);
        assert!(c.include_env_details);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Audience::Ops.next(), Audience::Mixed);
        assert_eq!(Tone::Strict.next(), Tone::Neutral);
        assert_eq!(Depth::Deep.next(), Depth::Short);
        assert_eq!(Depth::Short.next(), Depth::Medium);
    }

    #[test]
    fn test_parse_rejects_labels() {
        assert_eq!("ops".parse::<Audience>().unwrap(), Audience::Ops);
        let err = "DevOps / SRE".parse::<Audience>().unwrap_err();
        assert_eq!(err.kind, "audience");
    }

    #[test]
    fn test_serde_literal_values() {
        let json = serde_json::to_string(&Constraints::default()).unwrap();
        assert!(json.contains("\"audience\":\"mixed\""));
        assert!(json.contains("\"length\":\"medium\""));
        assert!(json.contains("\"includeCommands\":true"));
    }
}
