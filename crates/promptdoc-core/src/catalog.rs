//! Section catalogs for each documentation mode.
//!
//! Catalog order is significant: it is the order in which section headers
//! appear in the rendered prompt, regardless of the order sections were enabled.

use serde::Serialize;

use crate::mode::Mode;

/// A single toggleable unit of requested output content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Short token, unique within its catalog
    pub id: &'static str,
    /// Heading text shown in the prompt and the UI
    pub label: &'static str,
    /// Whether the section is enabled when its mode is selected
    pub default_enabled: bool,
}

impl Section {
    const fn new(id: &'static str, label: &'static str, default_enabled: bool) -> Self {
        Self {
            id,
            label,
            default_enabled,
        }
    }
}

/// Sections available when documenting a single subsystem.
pub const DOMAIN_SECTIONS: &[Section] = &[
    Section::new("overview", "Architecture Overview", true),
    Section::new("goals", "Design Goals & Constraints", true),
    Section::new("diagram", "Layer Model / Diagram", true),
    Section::new("types", "Type Safety & Validation", true),
    Section::new("components", "Core Components", true),
    Section::new("usage", "Usage Patterns / Recipes", true),
    Section::new("migration", "Migration Path", false),
    Section::new("pitfalls", "Critical Pitfalls", true),
    Section::new("advanced", "Advanced Helpers", false),
    Section::new("reference", "Quick Reference (API)", true),
    Section::new("security", "Security Considerations", true),
];

/// Sections available when writing a repository README.
pub const README_SECTIONS: &[Section] = &[
    Section::new("intro", "Intro & Context", true),
    Section::new("structure", "Project Structure", true),
    Section::new("quickstart", "Quick Start / Install", true),
    Section::new("env", "Environment Configuration", true),
    Section::new("deploy", "Release & Rollback", true),
    Section::new("runtime", "Runtime Model (Jobs/Web)", false),
    Section::new("testing", "Testing Strategy", true),
    Section::new("i18n", "Internationalization", false),
    Section::new("security", "Security Practices", true),
    Section::new("data", "Data Access Pattern", false),
    Section::new("logging", "Logging & Debugging", true),
    Section::new("architecture_links", "Links to Arch Docs", true),
];

/// Returns the catalog for a mode.
pub fn catalog_for(mode: Mode) -> &'static [Section] {
    mode.catalog()
}

/// Looks up a section by id within the catalog of `mode`.
pub fn find(mode: Mode, id: &str) -> Option<&'static Section> {
    catalog_for(mode).iter().find(|s| s.id == id)
}
