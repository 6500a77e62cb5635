//! Default values for PromptDoc configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

use crate::constraints::{Audience, Depth, Tone};
use crate::mode::Mode;

// ============================================================================
// Form Defaults
// ============================================================================

/// Mode selected when the form opens.
pub const DEFAULT_MODE: Mode = Mode::Domain;

/// Default target audience.
pub const DEFAULT_AUDIENCE: Audience = Audience::Mixed;

/// Default tone.
pub const DEFAULT_TONE: Tone = Tone::Neutral;

/// Default detail level.
pub const DEFAULT_DEPTH: Depth = Depth::Medium;

/// Whether CLI commands are requested by default.
pub const DEFAULT_INCLUDE_COMMANDS: bool = true;

/// Whether environment details are requested by default.
pub const DEFAULT_INCLUDE_ENV_DETAILS: bool = true;

// ============================================================================
// Render Defaults
// ============================================================================

/// Whitespace-only text is kept verbatim unless configured otherwise.
pub const DEFAULT_BLANK_IS_EMPTY: bool = false;

// ============================================================================
// Source Defaults
// ============================================================================

/// Maximum size of a single gathered file (100 KB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024;

/// Maximum total size of gathered files (500 KB).
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 500 * 1024;

/// Default file extensions to gather.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    // Rust
    "rs", "toml",
    // JavaScript/TypeScript
    "js", "ts", "jsx", "tsx", "mjs", "cjs",
    // Python
    "py", "pyi",
    // Go
    "go", "mod",
    // Java/Kotlin
    "java", "kt", "kts",
    // C/C++
    "c", "h", "cpp", "hpp", "cc", "hh",
    // C#
    "cs",
    // Ruby
    "rb",
    // PHP
    "php",
    // Swift
    "swift",
    // Config/Data
    "json", "yaml", "yml", "xml",
    // Shell
    "sh", "bash",
    // Documentation
    "md", "txt", "rst",
];

/// Default directories to skip while gathering.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Dependencies
    "node_modules",
    "vendor",
    "venv",
    ".venv",
    "__pycache__",
    // Build outputs
    "target",
    "build",
    "dist",
    "out",
    // IDE/Editor
    ".idea",
    ".vscode",
    // PromptDoc's own output
    ".promptdoc",
    // Other common excludes
    "coverage",
    ".next",
    ".cache",
];

// ============================================================================
// Output Defaults
// ============================================================================

/// Directory the form saves prompts into.
pub const DEFAULT_OUTPUT_DIR: &str = ".promptdoc";

/// File name the form saves prompts as.
pub const DEFAULT_OUTPUT_FILE: &str = "prompt.md";

// ============================================================================
// Logging Defaults
// ============================================================================

/// Log level used when no filter is set in the environment.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Project-local config file name.
pub const CONFIG_FILE_NAME: &str = "promptdoc.toml";
