pub mod catalog;
pub mod config;
pub mod constraints;
pub mod error;
pub mod input;
pub mod mode;
pub mod prompt;
pub mod source;

pub use catalog::{catalog_for, Section, DOMAIN_SECTIONS, README_SECTIONS};
pub use config::{Config, ConfigError, OutputConfig, SourceConfig};
pub use constraints::{Audience, Constraints, Depth, Tone};
pub use error::ParseValueError;
pub use input::{Edit, InputError, InputRecord};
pub use mode::Mode;
pub use prompt::{generate_prompt, render_with, PromptStats, RenderOptions};
pub use source::{SourceBundle, SourceCollector, SourceError};
