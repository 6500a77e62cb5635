//! One-shot rendering from command-line flags.

use clap::Args;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};

use promptdoc_core::source::read_text;
use promptdoc_core::{
    render_with, Audience, Config, Depth, Edit, InputRecord, Mode, PromptStats, SourceCollector,
    Tone,
};

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Start from a saved input record (.json, .yaml or .yml)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Documentation mode; resets sections to the mode's defaults
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Subsystem name (domain mode only)
    #[arg(long)]
    pub focus: Option<String>,

    /// High-level description
    #[arg(long, conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the description from a file
    #[arg(long, value_name = "PATH")]
    pub description_file: Option<PathBuf>,

    /// Read existing documentation from a file
    #[arg(long, value_name = "PATH")]
    pub old_docs_file: Option<PathBuf>,

    /// Read the files block from a file
    #[arg(long, value_name = "PATH", conflicts_with = "scan")]
    pub files_file: Option<PathBuf>,

    /// Build the files block from a directory tree
    #[arg(long, value_name = "DIR")]
    pub scan: Option<PathBuf>,

    /// Target audience (mixed, junior, senior, ops)
    #[arg(long)]
    pub audience: Option<Audience>,

    /// Tone (neutral, opinionated, strict)
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Detail level (short, medium, deep)
    #[arg(long)]
    pub depth: Option<Depth>,

    /// Ask for executable CLI commands
    #[arg(long, overrides_with = "no_commands")]
    pub commands: bool,

    /// Do not ask for CLI commands
    #[arg(long, overrides_with = "commands")]
    pub no_commands: bool,

    /// Ask for environment and configuration details
    #[arg(long, overrides_with = "no_env")]
    pub env: bool,

    /// Do not ask for environment details
    #[arg(long, overrides_with = "env")]
    pub no_env: bool,

    /// Enable exactly these sections (repeatable)
    #[arg(long = "section", value_name = "ID")]
    pub sections: Vec<String>,

    /// Enable every section of the mode's catalog
    #[arg(long, conflicts_with = "sections")]
    pub all_sections: bool,

    /// Treat whitespace-only text as empty
    #[arg(long)]
    pub blank_is_empty: bool,

    /// Write the prompt to a file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also save the final input record as JSON
    #[arg(long, value_name = "PATH")]
    pub save_input: Option<PathBuf>,

    /// Print character and section counts to stderr
    #[arg(long)]
    pub stats: bool,
}

impl RenderArgs {
    fn commands(&self) -> Option<bool> {
        flag_pair(self.commands, self.no_commands)
    }

    fn env(&self) -> Option<bool> {
        flag_pair(self.env, self.no_env)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Builds the record described by `args` on top of `base`.
pub fn build_record(args: &RenderArgs, base: InputRecord, config: &Config) -> Result<InputRecord> {
    let mut edits = Vec::new();

    if let Some(mode) = args.mode {
        edits.push(Edit::SetMode(mode));
    }
    if let Some(focus) = &args.focus {
        edits.push(Edit::SetDomainFocus(focus.clone()));
    }
    if let Some(description) = &args.description {
        edits.push(Edit::SetDescription(description.clone()));
    }
    if let Some(path) = &args.description_file {
        let text = read_text(path).wrap_err("failed to read description")?;
        edits.push(Edit::SetDescription(text));
    }
    if let Some(path) = &args.old_docs_file {
        let text = read_text(path).wrap_err("failed to read existing docs")?;
        edits.push(Edit::SetOldDocs(text));
    }
    if let Some(path) = &args.files_file {
        let text = read_text(path).wrap_err("failed to read files block")?;
        edits.push(Edit::SetFiles(text));
    }
    if let Some(dir) = &args.scan {
        let bundle = SourceCollector::with_config(dir, config.source.clone())
            .collect()
            .wrap_err_with(|| format!("failed to scan {}", dir.display()))?;
        tracing::info!(files = bundle.files.len(), "scanned source directory");
        edits.push(Edit::SetFiles(bundle.to_text()));
    }
    if let Some(audience) = args.audience {
        edits.push(Edit::SetAudience(audience));
    }
    if let Some(tone) = args.tone {
        edits.push(Edit::SetTone(tone));
    }
    if let Some(depth) = args.depth {
        edits.push(Edit::SetDepth(depth));
    }
    if let Some(on) = args.commands() {
        edits.push(Edit::SetIncludeCommands(on));
    }
    if let Some(on) = args.env() {
        edits.push(Edit::SetIncludeEnvDetails(on));
    }
    if !args.sections.is_empty() {
        edits.push(Edit::SetSections(args.sections.clone()));
    }

    let mut record = edits.into_iter().fold(base, InputRecord::apply);

    if args.all_sections && !record.all_sections_enabled() {
        record = record.apply(Edit::ToggleAll);
    }

    for id in record.stale_section_ids() {
        tracing::warn!(id, mode = %record.mode, "section is not in this mode's catalog");
    }

    Ok(record)
}

/// Runs the `render` subcommand.
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let base = match &args.input {
        Some(path) => InputRecord::from_path(path)
            .wrap_err_with(|| format!("failed to load {}", path.display()))?,
        None => config.initial_record(),
    };
    let record = build_record(&args, base, config)?;

    let mut options = config.render_options();
    options.blank_is_empty |= args.blank_is_empty;

    let prompt = render_with(&record, &options);

    if let Some(path) = &args.save_input {
        let json = record.to_json().wrap_err("failed to serialize input")?;
        write_file(path, &json)?;
        tracing::info!(path = %path.display(), "saved input record");
    }

    match &args.output {
        Some(path) => {
            write_file(path, &prompt)?;
            eprintln!("Wrote prompt to {}", path.display());
        }
        None => println!("{prompt}"),
    }

    if args.stats {
        let stats = PromptStats::of(&record, &prompt);
        eprintln!(
            "{} characters, {} sections",
            stats.characters, stats.sections
        );
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).wrap_err_with(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn parse(argv: &[&str]) -> RenderArgs {
        let mut full = vec!["promptdoc"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    fn build(argv: &[&str]) -> InputRecord {
        let config = Config::default();
        build_record(&parse(argv), config.initial_record(), &config).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        assert_eq!(build(&[]), InputRecord::default());
    }

    #[test]
    fn test_mode_and_constraints() {
        let record = build(&["--mode", "readme", "--tone", "strict", "--no-env"]);
        assert_eq!(record.mode, Mode::Readme);
        assert_eq!(record.constraints.tone, Tone::Strict);
        assert!(!record.constraints.include_env_details);
        assert!(record.constraints.include_commands);
        assert!(record.is_enabled("intro"));
    }

    #[test]
    fn test_explicit_sections() {
        let record = build(&["--section", "usage", "--section", "overview"]);
        let labels: Vec<_> = record.active_sections().iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Architecture Overview", "Usage Patterns / Recipes"]);
    }

    #[test]
    fn test_all_sections() {
        let record = build(&["--mode", "readme", "--all-sections"]);
        assert!(record.all_sections_enabled());
    }

    #[test]
    fn test_last_commands_flag_wins() {
        let record = build(&["--no-commands", "--commands"]);
        assert!(record.constraints.include_commands);

        let record = build(&["--commands", "--no-commands"]);
        assert!(!record.constraints.include_commands);
    }

    #[test]
    fn test_invalid_audience_rejected() {
        let result = Harness::try_parse_from(["promptdoc", "--audience", "managers"]);
        assert!(result.is_err());
    }
}
