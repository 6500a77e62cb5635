use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BLANK_IS_EMPTY;
use crate::constraints::Constraints;
use crate::input::InputRecord;

use super::template::*;

/// Knobs for how free-text fields are substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Treat whitespace-only text as empty, so it takes the fallback text.
    /// Off by default: only zero-length text is empty.
    pub blank_is_empty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            blank_is_empty: DEFAULT_BLANK_IS_EMPTY,
        }
    }
}

/// Renders the prompt with default options.
///
/// Total and pure: equal records always produce equal prompts.
pub fn generate_prompt(input: &InputRecord) -> String {
    render_with(input, &RenderOptions::default())
}

/// Renders the prompt for `input`.
pub fn render_with(input: &InputRecord, options: &RenderOptions) -> String {
    let stale = input.stale_section_ids();
    if !stale.is_empty() {
        tracing::debug!(mode = %input.mode, ?stale, "ignoring sections outside the current catalog");
    }

    let section_list = input
        .active_sections()
        .iter()
        .map(|s| format!("- {}", s.label))
        .collect::<Vec<_>>()
        .join("\n");

    let focus = text_or(&input.domain_focus, "", options);
    let task_description = input.mode.task_description(focus);
    let audience_instruction = audience_instruction(&input.constraints);

    let commands_line = if input.constraints.include_commands {
        COMMANDS_INSTRUCTION
    } else {
        ""
    };
    let env_line = if input.constraints.include_env_details {
        ENV_DETAILS_INSTRUCTION
    } else {
        ""
    };

    let description = text_or(&input.description, NO_DESCRIPTION, options);
    let old_docs = text_or(&input.old_docs, NO_OLD_DOCS, options);
    let files = text_or(&input.files, NO_FILES, options);

    let prompt = format!(
        r#"
# SYSTEM ROLE
{SYSTEM_ROLE}

# PRINCIPLES & SAFEGUARDS (STRICT)
{PRINCIPLES_PACK}
{ANTI_HALLUCINATION}

# TASK OBJECTIVE
{task_description}
{audience_instruction}

# STRATEGY (Chain of Thought)
{STRATEGY_DISCOVERY_AND_PLANNING}

{STRATEGY_EXECUTION}
- {commands_line}
- {env_line}

{STRATEGY_VERIFICATION}

# OUTPUT STRUCTURE (Requested Sections)
{OUTPUT_STRUCTURE_INTRO}
{section_list}

# INPUT DATA

<description>
{description}
</description>

<old_docs>
{old_docs}
</old_docs>

<input_files>
{files}
</input_files>
"#
    );

    prompt.trim().to_string()
}

/// "Target Audience: ... Tone: ... Detail Level: ..." with literal enum values.
pub fn audience_instruction(constraints: &Constraints) -> String {
    format!(
        "Target Audience: {} developers. Tone: {}. Detail Level: {}.",
        constraints.audience.as_str(),
        constraints.tone.as_str(),
        constraints.length.as_str()
    )
}

fn text_or<'a>(value: &'a str, fallback: &'a str, options: &RenderOptions) -> &'a str {
    let empty = if options.blank_is_empty {
        value.trim().is_empty()
    } else {
        value.is_empty()
    };
    if empty {
        fallback
    } else {
        value
    }
}

/// Size summary of a rendered prompt, shown under the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptStats {
    /// Number of characters (Unicode scalar values)
    pub characters: usize,
    /// Number of requested sections that made it into the prompt
    pub sections: usize,
}

impl PromptStats {
    pub fn of(input: &InputRecord, prompt: &str) -> Self {
        Self {
            characters: prompt.chars().count(),
            sections: input.active_sections().len(),
        }
    }
}
