//! Fixed text blocks of the generated prompt.

/// Opening role description.
pub const SYSTEM_ROLE: &str = "You are a Principal Technical Writer and Senior Software Architect. 
Your goal is to produce state-of-the-art documentation that is accurate, clear, and adheres to strict verification protocols.";

/// Numbered principles the model must follow.
pub const PRINCIPLES_PACK: &str = r#"
1. **Chain of Thought (CoT)**: Enforce linear logic flow (Discovery -> Plan -> Execute -> Verify).
2. **Fact Grounding**: Use ONLY the provided code as the source of truth.
3. **Verification**: Include a specific step to check for hallucinations or missing info.
4. **North Star**: "Truth > Speed. Do not invent details."
"#;

/// Directive against invented paths, names and keys.
pub const ANTI_HALLUCINATION: &str = "**CRITICAL**: If you encounter functionality that is not present in the Input Data, you must mark it as `[UNKNOWN]` or `TODO`. Do NOT hallucinate file paths, variable names, or config keys.";

/// Steps 1 and 2 of the strategy block.
pub const STRATEGY_DISCOVERY_AND_PLANNING: &str = r#"Follow this process strictly. Do not output the documentation until Step 3.

**Step 1: Discovery & Analysis**
- Scan the <input_files> and <description>.
- Identify key components, data flow, and architectural patterns.
- Note any external dependencies or environment requirements.

**Step 2: Planning**
- Structure the documentation outline based on the requested sections below.
- Identify where "Warnings" or "Pitfalls" are needed based on code complexity."#;

/// Heading and first bullet of step 3.
pub const STRATEGY_EXECUTION: &str = "**Step 3: Execution**
- Write the documentation in Markdown format.";

/// Step 4 of the strategy block.
pub const STRATEGY_VERIFICATION: &str = "**Step 4: Verification (Self-Correction)**
- Check against the <input_files>: Did I invent any function names?
- Are all requested sections present?";

/// Lead-in to the section list.
pub const OUTPUT_STRUCTURE_INTRO: &str =
    "The final output must contain the following sections (use H2 headers):";

/// Step 3 bullet added when commands are requested.
pub const COMMANDS_INSTRUCTION: &str = "Include executable CLI commands in code blocks.";

/// Step 3 bullet added when environment details are requested.
pub const ENV_DETAILS_INSTRUCTION: &str =
    "Explicitly document environment variables and configuration.";

pub const NO_DESCRIPTION: &str = "(No description provided)";
pub const NO_OLD_DOCS: &str = "(No existing docs provided)";
pub const NO_FILES: &str = "(No files provided)";
