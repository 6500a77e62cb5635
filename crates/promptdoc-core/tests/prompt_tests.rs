use std::collections::BTreeSet;

use promptdoc_core::prompt::template::{
    COMMANDS_INSTRUCTION, ENV_DETAILS_INSTRUCTION, NO_DESCRIPTION, NO_FILES, NO_OLD_DOCS,
    OUTPUT_STRUCTURE_INTRO,
};
use promptdoc_core::{generate_prompt, Audience, Depth, Edit, InputRecord, Mode, Tone};

/// Section labels listed under the output structure heading.
fn section_list(prompt: &str) -> Vec<String> {
    prompt
        .lines()
        .skip_while(|line| *line != OUTPUT_STRUCTURE_INTRO)
        .skip(1)
        .take_while(|line| !line.starts_with("# INPUT DATA"))
        .filter_map(|line| line.strip_prefix("- "))
        .map(str::to_string)
        .collect()
}

fn with_sections(mode: Mode, ids: &[&str]) -> InputRecord {
    InputRecord {
        enabled_sections: ids.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        ..InputRecord::for_mode(mode)
    }
}

#[test]
fn test_prompt_never_empty() {
    let records = vec![
        InputRecord::default(),
        InputRecord::for_mode(Mode::Readme),
        with_sections(Mode::Domain, &[]),
        with_sections(Mode::Readme, &["overview", "nonsense", ""]),
        InputRecord::default()
            .apply(Edit::SetDescription("Ünïcödé ✓ 日本語".into()))
            .apply(Edit::SetFiles("```\n}{\n```".into()))
            .apply(Edit::SetIncludeCommands(false))
            .apply(Edit::SetIncludeEnvDetails(false)),
    ];

    for record in records {
        let prompt = generate_prompt(&record);
        assert!(!prompt.is_empty());
        assert!(prompt.starts_with("# SYSTEM ROLE"));
    }
}

#[test]
fn test_prompt_is_deterministic() {
    let a = InputRecord::default()
        .apply(Edit::SetDomainFocus("Payment Gateway".into()))
        .apply(Edit::SetAudience(Audience::Senior));
    let b = a.clone();

    assert_eq!(a, b);
    assert_eq!(generate_prompt(&a), generate_prompt(&b));
    assert_eq!(generate_prompt(&a), generate_prompt(&a));
}

#[test]
fn test_sections_follow_catalog_order() {
    let forward = with_sections(Mode::Domain, &["overview", "reference"]);
    let reverse = InputRecord::for_mode(Mode::Domain)
        .apply(Edit::SetSections(vec![]))
        .apply(Edit::ToggleSection("reference".into()))
        .apply(Edit::ToggleSection("overview".into()));

    let expected = vec!["Architecture Overview", "Quick Reference (API)"];
    assert_eq!(section_list(&generate_prompt(&forward)), expected);
    assert_eq!(section_list(&generate_prompt(&reverse)), expected);
}

#[test]
fn test_empty_fields_use_fallbacks() {
    let prompt = generate_prompt(&InputRecord::default());

    assert!(prompt.contains(NO_DESCRIPTION));
    assert!(prompt.contains(NO_OLD_DOCS));
    assert!(prompt.contains(NO_FILES));
    assert!(prompt.contains("<description>\n(No description provided)\n</description>"));
    assert!(prompt.contains("<old_docs>\n(No existing docs provided)\n</old_docs>"));
    assert!(prompt.contains("<input_files>\n(No files provided)\n</input_files>"));
}

#[test]
fn test_free_text_is_inserted_verbatim() {
    let record = InputRecord::default()
        .apply(Edit::SetDescription("Handles refunds".into()))
        .apply(Edit::SetOldDocs("# Old".into()))
        .apply(Edit::SetFiles("src/refund.rs".into()));
    let prompt = generate_prompt(&record);

    assert!(prompt.contains("<description>\nHandles refunds\n</description>"));
    assert!(prompt.contains("<old_docs>\n# Old\n</old_docs>"));
    assert!(prompt.contains("<input_files>\nsrc/refund.rs\n</input_files>"));
    assert!(!prompt.contains(NO_DESCRIPTION));
}

#[test]
fn test_commands_toggle_changes_only_its_line() {
    let off = InputRecord::default().apply(Edit::SetIncludeCommands(false));
    let on = off.clone().apply(Edit::SetIncludeCommands(true));

    let without = generate_prompt(&off);
    let with = generate_prompt(&on);

    assert!(!without.contains(COMMANDS_INSTRUCTION));
    assert!(with.contains(&format!("- {COMMANDS_INSTRUCTION}")));

    let step3 = "- Write the documentation in Markdown format.\n";
    let patched = without.replacen(
        &format!("{step3}- \n"),
        &format!("{step3}- {COMMANDS_INSTRUCTION}\n"),
        1,
    );
    assert_eq!(patched, with);
}

#[test]
fn test_env_toggle() {
    let off = InputRecord::default().apply(Edit::SetIncludeEnvDetails(false));
    assert!(!generate_prompt(&off).contains(ENV_DETAILS_INSTRUCTION));
    assert!(generate_prompt(&InputRecord::default()).contains(ENV_DETAILS_INSTRUCTION));
}

#[test]
fn test_stale_ids_render_empty_list() {
    let record = with_sections(Mode::Readme, &["overview"]);
    let prompt = generate_prompt(&record);

    assert!(section_list(&prompt).is_empty());
    // The list line stays in place, empty.
    assert!(prompt.contains(&format!("{OUTPUT_STRUCTURE_INTRO}\n\n\n# INPUT DATA")));
}

#[test]
fn test_mode_switch_resets_to_domain_defaults() {
    let record = InputRecord::for_mode(Mode::Readme)
        .apply(Edit::ToggleAll)
        .apply(Edit::SetMode(Mode::Domain));

    assert_eq!(
        section_list(&generate_prompt(&record)),
        vec![
            "Architecture Overview",
            "Design Goals & Constraints",
            "Layer Model / Diagram",
            "Type Safety & Validation",
            "Core Components",
            "Usage Patterns / Recipes",
            "Critical Pitfalls",
            "Quick Reference (API)",
            "Security Considerations",
        ]
    );
}

#[test]
fn test_task_description_by_mode() {
    let domain = InputRecord::default().apply(Edit::SetDomainFocus("Auth Layer".into()));
    assert!(generate_prompt(&domain)
        .contains("Create deep technical documentation for the \"Auth Layer\" component."));

    let unnamed = generate_prompt(&InputRecord::default());
    assert!(unnamed.contains("the \"specified subsystem\" component."));

    let readme = domain.apply(Edit::SetMode(Mode::Readme));
    let prompt = generate_prompt(&readme);
    assert!(prompt.contains("Create a comprehensive README.md for the repository."));
    assert!(!prompt.contains("Auth Layer"));
}

#[test]
fn test_audience_line_uses_raw_values() {
    let record = InputRecord::default()
        .apply(Edit::SetAudience(Audience::Ops))
        .apply(Edit::SetTone(Tone::Opinionated))
        .apply(Edit::SetDepth(Depth::Deep));

    assert!(generate_prompt(&record)
        .contains("Target Audience: ops developers. Tone: opinionated. Detail Level: deep."));
}

#[test]
fn test_block_order() {
    let prompt = generate_prompt(&InputRecord::default());
    let headings = [
        "# SYSTEM ROLE",
        "# PRINCIPLES & SAFEGUARDS (STRICT)",
        "# TASK OBJECTIVE",
        "Target Audience:",
        "# STRATEGY (Chain of Thought)",
        "**Step 1: Discovery & Analysis**",
        "**Step 2: Planning**",
        "**Step 3: Execution**",
        "**Step 4: Verification (Self-Correction)**",
        "# OUTPUT STRUCTURE (Requested Sections)",
        "# INPUT DATA",
        "\n<description>\n",
        "\n<old_docs>\n",
        "\n<input_files>\n",
    ];

    let positions: Vec<usize> = headings
        .iter()
        .map(|h| prompt.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
