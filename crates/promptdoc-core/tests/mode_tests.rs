use promptdoc_core::{catalog_for, Mode, DOMAIN_SECTIONS, README_SECTIONS};

#[test]
fn test_catalog_for() {
    assert_eq!(catalog_for(Mode::Domain), DOMAIN_SECTIONS);
    assert_eq!(catalog_for(Mode::Readme), README_SECTIONS);
}

#[test]
fn test_default_section_ids() {
    assert_eq!(
        Mode::Readme.default_section_ids(),
        vec![
            "intro",
            "structure",
            "quickstart",
            "env",
            "deploy",
            "testing",
            "security",
            "logging",
            "architecture_links",
        ]
    );
    assert_eq!(Mode::Domain.default_section_ids().len(), 9);
}

#[test]
fn test_other() {
    assert_eq!(Mode::Domain.other(), Mode::Readme);
    assert_eq!(Mode::Readme.other(), Mode::Domain);
}

#[test]
fn test_display_names() {
    assert_eq!(Mode::Domain.title(), "Domain Documentation");
    assert_eq!(Mode::Readme.button_label(), "README / Repo");
    assert_eq!(Mode::Readme.to_string(), "readme");
}
