use super::*;

#[test]
fn fragments_roundtrip() {
    for page in Page::ALL {
        assert_eq!(page.fragment().parse::<Page>().unwrap(), page);
        assert_eq!(Page::from_fragment(&format!("#{page}")), page);
    }
}

#[test]
fn from_fragment_falls_back_to_home() {
    assert_eq!(Page::from_fragment(""), Page::Home);
    assert_eq!(Page::from_fragment("#"), Page::Home);
    assert_eq!(Page::from_fragment("#nowhere"), Page::Home);
}

#[test]
fn from_fragment_trims_whitespace() {
    assert_eq!(Page::from_fragment("  #rules "), Page::Rules);
}

#[test]
fn parse_reports_unknown_page() {
    let err = "#glossary".parse::<Page>().unwrap_err();
    assert_eq!(err, DiagramError::UnknownPage("glossary".into()));
}

#[test]
fn fragments_are_case_sensitive() {
    assert!("Comparison".parse::<Page>().is_err());
}

#[test]
fn only_two_pages_host_diagrams() {
    assert_eq!(Page::Comparison.diagram(), Some(DiagramKind::Triangle));
    assert_eq!(Page::SpecialAngles.diagram(), Some(DiagramKind::UnitCircle));
    let static_pages = Page::ALL.iter().filter(|p| p.diagram().is_none()).count();
    assert_eq!(static_pages, 4);
}

#[test]
fn serde_uses_fragment_names() {
    assert_eq!(serde_json::to_string(&Page::WorkedExamples).unwrap(), "\"worked-examples\"");
    assert_eq!(serde_json::from_str::<Page>("\"special-angles\"").unwrap(), Page::SpecialAngles);
}

#[test]
fn presets() {
    assert_eq!(PRESET_ANGLES.first(), Some(&0.0));
    assert_eq!(PRESET_ANGLES.last(), Some(&360.0));
    assert!(PRESET_ANGLES.windows(2).all(|w| w[0] < w[1]));
    assert!(is_preset(45.0));
    assert!(!is_preset(46.0));
}
