use super::*;

fn patterns(list: &[&str]) -> PathPatterns {
    let mut patterns = PathPatterns::new();
    for p in list {
        patterns.add(p).unwrap();
    }
    patterns
}

fn filter(include: &[&str], ignore: &[&str], include_before_ignore: bool) -> PathFilter {
    PathFilter {
        include: patterns(include),
        ignore: patterns(ignore),
        include_before_ignore,
    }
}

#[test]
fn pattern_matches_path_suffix() {
    let p = patterns(&[r"\.java"]);
    assert!(p.is_match("/home/user/src/Main.java"));
    assert!(!p.is_match("/home/user/src/Main.javax"));
}

#[test]
fn pattern_must_reach_end_of_path() {
    let p = patterns(&["target"]);
    assert!(p.is_match("/project/target"));
    assert!(!p.is_match("/project/target/classes"));
}

#[test]
fn pattern_with_dollar_anchor() {
    let p = patterns(&[r"\.java$"]);
    assert!(p.is_match("/a/B.java"));
    assert!(!p.is_match("/a/B.java.bak"));
}

#[test]
fn pattern_alternation_is_concatenated_literally() {
    // `.*` + `a|b` reads as `.*a` or exactly `b`.
    let p = patterns(&["a|b"]);
    assert!(p.is_match("/x/a"));
    assert!(p.is_match("b"));
    assert!(!p.is_match("/x/b"));
}

#[test]
fn find_returns_first_matching_pattern() {
    let p = patterns(&[r"\.txt", r"notes\.txt"]);
    assert_eq!(p.find("/docs/notes.txt"), Some(r"\.txt"));
    assert_eq!(p.find("/docs/notes.md"), None);
}

#[test]
fn invalid_pattern_is_rejected() {
    let mut p = PathPatterns::new();
    let err = p.add("[unclosed").unwrap_err();
    assert!(matches!(err, SrcAnaError::InvalidPattern { .. }));
    assert!(p.is_empty());
}

#[test]
fn iter_keeps_insertion_order() {
    let p = patterns(&["b", "a", "c"]);
    assert_eq!(p.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(p.len(), 3);
}

#[test]
fn empty_filter_visits_everything() {
    let f = PathFilter::default();
    assert_eq!(f.skip_reason("/anything"), None);
    assert!(f.include_before_ignore);
}

#[test]
fn include_list_restricts_entries() {
    let f = filter(&[r"\.java$"], &[], true);
    assert_eq!(f.skip_reason("/src/A.java"), None);
    assert_eq!(f.skip_reason("/src/A.c"), Some(Skip::NotIncluded));
    assert_eq!(f.skip_reason("/src"), Some(Skip::NotIncluded));
}

#[test]
fn ignore_applies_when_flag_enabled() {
    let f = filter(&[], &["/target"], true);
    assert_eq!(f.skip_reason("/p/target"), Some(Skip::Ignored("/target")));
    assert_eq!(f.skip_reason("/p/src"), None);
}

#[test]
fn ignore_is_never_consulted_when_flag_disabled() {
    let f = filter(&[], &["/target"], false);
    assert_eq!(f.skip_reason("/p/target"), None);
}

#[test]
fn ignore_wins_over_include_when_flag_enabled() {
    let f = filter(&[r"\.java"], &[r"Generated\.java"], true);
    assert_eq!(f.skip_reason("/p/A.java"), None);
    assert_eq!(
        f.skip_reason("/p/AGenerated.java"),
        Some(Skip::Ignored(r"Generated\.java"))
    );
}
