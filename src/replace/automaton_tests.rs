use tempfile::TempDir;

use super::*;

fn rules(pairs: &[(&str, &str)]) -> LiteralRules {
    let table: ReplacementTable = pairs.iter().copied().collect();
    LiteralRules::compile(&table).unwrap()
}

#[test]
fn single_pass_does_not_cascade() {
    let rules = rules(&[("a", "b"), ("b", "c")]);
    assert_eq!(rules.rewrite("a"), "b");
    assert_eq!(rules.rewrite("ab"), "bc");
}

#[test]
fn overlapping_keys_leftmost_wins() {
    let rules = rules(&[("ab", "X"), ("bc", "Y")]);
    let tokens: Vec<Token<'_>> = rules.tokenize("abc").collect();

    assert_eq!(
        tokens,
        vec![
            Token::Match {
                key: "ab",
                replacement: "X"
            },
            Token::Fragment("c"),
        ]
    );
    assert_eq!(rules.rewrite("abc"), "Xc");
}

#[test]
fn overlapping_keys_at_same_position_longest_wins() {
    let rules = rules(&[("Lorem", "L"), ("Lorem ipsum", "Blablub")]);
    assert_eq!(rules.rewrite("Lorem ipsum dolor"), "Blablub dolor");
}

#[test]
fn matches_resume_after_consumed_span() {
    let rules = rules(&[("aa", "b")]);
    assert_eq!(rules.rewrite("aaa"), "ba");
}

#[test]
fn tokens_reconstruct_original_text() {
    let rules = rules(&[("sit", "Lorem ipsum"), (" ", "   "), ("et", "und")]);
    let text = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr\n";

    let source: String = rules.tokenize(text).map(|t| t.source()).collect();

    assert_eq!(source, text);
}

#[test]
fn tokens_have_no_empty_fragments() {
    let rules = rules(&[("x", "y")]);
    let tokens: Vec<Token<'_>> = rules.tokenize("xx").collect();

    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(Token::is_match));
}

#[test]
fn text_without_matches_is_one_fragment() {
    let rules = rules(&[("needle", "pin")]);
    let tokens: Vec<Token<'_>> = rules.tokenize("haystack").collect();
    assert_eq!(tokens, vec![Token::Fragment("haystack")]);
}

#[test]
fn empty_text_has_no_tokens() {
    let rules = rules(&[("a", "b")]);
    assert_eq!(rules.tokenize("").count(), 0);
}

#[test]
fn empty_table_rewrites_nothing() {
    let rules = rules(&[]);
    assert_eq!(rules.rewrite("unchanged"), "unchanged");
}

#[test]
fn empty_key_is_rejected() {
    let table: ReplacementTable = [("", "x")].into_iter().collect();
    assert!(matches!(
        LiteralRules::compile(&table),
        Err(SrcAnaError::EmptyKey)
    ));
}

#[test]
fn keys_are_literal_not_regex() {
    let rules = rules(&[("a.c", "X")]);
    assert_eq!(rules.rewrite("abc a.c"), "abc X");
}

#[test]
fn multibyte_text_is_split_on_char_boundaries() {
    let rules = rules(&[("ü", "ue")]);
    assert_eq!(rules.rewrite("Grüße, Müller"), "Grueße, Mueller");
}

#[test]
fn handle_file_rewrites_in_one_pass() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("TestClass.java");
    std::fs::write(
        &path,
        "// 2017 Martin\nvoid run() {\n\tthrow new RuntimeException(\"Not implemented!\");\n}",
    )
    .unwrap();
    let table: ReplacementTable = [
        ("2017", "7102"),
        ("Martin", ""),
        (
            "throw new RuntimeException(\"Not implemented!\");",
            "print(\"Ah\");",
        ),
    ]
    .into_iter()
    .collect();
    let mut replacer = AutomatonReplacer::new(".java", &table).unwrap();

    replacer.handle_file(&path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "// 7102 \nvoid run() {\n\tprint(\"Ah\");\n}\n"
    );
}

#[test]
fn rewriting_twice_is_stable_when_replacements_contain_no_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.txt");
    std::fs::write(&path, "foo bar\n").unwrap();
    let table: ReplacementTable = [("foo", "baz")].into_iter().collect();
    let mut replacer = AutomatonReplacer::new(".txt", &table).unwrap();

    replacer.handle_file(&path).unwrap();
    replacer.handle_file(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "baz bar\n");
}

#[test]
fn template_instances_share_the_automaton() {
    let rules = rules(&[("a", "b")]);
    let handler = rules.instantiate("Handler.java");

    assert_eq!(handler.extension(), "Handler.java");
    assert_eq!(handler.kind(), "literal-replace");
}
