//! Property tests for reference extraction.

use proptest::prelude::*;

use ctob::extract_references;

fn reference_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_$()./\\\\ -]{1,40}")
        .unwrap()
        .prop_filter("no closing quote", |s| !s.contains('"'))
}

fn filler_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 {};=<>#\"]{0,40}")
        .unwrap()
        .prop_filter("not a directive", |s| !s.trim_start().starts_with("<#@"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every directive line is found, in order, with its path verbatim.
    #[test]
    fn property_directives_are_extracted_in_order(
        paths in proptest::collection::vec(reference_path(), 0..8),
        filler in proptest::collection::vec(filler_line(), 0..8),
        indent in "[ \t]{0,4}",
    ) {
        let mut lines = Vec::new();
        for (i, path) in paths.iter().enumerate() {
            if let Some(line) = filler.get(i) {
                lines.push(line.clone());
            }
            lines.push(format!("{}<#@ assembly name=\"{}\" #>", indent, path));
        }
        let text = lines.join("\n");

        let found: Vec<String> = extract_references(&text)
            .iter()
            .map(|r| r.raw().to_string())
            .collect();

        prop_assert_eq!(found, paths);
    }

    /// PROPERTY: Extraction never panics on arbitrary input.
    #[test]
    fn property_extract_never_panics(text in "(?s).{0,512}") {
        let _ = extract_references(&text);
    }
}
