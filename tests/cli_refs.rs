mod common;

use common::*;

#[test]
fn test_refs_lists_raw_directives() {
    let env = TestEnv::builder()
        .with_file(MODEL_TT, TEMPLATE_WITH_REFERENCE)
        .build();

    let result = env.run(&["refs", MODEL_TT]);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["System.Core", "$(SolutionDir)lib/$(Configuration)/Shared.dll"]
    );
}

#[test]
#[cfg(unix)]
fn test_refs_resolves_against_manifest() {
    let env = TestEnv::builder()
        .with_file(MODEL_TT, TEMPLATE_WITH_REFERENCE)
        .with_file("lib/Release/Shared.dll", "binary")
        .build();

    let result = env.run(&[
        "refs",
        MODEL_TT,
        "--manifest",
        DEFAULT_MANIFEST,
        "--configuration",
        "Release",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let shared = result
        .stdout
        .lines()
        .find(|line| line.contains("Shared.dll"))
        .unwrap_or_default();
    assert!(shared.contains("lib/Release/Shared.dll"), "{}", shared);
    assert!(!shared.contains("(missing)"), "{}", shared);

    let debug = env.run(&["refs", MODEL_TT, "--manifest", DEFAULT_MANIFEST]);
    assert!(debug.stdout.contains("Debug/Shared.dll (missing)"), "{}", debug.stdout);
}

#[test]
fn test_refs_json_output() {
    let env = TestEnv::builder()
        .with_file(MODEL_TT, TEMPLATE_WITH_REFERENCE)
        .build();

    let result = env.run(&["--json", "refs", MODEL_TT]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_lines();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "refs");
    let references = events[0]["references"].as_array().cloned().unwrap_or_default();
    assert_eq!(references.len(), 2);
    assert_eq!(references[0]["raw"], "System.Core");
    assert!(references[0].get("resolved").is_none());
}

#[test]
fn test_refs_unreadable_file_fails() {
    let env = TestEnv::builder().build();

    let result = env.run(&["refs", "App/Missing.tt"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Missing.tt"), "{}", result.stderr);
}
