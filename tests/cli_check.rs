mod common;

use common::*;

#[test]
fn test_check_reports_without_running_or_recording() {
    let env = TestEnv::builder().build();
    env.enable(MODEL_TT);

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stdout.contains("regenerate") && result.stdout.contains("Model.tt"),
        "{}",
        result.stdout
    );
    assert!(
        result.stdout.contains("(new session or configuration)"),
        "{}",
        result.stdout
    );
    assert!(result.stdout.contains("1 evaluated, 1 to regenerate, 0 up to date"));
    assert!(!env.exists(MODEL_CS));
    assert!(!env.read_attributes().contains("LastBuiltOnSolution"));
}

#[test]
fn test_check_lists_disabled_items_as_skipped() {
    let env = TestEnv::builder().build();

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("skip"), "{}", result.stdout);
    assert!(result.stdout.contains("(run on build disabled)"), "{}", result.stdout);
    assert!(!env.exists(ATTRIBUTE_FILE));
}

#[test]
fn test_check_json_marks_verdicts() {
    let env = TestEnv::builder().build();
    env.enable(MODEL_TT);

    let result = env.run(&["--json", "check"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_lines();
    let evaluated: Vec<_> = events
        .iter()
        .filter(|e| e["event"] == "item_evaluated")
        .collect();
    assert_eq!(evaluated.len(), 1);
    assert_eq!(evaluated[0]["verdict"], "regenerate");
    assert!(
        !events.iter().any(|e| e["event"] == "item_generated"),
        "check must not run generators"
    );
}

#[test]
#[cfg(unix)]
fn test_check_after_build_reports_up_to_date() {
    let env = TestEnv::builder().build();
    env.enable(MODEL_TT);
    assert!(env.run(&["build"]).success);
    env.age(MODEL_TT, 3600);

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("(up to date)"), "{}", result.stdout);
}

#[test]
#[cfg(unix)]
fn test_once_per_session_mode_skips_matching_solution() {
    let env = TestEnv::builder().build();
    env.enable(MODEL_TT);
    assert!(env.run(&["build"]).success);
    env.write_file(MODEL_CS, "");

    let result = env.run_with_env(&["check"], &[("CTOB_SESSION_MODE", "once-per-session")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stdout.contains("(already built this session)"),
        "{}",
        result.stdout
    );
}

#[test]
fn test_project_scope_limits_walk() {
    let env = TestEnv::builder()
        .with_manifest(
            r#"solution = "App.sln"

[[projects]]
name = "App"
file = "App/App.csproj"

[[projects.items]]
path = "Model.tt"
custom_tool = "Copy"

[[projects]]
name = "Lib"
file = "Lib/Lib.csproj"

[[projects.items]]
path = "Other.tt"
custom_tool = "Copy"
"#,
        )
        .with_file("Lib/Lib.csproj", "<Project />\n")
        .with_file("Lib/Other.tt", "// other\n")
        .build();

    let result = env.run(&["check", "--scope", "project", "--project", "Lib"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Other.tt"), "{}", result.stdout);
    assert!(!result.stdout.contains("Model.tt"), "{}", result.stdout);
}

#[test]
fn test_unknown_project_falls_back_to_solution() {
    let env = TestEnv::builder().build();

    let result = env.run(&["check", "--scope", "project", "--project", "Missing"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Model.tt"), "{}", result.stdout);
}

#[test]
fn test_unknown_config_key_is_reported() {
    let env = TestEnv::builder()
        .with_project_config("[walk]\nmdoe = \"legacy\"\n")
        .build();

    let result = env.run(&["check"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("unknown config key 'mdoe'"),
        "{}",
        result.stderr
    );
}
