use super::helpers::{stderr, stdout, TestProject};

#[test]
fn test_missing_policy_is_fatal() {
    let project = TestProject::new();
    project.write_manifest(&["lodash"], &[]);
    project.install("lodash", Some("MIT"));

    let output = project.run_auditor(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Could not read config from"));
}

#[test]
fn test_malformed_policy_is_fatal() {
    let project = TestProject::new();
    project.write_manifest(&[], &[]);
    project.write_policy("allowed-licenses.json", "{ \"whitelist\": [\"MIT\" ");

    let output = project.run_auditor(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("allowed-licenses.json"));
}

#[test]
fn test_missing_manifest_is_fatal() {
    let project = TestProject::new();
    project.write_policy("allowed-licenses.json", r#"{ "whitelist": ["MIT"] }"#);

    let output = project.run_auditor(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("package.json"));
}

#[test]
fn test_deep_mode_without_node_modules() {
    let project = TestProject::new();
    project.write_manifest(&[], &[]);
    project.write_policy("allowed-licenses.json", "{}");

    let output = project.run_auditor(&["--deep"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("License count:\n{}"));
}

#[test]
fn test_deep_mode_still_requires_manifest() {
    let project = TestProject::new();
    project.write_policy("allowed-licenses.json", r#"{ "whitelist": ["MIT"] }"#);
    project.install("lodash", Some("MIT"));

    let output = project.run_auditor(&["--deep"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("package.json"));
}

#[test]
fn test_oddly_shaped_manifest_is_not_fatal() {
    let project = TestProject::new();
    std::fs::write(
        project.root().join("package.json"),
        r#"{ "dependencies": [], "devDependencies": "none" }"#,
    )
    .unwrap();
    project.write_policy("allowed-licenses.json", r#"{ "whitelist": ["MIT"] }"#);

    let output = project.run_auditor(&[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("License count:\n{}"));
}

#[test]
fn test_malformed_exceptions_are_ignored() {
    let project = TestProject::new();
    project.write_manifest(&["foo"], &[]);
    project.write_policy(
        "allowed-licenses.json",
        r#"{
            "whitelist": "MIT",
            "exceptions": [{ "package": "foo" }, { "package": "foo", "license": "GPL-3.0" }]
        }"#,
    );
    project.install("foo", Some("GPL-3.0"));

    let output = project.run_auditor(&[]);
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_project_dir_flag() {
    let project = TestProject::new();
    let app = project.root().join("app");
    std::fs::create_dir_all(app.join("node_modules/left-pad")).unwrap();
    std::fs::write(app.join("package.json"), r#"{ "dependencies": { "left-pad": "1" } }"#).unwrap();
    std::fs::write(app.join("node_modules/left-pad/package.json"), r#"{ "license": "WTFPL" }"#)
        .unwrap();
    std::fs::write(app.join("allowed-licenses.json"), r#"{ "whitelist": ["WTFPL"] }"#).unwrap();

    let output = project.run_auditor(&["--project-dir", "app"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("\"WTFPL\": 1"));
}
