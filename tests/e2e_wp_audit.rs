use std::process::Command;
use tempfile::tempdir;

#[test]
fn e2e_scan_reports_issues_as_json() {
    let temp = tempdir().unwrap();
    let plugin_dir = temp.path().join("demo-plugin");
    std::fs::create_dir(&plugin_dir).unwrap();
    std::fs::write(
        plugin_dir.join("demo-plugin.php"),
        "<?php\necho $_GET[\"name\"];\nget_link(1);\n",
    )
    .unwrap();
    std::fs::write(plugin_dir.join("style.css"), "body { color: red }").unwrap();

    let bin = env!("CARGO_BIN_EXE_wp-audit");
    let out = Command::new(bin)
        .arg(&plugin_dir)
        .output()
        .expect("spawn wp-audit");
    assert!(out.status.success());

    let issues: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let issues = issues.as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert!(issues
        .iter()
        .any(|i| i["category"] == "Security" && i["severity"] == "Critical"));
    assert!(issues
        .iter()
        .any(|i| i["category"] == "Best Practices" && i["severity"] == "Warning"));
    assert!(issues.iter().all(|i| i["pluginName"] == "demo-plugin"));
    assert!(issues.iter().all(|i| i["source"] == "Local Scanner"));
}

#[test]
fn e2e_custom_deprecated_list_replaces_builtin() {
    let temp = tempdir().unwrap();
    let plugin_dir = temp.path().join("legacy");
    std::fs::create_dir(&plugin_dir).unwrap();
    std::fs::write(
        plugin_dir.join("init.php"),
        "<?php\nmy_legacy_helper();\nget_link(1);\n",
    )
    .unwrap();
    let list = temp.path().join("deprecated.txt");
    std::fs::write(&list, "my_legacy_helper\n").unwrap();

    let bin = env!("CARGO_BIN_EXE_wp-audit");
    let out = Command::new(bin)
        .arg(&plugin_dir)
        .arg("--deprecated-list")
        .arg(&list)
        .output()
        .expect("spawn wp-audit");
    assert!(out.status.success());

    let issues: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let issues = issues.as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert!(issues[0]["description"]
        .as_str()
        .unwrap()
        .contains("my_legacy_helper()"));
}

#[test]
fn e2e_missing_directory_fails_with_nonzero_exit() {
    let bin = env!("CARGO_BIN_EXE_wp-audit");
    let out = Command::new(bin)
        .arg("/nonexistent/plugin-dir")
        .output()
        .expect("spawn wp-audit");
    assert!(!out.status.success());
}
