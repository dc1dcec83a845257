mod common;

use common::fa_gen;
use fagen::{
    config::FontAwesomeVersion,
    icon::{IconId, Style},
};
use predicates::prelude::*;
use test_common::{
    ProjectConfigBuilder, TestProject, quasar_config, read_project_config, test_config,
    write_config_file, write_raw_config_file,
};

#[test]
fn test_init_with_presets() {
    let project = TestProject::new();

    fa_gen(project.path(), &["init", "--fa-version", "v5", "--style", "fal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Generated"));

    let config = read_project_config(project.path());
    assert_eq!(config.version(), FontAwesomeVersion::V5Pro);
    assert_eq!(config.default_style(), Style::Light);
    assert!(!config.typescript());
    assert!(config.icons().contains(&IconId::new(Style::Light, "bars")));
    assert!(config.aliases().contains("close"));

    let module = project.read("src/fa.js");
    assert!(module.contains("falBars"));
}

#[test]
fn test_init_detects_quasar_typescript_project() {
    let project = TestProject::new();
    project.touch("tsconfig.json");
    project.touch("quasar.config.js");

    fa_gen(
        project.path(),
        &["init", "--fa-version", "v6", "--style", "fad", "--typescript"],
    )
    .assert()
    .success();

    let config = read_project_config(project.path());
    assert!(config.is_quasar());
    assert!(config.typescript());
    assert!(project.read("src/boot/fa.ts").contains("await useFa(app, icon_aliases)"));
}

#[test]
fn test_init_without_answers_fails() {
    let project = TestProject::new();

    fa_gen(project.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No FontAwesome version selected"));

    assert!(!project.config_path().exists());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let project = TestProject::with_config(&test_config());
    let before = project.read("fa.config.json");

    fa_gen(project.path(), &["init", "--fa-version", "v6", "--style", "far"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("--force"));

    assert_eq!(project.read("fa.config.json"), before);
}

#[test]
fn test_init_force_replaces_config() {
    let project = TestProject::with_config(&test_config());

    fa_gen(
        project.path(),
        &["init", "--fa-version", "v6", "--style", "far", "--force"],
    )
    .assert()
    .success();

    assert_eq!(read_project_config(project.path()).default_style(), Style::Regular);
}

#[test]
fn test_generate_quasar_module() {
    let project = TestProject::with_config(&quasar_config());

    fa_gen(project.path(), &["generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/boot/fa.ts"));

    let module = project.read("src/boot/fa.ts");
    assert!(module.starts_with("// required\n"));
    assert!(module.contains("library.add(fasHome)"));
}

#[test]
fn test_generate_uses_output_override() {
    let config = ProjectConfigBuilder::default()
        .icon("far:bell")
        .output("assets/icons.js")
        .build();
    let project = TestProject::new();
    write_config_file(project.path(), &config);

    fa_gen(project.path(), &["generate"]).assert().success();

    assert!(project.read("assets/icons.js").contains("library.add(farBell)"));
}

#[test]
fn test_generate_empty_project_warns() {
    let project = TestProject::with_config(&ProjectConfigBuilder::default().build());

    fa_gen(project.path(), &["generate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No icons registered"));
}

#[test]
fn test_config_validate_reports_errors() {
    let config = ProjectConfigBuilder::default()
        .version(FontAwesomeVersion::V5Pro)
        .default_style(Style::Thin)
        .icon("fas:home")
        .build();
    let project = TestProject::with_config(&config);

    fa_gen(project.path(), &["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed."))
        .stderr(predicate::str::contains("availability"));
}

#[test]
fn test_config_validate_warnings_pass() {
    let config = ProjectConfigBuilder::default()
        .icon("fas:home")
        .alias("drink", "fad:coffee")
        .build();
    let project = TestProject::with_config(&config);

    fa_gen(project.path(), &["config", "validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Run `fa-gen add fad:coffee`"))
        .stdout(predicate::str::contains("with warnings"));
}

#[test]
fn test_config_show_prints_stored_config() {
    let project = TestProject::new();
    write_raw_config_file(
        project.path(),
        r#"{"version": "svg-fontawesome-v6-pro", "default": "far", "icons": ["far:bell"], "aliases": {}}"#,
    );

    let output = fa_gen(project.path(), &["config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let shown: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(shown["default"], "far");
    assert_eq!(shown["icons"][0], "far:bell");
}
