use std::path::Path;

use fagen::{
    config::{
        ProjectConfig,
        json::JsonConfigStore,
        setup::ProjectProbe,
        store::{ConfigLoadError, ConfigStore},
    },
    definition::DefinitionSet,
    fs::real::RealFileSystem,
    generate::{generate_module, write_module},
    registry::IconRegistry,
};
use pretty_assertions::assert_eq;
use test_common::{
    TestProject, quasar_config, read_project_config, test_config, write_definitions_file,
    write_raw_config_file,
};

#[test]
fn test_save_then_load_round_trip() {
    let project = TestProject::new();
    let store = JsonConfigStore::new(RealFileSystem, project.path());
    let config = test_config();

    store.save(&config).unwrap();

    assert_eq!(store.load().unwrap(), config);
    assert!(!project.path().join("fa.config.json.tmp").exists());
}

#[test]
fn test_load_reports_missing_and_malformed_configs() {
    let project = TestProject::new();
    let store = JsonConfigStore::new(RealFileSystem, project.path());

    assert!(matches!(store.load(), Err(ConfigLoadError::NotFound { .. })));

    write_raw_config_file(project.path(), "{\"version\": 5");
    assert!(matches!(store.load(), Err(ConfigLoadError::Parse { .. })));
}

#[test]
fn test_registry_changes_survive_a_save() {
    let project = TestProject::with_config(&test_config());
    let store = JsonConfigStore::new(RealFileSystem, project.path());

    let mut config = store.load().unwrap();
    let outcome = IconRegistry::new(&mut config).add_icons(&["fad-coffee"]);
    assert!(outcome.has_changes());
    store.save(&config).unwrap();

    let saved = read_project_config(project.path());
    assert!(saved.icons().iter().any(|id| id.to_string() == "fad:coffee"));
}

#[test]
fn test_generated_module_lands_in_project() {
    let project = TestProject::with_config(&quasar_config());
    let store = JsonConfigStore::new(RealFileSystem, project.path());
    let config = store.load().unwrap();

    let written = write_module(&RealFileSystem, project.path(), &generate_module(&config)).unwrap();

    assert_eq!(written, project.path().join("src/boot/fa.ts"));
    assert!(project.read("src/boot/fa.ts").contains("library.add(fasHome)"));
}

#[test]
fn test_probe_detects_project_files() {
    let project = TestProject::new();
    project.touch("tsconfig.json");
    project.touch("quasar.conf.js");

    let probe = ProjectProbe::detect(&RealFileSystem, project.path());

    assert!(probe.has_tsconfig);
    assert!(probe.is_quasar);
}

#[test]
fn test_definitions_load_from_disk() {
    let project = TestProject::new();
    let path = write_definitions_file(project.path());

    let definitions = DefinitionSet::load(&RealFileSystem, &path).unwrap();

    assert_eq!(definitions.len(), 5);
    assert!(DefinitionSet::load(&RealFileSystem, Path::new("/no/such/file.json")).is_err());
}

#[test]
fn test_initial_config_serializes_in_file_format() {
    let project = TestProject::new();
    let store = JsonConfigStore::new(RealFileSystem, project.path());
    let config = ProjectConfig::initial(
        fagen::config::FontAwesomeVersion::V5Pro,
        fagen::icon::Style::Duotone,
    );

    store.save(&config).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&project.read("fa.config.json")).unwrap();

    assert_eq!(raw["version"], "svg-fontawesome-v5-pro");
    assert_eq!(raw["default"], "fad");
    assert_eq!(raw["isQuasar"], false);
    assert_eq!(raw["aliases"]["close"], "fa:times");
}
