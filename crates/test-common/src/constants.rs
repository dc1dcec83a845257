//! Values shared by fixtures and the tests using them.

pub const CONFIG_FILE: &str = "fa.config.json";
pub const DEFINITIONS_FILE: &str = "definitions.json";

/// A small definitions document: `home` only in `fas`, `bell` in `fas` and `far`, a
/// duotone `coffee` and a brands `github`.
pub const SAMPLE_DEFINITIONS: &str = r#"{
  "fas": {
    "home": [576, 512, [], "f015", "M575.8 255.5z"],
    "bell": [448, 512, [], "f0f3", "M224 0z"]
  },
  "far": {
    "bell": [448, 512, [], "f0f3", "M256 32z"]
  },
  "fad": {
    "coffee": [512, 512, [61761, 61762], "f0f4", ["M1", "M2"]]
  },
  "fab": {
    "github": [496, 512, [], "f09b", "M165.9 397.4z"]
  }
}"#;

pub const SECONDARY_DIRECTIVE: &str = "fill: var(--fa-secondary-color, currentColor);opacity: 0.4;opacity: var(--fa-secondary-opacity, 0.4);";
pub const PRIMARY_DIRECTIVE: &str =
    "fill: var(--fa-primary-color, currentColor);opacity: 1;opacity: var(--fa-primary-opacity, 1);";
