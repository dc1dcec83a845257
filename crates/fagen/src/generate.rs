//! Generation of the icon module imported by the host application
//!
//! The module imports every registered icon from its style's package, registers them with
//! the rendering library and exports the project's aliases. Quasar projects get the module
//! wrapped in a boot file that installs the render hook.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    config::ProjectConfig,
    fs::{FileSystem, FileSystemError},
    icon::ImportSpec,
};

const CORE_IMPORT: &str = r#"import {library} from "@fortawesome/fontawesome-svg-core""#;

const QUASAR_HEADER: &str = "// required
import {boot} from 'quasar/wrappers'
import {useFa} from '@snickbit/fa-gen'
";

const QUASAR_BOOT: &str = "
/**
 * @param {Object} BootFileParams
 */
export default boot(async ({app}) => {
\tawait useFa(app, icon_aliases)
})
";

/// A generated source file, with its path relative to the project directory
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub path: PathBuf,
    pub contents: String,
}

/// Where the module goes when the config does not say
///
#[must_use]
pub fn default_output_path(config: &ProjectConfig) -> PathBuf {
    let extension = if config.typescript() { "ts" } else { "js" };
    let dir = if config.is_quasar() { "src/boot" } else { "src" };

    Path::new(dir).join(format!("fa.{extension}"))
}

/// Render the icon module for `config`.
///
#[must_use]
pub fn generate_module(config: &ProjectConfig) -> GeneratedModule {
    let mut seen = HashSet::new();
    let imports: Vec<ImportSpec> = config
        .icons()
        .iter()
        .map(|id| ImportSpec::for_icon(id, config.default_style()))
        .filter(|spec| seen.insert(spec.local.clone()))
        .collect();

    let mut contents = String::new();
    if config.is_quasar() {
        contents.push_str(QUASAR_HEADER);
    }
    contents.push_str(CORE_IMPORT);
    contents.push('\n');

    for spec in &imports {
        contents.push_str(&format!("{spec}\n"));
    }

    let locals: Vec<&str> = imports.iter().map(|spec| spec.local.as_str()).collect();
    contents.push_str(&format!("\nlibrary.add({})\n", locals.join(", ")));

    let aliases = serde_json::to_string_pretty(&config.effective_aliases())
        .unwrap_or_else(|_| String::from("{}"));
    contents.push_str(&format!("\nexport const icon_aliases = {aliases}\n"));

    if config.is_quasar() {
        contents.push_str(QUASAR_BOOT);
    }

    GeneratedModule {
        path: config
            .output()
            .cloned()
            .unwrap_or_else(|| default_output_path(config)),
        contents,
    }
}

/// Write `module` below `project_dir`, returning the path written.
///
/// # Errors
///
/// Returns [`FileSystemError`] if the file cannot be written.
pub fn write_module(
    fs: &impl FileSystem,
    project_dir: &Path,
    module: &GeneratedModule,
) -> Result<PathBuf, FileSystemError> {
    let path = project_dir.join(&module.path);
    fs.write_file(&path, module.contents.as_bytes())?;

    info!(path = %path.display(), "wrote icon module");
    Ok(path)
}
