pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod remove;
pub(crate) mod render;
pub(crate) mod resolve;

use std::path::{Path, PathBuf};

use fagen::{
    config::{
        ApplyToConfig, ProjectConfig,
        json::JsonConfigStore,
        setup::{ProjectProbe, run_setup},
        store::{ConfigLoadError, ConfigStore},
    },
    fs::{FileSystem, FileSystemError},
    generate::{generate_module, write_module},
};
use tracing::debug;

use crate::{
    cli::{ClapCli, ClapCommands, ConfigSubcommands},
    setup_wizard::TerminalPrompter,
    terminal_progress_reporter::TerminalProgressReporter,
};

/// The project a command works on: its directory and config store
///
pub(crate) struct Project<F: FileSystem + Clone> {
    fs: F,
    dir: PathBuf,
    store: JsonConfigStore<F>,
}

impl<F: FileSystem + Clone> Project<F> {
    pub(crate) fn new(fs: F, dir: PathBuf) -> Self {
        let store = JsonConfigStore::new(fs.clone(), dir.clone());
        Self { fs, dir, store }
    }

    pub(crate) fn fs(&self) -> &F {
        &self.fs
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn store(&self) -> &JsonConfigStore<F> {
        &self.store
    }

    /// Expand a leading `~` in `path`, then anchor it in the project directory if still
    /// relative.
    ///
    pub(crate) fn resolve_path(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        let expanded = if path.starts_with("~") {
            self.fs.expand_path(path)?
        } else {
            path.to_path_buf()
        };

        if expanded.is_absolute() {
            Ok(expanded)
        } else {
            Ok(self.dir.join(expanded))
        }
    }

    pub(crate) fn probe(&self) -> ProjectProbe {
        ProjectProbe::detect(&self.fs, &self.dir)
    }

    /// Load the config, running setup when there is none and someone is at the terminal.
    ///
    pub(crate) fn load_config(&self, reporter: TerminalProgressReporter) -> Option<ProjectConfig> {
        match self.store.load() {
            Ok(config) => Some(config),
            Err(ConfigLoadError::NotFound { searched }) if console::user_attended() => {
                reporter.report_info(format!(
                    "No config found at {}, starting setup",
                    searched.display()
                ));
                let prompter = TerminalPrompter {
                    interactive: true,
                    ..TerminalPrompter::default()
                };
                match run_setup(&prompter, self.probe()) {
                    Ok(config) => self.save(&config, reporter).then_some(config),
                    Err(e) => {
                        reporter.report_error(e);
                        None
                    }
                }
            }
            Err(e @ ConfigLoadError::NotFound { .. }) => {
                reporter.report_error(e);
                reporter.report_suggestion("Run `fa-gen init` to create one");
                None
            }
            Err(e) => {
                reporter.report_error(e);
                None
            }
        }
    }

    pub(crate) fn save(&self, config: &ProjectConfig, reporter: TerminalProgressReporter) -> bool {
        match self.store.save(config) {
            Ok(()) => true,
            Err(e) => {
                reporter.report_error(format!("Unable to save config: {e}"));
                false
            }
        }
    }

    /// Write the icon module for `config`, returning the exit code.
    ///
    pub(crate) fn generate(&self, config: &ProjectConfig, reporter: TerminalProgressReporter) -> i32 {
        let module = generate_module(config);
        match write_module(&self.fs, &self.dir, &module) {
            Ok(path) => {
                reporter.report_success(format!("Generated {}", path.display()));
                0
            }
            Err(e) => {
                reporter.report_error(format!(
                    "Unable to write {}: {e}",
                    module.path.display()
                ));
                1
            }
        }
    }

    /// Save a changed config and regenerate the module from it.
    ///
    pub(crate) fn save_and_generate(
        &self,
        config: &ProjectConfig,
        reporter: TerminalProgressReporter,
    ) -> i32 {
        if !self.save(config, reporter) {
            return 1;
        }
        self.generate(config, reporter)
    }
}

fn with_config<F: FileSystem + Clone>(
    project: &Project<F>,
    reporter: TerminalProgressReporter,
    handler: impl FnOnce(ProjectConfig) -> i32,
) -> i32 {
    project.load_config(reporter).map_or(1, handler)
}

/// Primary command dispatcher that routes to the appropriate command handler
pub(crate) fn dispatch_command<F: FileSystem + Clone>(
    args: &ClapCli,
    project: &Project<F>,
    reporter: TerminalProgressReporter,
) -> i32 {
    debug!("Dispatching command: {:?}", args.command);

    match &args.command {
        ClapCommands::Init {
            fa_version,
            style,
            typescript,
            force,
        } => {
            let prompter = TerminalPrompter {
                version: *fa_version,
                style: *style,
                typescript: *typescript,
                interactive: console::user_attended(),
            };
            init::handle_init(project, &prompter, *force, reporter)
        }
        ClapCommands::Add { icons, alias } => with_config(project, reporter, |config| {
            match alias {
                Some(alias) => add::handle_add_alias(project, config, alias, icons, reporter),
                None => add::handle_add(project, config, icons, reporter),
            }
        }),
        ClapCommands::Remove { subjects, alias } => with_config(project, reporter, |config| {
            remove::handle_remove(project, config, subjects, *alias, reporter)
        }),
        ClapCommands::List => with_config(project, reporter, |config| {
            list::handle_list(&args.apply_to_config(config), reporter)
        }),
        ClapCommands::Resolve { icons } => with_config(project, reporter, |config| {
            resolve::handle_resolve(&args.apply_to_config(config), icons, reporter)
        }),
        ClapCommands::Render { icons, definitions } => with_config(project, reporter, |config| {
            render::handle_render(
                project,
                &args.apply_to_config(config),
                definitions,
                icons,
                reporter,
            )
        }),
        ClapCommands::Generate => with_config(project, reporter, |config| {
            generate::handle_generate(project, &config, reporter)
        }),
        ClapCommands::Config(config_cmd) => with_config(project, reporter, |config| {
            match config_cmd.command {
                ConfigSubcommands::Validate => config::handle_validate(&config, reporter),
                ConfigSubcommands::Show => config::handle_show(&config, reporter),
            }
        }),
    }
}
