use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fagen::{config::FontAwesomeVersion, icon::Style};

/// fa-gen - Font Awesome icon manager
///
/// Keeps the icons and aliases of a project in `fa.config.json` and generates the module
/// that registers them with the Font Awesome library.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ClapCli {
    /// Project directory (defaults to the current directory)
    ///
    #[clap(long, short = 'C', global = true)]
    pub(crate) project_dir: Option<PathBuf>,

    /// Override the default style for `list`, `resolve` and `render` (fas, far, fal, fat, fad, fab)
    ///
    #[clap(long, short = 's', global = true)]
    pub(crate) default_style: Option<Style>,

    /// Show detailed output
    ///
    #[clap(long, short = 'v', global = true, default_value_t = false)]
    pub(crate) verbose: bool,

    /// Disable colored output
    ///
    #[clap(long, global = true, default_value_t = false)]
    pub(crate) no_color: bool,

    #[clap(subcommand)]
    pub(crate) command: ClapCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ClapCommands {
    /// Create `fa.config.json` for this project
    Init {
        /// Font Awesome version (v5 or v6)
        #[clap(long = "fa-version")]
        fa_version: Option<FontAwesomeVersion>,

        /// Default style (fas, far, fal, fat, fad)
        #[clap(long)]
        style: Option<Style>,

        /// Generate a TypeScript module
        #[clap(long, default_value_t = false)]
        typescript: bool,

        /// Replace an existing config
        #[clap(long, default_value_t = false)]
        force: bool,
    },

    /// Add icons, or an alias for one icon
    Add {
        /// Icons to add, e.g. `home`, `fas:home` or `fad-coffee`
        #[clap(required = true)]
        icons: Vec<String>,

        /// Add this alias for the icon instead
        #[clap(long, short = 'a')]
        alias: Option<String>,
    },

    /// Remove icons (and their aliases), or aliases
    #[clap(alias = "rm")]
    Remove {
        /// Icons or aliases to remove (aliases must be combined with `--alias`)
        #[clap(required = true)]
        subjects: Vec<String>,

        /// Remove aliases instead of icons
        #[clap(long, short = 'a', default_value_t = false)]
        alias: bool,
    },

    /// List registered icons and aliases
    List,

    /// Show what identifiers resolve to
    Resolve {
        #[clap(required = true)]
        icons: Vec<String>,
    },

    /// Run the render hook against a definitions file
    Render {
        #[clap(required = true)]
        icons: Vec<String>,

        /// JSON document of icon definitions, keyed by style prefix
        #[clap(long, short = 'd')]
        definitions: PathBuf,
    },

    /// Write the icon module
    Generate,

    /// Configuration management commands
    Config(ConfigCommands),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ConfigCommands {
    #[clap(subcommand)]
    pub(crate) command: ConfigSubcommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ConfigSubcommands {
    /// Validate `fa.config.json`
    Validate,

    /// Print the config as stored
    Show,
}
