//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Module structure scaffolding",
    long_about = "modgen creates the directory structure, module.xml and \
                  registration.php of a new Vendor_Module.",
    after_help = "EXAMPLES:\n\
        \x20 modgen module:structure:create Acme_Catalog\n\
        \x20 modgen create Acme_Catalog --app-dir /srv/shop/app\n\
        \x20 modgen create Acme_Catalog --dry-run\n\
        \x20 modgen completions bash > /usr/share/bash-completion/completions/modgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a module's basic structure.
    #[command(
        name = "module:structure:create",
        visible_alias = "create",
        about = "Creating module basic structure",
        long_about = "Creating module basic structure. Required argument 'module_name' \
                      which stands for VendorName_ModuleName separated using underscore.",
        after_help = "EXAMPLES:\n\
            \x20 modgen module:structure:create Acme_Catalog\n\
            \x20 modgen create Acme_Catalog --app-dir ./app\n\
            \x20 modgen create Acme_Catalog --templates ./my-templates"
    )]
    Create(CreateArgs),

    /// Initialise a modgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modgen init           # default location\n\
            \x20 modgen init --local   # .modgen.toml in CWD\n\
            \x20 modgen init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the modgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen config get paths.app_dir\n\
            \x20 modgen config list\n\
            \x20 modgen config path"
    )]
    Config(ConfigCommands),
}

// ── module:structure:create ───────────────────────────────────────────────────

/// Arguments for `modgen module:structure:create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// `VendorName_ModuleName`.
    #[arg(value_name = "MODULE_NAME", help = "Name for generated module")]
    pub module_name: String,

    /// Application root that receives `code/<Vendor>/<Module>`.
    #[arg(
        long = "app-dir",
        value_name = "DIR",
        env = "MODGEN_APP_DIR",
        help = "Application directory (default: discovered from CWD)"
    )]
    pub app_dir: Option<PathBuf>,

    /// Load templates from a directory instead of the built-in set.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Directory holding module.xml.template and registration.php.template"
    )]
    pub templates: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.modgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.app_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
