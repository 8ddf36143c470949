use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Automatic Gradle build and module discovery
#[derive(Parser, Debug)]
#[command(
    name = "autoinclude",
    about = "Automatic Gradle build and module discovery for multi-project directory trees",
    version,
    long_about = "autoinclude walks a directory tree looking for Gradle marker files: a \
                  directory with settings.gradle[.kts] is registered as a standalone linked \
                  build, a directory with build.gradle[.kts] as an included module. Nothing \
                  beneath a discovered unit is scanned, and hidden or build-output \
                  directories are skipped entirely."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Scan a directory tree for builds and modules",
        long_about = "Walks the tree under PATH and reports every discovered build unit.\n\n\
                      Examples:\n  \
                      autoinclude scan\n  \
                      autoinclude scan /path/to/monorepo\n  \
                      autoinclude scan --format settings > settings.gradle\n  \
                      autoinclude scan --format json --name my-root"
    )]
    Scan(ScanArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[arg(
        value_name = "PATH",
        help = "Root of the tree to scan (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'n',
        long,
        value_name = "NAME",
        help = "Root project name (defaults to the root directory's name)"
    )]
    pub name: Option<String>,

    #[arg(
        long,
        help = "Process directory entries in raw filesystem order instead of sorted"
    )]
    pub no_sort: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable listing
    Human,
    /// Machine-readable JSON report
    Json,
    /// Generated Gradle settings script
    Settings,
}
