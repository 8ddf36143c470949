//! Command handlers wiring the scanner to the terminal

use std::path::PathBuf;
use tracing::error;

use crate::cli::commands::{OutputFormatArg, ScanArgs};
use crate::cli::output::{OutputFormat, OutputFormatter, ScanReport};
use crate::config::ScanConfig;
use crate::fs::RealFileSystem;
use crate::registrar::RecordingRegistrar;
use crate::scanner::Scanner;

/// Run the `scan` subcommand. Returns the process exit code.
pub fn handle_scan(args: &ScanArgs) -> i32 {
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let config = ScanConfig {
        root_name: args.name.clone(),
        sort_entries: !args.no_sort,
    };

    let fs = RealFileSystem::new();
    let scanner = Scanner::with_config(&fs, config);
    let mut registrar = RecordingRegistrar::new();

    let summary = match scanner.scan(&root, &mut registrar) {
        Ok(summary) => summary,
        Err(e) => {
            error!(root = %root.display(), error = %e, "Scan failed");
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let report = ScanReport {
        root_name: registrar.root_name().unwrap_or_default().to_string(),
        directives: registrar.into_directives(),
        summary,
    };

    let format = match args.format {
        OutputFormatArg::Human => OutputFormat::Human,
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Settings => OutputFormat::Settings,
    };

    match OutputFormatter::new(format).format(&report) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
