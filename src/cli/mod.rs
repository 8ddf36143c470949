pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, ScanArgs};
pub use handlers::handle_scan;
pub use output::{OutputFormat, OutputFormatter, ScanReport};
