//! Output formatting for scan results
//!
//! Three formats: a human-readable listing, a JSON report, and a generated
//! Gradle settings script that replays the discovered directives as
//! `includeBuild`/`include` statements.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

use crate::registrar::LinkDirective;
use crate::scanner::ScanSummary;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
    /// Gradle settings script
    Settings,
}

/// Everything one scan produced, in emission order
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub root_name: String,
    pub directives: Vec<LinkDirective>,
    pub summary: ScanSummary,
}

/// Output formatter for scan reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(self.format_human(report)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Settings => Ok(self.format_settings(report)),
        }
    }

    fn format_json(&self, report: &ScanReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize scan report")
    }

    fn format_human(&self, report: &ScanReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Root project: {}", report.root_name);
        let _ = writeln!(out);

        if report.directives.is_empty() {
            let _ = writeln!(out, "No builds or modules found.");
        } else {
            for directive in &report.directives {
                let _ = writeln!(out, "  {}", directive);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} builds, {} modules ({} directories visited in {} ms)",
            report.summary.builds_linked,
            report.summary.modules_linked,
            report.summary.directories_visited,
            report.summary.scan_time_ms
        );

        out
    }

    fn format_settings(&self, report: &ScanReport) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "rootProject.name = \"{}\"", report.root_name);

        for directive in &report.directives {
            match directive {
                LinkDirective::ExternalBuild { path } => {
                    let _ = writeln!(out, "includeBuild(\"{}\")", path);
                }
                LinkDirective::Module { name, path } => {
                    let _ = writeln!(out, "include(\":{}\")", name);
                    // projectDir only needs remapping when the module is not
                    // a direct child named after itself
                    if path != name {
                        let _ = writeln!(
                            out,
                            "project(\":{}\").projectDir = file(\"{}\")",
                            name, path
                        );
                    }
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScanReport {
        ScanReport {
            root_name: "demo".to_string(),
            directives: vec![
                LinkDirective::ExternalBuild {
                    path: "platform/toolchain".to_string(),
                },
                LinkDirective::Module {
                    name: "api".to_string(),
                    path: "services/api".to_string(),
                },
                LinkDirective::Module {
                    name: "app".to_string(),
                    path: "app".to_string(),
                },
            ],
            summary: ScanSummary {
                directories_visited: 7,
                builds_linked: 1,
                modules_linked: 2,
                scan_time_ms: 3,
            },
        }
    }

    #[test]
    fn test_settings_output() {
        let formatter = OutputFormatter::new(OutputFormat::Settings);
        let output = formatter.format(&sample_report()).unwrap();

        assert_eq!(
            output,
            "rootProject.name = \"demo\"\n\
             includeBuild(\"platform/toolchain\")\n\
             include(\":api\")\n\
             project(\":api\").projectDir = file(\"services/api\")\n\
             include(\":app\")\n"
        );
    }

    #[test]
    fn test_json_output_is_valid() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&sample_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["root_name"], "demo");
        assert_eq!(value["directives"].as_array().unwrap().len(), 3);
        assert_eq!(value["summary"]["builds_linked"], 1);
    }

    #[test]
    fn test_human_output_mentions_everything() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format(&sample_report()).unwrap();

        assert!(output.contains("Root project: demo"));
        assert!(output.contains("platform/toolchain"));
        assert!(output.contains("services/api"));
        assert!(output.contains("1 builds, 2 modules"));
    }

    #[test]
    fn test_human_output_empty_scan() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let report = ScanReport {
            root_name: "empty".to_string(),
            directives: vec![],
            summary: ScanSummary::default(),
        };
        let output = formatter.format(&report).unwrap();

        assert!(output.contains("No builds or modules found."));
    }
}
