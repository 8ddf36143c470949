//! Build-graph registrar boundary
//!
//! The scanner only decides *what* to link and *where*; acting on a
//! discovered unit is the host's job, reached through [`BuildGraphRegistrar`].
//! [`RecordingRegistrar`] captures the emitted directives for the CLI output
//! formats and for tests.

use serde::Serialize;
use std::fmt;

/// Host collaborator that receives discovered build units.
///
/// Called in traversal order: `set_root_name` exactly once before any
/// include, then one include call per classified directory.
pub trait BuildGraphRegistrar {
    /// Declare the display name of the overall build graph
    fn set_root_name(&mut self, name: &str);

    /// Register a directory as a standalone linked build
    fn include_build(&mut self, relative_path: &str);

    /// Register a directory as an internal module with the given display name
    fn include_module(&mut self, name: &str, relative_path: &str);
}

/// One emitted registration, as surfaced to machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkDirective {
    ExternalBuild { path: String },
    Module { name: String, path: String },
}

impl LinkDirective {
    pub fn path(&self) -> &str {
        match self {
            LinkDirective::ExternalBuild { path } => path,
            LinkDirective::Module { path, .. } => path,
        }
    }
}

impl fmt::Display for LinkDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkDirective::ExternalBuild { path } => write!(f, "external build  {}", path),
            LinkDirective::Module { name, path } => write!(f, "module {:<16} {}", name, path),
        }
    }
}

/// Registrar that records every call in order
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    root_name: Option<String>,
    directives: Vec<LinkDirective>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_name(&self) -> Option<&str> {
        self.root_name.as_deref()
    }

    pub fn directives(&self) -> &[LinkDirective] {
        &self.directives
    }

    pub fn into_directives(self) -> Vec<LinkDirective> {
        self.directives
    }
}

impl BuildGraphRegistrar for RecordingRegistrar {
    fn set_root_name(&mut self, name: &str) {
        self.root_name = Some(name.to_string());
    }

    fn include_build(&mut self, relative_path: &str) {
        self.directives.push(LinkDirective::ExternalBuild {
            path: relative_path.to_string(),
        });
    }

    fn include_module(&mut self, name: &str, relative_path: &str) {
        self.directives.push(LinkDirective::Module {
            name: name.to_string(),
            path: relative_path.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_preserves_order() {
        let mut registrar = RecordingRegistrar::new();
        registrar.set_root_name("demo");
        registrar.include_build("platform");
        registrar.include_module("api", "services/api");

        assert_eq!(registrar.root_name(), Some("demo"));
        assert_eq!(
            registrar.directives(),
            &[
                LinkDirective::ExternalBuild {
                    path: "platform".to_string()
                },
                LinkDirective::Module {
                    name: "api".to_string(),
                    path: "services/api".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_directive_serializes_with_kind_tag() {
        let directive = LinkDirective::Module {
            name: "api".to_string(),
            path: "services/api".to_string(),
        };
        let json = serde_json::to_value(&directive).unwrap();

        assert_eq!(json["kind"], "module");
        assert_eq!(json["name"], "api");
        assert_eq!(json["path"], "services/api");
    }
}
