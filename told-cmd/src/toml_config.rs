//! TOML configuration file.

use serde::{Deserialize, Serialize};
use std::num::NonZero;
use std::path::PathBuf;

/// Struct for the TOML configuration file, the constraints of CmdArgs are not validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlConfig {
    // not really optional, must be supplemented from cmd args if missing.
    pub input: TomlInput,
    pub selection: TomlSelection,
    pub output: Option<TomlOutput>,
}

/// Input: file and handling of malformed files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlInput {
    pub input_file: Option<PathBuf>,
    pub allow_partial: Option<bool>,
}

/// Which test cases to generate: a range, or ask interactively
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlSelection {
    // range overrides interactive
    pub range: Option<String>,
    pub interactive: Option<bool>,
}

/// Generated files and console output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlOutput {
    pub path: Option<PathBuf>,
    pub package: Option<String>,
    pub max_cases_per_file: Option<NonZero<usize>>,
    pub csv_path: Option<PathBuf>,
    pub no_console: Option<bool>,
}
