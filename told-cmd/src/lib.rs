//! The command line arguments, configuration and output handling of `told-tool`.

use crate::valid_arg::ValidatedConfig;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use told_lib::emit::Part;
use told_lib::reader::ParseOutcome;

pub mod cmd_args;
pub mod csv;
pub mod prompt;
pub mod toml_config;
pub mod valid_arg;

/// The default path of the generated Ada file.
pub const DEFAULT_OUTPUT_PATH: &str = "aero_told_data.ada";

/// Print progress information after this many test cases.
pub const PROGRESS_INTERVAL: usize = 500;

/// Decide if output may be generated from a read outcome.
///
/// A clean outcome is always accepted. After a scan error, the complete test cases are only used
/// with `allow_partial`, and I/O errors are fatal in any case.
pub fn accept_outcome(config: &ValidatedConfig, outcome: &ParseOutcome) -> anyhow::Result<()> {
    let Some(error) = &outcome.error else {
        return Ok(());
    };

    eprintln!("!! {error}");
    eprintln!(
        "!! {} complete test cases were read before the error.",
        outcome.cases.len()
    );

    if !config.allow_partial || !error.is_parse_error() {
        return Err(anyhow::anyhow!(
            "Input file \"{}\" is malformed, no output generated.",
            config.input_file.display()
        ));
    }
    println!("Continuing with the complete test cases.");

    Ok(())
}

/// The path of the file for one part of the output.
///
/// A single part is written to `path` itself, multiple parts to "<FILE_NAME>_<IDX>.<EXTENSION>",
/// with the index zero-padded to the width of the part count.
pub fn part_path(path: &Path, part: Part) -> Result<PathBuf, &'static str> {
    if path.file_name().is_none() {
        // Very wrong
        return Err("Given output path contains no file name.");
    }

    if part.count <= 1 {
        return Ok(path.to_path_buf());
    }

    let max_idx_len = format!("{}", part.count).len();

    // create the filename with the _{idx} suffix and the extension
    let file_name = {
        let mut stem = path
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        stem.push(format!("_{:0>1$}", part.current, max_idx_len));
        if let Some(ext) = path.extension() {
            stem.push(".");
            stem.push(ext);
        }
        stem
    };

    Ok(path.with_file_name(file_name))
}
