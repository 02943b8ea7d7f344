//! Everything necessary for command line arguments.

use clap::{Args, Parser};
use std::num::NonZero;
use std::path::PathBuf;
use told_lib::CaseRange;

/// Reads an aero TOLD takeoff data export and generates Ada test data for the TOLD test driver.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CmdArgs {
    // If an input file is specified, a config file is not needed, but allowed.
    /// Path to an optional configuration file. Required if the input file is not specified.
    ///
    /// The configuration written in the config file can be supplemented by command line switches.
    #[arg(short, long, required_unless_present = "input_file")]
    pub config_file: Option<PathBuf>,
    #[command(flatten)]
    pub regular_args: RegularArgs,
}

/// The "regular" command line arguments (everything except for config file)
#[derive(Debug, Clone, Default, Args)]
pub struct RegularArgs {
    /// Path to the TOLD data export to convert.
    pub input_file: Option<PathBuf>,
    /// Path of the generated Ada file. Default: "aero_told_data.ada".
    ///
    /// If the output is split into multiple files, the files are named
    /// "<FILE_NAME>_<IDX>.<EXTENSION>", with <IDX> the number of the part.
    #[arg(short, long = "output")]
    pub output_path: Option<PathBuf>,
    /// The test cases to generate: a single case number or FIRST-LAST, e.g. "10-25".
    ///
    /// If neither this option nor '--interactive' is given, all test cases are generated.
    #[arg(short, long)]
    pub range: Option<CaseRange>,
    /// Ask for the range of test cases to generate after the input is read.
    #[arg(short, long, conflicts_with = "range")]
    pub interactive: bool,
    /// Split the output into multiple files with at most this count of test cases each.
    #[arg(long)]
    pub max_cases_per_file: Option<NonZero<usize>>,
    /// Name of the generated Ada package, must be a valid Ada identifier and no reserved word.
    /// Default: "Aero_Told_Data".
    ///
    /// With multiple output files, the part number is appended, e.g. "Aero_Told_Data_2".
    #[arg(short, long)]
    pub package: Option<String>,
    /// Optional path to additionally save the selected test cases to, in CSV format with
    /// ';' delimiter: case no.; one column per field
    #[arg(long = "csv")]
    pub csv_path: Option<PathBuf>,
    /// Generate the output from the complete test cases, even if the input is malformed
    /// after them.
    #[arg(long)]
    pub allow_partial: bool,
    /// Only read the input and report, do not write any file.
    #[arg(long)]
    pub dry_run: bool,
    /// Reduce the console output to summaries.
    #[arg(long)]
    pub no_console: bool,
}
