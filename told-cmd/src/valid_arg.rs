//! Struct and conversion method for a validated arg.

use crate::cmd_args::RegularArgs;
use crate::toml_config::{TomlConfig, TomlInput, TomlOutput, TomlSelection};
use crate::DEFAULT_OUTPUT_PATH;
use std::num::NonZero;
use std::path::PathBuf;
use told_lib::emit::ada::AdaEmitter;
use told_lib::CaseRange;

/// Which test cases are to be generated
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeSelection {
    /// A fixed range, checked against the test case count after reading.
    Range(CaseRange),
    /// Ask the user after reading the input.
    Interactive,
    /// All test cases of the input.
    All,
}

/// A validated config with a valid state that can be used to convert a file.
#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    /// Path to the input file (TOLD data export)
    pub input_file: PathBuf,
    /// See [RangeSelection]
    pub range_selection: RangeSelection,
    /// Path of the generated Ada file, the base name if split into multiple files.
    pub output_path: PathBuf,
    /// Emitter for the Ada package(s), with a valid package name.
    pub emitter: AdaEmitter,
    /// Split the output after this count of test cases.
    pub max_cases_per_file: Option<NonZero<usize>>,
    /// An optional path to save the selected test cases to as CSV.
    pub csv_path: Option<PathBuf>,
    /// Generate output from the complete test cases of a malformed input.
    pub allow_partial: bool,
    /// Do not write any files.
    pub dry_run: bool,
    /// Write progress output, else only summaries.
    pub console_output: bool,
}

impl ValidatedConfig {
    /// Creates a valid config from the command line arguments.
    pub fn try_from_cmd_args(args: RegularArgs) -> Result<Self, &'static str> {
        Self::try_from_toml(TomlConfig::default(), args)
    }

    /// Creates a valid config from the specified toml configuration, uses overrides from the
    /// command line.
    pub fn try_from_toml(toml: TomlConfig, args: RegularArgs) -> Result<Self, &'static str> {
        let TomlConfig {
            input:
                TomlInput {
                    input_file,
                    allow_partial,
                },
            selection: TomlSelection { range, interactive },
            output,
        } = toml;

        let TomlOutput {
            path: output_path,
            package,
            max_cases_per_file,
            csv_path,
            no_console,
        } = output.unwrap_or_default();

        let RegularArgs {
            input_file: args_input_file,
            output_path: args_output_path,
            range: args_range,
            interactive: args_interactive,
            max_cases_per_file: args_max_cases_per_file,
            package: args_package,
            csv_path: args_csv_path,
            allow_partial: args_allow_partial,
            dry_run,
            no_console: args_no_console,
        } = args;

        // cmd args overwrite everywhere
        let input_file = args_input_file
            .or(input_file)
            .ok_or("The input file is unspecified in the config file and the cmd args!")?;
        let output_path = args_output_path
            .or(output_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
        let max_cases_per_file = args_max_cases_per_file.or(max_cases_per_file);
        let csv_path = args_csv_path.or(csv_path);
        let allow_partial = args_allow_partial || allow_partial.unwrap_or(false);
        let console_output = !(args_no_console || no_console.unwrap_or(false));

        let emitter = match args_package.or(package) {
            Some(package) => AdaEmitter::new(&package)
                .ok_or("The package name is not a valid Ada identifier.")?,
            None => AdaEmitter::default(),
        };

        let range_selection = if let Some(range) = args_range {
            RangeSelection::Range(range)
        } else if args_interactive {
            RangeSelection::Interactive
        } else if let Some(range) = range {
            let range = range
                .parse::<CaseRange>()
                .map_err(|_| "Config file: invalid value for selection.range")?;
            RangeSelection::Range(range)
        } else if interactive.unwrap_or(false) {
            RangeSelection::Interactive
        } else {
            RangeSelection::All
        };

        Ok(Self {
            input_file,
            range_selection,
            output_path,
            emitter,
            max_cases_per_file,
            csv_path,
            allow_partial,
            dry_run,
            console_output,
        })
    }
}
