use anyhow::Context;
use clap::Parser;
use std::fs;
use std::io;
use std::io::{BufWriter, Write};
use told_cmd::cmd_args::CmdArgs;
use told_cmd::csv::CsvFile;
use told_cmd::prompt::prompt_range;
use told_cmd::toml_config::TomlConfig;
use told_cmd::valid_arg::{RangeSelection, ValidatedConfig};
use told_cmd::{accept_outcome, part_path, PROGRESS_INTERVAL};
use told_lib::emit::{split_into_parts, Emitter};
use told_lib::reader::{self, ParseOutcome, TakeoffReader};
use told_lib::{CaseRange, TestCase};

/// Main function.
///
/// On success: prints a summary to stdout and writes the generated Ada file(s), exit code SUCCESS.
/// On error: prints the error to stderr, exit code FAILURE. No output is generated.
///
/// This program takes some arguments and an optional config file, use `--help`.
fn main() -> anyhow::Result<()> {
    let CmdArgs {
        config_file,
        regular_args,
    } = CmdArgs::parse();

    // parse configuration
    let config = if let Some(config_file) = config_file {
        let toml = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file \"{}\"", config_file.display()))?;

        let toml_config: TomlConfig =
            toml::from_str(&toml).context("Failed to parse the config file")?;
        ValidatedConfig::try_from_toml(toml_config, regular_args)
    } else {
        ValidatedConfig::try_from_cmd_args(regular_args)
    }
    .map_err(|err| anyhow::anyhow!(err))?;

    let outcome = read_input(&config)?;
    accept_outcome(&config, &outcome)?;

    if outcome.cases.is_empty() {
        println!("No test cases found, nothing to generate.");
        return Ok(());
    }

    let range = select_range(&config, &outcome)?;
    let selected = outcome.cases.select(range)?;
    println!("Selected test cases {range} ({} cases).", selected.len());

    if config.dry_run {
        println!("Dry run, no files written.");
        return Ok(());
    }

    if let Some(csv_path) = &config.csv_path {
        let mut csv_file = CsvFile::new(csv_path)
            .with_context(|| format!("Failed to create CSV file \"{}\"", csv_path.display()))?;
        csv_file.write_cases(selected)?;
        println!("Wrote test cases to \"{}\".", csv_path.display());
    }

    write_ada_files(&config, &outcome, selected)?;

    println!("Finished.");

    Ok(())
}

/// Open the input file, check the header and read all test cases.
fn read_input(config: &ValidatedConfig) -> anyhow::Result<ParseOutcome> {
    let file = reader::open(&config.input_file)?;
    println!(
        "Opened data file \"{}\" for analysis.",
        config.input_file.display()
    );

    let reader = TakeoffReader::new(file).with_context(|| {
        format!(
            "Input file \"{}\" does not appear to be a takeoff data file, please check the format",
            config.input_file.display()
        )
    })?;
    println!(
        "Processing aero TAKEOFF data generated {}",
        reader.header().timestamp()
    );

    let console_output = config.console_output;
    let outcome = reader.read_all(|progress| {
        if console_output && progress.cases_read % PROGRESS_INTERVAL == 0 {
            println!(
                "\t{} test cases read ({} lines)",
                progress.cases_read, progress.lines_read
            );
        }
    });

    println!(
        "Input data parsed: read {} lines, {} test cases.",
        outcome.lines_read,
        outcome.cases.len()
    );

    Ok(outcome)
}

/// Determine the test cases to generate, asking the user if configured.
fn select_range(config: &ValidatedConfig, outcome: &ParseOutcome) -> anyhow::Result<CaseRange> {
    let available = outcome.cases.len();

    let range = match config.range_selection {
        RangeSelection::Range(range) => range,
        RangeSelection::All => CaseRange::all(available).context("No test cases available")?,
        RangeSelection::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_range(&mut stdin.lock(), &mut stdout.lock(), available)
                .context("Failed to read the test case range")?
        }
    };

    Ok(range)
}

/// Generate the Ada file(s) for the selected test cases.
fn write_ada_files(
    config: &ValidatedConfig,
    outcome: &ParseOutcome,
    selected: &[TestCase],
) -> anyhow::Result<()> {
    let emitter = &config.emitter;
    let parts = split_into_parts(&outcome.header, selected, config.max_cases_per_file);

    for request in &parts {
        let path =
            part_path(&config.output_path, request.part).map_err(|err| anyhow::anyhow!(err))?;

        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file \"{}\"", path.display()))?;
        let mut writer = BufWriter::new(file);

        emitter
            .emit(request, &mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write output file \"{}\"", path.display()))?;

        if config.console_output {
            println!(
                "\tGenerated \"{}\": package {}, test cases {} .. {}",
                path.display(),
                emitter.package_name(request),
                request.first_case(),
                request.last_case()
            );
        }
    }

    println!("Generated {} Ada file(s).", parts.len());

    Ok(())
}
