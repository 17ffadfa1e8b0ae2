use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    config::MedianConfiguration,
    parse::parse_numbers,
    report::{print_error, print_report, CaseReport},
};

const BANNER: &str = "Median Finder CLI
-----------------
Enter a list of numbers separated by spaces to compute its median.
Example: 1 3 5 7 9
Press Enter without typing anything to run predefined test cases.
";

/// Prompts for one line of numbers and prints its median. An empty line (or end of input)
/// runs the configured demo cases instead.
///
/// Invalid input is reported on `output` and is not an error of this function; only I/O
/// failures are returned.
pub fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: &MedianConfiguration,
) -> Result<()> {
    writeln!(output, "{}", BANNER)?;
    write!(output, "Numbers: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("could not read from input")?;

    if line.trim().is_empty() {
        run_demo_cases(output, config)
    } else {
        run_user_case(output, &line, config)
    }
}

fn run_user_case(output: &mut impl Write, line: &str, config: &MedianConfiguration) -> Result<()> {
    let parsed = parse_numbers(line).and_then(|numbers| CaseReport::compute(None, numbers));
    let report = match parsed {
        Ok(report) => report,
        Err(err) => {
            warn!("rejected input: {}", err);
            return print_error(output, None, &err, config.output);
        }
    };

    debug!(count = report.original.len(), "user case computed");
    print_report(output, &report, config.output)
}

fn run_demo_cases(output: &mut impl Write, config: &MedianConfiguration) -> Result<()> {
    info!(count = config.demo_cases.len(), "running demo cases");

    for (idx, case) in config.demo_cases.iter().enumerate() {
        let idx = idx + 1;
        match CaseReport::compute(Some(idx), case.clone()) {
            Ok(report) => print_report(output, &report, config.output)?,
            Err(err) => {
                warn!(case = idx, "demo case rejected: {}", err);
                print_error(output, Some(idx), &err, config.output)?;
            }
        }
    }
    Ok(())
}
