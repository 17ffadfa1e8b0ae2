use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{error::InvalidInput, median::median};

/// How case reports are written to the output.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of a single median computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    /// 1-based index of a demo case, none for user input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<usize>,
    /// Numbers in the order they were supplied.
    pub original: Vec<f64>,
    /// Numbers after sorting.
    pub sorted: Vec<f64>,
    pub median: f64,
}

impl CaseReport {
    /// Computes the median on a copy of the numbers, keeping the supplied order.
    pub fn compute(
        case: Option<usize>,
        original: Vec<f64>,
    ) -> Result<CaseReport, InvalidInput> {
        let mut sorted = original.clone();
        let median = median(&mut sorted)?;

        Ok(CaseReport {
            case,
            original,
            sorted,
            median,
        })
    }
}

/// Prints the report to given output.
pub fn print_report(
    output: &mut impl Write,
    report: &CaseReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(report)?)?,
        OutputFormat::Text => match report.case {
            Some(idx) => writeln!(
                output,
                "Test case {}: original={:?}, sorted={:?}, median={}",
                idx, report.original, report.sorted, report.median
            )?,
            None => {
                writeln!(output, "Sorted numbers: {:?}", report.sorted)?;
                writeln!(output, "Median: {}", report.median)?;
            }
        },
    }
    Ok(())
}

/// Prints an input error to given output.
pub fn print_error(
    output: &mut impl Write,
    case: Option<usize>,
    err: &InvalidInput,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "case": case, "error": err.to_string() });
            writeln!(output, "{}", value)?;
        }
        OutputFormat::Text => match case {
            Some(idx) => writeln!(output, "Test case {}: Error: {}", idx, err)?,
            None => writeln!(output, "Error: {}", err)?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &CaseReport, format: OutputFormat) -> String {
        let mut output = Vec::new();
        print_report(&mut output, report, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn compute_keeps_original_order_test() {
        let report = CaseReport::compute(Some(2), vec![4.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(report.original, vec![4.0, 2.0, 1.0, 3.0]);
        assert_eq!(report.sorted, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(report.median, 2.5);
    }

    #[test]
    fn compute_empty_test() {
        assert_eq!(
            CaseReport::compute(None, Vec::new()),
            Err(InvalidInput::EmptySequence)
        );
    }

    #[test]
    fn print_report_text_test() {
        let report = CaseReport::compute(None, vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(
            render(&report, OutputFormat::Text),
            "Sorted numbers: [1.0, 2.0, 3.0]\nMedian: 2\n"
        );

        let report = CaseReport::compute(Some(1), vec![1.0, 3.0, 5.0]).unwrap();
        assert_eq!(
            render(&report, OutputFormat::Text),
            "Test case 1: original=[1.0, 3.0, 5.0], sorted=[1.0, 3.0, 5.0], median=3\n"
        );
    }

    #[test]
    fn print_report_json_test() {
        let report = CaseReport::compute(Some(3), vec![2.0, 1.0]).unwrap();
        let line = render(&report, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["case"], 3);
        assert_eq!(value["sorted"], serde_json::json!([1.0, 2.0]));
        assert_eq!(value["median"], 1.5);

        let report = CaseReport::compute(None, vec![2.0]).unwrap();
        let line = render(&report, OutputFormat::Json);
        assert!(!line.contains("case"));
    }

    #[test]
    fn print_error_test() {
        let mut output = Vec::new();
        print_error(
            &mut output,
            None,
            &InvalidInput::EmptySequence,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error: cannot compute median of an empty sequence\n"
        );
    }
}
