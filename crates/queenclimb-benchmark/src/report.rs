//! Report generation for experiment results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::Path;

use crate::result::{RestartRunResult, SingleRunResult};

fn format_average(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// CSV exporter for experiment results.
///
/// # Example
///
/// ```
/// use queenclimb_benchmark::{CsvExporter, SingleRunResult};
///
/// let result = SingleRunResult::new("Test", "HillClimbing", 8);
/// let csv = CsvExporter::single(&result);
/// assert!(csv.starts_with("run_index,solved,steps"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports single-start runs to a CSV string.
    pub fn single(result: &SingleRunResult) -> String {
        let mut output =
            String::from("run_index,solved,steps,final_objective,moves_evaluated,solve_time_ms\n");
        for run in &result.runs {
            output.push_str(&format!(
                "{},{},{},{},{},{}\n",
                run.run_index,
                run.solved,
                run.steps,
                run.final_objective,
                run.moves_evaluated,
                run.solve_time.as_millis(),
            ));
        }
        output
    }

    /// Exports random-restart runs to a CSV string.
    pub fn restart(result: &RestartRunResult) -> String {
        let mut output = String::from("run_index,terminated,total_steps,restarts,solve_time_ms\n");
        for run in &result.runs {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                run.run_index,
                run.terminated,
                run.total_steps,
                run.restarts,
                run.solve_time.as_millis(),
            ));
        }
        output
    }

    /// Writes a CSV string to a file.
    pub fn to_file(csv: &str, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, csv)
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use queenclimb_benchmark::{MarkdownReport, SingleRunResult};
///
/// let result = SingleRunResult::new("Test", "HillClimbing", 8);
/// let md = MarkdownReport::single(&result);
/// assert!(md.contains("# Experiment: Test"));
/// assert!(md.contains("| Success Rate | 0.00% |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates the report of single-start searches.
    pub fn single(result: &SingleRunResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_single(result, &mut output);
        output
    }

    /// Generates the report of random-restart searches.
    pub fn restart(result: &RestartRunResult) -> String {
        let mut output = String::new();
        let _ = Self::write_restart(result, &mut output);
        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(report: &str, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, report)
    }

    fn write_header(
        output: &mut String,
        name: &str,
        strategy: &str,
        board_size: usize,
        runs: usize,
    ) -> fmt::Result {
        writeln!(output, "# Experiment: {name}")?;
        writeln!(output)?;
        writeln!(output, "- **Strategy**: {strategy}")?;
        writeln!(output, "- **Board**: {board_size}x{board_size}")?;
        writeln!(output, "- **Runs**: {runs}")?;
        writeln!(output)?;
        writeln!(output, "## Summary")?;
        writeln!(output)?;
        writeln!(output, "| Metric | Value |")?;
        writeln!(output, "|--------|-------|")
    }

    fn write_single(result: &SingleRunResult, output: &mut String) -> fmt::Result {
        Self::write_header(
            output,
            &result.name,
            &result.strategy_name,
            result.board_size,
            result.run_count(),
        )?;
        writeln!(output, "| Successes | {} |", result.success_count())?;
        writeln!(output, "| Failures | {} |", result.failure_count())?;
        writeln!(output, "| Success Rate | {:.2}% |", result.success_rate() * 100.0)?;
        writeln!(output, "| Failure Rate | {:.2}% |", result.failure_rate() * 100.0)?;
        writeln!(
            output,
            "| Avg Success Steps | {} |",
            format_average(result.avg_success_steps())
        )?;
        writeln!(
            output,
            "| Avg Failure Steps | {} |",
            format_average(result.avg_failure_steps())
        )?;
        writeln!(
            output,
            "| Avg Time | {:.2} ms |",
            result.avg_solve_time().as_secs_f64() * 1000.0
        )?;
        Ok(())
    }

    fn write_restart(result: &RestartRunResult, output: &mut String) -> fmt::Result {
        Self::write_header(
            output,
            &result.name,
            &result.strategy_name,
            result.board_size,
            result.run_count(),
        )?;
        writeln!(
            output,
            "| Avg Total Steps | {} |",
            format_average(result.avg_total_steps())
        )?;
        writeln!(
            output,
            "| Avg Restarts | {} |",
            format_average(result.avg_restarts())
        )?;
        writeln!(output, "| Terminated | {} |", result.terminated_count())?;
        writeln!(
            output,
            "| Avg Time | {:.2} ms |",
            result.avg_solve_time().as_secs_f64() * 1000.0
        )?;

        if !result.runs.is_empty() {
            writeln!(output)?;
            writeln!(output, "## Run Details")?;
            writeln!(output)?;
            writeln!(output, "| Run | Total Steps | Restarts | Terminated |")?;
            writeln!(output, "|-----|-------------|----------|------------|")?;
            for run in &result.runs {
                writeln!(
                    output,
                    "| {} | {} | {} | {} |",
                    run.run_index, run.total_steps, run.restarts, run.terminated
                )?;
            }
        }
        Ok(())
    }
}
