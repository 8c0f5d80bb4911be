use std::fmt;
use std::time::Duration;

use dominant_solvers::eigen::power_iteration::{Solution, Status};

/// The solver runs in a single process.
const PROCESSES: u32 = 1;

/// Timing and result summary printed after a solve.
///
/// Times are reported in seconds with microsecond resolution.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
    read_time: Duration,
    execution_time: Duration,
    show_eigenvector: bool,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution, read_time: Duration, execution_time: Duration) -> Self {
        Self {
            solution,
            read_time,
            execution_time,
            show_eigenvector: false,
        }
    }

    /// Also print the eigenvector estimate.
    #[must_use]
    pub fn show_eigenvector(mut self, show: bool) -> Self {
        self.show_eigenvector = show;
        self
    }

    fn total_time(&self) -> f64 {
        (self.read_time + self.execution_time).as_secs_f64()
    }

    fn time_per_loop(&self) -> f64 {
        if self.solution.iters == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let iters = self.solution.iters as f64;
        self.execution_time.as_secs_f64() / iters
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Converged => "converged",
        Status::MaxIters => "iteration limit reached",
        Status::StoppedByObserver => "stopped early",
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_time();

        writeln!(f)?;
        writeln!(f, "Dominant Eigenvalue: {:.6}", self.solution.eigenvalue)?;
        writeln!(f, "Read Time: {:.6}", self.read_time.as_secs_f64())?;
        writeln!(f, "Number Of Iterations: {}", self.solution.iters)?;
        writeln!(f, "Execution Time: {:.6}", self.execution_time.as_secs_f64())?;
        writeln!(f, "Number of Processes: {PROCESSES}")?;
        writeln!(f, "Total Time: {total:.6}")?;
        writeln!(
            f,
            "Number of Processes * Total Time: {:.6}",
            f64::from(PROCESSES) * total
        )?;
        writeln!(f, "Time Per Loop: {:.6}", self.time_per_loop())?;
        writeln!(f, "Status: {}", status_label(self.solution.status))?;

        if self.show_eigenvector {
            writeln!(f, "Eigenvector:")?;
            for value in &self.solution.eigenvector {
                writeln!(f, " {value:12.8}")?;
            }
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(status: Status) -> Solution {
        Solution {
            status,
            eigenvalue: 1.999_999_76,
            eigenvector: vec![1.0, 0.000_244_14],
            iters: 12,
        }
    }

    #[test]
    fn renders_timing_summary() {
        let solution = solution(Status::Converged);
        let report = Report::new(
            &solution,
            Duration::from_millis(250),
            Duration::from_millis(3),
        );

        let text = report.to_string();

        let expected = "\n\
            Dominant Eigenvalue: 2.000000\n\
            Read Time: 0.250000\n\
            Number Of Iterations: 12\n\
            Execution Time: 0.003000\n\
            Number of Processes: 1\n\
            Total Time: 0.253000\n\
            Number of Processes * Total Time: 0.253000\n\
            Time Per Loop: 0.000250\n\
            Status: converged\n\
            \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn reports_non_convergence() {
        let solution = solution(Status::MaxIters);
        let report = Report::new(&solution, Duration::ZERO, Duration::ZERO);

        assert!(report.to_string().contains("Status: iteration limit reached\n"));
    }

    #[test]
    fn eigenvector_is_opt_in() {
        let solution = solution(Status::Converged);
        let report = Report::new(&solution, Duration::ZERO, Duration::ZERO);

        assert!(!report.to_string().contains("Eigenvector"));

        let text = report.show_eigenvector(true).to_string();
        assert!(text.contains("Eigenvector:\n   1.00000000\n   0.00024414\n"));
    }

    #[test]
    fn time_per_loop_handles_zero_iterations() {
        let mut solution = solution(Status::StoppedByObserver);
        solution.iters = 0;
        let report = Report::new(&solution, Duration::ZERO, Duration::from_secs(1));

        assert!(report.to_string().contains("Time Per Loop: 0.000000\n"));
    }
}
