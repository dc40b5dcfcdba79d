/// ProgressReporter port for user-facing progress output
///
/// Diagnostics go through `tracing`; this port carries the short status
/// lines a CLI user expects while an export or upload runs.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports advancement of a multi-step phase
    ///
    /// # Arguments
    /// * `current` - Units completed so far
    /// * `total` - Units known so far (may grow between calls)
    /// * `message` - Optional phase label
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports the end of the operation
    fn report_completion(&self, message: &str);
}
