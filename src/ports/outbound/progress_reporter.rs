/// ProgressReporter port for run diagnostics
///
/// Everything a run has to say besides the report itself (discovered
/// manifests, skipped paths, warnings) goes through this port, so stdout
/// stays reserved for the report.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress while manifests are being loaded
    ///
    /// # Arguments
    /// * `current` - Number of manifests loaded so far
    /// * `total` - Number of manifests to load
    /// * `message` - Optional detail, usually the manifest being read
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports the failure that is about to abort the run
    fn report_error(&self, message: &str);

    /// Reports completion of the check
    fn report_completion(&self, message: &str);
}
