/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr) so they never mix with the
/// rendered graph on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
