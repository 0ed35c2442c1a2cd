/// Receives progress lines from [`DeployRunner`](crate::DeployRunner).
///
/// Failures are not reported here; they come back as the runner's `Err`.
pub trait Reporter {
    fn info(&self, msg: &str);
    fn success(&self, msg: &str);
    fn warn(&self, msg: &str);
}
