use crate::shared::Result;

/// OutputPresenter port for delivering formatted output
///
/// This port abstracts the output destination (file, stdout, etc.)
/// from the formatting logic.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if the content cannot be delivered
    fn present(&self, content: &str) -> Result<()>;
}
