//! Screens the client can navigate to.

/// Destination after an action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The public application form.
    Form,
    /// Shown after a successful submission.
    Success,
    /// Reviewer login.
    Login,
    /// Reviewer dashboard.
    Dashboard,
}
