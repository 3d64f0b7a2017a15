//! Screen-transition capability.

/// Requested by the controller after a successful submission. The actual
/// routing lives outside the state machine.
pub trait Navigator: Send + Sync {
    /// Called once, after the submission flag has been written.
    fn on_registered(&self);
}

/// Navigator that goes nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn on_registered(&self) {}
}
