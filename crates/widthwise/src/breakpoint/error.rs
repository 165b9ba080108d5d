//! Breakpoint validation errors.

/// Error returned when a breakpoint registry is not strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakpointError {
    /// A breakpoint does not exceed the one declared before it.
    #[error(
        "breakpoint '{name}' ({width}px) must be greater than preceding '{previous}' ({previous_width}px)"
    )]
    OutOfOrder {
        name: String,
        width: u32,
        previous: String,
        previous_width: u32,
    },
}
