//! Viewport width sources.

/// Reports the current width of the window or display, in pixels.
///
/// The applier reads it once per invocation and never caches the result.
/// Any `Fn() -> u32` closure is a viewport, which is the usual way to bridge
/// a platform window query.
pub trait Viewport {
    fn width(&self) -> u32;
}

/// A viewport of constant width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl Viewport for FixedViewport {
    fn width(&self) -> u32 {
        self.0
    }
}

impl<F: Fn() -> u32> Viewport for F {
    fn width(&self) -> u32 {
        self()
    }
}
