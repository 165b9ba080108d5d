//! Breakpoint registries and the active-breakpoint search.
//!
//! Two registries cover the two ways breakpoints are declared:
//!
//! - [`Breakpoints`]: named numeric widths, resolved to the active name
//! - [`MediaQueries`]: named media-query strings, resolved to the active
//!   `min-width` threshold
//!
//! Both keep their entries as an explicit ordered sequence. The order of
//! declaration is the ascending rank of the breakpoints, and both resolvers
//! share the same scan (see [`Breakpoints::resolve`]).

mod error;
mod media;
mod named;
mod ordered;
mod search;

pub use error::BreakpointError;
pub use media::{min_width, MediaQueries};
pub use named::Breakpoints;
