//! # Widthwise - Breakpoint-Aware Style Resolution
//!
//! Widthwise picks which of a component's compiled styles apply at the
//! current viewport width.
//!
//! Styles are registered by identifier in a [`StyleSheet`]. An entry may carry
//! a media condition such as `(min-width: 768px)`. When a component is
//! rendered with a list of identifiers, the [`StyleApplier`]:
//!
//! 1. Resolves the active `min-width` threshold from the configured
//!    [`MediaQueries`] and the live [`Viewport`] width
//! 2. Keeps each entry whose [`WidthCondition`] holds at that threshold
//! 3. Prepends the kept payloads to the component's own [`Props`] styles
//!
//! On the web the browser evaluates media queries itself, so the [`Web`]
//! platform only forwards the identifiers through the `data-style` attribute.
//!
//! ## Breakpoints
//!
//! [`Breakpoints`] resolves a width to a breakpoint name, and [`MediaQueries`]
//! resolves it to a threshold. Both keep their entries in declaration order,
//! which must be ascending. Resolution never fails: no match is `None`, and a
//! query without a readable `min-width` counts as `0`.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use widthwise::{
//!     FixedViewport, Native, Props, ResponsiveConfig, StyleApplier, StyleEntry, StyleSheet,
//! };
//!
//! let config = ResponsiveConfig::default();
//! let sheet = StyleSheet::new()
//!     .add("box", json!({"padding": 4}))
//!     .add(
//!         "box-md",
//!         StyleEntry::new(json!({"padding": 12})).with_query_condition("(min-width: 768px)"),
//!     );
//!
//! let applier = StyleApplier::new(
//!     &sheet,
//!     &config.tokens.media_queries,
//!     Native::new(FixedViewport(1024)),
//! );
//! let mut props = Props::new();
//! applier.apply(&mut props, &["box", "box-md"]);
//!
//! assert_eq!(props.style, vec![json!({"padding": 4}), json!({"padding": 12})]);
//! assert_eq!(config.breakpoint(1024), Some("lg"));
//! ```

mod apply;
pub mod breakpoint;
mod condition;
mod config;
pub mod platform;
mod props;
pub mod style;
mod viewport;

pub use apply::StyleApplier;
pub use breakpoint::{min_width, BreakpointError, Breakpoints, MediaQueries};
pub use condition::WidthCondition;
pub use config::{ConfigError, ResponsiveConfig, Tokens};
pub use platform::{Native, Platform, Web};
pub use props::Props;
pub use style::{StyleEntry, StyleLookup, StyleMeta, StylePayload, StyleSheet};
pub use viewport::{FixedViewport, Viewport};
