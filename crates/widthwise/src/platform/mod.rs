//! Platform-specific styling behavior.
//!
//! The applier delegates the two platform-dependent decisions to a
//! [`Platform`]:
//!
//! - [`Native`]: evaluates width conditions here, against the live viewport
//! - [`Web`]: leaves conditions to the browser's media queries and only
//!   forwards identifiers through the dataset string

mod native;
mod web;

pub use native::Native;
pub use web::Web;

use crate::breakpoint::MediaQueries;
use crate::props::Props;
use crate::style::{StyleLookup, StylePayload};

/// How a platform turns style identifiers into props.
pub trait Platform {
    /// Returns the payloads to prepend to the component's styles, in
    /// identifier order.
    fn conditional_styles(
        &self,
        ids: &[&str],
        styles: &dyn StyleLookup,
        media_queries: &MediaQueries,
    ) -> Vec<StylePayload>;

    /// Returns the value written to both `data-style` and `dataSet.style`.
    ///
    /// `props` is seen as it was before the applier touched it.
    fn data_style(&self, props: &Props, ids: &[&str]) -> String;
}
