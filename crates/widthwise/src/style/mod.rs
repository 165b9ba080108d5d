//! Style registry consulted by the applier.
//!
//! - [`StyleEntry`]: a compiled style payload plus its metadata
//! - [`StyleSheet`]: a map from style identifier to entry
//! - [`StyleLookup`]: the read-only seam the applier resolves identifiers through
//!
//! Payloads are produced elsewhere; this module only stores and hands them out.

mod entry;
mod sheet;

pub use entry::{StyleEntry, StyleMeta, StylePayload};
pub use sheet::{StyleLookup, StyleSheet};
