//! The canned-response chat widget's matching core.
//!
//! `respond` maps free text to one of a fixed set of pre-written replies
//! by case-insensitive substring matching: template groups are scanned
//! in a fixed priority order, then neighborhood names, and a fallback
//! covers everything else. There is no learning and no context across
//! turns; each call stands alone.

pub mod responder;
pub mod templates;

pub use responder::respond;
pub use templates::{FALLBACK, WELCOME};
