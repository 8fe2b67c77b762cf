//! In-memory HTML documents: an arena-backed DOM that can be built
//! programmatically, serialized to markup or JSON, and parsed back from markup.
//!
//! Pages build trees directly and the server only needs [`DOM::to_html`]. The
//! parser and the JSON snapshot exist so rendered output can be read back and
//! compared structurally, by tests and by anything inspecting served pages.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod dom;
pub mod parser;

pub use dom::{Attrs, DOM, DOMNode, NodeKind};
pub use indextree::NodeId;
pub use parser::{parse_document, parse_fragment};
