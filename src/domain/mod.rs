//! Domain models for redaction requests and positioned text.
//!
//! This module contains the pure, engine-independent pieces: rectangle
//! types with their coordinate-system conversion, the wire types callers
//! send and receive, and the page grouper that turns a flat item list into
//! an apply-ready plan.

pub mod geometry;
pub mod item;
pub mod plan;

pub use geometry::{BoundingBox, PdfRect, COORD_EPSILON};
pub use item::{parse_items, validate_items, RedactionItem, TextSpan};
pub use plan::RedactionPlan;
