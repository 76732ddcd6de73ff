//! Rectangle types and coordinate-system conversion.
//!
//! Two conventions are in play:
//!
//! - **PDF-native**: origin at the bottom-left of the page, Y grows upward.
//!   This is what the PDF content stream and the engine boundary speak.
//! - **Top-left**: origin at the top-left of the page, Y grows downward.
//!   This is what callers (and typical UI overlays) speak.
//!
//! Converting between the two only flips the Y axis against the page
//! height; X and width pass through unchanged. For a fixed page height the
//! conversions are exact inverses of each other.

use serde::{Deserialize, Serialize};

/// Tolerance for floating-point rectangle comparisons.
pub const COORD_EPSILON: f32 = 1e-6;

/// Axis-aligned rectangle in top-left-origin coordinates.
///
/// This is the wire representation: extraction output carries it, and
/// redaction items supply it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle in PDF-native bottom-left-origin coordinates,
/// with `x1 >= x0` and `y1 >= y0` once normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts to a PDF-native rectangle on a page of the given height.
    pub fn to_pdf(&self, page_height: f32) -> PdfRect {
        let y0 = page_height - self.y - self.height;
        PdfRect {
            x0: self.x,
            y0,
            x1: self.x + self.width,
            y1: y0 + self.height,
        }
    }

    /// Returns true when all fields are finite and the extents are
    /// non-negative. Degenerate (zero-area) boxes are considered valid;
    /// they simply redact nothing visible.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl PdfRect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Converts to a top-left-origin box on a page of the given height.
    pub fn to_top_left(&self, page_height: f32) -> BoundingBox {
        BoundingBox {
            x: self.x0,
            y: page_height - self.y1,
            width: self.x1 - self.x0,
            height: self.y1 - self.y0,
        }
    }

    /// Reorders swapped corners so that `x1 >= x0` and `y1 >= y0`.
    pub fn normalized(&self) -> Self {
        Self {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Field-wise comparison within [`COORD_EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.x0 - other.x0).abs() <= COORD_EPSILON
            && (self.y0 - other.y0).abs() <= COORD_EPSILON
            && (self.x1 - other.x1).abs() <= COORD_EPSILON
            && (self.y1 - other.y1).abs() <= COORD_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_top_left() {
        // Text at PDF-native (50, 700)-(150, 715) on a US Letter page.
        let rect = PdfRect::new(50.0, 700.0, 150.0, 715.0);
        let bbox = rect.to_top_left(792.0);
        assert_eq!(bbox.x, 50.0);
        assert_eq!(bbox.y, 77.0); // 792 - 715
        assert_eq!(bbox.width, 100.0);
        assert_eq!(bbox.height, 15.0);
    }

    #[test]
    fn test_to_pdf() {
        let bbox = BoundingBox::new(50.0, 77.0, 100.0, 15.0);
        let rect = bbox.to_pdf(792.0);
        assert!(rect.approx_eq(&PdfRect::new(50.0, 700.0, 150.0, 715.0)));
    }

    #[test]
    fn test_round_trip_is_identity() {
        // Edge-case table: small, large, zero-area, off-page, and
        // fractional rectangles.
        let heights = [1.0_f32, 100.0, 792.0, 841.89, 10_000.0];
        let rects = [
            PdfRect::new(0.0, 0.0, 0.0, 0.0),
            PdfRect::new(0.0, 0.0, 612.0, 792.0),
            PdfRect::new(50.0, 700.0, 150.0, 715.0),
            PdfRect::new(10.5, 20.25, 10.5, 20.25),
            PdfRect::new(-30.0, -15.0, 700.0, 900.0),
            PdfRect::new(0.125, 0.375, 0.625, 0.875),
        ];

        for h in heights {
            for rect in rects {
                let back = rect.to_top_left(h).to_pdf(h);
                assert!(
                    rect.approx_eq(&back),
                    "round trip drifted for {:?} at height {}: {:?}",
                    rect,
                    h,
                    back
                );
            }
        }
    }

    #[test]
    fn test_round_trip_from_top_left_side() {
        let bbox = BoundingBox::new(12.0, 34.0, 56.0, 78.0);
        let back = bbox.to_pdf(279.4).to_top_left(279.4);
        assert!((bbox.x - back.x).abs() <= COORD_EPSILON);
        assert!((bbox.y - back.y).abs() <= COORD_EPSILON);
        assert!((bbox.width - back.width).abs() <= COORD_EPSILON);
        assert!((bbox.height - back.height).abs() <= COORD_EPSILON);
    }

    #[test]
    fn test_normalized_reorders_corners() {
        let rect = PdfRect::new(150.0, 715.0, 50.0, 700.0).normalized();
        assert_eq!(rect, PdfRect::new(50.0, 700.0, 150.0, 715.0));
        assert!(rect.width() >= 0.0);
        assert!(rect.height() >= 0.0);
    }

    #[test]
    fn test_bbox_validity() {
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(BoundingBox::new(5.0, 5.0, 10.0, 10.0).is_valid());
        assert!(!BoundingBox::new(5.0, 5.0, -1.0, 10.0).is_valid());
        assert!(!BoundingBox::new(5.0, 5.0, 10.0, -1.0).is_valid());
        assert!(!BoundingBox::new(f32::NAN, 5.0, 10.0, 10.0).is_valid());
        assert!(!BoundingBox::new(5.0, f32::INFINITY, 10.0, 10.0).is_valid());
    }
}
