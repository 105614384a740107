//! Fit a bitmap into a bounding box, preserving aspect ratio.

use thiserror::Error;

/// The area an image may occupy, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Where a fitted image lands on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittedImage {
    pub width: u32,
    pub height: u32,
    pub left: u32,
    pub top: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("image has a zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    #[error("bounding box has no area ({width}x{height})")]
    EmptyBound { width: u32, height: u32 },
}

/// Scale `source_width x source_height` uniformly to fit `bound`.
///
/// `scale = min(bound.width / w, bound.height / h)`. The result is centred
/// horizontally in the bound and pinned to its top edge.
pub fn fit(source_width: u32, source_height: u32, bound: &BoundingBox) -> Result<FittedImage, FitError> {
    if source_width == 0 || source_height == 0 {
        return Err(FitError::ZeroDimension {
            width: source_width,
            height: source_height,
        });
    }
    if bound.width == 0 || bound.height == 0 {
        return Err(FitError::EmptyBound {
            width: bound.width,
            height: bound.height,
        });
    }

    let scale = (bound.width as f64 / source_width as f64)
        .min(bound.height as f64 / source_height as f64);

    // Rounding a value <= an integer bound can't exceed it; the clamp only
    // absorbs floating-point noise on the exact edge.
    let width = ((source_width as f64 * scale).round() as u32).clamp(1, bound.width);
    let height = ((source_height as f64 * scale).round() as u32).clamp(1, bound.height);

    Ok(FittedImage {
        width,
        height,
        left: bound.left + (bound.width - width) / 2,
        top: bound.top,
    })
}
