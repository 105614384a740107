//! # Image Loading and Decoding
//!
//! Resolves photograph references into bitmaps ready for PDF embedding.
//!
//! The layout engine only sees the [`ImageResolver`] capability. Accepted
//! reference schemes are `http://`, `https://` and `content://`; anything
//! else fails before any I/O happens. Implementors that only know how to
//! fetch bytes implement [`ByteSource`] and get scheme validation, decoding
//! and dimension checks for free.
//!
//! JPEG images pass through without re-encoding; only the frame header is
//! parsed for size and channel count. PNG images are decoded to RGB pixels
//! with a separate alpha channel for SMask transparency.

use std::path::PathBuf;

use thiserror::Error;

use crate::layout::fit::FitError;

/// A fully decoded/loaded image ready for PDF embedding.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub pixel_data: ImagePixelData,
    pub width_px: u32,
    pub height_px: u32,
}

/// The pixel data in a format the PDF serializer can consume directly.
#[derive(Debug, Clone)]
pub enum ImagePixelData {
    /// Raw JPEG bytes — embed directly with DCTDecode.
    Jpeg {
        data: Vec<u8>,
        color_space: JpegColorSpace,
    },
    /// Decoded RGB pixels + optional alpha channel.
    Decoded {
        /// width * height * 3 bytes (RGB)
        rgb: Vec<u8>,
        /// width * height bytes (grayscale alpha). None if fully opaque.
        alpha: Option<Vec<u8>>,
    },
}

/// JPEG color space for the PDF /ColorSpace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegColorSpace {
    DeviceRGB,
    DeviceGray,
}

/// Broad failure class, for callers that report rather than match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageErrorKind {
    /// The reference or the image itself violates a precondition.
    InputPrecondition,
    /// The source could not be reached, read, or decoded.
    ResourceUnavailable,
}

/// Why a single image could not be placed. Always recovered per page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("unsupported image reference scheme: '{0}'")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Dimensions(#[from] FitError),
    #[error("image source unavailable: {0}")]
    Unavailable(String),
    #[error("image data could not be decoded: {0}")]
    Decode(String),
    #[error("timed out fetching image")]
    Timeout,
}

impl ImageError {
    pub fn kind(&self) -> ImageErrorKind {
        match self {
            Self::UnsupportedScheme(_) | Self::Dimensions(_) => ImageErrorKind::InputPrecondition,
            Self::Unavailable(_) | Self::Decode(_) | Self::Timeout => {
                ImageErrorKind::ResourceUnavailable
            }
        }
    }
}

/// The kind of location an image reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceScheme {
    /// `http://` or `https://`.
    Remote,
    /// `content://`, an opaque handle into the device's content store.
    LocalContent,
}

impl ReferenceScheme {
    /// Classify a reference, rejecting anything not fetchable.
    pub fn of(reference: &str) -> Result<Self, ImageError> {
        let scheme = reference
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase());
        match scheme.as_deref() {
            Some("http") | Some("https") => Ok(Self::Remote),
            Some("content") => Ok(Self::LocalContent),
            _ => Err(ImageError::UnsupportedScheme(reference.to_string())),
        }
    }
}

/// The image-decode collaborator injected into the renderer.
pub trait ImageResolver {
    /// Resolve one reference to a bitmap with known, non-zero dimensions.
    fn resolve(&self, reference: &str) -> Result<LoadedImage, ImageError>;
}

/// A source of raw image bytes for already-validated references.
///
/// Timeouts belong here: report them as [`ImageError::Timeout`].
pub trait ByteSource {
    fn fetch(&self, scheme: ReferenceScheme, reference: &str) -> Result<Vec<u8>, ImageError>;
}

impl<S: ByteSource + ?Sized> ImageResolver for S {
    fn resolve(&self, reference: &str) -> Result<LoadedImage, ImageError> {
        let scheme = ReferenceScheme::of(reference)?;
        let bytes = self.fetch(scheme, reference)?;
        let image = decode_image_bytes(&bytes)?;
        if image.width_px == 0 || image.height_px == 0 {
            return Err(FitError::ZeroDimension {
                width: image.width_px,
                height: image.height_px,
            }
            .into());
        }
        Ok(image)
    }
}

/// Resolves `content://` references to files under a root directory.
///
/// `content://site-42/photo.jpg` reads `<root>/site-42/photo.jpg`. Remote
/// references are reported unavailable; wrap or replace this source to add
/// network access.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, reference: &str) -> Result<PathBuf, ImageError> {
        let relative = reference
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(reference);
        let mut path = self.root.clone();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." {
                return Err(ImageError::Unavailable(format!(
                    "content reference escapes the store: '{}'",
                    reference
                )));
            }
            path.push(segment);
        }
        Ok(path)
    }
}

impl ByteSource for ContentStore {
    fn fetch(&self, scheme: ReferenceScheme, reference: &str) -> Result<Vec<u8>, ImageError> {
        match scheme {
            ReferenceScheme::Remote => Err(ImageError::Unavailable(format!(
                "no network access configured for '{}'",
                reference
            ))),
            ReferenceScheme::LocalContent => {
                let path = self.path_for(reference)?;
                std::fs::read(&path).map_err(|e| {
                    ImageError::Unavailable(format!(
                        "failed to read '{}': {}",
                        path.display(),
                        e
                    ))
                })
            }
        }
    }
}

/// Sniff the format and load it. JPEG is kept as-is, PNG is decoded.
pub fn decode_image_bytes(data: &[u8]) -> Result<LoadedImage, ImageError> {
    match image::guess_format(data) {
        Ok(image::ImageFormat::Jpeg) => jpeg_passthrough(data),
        Ok(image::ImageFormat::Png) => decode_png(data),
        _ => Err(ImageError::Decode(
            "unsupported image format (expected JPEG or PNG)".to_string(),
        )),
    }
}

/// Size and channel count from a JPEG start-of-frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JpegFrame {
    width: u32,
    height: u32,
    components: u8,
}

fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF)
}

/// Walk the marker segments after SOI up to the first frame header.
fn read_jpeg_frame(data: &[u8]) -> Option<JpegFrame> {
    let mut rest = data.strip_prefix(&[0xFF, 0xD8])?;
    loop {
        match rest {
            // fill byte before a marker
            [0xFF, 0xFF, ..] => rest = &rest[1..],
            [0xFF, marker, len_hi, len_lo, body @ ..] => {
                if is_start_of_frame(*marker) {
                    let [_precision, h_hi, h_lo, w_hi, w_lo, components, ..] = body else {
                        return None;
                    };
                    return Some(JpegFrame {
                        width: u16::from_be_bytes([*w_hi, *w_lo]).into(),
                        height: u16::from_be_bytes([*h_hi, *h_lo]).into(),
                        components: *components,
                    });
                }
                let segment = usize::from(u16::from_be_bytes([*len_hi, *len_lo]));
                rest = rest.get(2 + segment..)?;
            }
            _ => return None,
        }
    }
}

/// The bytes go into the PDF untouched (DCTDecode); only the frame header
/// is read. A zero height or width is rejected by the resolver.
fn jpeg_passthrough(data: &[u8]) -> Result<LoadedImage, ImageError> {
    let frame = read_jpeg_frame(data)
        .ok_or_else(|| ImageError::Decode("JPEG has no readable frame header".to_string()))?;
    let color_space = if frame.components == 1 {
        JpegColorSpace::DeviceGray
    } else {
        JpegColorSpace::DeviceRGB
    };
    Ok(LoadedImage {
        pixel_data: ImagePixelData::Jpeg {
            data: data.to_vec(),
            color_space,
        },
        width_px: frame.width,
        height_px: frame.height,
    })
}

/// Alpha is kept only when some pixel is not fully opaque.
fn decode_png(data: &[u8]) -> Result<LoadedImage, ImageError> {
    let rgba = image::load_from_memory_with_format(data, image::ImageFormat::Png)
        .map_err(|e| ImageError::Decode(format!("failed to decode PNG: {}", e)))?
        .into_rgba8();
    let (width_px, height_px) = rgba.dimensions();
    let pixels = rgba.into_raw();

    let rgb = pixels
        .chunks_exact(4)
        .flat_map(|px| &px[..3])
        .copied()
        .collect();
    let opaque = pixels.chunks_exact(4).all(|px| px[3] == u8::MAX);
    let alpha = (!opaque).then(|| pixels.chunks_exact(4).map(|px| px[3]).collect());

    Ok(LoadedImage {
        pixel_data: ImagePixelData::Decoded { rgb, alpha },
        width_px,
        height_px,
    })
}
