//! # PDF Serializer
//!
//! Takes the finished pages of a [`Document`] and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. The subset the report needs is
//! small: two standard Type1 fonts, filled paths, text runs and image
//! XObjects. Nothing time-dependent is written, so identical input gives
//! identical bytes.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- catalog, page tree, fonts, then per page:
//! 2 0 obj ... endobj     image XObjects, content stream, page dict
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::config::DocumentInfo;
use crate::error::ReportError;
use crate::font::{winansi, StandardFont};
use crate::image_loader::{ImagePixelData, JpegColorSpace, LoadedImage};
use crate::layout::{Document, DrawCommand, Page};

const FONTS: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];
const PRODUCER: &str = concat!("inspecta ", env!("CARGO_PKG_VERSION"));

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing. Index == object number.
struct PdfBuilder {
    objects: Vec<Vec<u8>>,
}

impl PdfBuilder {
    fn push(&mut self, data: Vec<u8>) -> usize {
        self.objects.push(data);
        self.objects.len() - 1
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a closed document to a PDF byte vector.
    pub fn write(&self, document: &Document, info: &DocumentInfo) -> Result<Vec<u8>, ReportError> {
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog, 2 = Pages, 3.. = fonts
        let mut builder = PdfBuilder {
            objects: vec![Vec::new(), Vec::new(), Vec::new()],
        };

        let font_ids: Vec<(StandardFont, usize)> = FONTS
            .iter()
            .map(|font| {
                let dict = format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                     /Encoding /WinAnsiEncoding >>",
                    font.pdf_name()
                );
                (*font, builder.push(dict.into_bytes()))
            })
            .collect();
        let font_resources = font_ids
            .iter()
            .map(|(font, id)| format!("/{} {} 0 R", font.resource_name(), id))
            .collect::<Vec<_>>()
            .join(" ");

        let mut page_obj_ids: Vec<usize> = Vec::new();
        for (index, page) in document.pages().iter().enumerate() {
            if page.width() == 0 || page.height() == 0 {
                return Err(ReportError::RenderError(format!(
                    "page {} has no area ({}x{})",
                    index + 1,
                    page.width(),
                    page.height()
                )));
            }

            let image_ids: Vec<usize> = page
                .commands()
                .iter()
                .filter_map(|c| match c {
                    DrawCommand::Image { image, .. } => Some(Self::write_image_xobject(&mut builder, image)),
                    _ => None,
                })
                .collect();

            let content = self.build_content_stream(page);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);
            let content_obj_id = builder.push(stream_object("/Filter /FlateDecode", &compressed));

            let mut resources = format!("/Font << {} >>", font_resources);
            if !image_ids.is_empty() {
                let xobjects = image_ids
                    .iter()
                    .enumerate()
                    .map(|(i, id)| format!("/Im{} {} 0 R", i, id))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(resources, " /XObject << {} >>", xobjects);
            }
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Contents {} 0 R /Resources << {} >> >>",
                page.width(),
                page.height(),
                content_obj_id,
                resources
            );
            page_obj_ids.push(builder.push(page_dict.into_bytes()));
        }

        if page_obj_ids.is_empty() {
            return Err(ReportError::RenderError("document has no pages".to_string()));
        }

        builder.objects[1] = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2] = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let info_obj_id = builder.push(Self::build_info_dict(info).into_bytes());

        log::debug!(
            "serialized {} pages into {} PDF objects",
            page_obj_ids.len(),
            builder.objects.len() - 1
        );
        Ok(self.serialize(&builder, info_obj_id))
    }

    fn build_info_dict(info: &DocumentInfo) -> String {
        let mut dict = String::from("<< ");
        let fields = [
            ("Title", &info.title),
            ("Author", &info.author),
            ("Subject", &info.subject),
            ("Creator", &info.creator),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                let _ = write!(dict, "/{} ({}) ", key, Self::encode_text(value));
            }
        }
        let _ = write!(dict, "/Producer ({}) >>", PRODUCER);
        dict
    }

    /// Build the PDF content stream for a single page. Layout coordinates
    /// are top-down; PDF user space is bottom-up.
    fn build_content_stream(&self, page: &Page) -> String {
        let mut stream = String::new();
        let page_height = page.height() as f64;
        let mut image_index = 0;

        for command in page.commands() {
            match command {
                DrawCommand::Text { x, y, text, style } => {
                    let font = StandardFont::for_weight(style.weight);
                    let c = style.color;
                    let _ = write!(
                        stream,
                        "BT\n{:.3} {:.3} {:.3} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                        c.r,
                        c.g,
                        c.b,
                        font.resource_name(),
                        style.size,
                        x,
                        page_height - y,
                        Self::encode_text(text)
                    );
                }

                DrawCommand::RoundedRect {
                    x,
                    y,
                    width,
                    height,
                    radius,
                    fill,
                } => {
                    if fill.a <= 0.0 {
                        continue;
                    }
                    let pdf_y = page_height - y - height;
                    let _ = write!(stream, "q\n{:.3} {:.3} {:.3} rg\n", fill.r, fill.g, fill.b);
                    if *radius > 0.0 {
                        self.write_rounded_rect(&mut stream, *x, pdf_y, *width, *height, *radius);
                    } else {
                        let _ = write!(stream, "{:.2} {:.2} {:.2} {:.2} re\n", x, pdf_y, width, height);
                    }
                    let _ = write!(stream, "f\nQ\n");
                }

                DrawCommand::Image {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    let _ = write!(
                        stream,
                        "q\n{:.4} 0 0 {:.4} {:.2} {:.2} cm\n/Im{} Do\nQ\n",
                        width,
                        height,
                        x,
                        page_height - y - height,
                        image_index
                    );
                    image_index += 1;
                }
            }
        }

        stream
    }

    /// A closed path with all four corners rounded by `r`, using the usual
    /// cubic approximation of a quarter circle.
    fn write_rounded_rect(&self, stream: &mut String, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let k = 0.5522847498;
        let r = r.min(w / 2.0).min(h / 2.0);

        let _ = write!(stream, "{:.2} {:.2} m\n", x + r, y);

        let _ = write!(stream, "{:.2} {:.2} l\n", x + w - r, y);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w - r + r * k,
            y,
            x + w,
            y + r - r * k,
            x + w,
            y + r
        );

        let _ = write!(stream, "{:.2} {:.2} l\n", x + w, y + h - r);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + w,
            y + h - r + r * k,
            x + w - r + r * k,
            y + h,
            x + w - r,
            y + h
        );

        let _ = write!(stream, "{:.2} {:.2} l\n", x + r, y + h);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + r - r * k,
            y + h,
            x,
            y + h - r + r * k,
            x,
            y + h - r
        );

        let _ = write!(stream, "{:.2} {:.2} l\n", x, y + r);
        let _ = write!(
            stream,
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x,
            y + r - r * k,
            x + r - r * k,
            y,
            x + r,
            y
        );

        let _ = write!(stream, "h\n");
    }

    /// Emit the XObject for a photo and return its object id. Decoded
    /// images with transparency get a grayscale soft mask object as well.
    fn write_image_xobject(builder: &mut PdfBuilder, image: &LoadedImage) -> usize {
        let image_dict = |filter: &str, color_space: &str| {
            format!(
                "/Type /XObject /Subtype /Image /Filter /{} /Width {} /Height {} \
                 /ColorSpace /{} /BitsPerComponent 8",
                filter, image.width_px, image.height_px, color_space
            )
        };

        match &image.pixel_data {
            ImagePixelData::Jpeg { data, color_space } => {
                let space = match color_space {
                    JpegColorSpace::DeviceRGB => "DeviceRGB",
                    JpegColorSpace::DeviceGray => "DeviceGray",
                };
                builder.push(stream_object(&image_dict("DCTDecode", space), data))
            }
            ImagePixelData::Decoded { rgb, alpha } => {
                let mut dict = image_dict("FlateDecode", "DeviceRGB");
                if let Some(alpha) = alpha {
                    let mask = stream_object(
                        &image_dict("FlateDecode", "DeviceGray"),
                        &compress_to_vec_zlib(alpha, 6),
                    );
                    let _ = write!(dict, " /SMask {} 0 R", builder.push(mask));
                }
                builder.push(stream_object(&dict, &compress_to_vec_zlib(rgb, 6)))
            }
        }
    }

    /// Encode text as the body of a PDF literal string in WinAnsiEncoding.
    /// Unmappable characters become `?`.
    fn encode_text(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            let b = winansi::encode(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                _ => {
                    // Octal escape for bytes outside ASCII printable range
                    let _ = write!(out, "\\{:03o}", b);
                }
            }
        }
        out
    }

    /// Lay out header, numbered objects, xref table and trailer. Object 0
    /// is the free-list head and is never written.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec();

        let offsets: Vec<usize> = builder
            .objects
            .iter()
            .enumerate()
            .skip(1)
            .map(|(number, body)| {
                let offset = output.len();
                let _ = write!(output, "{} 0 obj\n", number);
                output.extend_from_slice(body);
                output.extend_from_slice(b"\nendobj\n\n");
                offset
            })
            .collect();

        let size = offsets.len() + 1;
        let startxref = output.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for offset in &offsets {
            let _ = write!(xref, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, info_obj_id, startxref
        );
        output.extend_from_slice(xref.as_bytes());
        output
    }
}

/// A stream object: `entries` plus the computed `/Length`, then the body.
fn stream_object(entries: &str, body: &[u8]) -> Vec<u8> {
    let mut data = format!("<< /Length {} {} >>\nstream\n", body.len(), entries).into_bytes();
    data.extend_from_slice(body);
    data.extend_from_slice(b"\nendstream");
    data
}
