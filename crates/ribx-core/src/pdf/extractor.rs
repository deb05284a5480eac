//! PDF text and image extraction using lopdf and pdf-extract.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, trace};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))
    }

    /// Scan every object in the document for decodable images, in
    /// object order. Scanned PDFs usually store one full-page image per
    /// page, so this doubles as a page-image fallback.
    fn extract_all_images(&self) -> Vec<DynamicImage> {
        let doc = match self.document.as_ref() {
            Some(d) => d,
            None => return Vec::new(),
        };

        let mut images = Vec::new();
        for (_id, object) in doc.objects.iter() {
            if let Some(img) = self.try_extract_image_from_object(doc, object) {
                images.push(img);
            }
        }

        debug!("found {} image(s) in document", images.len());
        images
    }

    fn try_extract_image_from_object(&self, doc: &Document, obj: &Object) -> Option<DynamicImage> {
        let Object::Stream(stream) = obj else {
            return None;
        };
        let dict = &stream.dict;

        let subtype = dict.get(b"Subtype").ok()?;
        if subtype.as_name().ok()? != b"Image" {
            return None;
        }

        let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
        let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;
        trace!("image object: {}x{}", width, height);

        let data = match stream.decompressed_content() {
            Ok(d) => d,
            Err(_) => stream.content.clone(),
        };

        if let Ok(filter) = dict.get(b"Filter") {
            let filter_name = match filter {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) if !arr.is_empty() => {
                    arr.first().and_then(|o| o.as_name().ok())
                }
                _ => None,
            };

            match filter_name {
                Some(b"DCTDecode") => {
                    // JPEG stream, decode the raw content directly.
                    return image::load_from_memory_with_format(
                        &stream.content,
                        image::ImageFormat::Jpeg,
                    )
                    .ok();
                }
                Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                    trace!("unsupported image codec, skipping");
                    return None;
                }
                _ => {}
            }
        }

        let color_space = dict
            .get(b"ColorSpace")
            .ok()
            .and_then(|o| match o {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
                Object::Reference(r) => doc.get_object(*r).ok().and_then(|o| o.as_name().ok()),
                _ => None,
            })
            .unwrap_or(b"DeviceRGB");

        let bits = dict
            .get(b"BitsPerComponent")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(8) as u8;

        create_image_from_raw(&data, width, height, color_space, bits)
    }

    /// Get the resources dictionary for a page, walking up the page
    /// tree for inherited resources.
    fn get_page_resources(&self, doc: &Document, node_id: ObjectId) -> Option<lopdf::Dictionary> {
        let node = doc.get_object(node_id).ok()?;
        let Object::Dictionary(dict) = node else {
            return None;
        };

        if let Ok(resources) = dict.get(b"Resources") {
            if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                return Some(res_dict.clone());
            }
        }

        if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
            return self.get_page_resources(doc, *parent_id);
        }
        None
    }

    /// Extract embedded images from a page's XObjects.
    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>> {
        let doc = self.document()?;

        let pages = doc.get_pages();
        let page_id = pages.get(&page).ok_or(PdfError::InvalidPage(page))?;

        let mut images = Vec::new();
        if let Some(resources) = self.get_page_resources(doc, *page_id) {
            if let Ok(xobjects) = resources.get(b"XObject") {
                if let Ok((_, Object::Dictionary(xobj_dict))) = doc.dereference(xobjects) {
                    for (_name, obj_ref) in xobj_dict.iter() {
                        if let Ok((_, obj)) = doc.dereference(obj_ref) {
                            if let Some(img) = self.try_extract_image_from_object(doc, obj) {
                                images.push(img);
                            }
                        }
                    }
                }
            }
        }

        debug!("extracted {} image(s) from page {}", images.len(), page);
        Ok(images)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs encrypted with an empty password.
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} page(s)", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        // pdf-extract only yields the whole document; split it into
        // per-page blocks proportionally by line count.
        let full_text = self.extract_text()?;
        let lines: Vec<&str> = full_text.lines().collect();
        let page_count = self.page_count() as usize;

        if page_count == 0 {
            return Ok(String::new());
        }

        let lines_per_page = lines.len() / page_count;
        let start = ((page - 1) as usize) * lines_per_page;
        let end = if (page as usize) == page_count {
            lines.len()
        } else {
            (page as usize) * lines_per_page
        };

        Ok(lines[start.min(lines.len())..end.min(lines.len())].join("\n"))
    }

    fn render_page(&self, page: u32, zoom: f32) -> Result<DynamicImage> {
        // Scanned pages carry their bitmap as an embedded image; use the
        // page's own XObject first, then fall back to document order.
        let image = match self.extract_images(page)?.into_iter().next() {
            Some(img) => img,
            None => {
                let mut all_images = self.extract_all_images();
                let page_idx = (page - 1) as usize;
                if page_idx < all_images.len() {
                    all_images.swap_remove(page_idx)
                } else {
                    all_images.into_iter().next().ok_or_else(|| {
                        PdfError::ImageExtraction(format!("no image found for page {}", page))
                    })?
                }
            }
        };

        if (zoom - 1.0).abs() < f32::EPSILON {
            return Ok(image);
        }

        let (width, height) = image.dimensions();
        let scaled_w = ((width as f32) * zoom).round().max(1.0) as u32;
        let scaled_h = ((height as f32) * zoom).round().max(1.0) as u32;
        trace!(
            "scaling page {} from {}x{} to {}x{}",
            page, width, height, scaled_w, scaled_h
        );
        Ok(image.resize_exact(scaled_w, scaled_h, FilterType::Lanczos3))
    }
}

/// Decode an uncompressed RGB or grayscale sample buffer into an image.
fn create_image_from_raw(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
    bits_per_component: u8,
) -> Option<DynamicImage> {
    if bits_per_component != 8 {
        trace!("unsupported bits per component: {}", bits_per_component);
        return None;
    }

    let expected_rgb = (width * height * 3) as usize;
    let expected_gray = (width * height) as usize;

    if (color_space == b"DeviceRGB" || color_space == b"RGB") && data.len() >= expected_rgb {
        let mut rgba_data = Vec::with_capacity((width * height * 4) as usize);
        for chunk in data[..expected_rgb].chunks_exact(3) {
            rgba_data.extend_from_slice(chunk);
            rgba_data.push(255);
        }
        return ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba_data)
            .map(DynamicImage::ImageRgba8);
    }

    if (color_space == b"DeviceGray" || color_space == b"G") && data.len() >= expected_gray {
        let mut rgba_data = Vec::with_capacity((width * height * 4) as usize);
        for &gray in &data[..expected_gray] {
            rgba_data.extend_from_slice(&[gray, gray, gray, 255]);
        }
        return ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba_data)
            .map(DynamicImage::ImageRgba8);
    }

    trace!(
        "could not decode raw image: data_len={}, {}x{}",
        data.len(),
        width,
        height
    );
    None
}
