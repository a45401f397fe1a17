use crate::encoding::encode_win_ansi;
use crate::error::RenderError;
use crate::jpeg;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use sectorbrief_fonts::FontLibrary;
use sectorbrief_traits::{Surface, SurfaceError};
use sectorbrief_types::{Color, FontId, Rect};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Circle-to-Bézier approximation constant for rounded corners.
const ARC_K: f32 = 0.552_284_75;

/// Graphics state tracked per content stream, so redundant operators are
/// not emitted. Reset on every page break: each content stream starts
/// from the PDF default state.
#[derive(Default, Clone)]
struct PageState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// An accumulating PDF drawing surface.
///
/// One canvas produces one document: draw onto the current page, call
/// [`PdfCanvas::show_page`] to close it, and [`PdfCanvas::finish`] to get
/// the finalized bytes. Nothing is shared between canvases, so concurrent
/// document generations need no coordination.
pub struct PdfCanvas {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: Arc<FontLibrary>,
    font_map: HashMap<String, String>,
    image_count: usize,
    content: Content,
    state: PageState,
    page_width: f32,
    page_height: f32,
}

impl PdfCanvas {
    pub fn new(
        page_width: f32,
        page_height: f32,
        fonts: Arc<FontLibrary>,
    ) -> Result<Self, RenderError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        let mut font_map = HashMap::new();
        for (i, face) in fonts.registered_faces().iter().enumerate() {
            let internal_name = format!("F{}", i + 1);
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name.clone(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
            font_map.insert(face.postscript_name.clone(), internal_name);
        }

        let resources_dict = dictionary! {
            "Font" => Object::Dictionary(font_dict),
        };
        document
            .objects
            .insert(resources_id, Object::Dictionary(resources_dict));

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        };
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Ok(Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts,
            font_map,
            image_count: 0,
            content: Content { operations: vec![] },
            state: PageState::default(),
            page_width,
            page_height,
        })
    }

    fn push_op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn color_operands(color: &Color) -> Vec<Object> {
        vec![
            (color.r as f32 / 255.0).into(),
            (color.g as f32 / 255.0).into(),
            (color.b as f32 / 255.0).into(),
        ]
    }

    fn set_font_op(&mut self, font: &FontId, size: f32) {
        let postscript_name = self.fonts.postscript_name(font);
        let internal_name = match self.font_map.get(&postscript_name) {
            Some(name) => name.clone(),
            None => {
                log::warn!(
                    "Font '{}' was not in the canvas font map; substituting F1",
                    postscript_name
                );
                "F1".to_string()
            }
        };
        if self.state.font_name != internal_name || self.state.font_size != size {
            self.push_op("Tf", vec![internal_name.as_str().into(), size.into()]);
            self.state.font_name = internal_name;
            self.state.font_size = size;
        }
    }

    /// Closes the current page and starts a fresh one.
    pub fn show_page(&mut self) -> Result<(), RenderError> {
        let content = std::mem::replace(&mut self.content, Content { operations: vec![] });
        self.state = PageState::default();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed_content = encoder.finish()?;
        let content_stream =
            Stream::new(dictionary! {"Filter" => "FlateDecode"}, compressed_content);
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page_width.into(),
                self.page_height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Finalizes the document and returns its bytes. A page with pending
    /// operations is closed first.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        if !self.content.operations.is_empty() {
            self.show_page()?;
        }

        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id)
        {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i32);
        }

        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        Ok(buffer)
    }

    fn add_image_xobject(&mut self, data: &[u8]) -> Result<String, RenderError> {
        let info = jpeg::parse_header(data).ok_or_else(|| {
            RenderError::UnsupportedImage("only JPEG data can be embedded".to_string())
        })?;
        let color_space = match info.components {
            1 => "DeviceGray",
            4 => "DeviceCMYK",
            _ => "DeviceRGB",
        };
        let image_stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => info.width as i64,
                "Height" => info.height as i64,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            data.to_vec(),
        );
        let image_id = self.document.add_object(image_stream);

        self.image_count += 1;
        let name = format!("Im{}", self.image_count);

        let resources = self
            .document
            .get_object_mut(self.resources_id)?
            .as_dict_mut()?;
        if !resources.has(b"XObject") {
            resources.set("XObject", Object::Dictionary(Dictionary::new()));
        }
        if let Ok(Object::Dictionary(xobjects)) = resources.get_mut(b"XObject") {
            xobjects.set(name.as_bytes(), Object::Reference(image_id));
        }
        Ok(name)
    }
}

impl Surface for PdfCanvas {
    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color.as_ref() != Some(&color) {
            self.push_op("rg", Self::color_operands(&color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color.as_ref() != Some(&color) {
            self.push_op("RG", Self::color_operands(&color));
            self.state.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push_op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.push_op(
            "re",
            vec![
                rect.x.into(),
                rect.y.into(),
                rect.width.into(),
                rect.height.into(),
            ],
        );
        self.push_op("f", vec![]);
    }

    fn round_rect(&mut self, rect: Rect, corner_radius: f32) {
        let r = corner_radius
            .min(rect.width / 2.0)
            .min(rect.height / 2.0)
            .max(0.0);
        let k = ARC_K * r;
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

        self.push_op("m", vec![(x0 + r).into(), y0.into()]);
        self.push_op("l", vec![(x1 - r).into(), y0.into()]);
        self.push_op(
            "c",
            vec![
                (x1 - r + k).into(), y0.into(),
                x1.into(), (y0 + r - k).into(),
                x1.into(), (y0 + r).into(),
            ],
        );
        self.push_op("l", vec![x1.into(), (y1 - r).into()]);
        self.push_op(
            "c",
            vec![
                x1.into(), (y1 - r + k).into(),
                (x1 - r + k).into(), y1.into(),
                (x1 - r).into(), y1.into(),
            ],
        );
        self.push_op("l", vec![(x0 + r).into(), y1.into()]);
        self.push_op(
            "c",
            vec![
                (x0 + r - k).into(), y1.into(),
                x0.into(), (y1 - r + k).into(),
                x0.into(), (y1 - r).into(),
            ],
        );
        self.push_op("l", vec![x0.into(), (y0 + r).into()]);
        self.push_op(
            "c",
            vec![
                x0.into(), (y0 + r - k).into(),
                (x0 + r - k).into(), y0.into(),
                (x0 + r).into(), y0.into(),
            ],
        );
        // Close, fill, and stroke in one operator.
        self.push_op("b", vec![]);
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str, font: &FontId, size: f32) {
        if text.is_empty() {
            return;
        }
        self.push_op("BT", vec![]);
        self.set_font_op(font, size);
        self.push_op("Td", vec![x.into(), y.into()]);
        self.push_op(
            "Tj",
            vec![Object::String(
                encode_win_ansi(text),
                StringFormat::Literal,
            )],
        );
        self.push_op("ET", vec![]);
    }

    fn draw_image(&mut self, data: &[u8], rect: Rect) -> Result<(), SurfaceError> {
        let name = self
            .add_image_xobject(data)
            .map_err(|e| SurfaceError::UnsupportedImage(e.to_string()))?;
        self.push_op("q", vec![]);
        self.push_op(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        );
        self.push_op("Do", vec![Object::Name(name.into_bytes())]);
        self.push_op("Q", vec![]);
        Ok(())
    }
}
