use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{IndirectFontRef, Line, Mm, PdfLayerReference, Point, Polygon};

use super::theme::hex_color;

const PT_TO_MM: f32 = 0.352_778;

pub(crate) fn mm(v: f32) -> Mm {
    Mm(v as _)
}

/// Thin canvas over one printpdf layer: filled rectangles, rules and
/// left/right/center-anchored text, all positioned in millimeters from the
/// bottom-left corner.
pub struct PageCanvas {
    layer: PdfLayerReference,
    font: IndirectFontRef,
    page_width: f32,
}

impl PageCanvas {
    pub fn new(layer: PdfLayerReference, font: IndirectFontRef, page_width: f32) -> Self {
        PageCanvas {
            layer,
            font,
            page_width,
        }
    }

    pub fn set_fill(&self, hex: &str) -> &Self {
        self.layer.set_fill_color(hex_color(hex));
        self
    }

    pub fn set_stroke(&self, hex: &str, thickness: f32) -> &Self {
        self.layer.set_outline_color(hex_color(hex));
        self.layer.set_outline_thickness(thickness as _);
        self
    }

    /// Rectangle filled with the current fill color; (x, y) is the lower-left
    /// corner.
    pub fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> &Self {
        let ring = vec![
            (Point::new(mm(x), mm(y)), false),
            (Point::new(mm(x + width), mm(y)), false),
            (Point::new(mm(x + width), mm(y + height)), false),
            (Point::new(mm(x), mm(y + height)), false),
        ];
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        self
    }

    pub fn hline(&self, x1: f32, x2: f32, y: f32) -> &Self {
        let line = Line {
            points: vec![
                (Point::new(mm(x1), mm(y)), false),
                (Point::new(mm(x2), mm(y)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
        self
    }

    pub fn text(&self, x: f32, y: f32, font_size: f32, text: &str) -> &Self {
        self.layer
            .use_text(text, font_size as _, mm(x), mm(y), &self.font);
        self
    }

    /// Text whose right edge sits at `right_x`.
    pub fn text_right(&self, right_x: f32, y: f32, font_size: f32, text: &str) -> &Self {
        let x = right_x - approx_width_mm(text, font_size);
        self.text(x, y, font_size, text)
    }

    /// Text centered on the page width.
    pub fn text_center(&self, y: f32, font_size: f32, text: &str) -> &Self {
        let x = (self.page_width - approx_width_mm(text, font_size)) / 2.0;
        self.text(x, y, font_size, text)
    }
}

/// Builtin fonts carry no metrics, so anchored text uses a coarse average
/// Helvetica glyph width of half an em.
fn approx_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}
