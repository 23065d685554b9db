#[derive(Debug, Clone)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    A3,
    Custom(f32, f32), // width, height in mm
}

impl PageSize {
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::A3 => (297.0, 420.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(18.0)
    }
}

impl Margin {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Margin { top, bottom, left, right }
    }

    pub fn uniform(size: f32) -> Self {
        Margin {
            top: size,
            bottom: size,
            left: size,
            right: size,
        }
    }
}

/// Page geometry for the invoice renderer. All values in millimeters.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margin: Margin,
    /// Vertical space consumed by one item row.
    pub row_height: f32,
    /// When the cursor drops below this, the table continues on a new page.
    pub break_threshold: f32,
    /// Cursor position at the top of a continuation page.
    pub continuation_top: f32,
    pub font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let page_size = PageSize::A4;
        let (_, height) = page_size.dimensions();
        LayoutConfig {
            page_size,
            margin: Margin::default(),
            row_height: 8.0,
            break_threshold: 52.0,
            continuation_top: height - 35.0,
            font_size: 12.0,
        }
    }
}
