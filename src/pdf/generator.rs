use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, PdfDocument};

use crate::core::{generate_order_id, InvoiceError, InvoiceResult, LayoutConfig};
use crate::models::Order;

use super::builder::{mm, PageCanvas};
use super::theme::Theme;

const BRAND_NAME: &str = "ORCHID HOME GOODS";
const BRAND_MARK: &str = "ORCHID";
const TAGLINE: &str = "Thank you for your order";

// Vertical drops of the layout, measured from the top of the page down to the
// first table row. The item loop then advances by `LayoutConfig::row_height`.
const HEADER_BAND_H: f32 = 42.0;
const CUSTOMER_TOP_OFFSET: f32 = 56.0;
const CUSTOMER_LINE_STEP: f32 = 7.0;
const PRODUCTS_TITLE_DROP: f32 = 46.0;
const TABLE_HEADER_DROP: f32 = 7.0;
const RULE_DROP: f32 = 3.0;
const FIRST_ROW_DROP: f32 = 6.5;
const TOTAL_DROP: f32 = 10.5;

/// The derived artifact of one render call.
#[derive(Debug, Clone)]
pub struct InvoiceArtifact {
    pub order_id: String,
    pub path: PathBuf,
    pub total: f64,
    pub pages: usize,
}

pub struct InvoiceGenerator {
    output_dir: PathBuf,
    layout: LayoutConfig,
}

impl InvoiceGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        InvoiceGenerator {
            output_dir: output_dir.into(),
            layout: LayoutConfig::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Lay out the invoice and write `<output_dir>/<order-id>.pdf`. The table
    /// continues on a new page when the cursor drops below the break
    /// threshold; headers are not repeated on continuation pages.
    pub fn render(&self, order: &Order) -> InvoiceResult<InvoiceArtifact> {
        order.validate()?;
        fs::create_dir_all(&self.output_dir)?;

        let order_id = generate_order_id();
        let path = self.output_dir.join(format!("{}.pdf", order_id));
        let theme = Theme::pick(&mut rand::thread_rng());

        let (width, height) = self.layout.page_size.dimensions();
        let margin = self.layout.margin.left;
        let body_size = self.layout.font_size;

        let name_x = margin + 3.0;
        let qty_x = width - 86.5;
        let amount_x = width - 27.0;

        let (doc, page, layer) =
            PdfDocument::new(format!("Invoice {}", order_id), mm(width), mm(height), "base");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| InvoiceError::Generation(e.to_string()))?;

        let mut canvas = PageCanvas::new(doc.get_page(page).get_layer(layer), font.clone(), width);
        let mut pages = 1usize;

        // Background and header band
        canvas.set_fill(theme.background).rect(0.0, 0.0, width, height);
        canvas
            .set_fill(theme.header)
            .rect(0.0, height - HEADER_BAND_H, width, HEADER_BAND_H);
        canvas
            .set_fill("#ffffff")
            .text(margin, height - 25.0, 28.0, BRAND_NAME)
            .text(margin, height - 33.5, 14.0, TAGLINE);

        // Watermark
        canvas
            .set_fill("#e8e8e8")
            .text_center(height / 2.0 + 21.0, 70.0, BRAND_MARK);

        // Customer metadata
        let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        let mut y = height - CUSTOMER_TOP_OFFSET;
        let date = chrono::Local::now().format("%d/%m/%Y %H:%M");
        canvas.set_fill(theme.header);
        canvas.text(margin, y, body_size, &format!("Order ID: {}", order_id));
        canvas.text(
            margin,
            y - CUSTOMER_LINE_STEP,
            body_size,
            &format!("Date: {}", date),
        );
        canvas.text(
            margin,
            y - 2.0 * CUSTOMER_LINE_STEP,
            body_size,
            &format!("Name: {}", dash(&order.name)),
        );
        canvas.text(
            margin,
            y - 3.0 * CUSTOMER_LINE_STEP,
            body_size,
            &format!("Phone: {}", dash(&order.phone)),
        );
        canvas.text(
            margin,
            y - 4.0 * CUSTOMER_LINE_STEP,
            body_size,
            &format!("Address: {}", dash(&order.address)),
        );

        // Table title and headers
        y -= PRODUCTS_TITLE_DROP;
        canvas.text(margin, y, 16.0, "Products");

        y -= TABLE_HEADER_DROP;
        canvas.text(name_x, y, body_size, "Product");
        canvas.text_right(qty_x, y, body_size, "Quantity");
        canvas.text_right(amount_x, y, body_size, "Amount");

        y -= RULE_DROP;
        canvas
            .set_stroke(theme.header, 0.5)
            .hline(margin, width - margin, y);
        y -= FIRST_ROW_DROP;

        // Items
        canvas.set_fill("#000000");
        for item in &order.items {
            canvas.text(name_x, y, body_size, &item.name);
            canvas.text_right(
                qty_x,
                y,
                body_size,
                &format!("{} {}", item.qty, item.unit_label()),
            );
            canvas.text_right(amount_x, y, body_size, &format!("Rs {:.2}", item.subtotal()));

            y -= self.layout.row_height;
            if y < self.layout.break_threshold {
                let (p, l) = doc.add_page(mm(width), mm(height), "base");
                canvas = PageCanvas::new(doc.get_page(p).get_layer(l), font.clone(), width);
                canvas.set_fill("#000000");
                pages += 1;
                y = self.layout.continuation_top;
            }
        }

        if order.courier > 0.0 {
            canvas.text(name_x, y, body_size, "Courier Charges");
            canvas.text_right(amount_x, y, body_size, &format!("Rs {:.2}", order.courier));
            y -= self.layout.row_height;
        }

        let total = order.total();

        // Total box
        y -= TOTAL_DROP;
        canvas
            .set_fill(theme.accent)
            .rect(width - 80.0, y - 6.5, 53.0, 10.0);
        canvas
            .set_fill("#000000")
            .text_right(amount_x - 3.0, y - 1.0, 13.0, &format!("Total Rs {:.2}", total));

        // Footer on the last page
        canvas.set_fill("#555555");
        canvas.text_center(23.0, body_size, BRAND_NAME);
        canvas.text_center(
            17.0,
            9.0,
            "Thank you for your business! We look forward to working with you again.",
        );
        canvas.text_center(11.0, 9.0, "Contact: support@orchidhome.example");
        canvas.text_center(6.5, 9.0, "(c) 2026 Orchid Home Goods");

        doc.save(&mut BufWriter::new(File::create(&path)?))
            .map_err(|e| InvoiceError::Generation(e.to_string()))?;

        Ok(InvoiceArtifact {
            order_id,
            path,
            total,
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use tempfile::tempdir;

    fn item(name: &str, price: f64, qty: f64) -> LineItem {
        LineItem {
            name: name.to_string(),
            price,
            qty,
            unit: None,
        }
    }

    fn order_with(items: Vec<LineItem>, courier: f64) -> Order {
        Order {
            name: Some("A".to_string()),
            phone: Some("555-0100".to_string()),
            address: Some("12 Harbor Lane".to_string()),
            items,
            courier,
        }
    }

    /// Rows that fit on the first page before the cursor crosses the break
    /// threshold, derived from the same layout constants the renderer uses.
    fn first_page_rows(layout: &LayoutConfig) -> usize {
        let (_, height) = layout.page_size.dimensions();
        let first_row = height
            - CUSTOMER_TOP_OFFSET
            - PRODUCTS_TITLE_DROP
            - TABLE_HEADER_DROP
            - RULE_DROP
            - FIRST_ROW_DROP;
        ((first_row - layout.break_threshold) / layout.row_height).floor() as usize
    }

    #[test]
    fn renders_pdf_and_computes_total() {
        let dir = tempdir().unwrap();
        let gen = InvoiceGenerator::new(dir.path());

        let order = order_with(vec![item("Rice", 100.0, 2.0), item("Oil", 50.0, 1.0)], 20.0);
        let artifact = gen.render(&order).unwrap();

        assert_eq!(artifact.total, 270.0);
        assert_eq!(artifact.pages, 1);
        assert_eq!(artifact.path, dir.path().join(format!("{}.pdf", artifact.order_id)));

        let bytes = fs::read(&artifact.path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn empty_order_writes_nothing() {
        let dir = tempdir().unwrap();
        let gen = InvoiceGenerator::new(dir.path());

        let err = gen.render(&order_with(vec![], 0.0)).unwrap_err();
        assert!(matches!(err, InvoiceError::Validation(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn breaks_to_a_new_page_at_the_threshold() {
        let dir = tempdir().unwrap();
        let layout = LayoutConfig::default();
        let gen = InvoiceGenerator::new(dir.path()).with_layout(layout.clone());
        let fits = first_page_rows(&layout);

        let exactly_full: Vec<_> = (0..fits).map(|i| item(&format!("Item {}", i), 10.0, 1.0)).collect();
        assert_eq!(gen.render(&order_with(exactly_full, 0.0)).unwrap().pages, 1);

        let one_over: Vec<_> = (0..fits + 1).map(|i| item(&format!("Item {}", i), 10.0, 1.0)).collect();
        assert_eq!(gen.render(&order_with(one_over, 0.0)).unwrap().pages, 2);
    }

    #[test]
    fn total_survives_pagination() {
        let dir = tempdir().unwrap();
        let gen = InvoiceGenerator::new(dir.path());

        let items: Vec<_> = (0..60).map(|i| item(&format!("Item {}", i), 7.5, 2.0)).collect();
        let artifact = gen.render(&order_with(items, 20.0)).unwrap();

        assert!(artifact.pages > 1);
        assert_eq!(artifact.total, 60.0 * 7.5 * 2.0 + 20.0);
    }
}
