//! PDF export: a titled A4 table

use crate::error::{ExportError, ExportResult};
use bureau_core::Record;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
    path::PaintMode,
};
use serde_json::Value;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const TITLE_Y: f32 = 22.0;
const TABLE_TOP: f32 = 30.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const FONT_SIZE: f32 = 8.0;
const CELL_PADDING: f32 = 2.0;
const PT_TO_MM: f32 = 0.352_778;
const LINE_HEIGHT: f32 = FONT_SIZE * PT_TO_MM;
const ROW_HEIGHT: f32 = LINE_HEIGHT + 2.0 * CELL_PADDING;
// Average Helvetica glyph is about half an em wide
const CHAR_WIDTH: f32 = FONT_SIZE * 0.5 * PT_TO_MM;
const LAYER_NAME: &str = "Layer 1";

/// Header fill, dark green
const HEADER_FILL: (u8, u8, u8) = (0, 77, 64);
/// Fill of every other body row, light teal
const ALTERNATE_FILL: (u8, u8, u8) = (224, 242, 241);
const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn pdf_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

/// Text of a PDF cell; missing and null fields are empty
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Equal-width columns spanning the printable width
struct Grid {
    column_width: f32,
    max_chars: usize,
}

impl Grid {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(columns: usize) -> Self {
        let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / columns.max(1) as f32;
        let max_chars = ((column_width - 2.0 * CELL_PADDING) / CHAR_WIDTH).floor().max(1.0) as usize;
        Self {
            column_width,
            max_chars,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn x(&self, column: usize) -> f32 {
        MARGIN + self.column_width * column as f32
    }

    fn fit(&self, text: &str) -> String {
        if text.chars().count() <= self.max_chars {
            return text.to_string();
        }
        let keep = self.max_chars.saturating_sub(3);
        let mut fitted: String = text.chars().take(keep).collect();
        fitted.push_str("...");
        fitted
    }
}

/// Draw one table row whose top edge is `top` millimetres below the page top
fn draw_row(
    layer: &PdfLayerReference,
    grid: &Grid,
    cells: &[String],
    top: f32,
    fill: Option<(u8, u8, u8)>,
    text_color: (u8, u8, u8),
    font: &IndirectFontRef,
) {
    if let Some(fill) = fill {
        layer.set_fill_color(rgb(fill));
        let rect = Rect::new(
            Mm(MARGIN),
            Mm(PAGE_HEIGHT - top - ROW_HEIGHT),
            Mm(PAGE_WIDTH - MARGIN),
            Mm(PAGE_HEIGHT - top),
        )
        .with_mode(PaintMode::Fill);
        layer.add_rect(rect);
    }

    layer.set_fill_color(rgb(text_color));
    let baseline = PAGE_HEIGHT - (top + CELL_PADDING + LINE_HEIGHT * 0.8);
    for (index, text) in cells.iter().enumerate() {
        layer.use_text(
            grid.fit(text),
            FONT_SIZE,
            Mm(grid.x(index) + CELL_PADDING),
            Mm(baseline),
            font,
        );
    }
}

/// Render records as an A4 portrait PDF with `title` above a striped table.
///
/// Rows flow onto new pages as needed; each page repeats the header row.
pub fn to_pdf_document<'a, I>(records: I, columns: &[String], title: &str) -> ExportResult<Vec<u8>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    layer.set_fill_color(rgb(BLACK));
    layer.use_text(
        title,
        TITLE_FONT_SIZE,
        Mm(MARGIN),
        Mm(PAGE_HEIGHT - TITLE_Y),
        &font,
    );

    if !columns.is_empty() {
        let grid = Grid::new(columns.len());
        let mut top = TABLE_TOP;
        draw_row(&layer, &grid, columns, top, Some(HEADER_FILL), WHITE, &bold);
        top += ROW_HEIGHT;

        for (index, record) in records.into_iter().enumerate() {
            if top + ROW_HEIGHT > PAGE_HEIGHT - MARGIN {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
                layer = doc.get_page(next_page).get_layer(next_layer);
                top = MARGIN;
                draw_row(&layer, &grid, columns, top, Some(HEADER_FILL), WHITE, &bold);
                top += ROW_HEIGHT;
            }

            let cells: Vec<String> = columns.iter().map(|c| cell_text(record.get(c))).collect();
            let fill = (index % 2 == 1).then_some(ALTERNATE_FILL);
            draw_row(&layer, &grid, &cells, top, fill, BLACK, &font);
            top += ROW_HEIGHT;
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}
