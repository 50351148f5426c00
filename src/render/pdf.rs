//! PDF writer
//!
//! Places layout blocks top to bottom on A4 pages using the builtin
//! Helvetica fonts. Text wraps on an estimated glyph width, and a block that
//! does not fit the remaining space starts a new page. Coordinates are in
//! millimetres from the bottom-left corner of the page.
//!
//! The builtin fonts only cover Latin-1. Typographic quotes and dashes are
//! written as their ASCII forms; anything else outside Latin-1 (CJK, emoji)
//! is written as `?`.

use std::borrow::Cow;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Greyscale, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Px,
    Rect, Rgb,
};
use tracing::debug;

use super::chart::{ChartImage, slice_color};
use super::layout::Block;
use crate::error::Result;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.4;
/// Average Helvetica advance width as a fraction of the font size
const AVG_CHAR_WIDTH: f32 = 0.5;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 14.0;
const SUBHEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

const SPACER_HEIGHT: f32 = 4.0;
const ROW_HEIGHT: f32 = 8.0;
const CELL_PADDING: f32 = 2.0;
const SWATCH_SIZE: f32 = 4.0;

/// Resolution the chart bitmap is placed at
const CHART_DPI: f32 = 144.0;

/// Write `blocks` into a PDF document titled `title`
pub fn write(title: &str, blocks: &[Block]) -> Result<Vec<u8>> {
    let (bytes, _) = write_pages(title, blocks)?;
    Ok(bytes)
}

/// Write the document and report how many pages it took
pub(crate) fn write_pages(title: &str, blocks: &[Block]) -> Result<(Vec<u8>, usize)> {
    let mut writer = Writer::new(title)?;
    for (i, block) in blocks.iter().enumerate() {
        writer.keep_with_next(block, blocks.get(i + 1));
        writer.block(block);
    }
    writer.finish()
}

struct Writer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Distance of the next free line from the page bottom
    cursor: f32,
    pages: usize,
}

impl Writer {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn finish(self) -> Result<(Vec<u8>, usize)> {
        let pages = self.pages;
        let bytes = self.doc.save_to_bytes()?;
        debug!(pages, bytes = bytes.len(), "wrote pdf");
        Ok((bytes, pages))
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Title(text) => {
                self.text(text, TITLE_SIZE, true, true);
                self.space(CELL_PADDING);
                self.rule();
            }
            Block::Heading(text) => self.text(text, HEADING_SIZE, true, false),
            Block::SubHeading(text) => self.text(text, SUBHEADING_SIZE, true, false),
            Block::Paragraph(text) => self.text(text, BODY_SIZE, false, false),
            Block::Table { header, rows } => self.table(header, rows),
            Block::Chart { image, legend } => self.chart(image, legend),
            Block::Spacer => self.space(SPACER_HEIGHT),
        }
    }

    /// Move a heading to a new page unless the start of `next` fits below it
    fn keep_with_next(&mut self, block: &Block, next: Option<&Block>) {
        let heading = match block {
            Block::Heading(text) => text_height(text, HEADING_SIZE),
            Block::SubHeading(text) => text_height(text, SUBHEADING_SIZE),
            _ => return,
        };
        let lead = next.map_or(0.0, lead_height);
        if heading + lead <= PAGE_HEIGHT - 2.0 * MARGIN {
            self.ensure_space(heading + lead);
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages + 1),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = PAGE_HEIGHT - MARGIN;
        self.pages += 1;
    }

    /// Start a new page unless `height` still fits above the bottom margin
    fn ensure_space(&mut self, height: f32) {
        if self.cursor - height < MARGIN {
            self.new_page();
        }
    }

    fn space(&mut self, height: f32) {
        // Vertical space at a page break is dropped
        self.cursor = (self.cursor - height).max(MARGIN);
    }

    fn font(&self, bold: bool) -> &IndirectFontRef {
        if bold { &self.bold } else { &self.regular }
    }

    fn text(&mut self, text: &str, size: f32, bold: bool, centered: bool) {
        let line_height = line_height(size);
        for line in wrap(&printable(text), max_chars(CONTENT_WIDTH, size)) {
            self.ensure_space(line_height);
            self.cursor -= line_height;

            let x = if centered {
                MARGIN + (CONTENT_WIDTH - text_width(&line, size)).max(0.0) / 2.0
            } else {
                MARGIN
            };
            let baseline = self.cursor + line_height * 0.25;
            self.layer
                .use_text(line, size, Mm(x), Mm(baseline), self.font(bold));
        }
    }

    fn table(&mut self, header: &[String], rows: &[Vec<String>]) {
        if header.is_empty() {
            return;
        }
        let column_width = CONTENT_WIDTH / header.len() as f32;

        self.ensure_space(table_lead_height(rows));
        self.row(header, column_width, true);

        for row in rows {
            if self.cursor - ROW_HEIGHT < MARGIN {
                self.new_page();
                self.row(header, column_width, true);
            }
            self.row(row, column_width, false);
        }
    }

    fn row(&mut self, cells: &[String], column_width: f32, header: bool) {
        let top = self.cursor;
        let bottom = top - ROW_HEIGHT;
        let max = max_chars(column_width - 2.0 * CELL_PADDING, BODY_SIZE);

        self.layer.set_outline_color(black());
        self.layer.set_outline_thickness(0.5);

        for (i, cell) in cells.iter().enumerate() {
            let left = MARGIN + column_width * i as f32;
            let mode = if header {
                self.layer
                    .set_fill_color(Color::Greyscale(Greyscale::new(0.85, None)));
                PaintMode::FillStroke
            } else {
                PaintMode::Stroke
            };
            self.layer.add_rect(
                Rect::new(Mm(left), Mm(bottom), Mm(left + column_width), Mm(top)).with_mode(mode),
            );

            self.layer.set_fill_color(black());
            let text = truncate(&printable(cell), max);
            self.layer.use_text(
                text,
                BODY_SIZE,
                Mm(left + CELL_PADDING),
                Mm(bottom + ROW_HEIGHT * 0.3),
                self.font(header),
            );
        }

        self.cursor = bottom;
    }

    fn chart(&mut self, image: &ChartImage, legend: &[String]) {
        let width = px_to_mm(image.width);
        let height = px_to_mm(image.height);

        self.ensure_space(height);
        let bottom = self.cursor - height;
        let left = MARGIN + (CONTENT_WIDTH - width).max(0.0) / 2.0;

        let xobject = ImageXObject {
            width: Px(image.width as usize),
            height: Px(image.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: image.rgb.clone(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        };
        Image::from(xobject).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(left)),
                translate_y: Some(Mm(bottom)),
                dpi: Some(CHART_DPI),
                ..Default::default()
            },
        );
        self.cursor = bottom;
        self.space(SPACER_HEIGHT);

        let line_height = line_height(BODY_SIZE);
        for (i, entry) in legend.iter().enumerate() {
            self.ensure_space(line_height);
            self.cursor -= line_height;

            let (r, g, b) = slice_color(i);
            self.layer.set_fill_color(Color::Rgb(Rgb::new(
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
                None,
            )));
            self.layer.add_rect(
                Rect::new(
                    Mm(left),
                    Mm(self.cursor + 0.5),
                    Mm(left + SWATCH_SIZE),
                    Mm(self.cursor + 0.5 + SWATCH_SIZE),
                )
                .with_mode(PaintMode::Fill),
            );

            self.layer.set_fill_color(black());
            self.layer.use_text(
                printable(entry),
                BODY_SIZE,
                Mm(left + SWATCH_SIZE + CELL_PADDING),
                Mm(self.cursor + line_height * 0.25),
                &self.regular,
            );
        }
    }

    /// Horizontal rule across the content width at the cursor
    fn rule(&mut self) {
        self.layer.set_outline_color(black());
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.cursor)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(self.cursor)), false),
            ],
            is_closed: false,
        });
    }
}

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * LINE_SPACING
}

/// Height of `text` wrapped to the content width
fn text_height(text: &str, size: f32) -> f32 {
    wrap(text, max_chars(CONTENT_WIDTH, size)).len() as f32 * line_height(size)
}

/// Height of the part of `block` that must share a page with a heading above it
fn lead_height(block: &Block) -> f32 {
    match block {
        Block::Title(_) | Block::Spacer => 0.0,
        Block::Heading(_) => line_height(HEADING_SIZE),
        Block::SubHeading(_) => line_height(SUBHEADING_SIZE),
        Block::Paragraph(_) => line_height(BODY_SIZE),
        Block::Table { rows, .. } => table_lead_height(rows),
        Block::Chart { image, .. } => px_to_mm(image.height),
    }
}

/// Header row plus the first body row, if any
fn table_lead_height(rows: &[Vec<String>]) -> f32 {
    if rows.is_empty() { ROW_HEIGHT } else { 2.0 * ROW_HEIGHT }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn px_to_mm(px: u32) -> f32 {
    px as f32 / CHART_DPI * 25.4
}

/// Estimated rendered width of `text` in millimetres
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_CHAR_WIDTH * PT_TO_MM
}

/// How many characters of the given size fit in `width` millimetres
fn max_chars(width: f32, size: f32) -> usize {
    ((width / (size * AVG_CHAR_WIDTH * PT_TO_MM)).floor() as usize).max(1)
}

/// `text` restricted to characters the builtin fonts can draw
fn printable(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}')) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => out.push(c),
            '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{2032}' => out.push('\''),
            '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\t' | '\n' | '\r' => out.push(' '),
            _ => out.push('?'),
        }
    }
    Cow::Owned(out)
}

/// Cut `text` to at most `max` characters, marking the cut with `...`
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Greedy word wrap to lines of at most `max` characters
///
/// Words longer than a line are split. Always returns at least one line.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > max {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(max);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let len = chars.len();
        if current_len > 0 && current_len + 1 + len > max {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
