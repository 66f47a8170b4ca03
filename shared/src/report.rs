//! Printable task report.
//!
//! Building a report is split in two: [`ReportLayout::build`] positions every
//! piece of text on A4 pages (pure, deterministic for a given timestamp), and
//! [`render_pdf`] turns the layout into PDF bytes through `printpdf`.
//! Coordinates are millimetres measured from the top-left corner.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use printpdf::{BuiltinFont, Color, Greyscale, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::{debug, info};

use crate::dates;
use crate::error::ReportError;
use crate::model::{Task, TaskStats};

pub const REPORT_TITLE: &str = "Task Management Report";
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN_X: f32 = 14.0;
const TITLE_Y: f32 = 20.0;
const GENERATED_Y: f32 = 30.0;
const SUMMARY_Y: [f32; 4] = [40.0, 47.0, 54.0, 61.0];
const HEADER_Y: f32 = 70.0;
const FIRST_ROW_Y: f32 = 76.0;
const ROW_STEP: f32 = 8.0;
/// A row starting below this line goes to a fresh page.
const PAGE_BREAK_Y: f32 = 280.0;
const CONTINUATION_Y: f32 = 20.0;

const COLUMNS: [(&str, f32); 4] = [
    ("Title", 14.0),
    ("Assigned To", 80.0),
    ("Deadline", 130.0),
    ("Status", 170.0),
];

const TITLE_SIZE: f32 = 18.0;
const META_SIZE: f32 = 11.0;
const HEADER_SIZE: f32 = 12.0;
const ROW_SIZE: f32 = 10.0;

/// Fill shade of everything below the title (100 of 255).
const GREY_LEVEL: f32 = 100.0 / 255.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Black,
    Grey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPage {
    pub items: Vec<TextItem>,
}

impl ReportPage {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, tone: Tone) {
        self.items.push(TextItem {
            text: text.into(),
            x,
            y,
            size,
            tone,
        });
    }

    /// Texts in insertion order, handy for assertions and logging.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// Stable per generation instant; becomes the PDF document id.
    pub document_id: String,
    pub unix_timestamp: i64,
    pages: Vec<ReportPage>,
}

impl ReportLayout {
    pub fn build<Tz>(tasks: &[Task], generated_at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let stats = TaskStats::from_tasks(tasks);
        let generated_on = dates::format_timestamp(generated_at);
        let zone = generated_at.timezone();

        let mut first = ReportPage::default();
        first.text(REPORT_TITLE, MARGIN_X, TITLE_Y, TITLE_SIZE, Tone::Black);
        first.text(
            format!("Generated on: {generated_on}"),
            MARGIN_X,
            GENERATED_Y,
            META_SIZE,
            Tone::Grey,
        );

        let summary = [
            format!("Total Tasks: {}", stats.total),
            format!("Pending: {}", stats.pending),
            format!("In Progress: {}", stats.in_progress),
            format!("Completed: {}", stats.completed),
        ];
        for (line, y) in summary.into_iter().zip(SUMMARY_Y) {
            first.text(line, MARGIN_X, y, META_SIZE, Tone::Grey);
        }

        for (label, x) in COLUMNS {
            first.text(label, x, HEADER_Y, HEADER_SIZE, Tone::Grey);
        }

        let mut pages = vec![first];
        let mut y = FIRST_ROW_Y;
        for task in tasks {
            if y > PAGE_BREAK_Y {
                pages.push(ReportPage::default());
                y = CONTINUATION_Y;
            }
            let deadline = dates::format_date(&task.deadline.with_timezone(&zone));
            let cells = [
                task.title.as_str(),
                task.assigned_to.as_str(),
                deadline.as_str(),
                task.status.label(),
            ];
            if let Some(page) = pages.last_mut() {
                for (cell, (_, x)) in cells.into_iter().zip(COLUMNS) {
                    page.text(cell, x, y, ROW_SIZE, Tone::Grey);
                }
            }
            y += ROW_STEP;
        }

        let unix_timestamp = generated_at.timestamp();
        Self {
            document_id: format!("{:032x}", generated_at.timestamp_millis()),
            unix_timestamp,
            pages,
        }
    }

    pub fn pages(&self) -> &[ReportPage] {
        &self.pages
    }
}

/// Renders the layout with the built-in Helvetica font.
pub fn render_pdf(layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let doc = doc.with_document_id(layout.document_id.clone());
    let doc = stamp_dates(doc, layout.unix_timestamp);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    for (index, page) in layout.pages().iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", index + 1),
            );
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, page, &font);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    debug!(pages = layout.pages().len(), bytes = bytes.len(), "report rendered");
    Ok(bytes)
}

fn draw_page(layer: &PdfLayerReference, page: &ReportPage, font: &IndirectFontRef) {
    let mut current = None;
    for item in &page.items {
        if current != Some(item.tone) {
            let level = match item.tone {
                Tone::Black => 0.0,
                Tone::Grey => GREY_LEVEL,
            };
            layer.set_fill_color(Color::Greyscale(Greyscale::new(level, None)));
            current = Some(item.tone);
        }
        // PDF space grows upwards from the bottom edge.
        layer.use_text(
            item.text.as_str(),
            item.size,
            Mm(item.x),
            Mm(PAGE_HEIGHT_MM - item.y),
            font,
        );
    }
}

#[cfg(not(any(target_arch = "wasm32", target_os = "unknown")))]
fn stamp_dates(
    doc: printpdf::PdfDocumentReference,
    unix_timestamp: i64,
) -> printpdf::PdfDocumentReference {
    match printpdf::OffsetDateTime::from_unix_timestamp(unix_timestamp) {
        Ok(at) => doc
            .with_creation_date(at)
            .with_mod_date(at)
            .with_metadata_date(at),
        Err(_) => doc,
    }
}

/// Browser builds keep printpdf's own clock.
#[cfg(any(target_arch = "wasm32", target_os = "unknown"))]
fn stamp_dates(
    doc: printpdf::PdfDocumentReference,
    _unix_timestamp: i64,
) -> printpdf::PdfDocumentReference {
    doc
}

/// Lays out and renders `tasks` in one go.
pub fn generate_task_report<Tz>(
    tasks: &[Task],
    generated_at: &DateTime<Tz>,
) -> Result<Vec<u8>, ReportError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let layout = ReportLayout::build(tasks, generated_at);
    info!(tasks = tasks.len(), pages = layout.pages().len(), "generating task report");
    render_pdf(&layout)
}

/// `task-report-2025-03-05.pdf`
pub fn report_file_name<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("task-report-{}.pdf", dates::iso_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TaskId, TaskStatus};
    use chrono::{FixedOffset, Utc};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn task(n: usize, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(n.to_string()),
            title: format!("Task {n}"),
            description: String::new(),
            deadline: at(2025, 3, 5),
            assigned_to: "Emma Johnson".into(),
            status,
            created_at: at(2025, 1, 1),
            updated_at: at(2025, 1, 2),
        }
    }

    fn items_at(page: &ReportPage, y: f32) -> Vec<&str> {
        page.items
            .iter()
            .filter(|item| item.y == y)
            .map(|item| item.text.as_str())
            .collect()
    }

    #[test]
    fn header_and_summary() {
        let tasks = vec![
            task(1, TaskStatus::InProgress),
            task(2, TaskStatus::Done),
            task(3, TaskStatus::Done),
        ];
        let generated = Utc.with_ymd_and_hms(2025, 3, 1, 9, 5, 7).unwrap();
        let layout = ReportLayout::build(&tasks, &generated);
        let page = &layout.pages()[0];

        assert_eq!(items_at(page, 20.0), [REPORT_TITLE]);
        assert_eq!(items_at(page, 30.0), ["Generated on: 2025-03-01 09:05:07"]);
        assert_eq!(items_at(page, 40.0), ["Total Tasks: 3"]);
        assert_eq!(items_at(page, 47.0), ["Pending: 0"]);
        assert_eq!(items_at(page, 54.0), ["In Progress: 1"]);
        assert_eq!(items_at(page, 61.0), ["Completed: 2"]);
        assert_eq!(items_at(page, 70.0), ["Title", "Assigned To", "Deadline", "Status"]);
        assert_eq!(
            items_at(page, 76.0),
            ["Task 1", "Emma Johnson", "Mar 05, 2025", "In Progress"]
        );
        assert_eq!(items_at(page, 84.0)[0], "Task 2");

        let title = &page.items[0];
        assert_eq!((title.x, title.size, title.tone), (14.0, 18.0, Tone::Black));
        assert!(page.items[1..].iter().all(|item| item.tone == Tone::Grey));
    }

    #[test]
    fn empty_list_has_zero_summary_and_no_rows() {
        let layout = ReportLayout::build(&[], &at(2025, 3, 1));
        assert_eq!(layout.pages().len(), 1);
        let page = &layout.pages()[0];
        assert_eq!(items_at(page, 40.0), ["Total Tasks: 0"]);
        assert!(page.items.iter().all(|item| item.y <= HEADER_Y));
    }

    #[test]
    fn rows_spill_onto_new_pages_without_headers() {
        // 76, 84, .. 276 fit on the first page (26 rows).
        let tasks: Vec<Task> = (1..=27).map(|n| task(n, TaskStatus::Pending)).collect();
        let layout = ReportLayout::build(&tasks, &at(2025, 3, 1));
        assert_eq!(layout.pages().len(), 2);

        assert_eq!(items_at(&layout.pages()[0], 276.0)[0], "Task 26");
        let second = &layout.pages()[1];
        assert_eq!(second.items.len(), 4);
        assert_eq!(items_at(second, 20.0)[0], "Task 27");
        assert!(!second.texts().any(|t| t == "Assigned To"));
    }

    #[test]
    fn deadlines_follow_viewer_zone() {
        let mut late = task(1, TaskStatus::Pending);
        late.deadline = Utc.with_ymd_and_hms(2025, 3, 5, 23, 30, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let generated = at(2025, 3, 1).with_timezone(&tokyo);
        let layout = ReportLayout::build(&[late], &generated);
        assert_eq!(items_at(&layout.pages()[0], 76.0)[2], "Mar 06, 2025");
    }

    #[test]
    fn layout_is_deterministic_per_timestamp() {
        let tasks = vec![task(1, TaskStatus::Pending)];
        let a = ReportLayout::build(&tasks, &at(2025, 3, 1));
        let b = ReportLayout::build(&tasks, &at(2025, 3, 1));
        assert_eq!(a, b);
        assert_ne!(a.document_id, ReportLayout::build(&tasks, &at(2025, 3, 2)).document_id);
    }

    #[test]
    fn renders_pdf_bytes() {
        let tasks: Vec<Task> = (1..=40).map(|n| task(n, TaskStatus::Done)).collect();
        let bytes = generate_task_report(&tasks, &at(2025, 3, 1)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn file_name_uses_local_date() {
        assert_eq!(report_file_name(&at(2025, 3, 5)), "task-report-2025-03-05.pdf");
    }
}
