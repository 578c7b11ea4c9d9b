//! Full HTML pages
//!
//! Each `render_*` function produces a complete document as a `String`,
//! including `<!DOCTYPE html>`.

mod bureau_usage;
mod not_found;

pub use bureau_usage::BureauUsagePage;
pub use not_found::NotFoundPage;

use crate::components::Document;
use crate::routes::REPORT_PATH;
use crate::view::ReportPage;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn with_doctype(html: String) -> String {
    // Leptos doesn't emit a DOCTYPE
    format!("<!DOCTYPE html>\n{html}")
}

/// Render the bureau usage report page
pub fn render_report_page(page: ReportPage) -> String {
    let title = page.title.clone();
    let doc = view! {
        <Document title=title active_path=REPORT_PATH.to_string()>
            <BureauUsagePage page=page />
        </Document>
    };
    with_doctype(doc.to_html())
}

/// Render the 404 page for `path`
pub fn render_not_found(path: &str) -> String {
    let path = path.to_string();
    let doc = view! {
        <Document title="Page Not Found".to_string() active_path=String::new()>
            <NotFoundPage path=path />
        </Document>
    };
    with_doctype(doc.to_html())
}
