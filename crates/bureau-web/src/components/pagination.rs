//! Table footer: selection count, rows per page and page navigation

use super::HiddenFields;
use crate::extractors::table_query::keys;
use crate::routes::REPORT_PATH;
use crate::view::PagerView;
use leptos::prelude::*;

/// Previous/next link, rendered inert when there is nowhere to go
fn page_link(label: &'static str, rel: &'static str, href: Option<String>) -> AnyView {
    match href {
        Some(href) => view! { <a class="btn" rel=rel href=href>{label}</a> }.into_any(),
        None => view! {
            <span class="btn disabled" aria-disabled="true">{label}</span>
        }
        .into_any(),
    }
}

/// Pagination component
#[component]
pub fn Pagination(pager: PagerView) -> impl IntoView {
    let PagerView {
        meta,
        prev_href,
        next_href,
        page_size_options,
        page_size_fields,
        selected_count,
        filtered_count,
    } = pager;
    let current_size = meta.per_page;

    view! {
        <div class="table-footer">
            <span class="selection-info">
                {format!("{selected_count} of {filtered_count} row(s) selected.")}
            </span>

            <form class="pagination" method="get" action=REPORT_PATH>
                <HiddenFields fields=page_size_fields />
                <label class="field">
                    "Rows per page"
                    <select name={keys::PAGE_SIZE} data-autosubmit="">
                        {page_size_options
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected={size == current_size}>
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn" type="submit">"Apply"</button>
            </form>

            <div class="pagination">
                {page_link("Previous", "prev", prev_href)}
                <span class="pagination-info">
                    {format!("Page {} of {}", meta.page, meta.total_pages)}
                </span>
                {page_link("Next", "next", next_href)}
            </div>
        </div>
    }
}
