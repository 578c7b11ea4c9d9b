//! The report table: headers, rows and cells

use super::{ICON_DOTS, Icon};
use crate::view::{BodyRow, HeaderCell, HeaderKind};
use bureau_table::{CellContent, PageSelection, SortDirection};
use leptos::prelude::*;

fn aria_checked(selection: PageSelection) -> &'static str {
    match selection {
        PageSelection::All => "true",
        PageSelection::Some => "mixed",
        PageSelection::None => "false",
    }
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "↑",
        Some(SortDirection::Desc) => "↓",
        None => "↕",
    }
}

fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}

#[component]
fn TableHeader(cell: HeaderCell) -> impl IntoView {
    match cell.kind {
        HeaderKind::SelectAll { selection, href } => {
            let checked = aria_checked(selection);
            let mark = match selection {
                PageSelection::All => "✓",
                PageSelection::Some => "−",
                PageSelection::None => "",
            };
            view! {
                <th>
                    <a class="checkbox" href=href role="checkbox" aria-checked=checked aria-label="Select all">
                        {mark}
                    </a>
                </th>
            }
            .into_any()
        }
        HeaderKind::Sortable { direction, href } => view! {
            <th aria-sort={aria_sort(direction)} data-column=cell.id>
                <a href=href>
                    {cell.label}
                    <span class="sort-indicator">{sort_indicator(direction)}</span>
                </a>
            </th>
        }
        .into_any(),
        HeaderKind::Plain => view! { <th>{cell.label}</th> }.into_any(),
    }
}

/// One table cell
#[component]
fn TableCell(
    content: CellContent,
    /// Selection link of the row, used by the checkbox cell
    toggle_href: String,
) -> impl IntoView {
    match content {
        CellContent::Checkbox { checked } => {
            let state = if checked { "true" } else { "false" };
            view! {
                <td>
                    <a class="checkbox" href=toggle_href role="checkbox" aria-checked=state aria-label="Select row">
                        {if checked { "✓" } else { "" }}
                    </a>
                </td>
            }
            .into_any()
        }
        CellContent::Text { text } => view! { <td class="truncate">{text}</td> }.into_any(),
        CellContent::Highlighted { segments } => view! {
            <td class="truncate">
                {segments
                    .into_iter()
                    .map(|segment| {
                        if segment.emphasized {
                            view! { <mark>{segment.text}</mark> }.into_any()
                        } else {
                            view! { <span>{segment.text}</span> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()}
            </td>
        }
        .into_any(),
        CellContent::Badge { variant, label } => view! {
            <td>
                <span class=format!("badge badge-{}", variant.as_str())>{label}</span>
            </td>
        }
        .into_any(),
        CellContent::Date { text } => view! { <td>{text}</td> }.into_any(),
        CellContent::Currency { text } => view! { <td class="numeric">{text}</td> }.into_any(),
        CellContent::Actions { user_id, title } => view! {
            <td>
                <details class="dropdown">
                    <summary class="btn" aria-label="Open menu">
                        <Icon path=ICON_DOTS />
                    </summary>
                    <div class="menu" role="menu">
                        <strong>"Actions"</strong>
                        <button type="button" data-copy=user_id.unwrap_or_default()>
                            "Copy User ID"
                        </button>
                        <button type="button" data-details=title.unwrap_or_default()>
                            "View Details"
                        </button>
                        <button type="button" disabled=true>"Edit Record"</button>
                        <button type="button" disabled=true>"Delete Record"</button>
                    </div>
                </details>
            </td>
        }
        .into_any(),
    }
}

/// Table of the current page; `column_count` sizes the empty row
#[component]
pub fn DataTable(headers: Vec<HeaderCell>, rows: Vec<BodyRow>, column_count: usize) -> impl IntoView {
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td class="empty" colspan=column_count.to_string()>"No results."</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|row| {
                let class = if row.selected { "selected" } else { "" };
                let toggle_href = row.toggle_href;
                view! {
                    <tr class=class data-row=row.id.to_string()>
                        {row
                            .cells
                            .into_iter()
                            .map(|content| {
                                view! { <TableCell content=content toggle_href=toggle_href.clone() /> }
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers
                        .into_iter()
                        .map(|cell| view! { <TableHeader cell=cell /> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
