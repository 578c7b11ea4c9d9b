//! Table toolbar: global search, column filters, visibility and export menus

use super::{ICON_COLUMNS, ICON_DOWNLOAD, ICON_FUNNEL, Icon};
use crate::extractors::table_query::keys;
use crate::links::QueryPairs;
use crate::routes::REPORT_PATH;
use crate::view::{ExportLink, FilterControl, VisibilityToggle};
use bureau_table::FilterInput;
use leptos::prelude::*;

/// Hidden inputs carrying the rest of the view through a form
#[component]
pub fn HiddenFields(fields: QueryPairs) -> impl IntoView {
    fields
        .into_iter()
        .map(|(name, value)| view! { <input type="hidden" name=name value=value /> })
        .collect::<Vec<_>>()
}

#[component]
fn FilterField(control: FilterControl) -> impl IntoView {
    let FilterControl {
        name,
        label,
        value,
        input,
    } = control;

    let field = match input {
        FilterInput::Text => view! {
            <input
                type="text"
                name=name
                value=value
                placeholder=format!("Filter {}...", label.to_lowercase())
            />
        }
        .into_any(),
        FilterInput::Select(options) => view! {
            <select name=name>
                <option value="" selected={value.is_empty()}>"All"</option>
                {options
                    .into_iter()
                    .map(|option| {
                        let selected = option == value;
                        let option_value = option.clone();
                        view! { <option value=option_value selected=selected>{option}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
    };

    view! {
        <label class="field">
            {label}
            {field}
        </label>
    }
}

/// Controls above the table
#[component]
pub fn TableToolbar(
    global_filter: String,
    filters: Vec<FilterControl>,
    active_filters: usize,
    clear_filters_href: String,
    visibility: Vec<VisibilityToggle>,
    exports: Vec<ExportLink>,
    form_fields: QueryPairs,
) -> impl IntoView {
    let filter_label = if active_filters > 0 {
        format!("Filters ({active_filters})")
    } else {
        "Filters".to_string()
    };

    view! {
        <form class="toolbar" method="get" action=REPORT_PATH>
            <HiddenFields fields=form_fields />
            <input
                class="search"
                type="search"
                name={keys::GLOBAL_FILTER}
                value=global_filter
                placeholder="Search all columns..."
            />

            <details class="dropdown">
                <summary class="btn">
                    <Icon path=ICON_FUNNEL />
                    {filter_label}
                </summary>
                <div class="menu filter-panel">
                    <strong>"Advanced Filters"</strong>
                    {filters
                        .into_iter()
                        .map(|control| view! { <FilterField control=control /> })
                        .collect::<Vec<_>>()}
                    <button class="btn primary" type="submit">"Apply"</button>
                    <a class="btn" href=clear_filters_href>"Clear Filters"</a>
                </div>
            </details>

            <details class="dropdown">
                <summary class="btn">
                    <Icon path=ICON_COLUMNS />
                    "Columns"
                </summary>
                <div class="menu">
                    {visibility
                        .into_iter()
                        .map(|toggle| {
                            let checked = if toggle.visible { "true" } else { "false" };
                            view! {
                                <a href=toggle.href role="menuitemcheckbox" aria-checked=checked>
                                    <span class="checkbox" aria-checked=checked>
                                        {if toggle.visible { "✓" } else { "" }}
                                    </span>
                                    " "
                                    {toggle.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </details>

            <details class="dropdown">
                <summary class="btn">
                    <Icon path=ICON_DOWNLOAD />
                    "Export"
                </summary>
                <div class="menu">
                    {exports
                        .into_iter()
                        .map(|export| {
                            view! {
                                <a href=export.href download="">
                                    {export.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </details>

            <button class="btn" type="submit">"Search"</button>
        </form>
    }
}
