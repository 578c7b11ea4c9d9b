//! Report filter form
//!
//! Submitting always refetches: the form carries `refresh=1`.

use crate::extractors::table_query::keys;
use crate::routes::REPORT_PATH;
use bureau_core::ReportRequest;
use bureau_core::types::{ALL_CATEGORIES, CATEGORIES};
use leptos::prelude::*;

/// Category choices as `(value, label)`
fn category_options() -> Vec<(&'static str, &'static str)> {
    let mut options = vec![(ALL_CATEGORIES, "All Categories")];
    options.extend(CATEGORIES.iter().map(|c| (*c, *c)));
    options
}

/// Search criteria, category and date range
#[component]
pub fn ReportFilterForm(
    /// Card heading
    title: String,
    /// Values the form starts with
    request: ReportRequest,
) -> impl IntoView {
    let category = request.category.clone().unwrap_or_default();

    view! {
        <section class="card">
            <h1 class="page-title">{title}</h1>
            <p class="panel-empty">"Filter and view bureau usage data."</p>
            <form class="filter-form" method="get" action=REPORT_PATH>
                <input type="hidden" name={keys::REFRESH} value="1" />
                <label class="field">
                    "Search Criteria"
                    <input
                        type="text"
                        name={keys::SEARCH_CRITERIA}
                        value=request.search_criteria.unwrap_or_default()
                        placeholder="e.g., Input Report"
                    />
                </label>
                <label class="field">
                    "Category"
                    <select name={keys::CATEGORY}>
                        {category_options()
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=value selected={value == category}>
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    "Date From"
                    <input type="date" name={keys::DATE_FROM} value=request.date_from.unwrap_or_default() />
                </label>
                <label class="field">
                    "Date To"
                    <input type="date" name={keys::DATE_TO} value=request.date_to.unwrap_or_default() />
                </label>
                <button class="btn primary" type="submit">"Apply Filters"</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_options() {
        let options = category_options();
        assert_eq!(
            options,
            vec![
                ("ALL CATEGORY", "All Categories"),
                ("Category A", "Category A"),
                ("Category B", "Category B"),
            ]
        );
    }
}
