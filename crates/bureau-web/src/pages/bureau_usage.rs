//! The bureau usage report page

use crate::components::{
    BarChart, DataTable, EmptyPanel, ErrorPanel, Pagination, ReportFilterForm, TableToolbar,
};
use crate::view::{ReportBody, ReportPage, TableView};
use leptos::prelude::*;

#[component]
fn ReportTableCard(table: TableView) -> impl IntoView {
    let column_count = table.column_count();
    let TableView {
        headers,
        rows,
        global_filter,
        filters,
        active_filters,
        clear_filters_href,
        visibility,
        exports,
        filter_form_fields,
        pager,
    } = table;

    view! {
        <section class="card">
            <TableToolbar
                global_filter=global_filter
                filters=filters
                active_filters=active_filters
                clear_filters_href=clear_filters_href
                visibility=visibility
                exports=exports
                form_fields=filter_form_fields
            />
            <DataTable headers=headers rows=rows column_count=column_count />
            <Pagination pager=pager />
        </section>
    }
}

/// Filter form followed by the error panel or the table and chart
#[component]
pub fn BureauUsagePage(page: ReportPage) -> impl IntoView {
    let body = match page.body {
        ReportBody::Failed(message) => view! { <ErrorPanel message=message /> }.into_any(),
        ReportBody::Loaded {
            fetched,
            chart,
            table,
        } => {
            let summary = if fetched == 0 {
                view! { <EmptyPanel /> }.into_any()
            } else {
                view! { <BarChart bars=chart /> }.into_any()
            };
            view! {
                <ReportTableCard table={*table} />
                {summary}
            }
            .into_any()
        }
    };

    view! {
        <ReportFilterForm title=page.title request=page.request />
        {body}
    }
}
