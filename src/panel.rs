//! Markup shared by the daily and monthly panels.

use maud::{Markup, html};

use crate::{
    charts::{ChartSurface, chart_script, pie_chart},
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, ECHARTS_SCRIPT, HeadElement, LIST_ROW_STYLE, LOG_IN_PROMPT_STYLE},
    view::{ExpenseRow, PanelRows, PanelView},
};

/// Render the list part of a panel as a `ul` with the ID `list_id`.
pub fn expense_list(list_id: &str, rows: &PanelRows) -> Markup {
    html!(
        ul id=(list_id) class="w-full mb-4"
        {
            @match rows {
                PanelRows::LogInPrompt(prompt) => {
                    li class=(LOG_IN_PROMPT_STYLE) { (prompt) }
                }
                PanelRows::Expenses(rows) => {
                    @for row in rows {
                        (expense_row(row))
                    }
                }
            }
        }
    )
}

fn expense_row(row: &ExpenseRow) -> Markup {
    html!(
        li class=(LIST_ROW_STYLE)
        {
            span
            {
                (row.emoji) " " (row.name)

                @if let Some(date) = &row.date {
                    " "
                    span class="text-sm text-gray-400" { "(" (date) ")" }
                }
            }

            span
            {
                (row.amount)

                @if let Some(index) = row.remove_index {
                    " "
                    button
                        type="button"
                        class=(BUTTON_DELETE_STYLE)
                        data-idx=(index)
                        hx-delete=(format_endpoint(endpoints::DELETE_TODAY_EXPENSE, index))
                    {
                        "Remove"
                    }
                }
            }
        }
    )
}

/// Render the total line, e.g. "Total: $4.50", with the number in an element
/// with the ID `total_id`.
pub fn total_line(label: &str, total_id: &str, total: &str) -> Markup {
    html!(
        p class="w-full mb-4 text-lg font-semibold"
        {
            (label) ": $"
            span id=(total_id) { (total) }
        }
    )
}

/// The scripts a panel needs in the page head to draw its chart.
///
/// When `view` has no chart, the script only clears the chart surface.
pub fn chart_head_elements(surface: ChartSurface, view: &PanelView) -> Vec<HeadElement> {
    let chart = view.chart.as_ref().map(pie_chart);

    vec![
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        chart_script(surface, chart.as_ref()),
    ]
}
