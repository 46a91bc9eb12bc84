//! Pie chart generation and rendering for the daily and monthly panels.
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code. The
//! script always disposes of any chart already bound to the container before
//! drawing a new one, so a surface never holds two overlapping charts.

use charming::{
    Chart,
    component::Legend,
    datatype::DataPointItem,
    element::{ItemStyle, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, view::PieDataset};

/// The places on the page where a chart can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSurface {
    /// Today's expenses.
    Daily,
    /// This month's expenses grouped by name.
    Monthly,
}

impl ChartSurface {
    /// The HTML element ID of the chart container (kebab-case).
    pub fn id(self) -> &'static str {
        match self {
            ChartSurface::Daily => "expense-chart",
            ChartSurface::Monthly => "monthly-chart",
        }
    }
}

/// Build the ECharts configuration for `dataset`.
pub fn pie_chart(dataset: &PieDataset) -> Chart {
    let data: Vec<DataPointItem> = dataset
        .slices
        .iter()
        .map(|slice| {
            DataPointItem::new(slice.value)
                .name(slice.label.as_str())
                .item_style(
                    ItemStyle::new()
                        .color(slice.color)
                        .border_color("#fff")
                        .border_width(2),
                )
        })
        .collect();

    let mut chart = Chart::new().legend(
        Legend::new()
            .show(dataset.show_legend)
            .top("bottom"),
    );

    if !dataset.is_placeholder() {
        chart = chart.tooltip(Tooltip::new().trigger(Trigger::Item));
    }

    chart.series(
        Pie::new()
            .name("Expenses")
            .radius("65%")
            .item_style(ItemStyle::new().border_radius(12))
            .data(data),
    )
}

/// Renders the HTML container for a chart.
pub fn chart_container(surface: ChartSurface) -> Markup {
    html!(
        div
            id=(surface.id())
            class="w-full min-h-[320px] rounded"
        {}
    )
}

/// Serialize `chart` so it can sit inside an inline `<script>` element.
///
/// Labels are user input, so every `<` is written as the JSON escape `\u003c`
/// and no label can close the element.
fn script_safe_options(chart: &Chart) -> String {
    chart.to_string().replace('<', "\\u003c")
}

/// Generates the JavaScript that (re)draws the chart on `surface`.
///
/// The chart already bound to the container, if any, is disposed first. When
/// `chart` is `None` the surface is only cleared.
pub fn chart_script(surface: ChartSurface, chart: Option<&Chart>) -> HeadElement {
    let draw = match chart {
        Some(chart) => format!(
            r#"const chart = echarts.init(chartDom);
                    chart.setOption({});
                    window.addEventListener('resize', chart.resize);"#,
            script_safe_options(chart)
        ),
        None => String::new(),
    };

    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
                const chartDom = document.getElementById("{}");
                if (!chartDom) {{
                    return;
                }}
                const previous = echarts.getInstanceByDom(chartDom);
                if (previous) {{
                    previous.dispose();
                }}
                {}
            }});"#,
        surface.id(),
        draw
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

#[cfg(test)]
mod tests {
    use crate::{
        charts::{ChartSurface, chart_script, pie_chart},
        html::HeadElement,
        view::{PALETTE, PLACEHOLDER_LABEL, PieDataset},
    };

    fn script_text(element: HeadElement) -> String {
        match element {
            HeadElement::ScriptSource(text) => text.0,
            _ => panic!("want a script source"),
        }
    }

    #[test]
    fn pie_chart_contains_labels_and_colors() {
        let dataset = PieDataset::from_pairs(&[("Coffee", 4.5), ("Lunch", 12.0)]);

        let options = pie_chart(&dataset).to_string();

        assert!(options.contains("\"Coffee\""), "got {options}");
        assert!(options.contains("\"Lunch\""), "got {options}");
        assert!(options.contains(PALETTE[0]), "got {options}");
        assert!(options.contains(PALETTE[1]), "got {options}");
        assert!(options.contains("\"pie\""), "got {options}");
    }

    #[test]
    fn placeholder_chart_hides_legend() {
        let options = pie_chart(&PieDataset::placeholder()).to_string();
        let compact_options = options.replace(char::is_whitespace, "");

        assert!(options.contains(PLACEHOLDER_LABEL), "got {options}");
        assert!(compact_options.contains("\"show\":false"), "got {options}");
    }

    #[test]
    fn script_disposes_before_drawing() {
        let chart = pie_chart(&PieDataset::placeholder());

        let script = script_text(chart_script(ChartSurface::Daily, Some(&chart)));

        let dispose_at = script.find("dispose()").expect("want dispose call");
        let init_at = script.find("echarts.init").expect("want init call");
        assert!(dispose_at < init_at);
        assert!(script.contains("\"expense-chart\""));
    }

    #[test]
    fn script_escapes_markup_in_labels() {
        let dataset = PieDataset::from_pairs(&[("</script><script>alert(1)</script>", 1.0)]);
        let chart = pie_chart(&dataset);

        let script = script_text(chart_script(ChartSurface::Daily, Some(&chart)));

        assert!(!script.contains('<'), "got {script}");
        assert!(script.contains("\\u003c/script>\\u003cscript>alert(1)"), "got {script}");
    }

    #[test]
    fn script_without_chart_only_clears_surface() {
        let script = script_text(chart_script(ChartSurface::Monthly, None));

        assert!(script.contains("dispose()"));
        assert!(!script.contains("echarts.init"));
        assert!(script.contains("\"monthly-chart\""));
    }
}
