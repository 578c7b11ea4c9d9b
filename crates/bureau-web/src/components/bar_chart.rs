//! Report count per user as an SVG bar chart

use bureau_table::ChartBar;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 40.0;
const PAD_BOTTOM: f64 = 40.0;
const PAD_TOP: f64 = 16.0;
const BAR_GAP: f64 = 0.2;

/// Pixel geometry of one bar
#[derive(Debug, Clone, PartialEq)]
struct BarGeometry {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[allow(clippy::cast_precision_loss)]
fn layout(bars: &[ChartBar]) -> Vec<BarGeometry> {
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0).max(1) as f64;
    let plot_width = WIDTH - PAD_LEFT;
    let plot_height = HEIGHT - PAD_BOTTOM - PAD_TOP;
    let slot = plot_width / bars.len().max(1) as f64;
    let width = slot * (1.0 - BAR_GAP);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let height = bar.value as f64 / max * plot_height;
            BarGeometry {
                x: PAD_LEFT + slot * i as f64 + (slot - width) / 2.0,
                y: HEIGHT - PAD_BOTTOM - height,
                width,
                height,
            }
        })
        .collect()
}

/// "Report Count by User" card
#[component]
pub fn BarChart(bars: Vec<ChartBar>) -> impl IntoView {
    let geometry = layout(&bars);
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
    let baseline = HEIGHT - PAD_BOTTOM;

    view! {
        <section class="card chart">
            <h2>"Report Count by User"</h2>
            <p class="panel-empty">"Visual representation of report submissions per user."</p>
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                role="img"
                aria-label="Report Count by User"
            >
                <line class="axis" x1=PAD_LEFT.to_string() y1=PAD_TOP.to_string() x2=PAD_LEFT.to_string() y2=baseline.to_string()></line>
                <line class="axis" x1=PAD_LEFT.to_string() y1=baseline.to_string() x2=WIDTH.to_string() y2=baseline.to_string()></line>
                <text x={(PAD_LEFT - 6.0).to_string()} y=PAD_TOP.to_string() text-anchor="end">
                    {max.to_string()}
                </text>
                <text x={(PAD_LEFT - 6.0).to_string()} y=baseline.to_string() text-anchor="end">
                    "0"
                </text>
                {bars
                    .into_iter()
                    .zip(geometry)
                    .map(|(bar, g)| {
                        let label_x = g.x + g.width / 2.0;
                        let user = bar.name.clone();
                        view! {
                            <g class="bar-group" data-user=user data-count=bar.value.to_string()>
                                <rect
                                    class="bar"
                                    x=g.x.to_string()
                                    y=g.y.to_string()
                                    width=g.width.to_string()
                                    height=g.height.to_string()
                                ></rect>
                                <text x=label_x.to_string() y={(g.y - 4.0).to_string()} text-anchor="middle">
                                    {bar.value.to_string()}
                                </text>
                                <text x=label_x.to_string() y={(baseline + 16.0).to_string()} text-anchor="middle">
                                    {bar.name}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bar(name: &str, value: usize) -> ChartBar {
        ChartBar {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_tallest_bar_fills_plot() {
        let geometry = layout(&[bar("user123", 1), bar("user456", 2)]);
        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry[1].y, PAD_TOP);
        assert_eq!(geometry[0].height * 2.0, geometry[1].height);
        assert!(geometry[0].x < geometry[1].x);
    }

    #[test]
    fn test_empty_chart_has_no_bars() {
        assert!(layout(&[]).is_empty());
    }
}
