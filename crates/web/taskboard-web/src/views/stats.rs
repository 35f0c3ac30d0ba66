//! Statistics section: four counters and the donut chart with its legend.

use crate::styles::*;
use crate::{App, chart};
use dominator::{Dom, html, with_node};
use futures_signals::signal::{Signal, SignalExt};
use std::rc::Rc;
use taskboard_api::TaskStatus;
use taskboard_core::DonutChart;
use taskboard_core::stats::{chart_color, chart_label};
use web_sys::HtmlCanvasElement;

pub fn render(app: &Rc<App>) -> Dom {
    html!("div", {
        .children(&mut [
            html!("div", {
                .class(&*STAT_GRID)
                .children(&mut [
                    counter("pending-count", "Pending", app.stats_signal().map(|s| s.pending)),
                    counter("progress-count", "In Progress", app.stats_signal().map(|s| s.in_progress)),
                    counter("completed-count", "Completed", app.stats_signal().map(|s| s.completed)),
                    counter("total-count", "Total", app.stats_signal().map(|s| s.total)),
                ])
            }),
            html!("div", {
                .class(&*CARD)
                .child(html!("canvas" => HtmlCanvasElement, {
                    .attr("id", "tasksChart")
                    .attr("width", "300")
                    .attr("height", "300")
                    .style("display", "block")
                    .style("margin", "0 auto")
                    // Redrawn on every change while the canvas is mounted
                    .with_node!(canvas => {
                        .future(app.stats_signal().for_each(move |stats| {
                            chart::draw(&canvas, &DonutChart::from_stats(&stats));
                            async {}
                        }))
                    })
                }))
                .child(html!("div", {
                    .class(["chart-legend", LEGEND.as_str()])
                    .children(TaskStatus::ALL.into_iter().map(|status| legend_entry(app, status)))
                }))
            }),
        ])
    })
}

fn counter<S>(id: &str, label: &str, value: S) -> Dom
where
    S: Signal<Item = usize> + 'static,
{
    html!("div", {
        .class(["stat-card", STAT_CARD.as_str()])
        .children(&mut [
            html!("div", {
                .attr("id", id)
                .class(&*STAT_VALUE)
                .text_signal(value.map(|n| n.to_string()))
            }),
            html!("div", { .text(label) }),
        ])
    })
}

fn legend_entry(app: &Rc<App>, status: TaskStatus) -> Dom {
    html!("span", {
        .children(&mut [
            html!("span", {
                .class(&*SWATCH)
                .style("background", chart_color(status))
            }),
            html!("span", {
                .text_signal(app.stats_signal().map(move |stats| {
                    format!("{} ({})", chart_label(status), stats.count(status))
                }))
            }),
        ])
    })
}
