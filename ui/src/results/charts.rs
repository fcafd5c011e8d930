use dioxus::prelude::*;

use api::{HistoryRecord, HISTORY_LIMIT};

use crate::{
    assessment::{ScoreTier, OVERALL_MAX},
    core::format,
    results::format_record_date,
};

/// The chart is only drawn once there is a trend to show.
pub const MIN_TREND_POINTS: usize = 2;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 40.0;
const GRID_STEP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
    pub tooltip: String,
}

/// Overall scores of past assessments, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// `records` arrive newest first from the store.
    pub fn from_history(records: &[HistoryRecord]) -> Self {
        let points = records
            .iter()
            .take(HISTORY_LIMIT)
            .rev()
            .enumerate()
            .map(|(idx, record)| TrendPoint {
                label: format!("Assessment {}", idx + 1),
                value: record.overall_score,
                tooltip: format_record_date(record),
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_chartable(&self) -> bool {
        self.points.len() >= MIN_TREND_POINTS
    }

    /// SVG coordinates for each point on a fixed 0–50 axis.
    pub fn plot(&self) -> Vec<(f64, f64)> {
        let inner_w = WIDTH - PAD_LEFT - PAD_RIGHT;
        let step = if self.points.len() > 1 {
            inner_w / (self.points.len() - 1) as f64
        } else {
            0.0
        };

        self.points
            .iter()
            .enumerate()
            .map(|(idx, point)| (PAD_LEFT + step * idx as f64, value_to_y(point.value)))
            .collect()
    }
}

fn value_to_y(value: f64) -> f64 {
    let inner_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let clamped = if value.is_finite() {
        value.clamp(0.0, OVERALL_MAX)
    } else {
        0.0
    };
    PAD_TOP + inner_h * (1.0 - clamped / OVERALL_MAX)
}

#[component]
pub fn ResultsTrendChart(history: Vec<HistoryRecord>) -> Element {
    let series = TrendSeries::from_history(&history);
    if !series.is_chartable() {
        return rsx! {};
    }

    let coords = series.plot();
    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let grid: Vec<(f64, f64, String)> = (0..=(OVERALL_MAX / GRID_STEP) as u32)
        .map(|i| {
            let value = i as f64 * GRID_STEP;
            let y = value_to_y(value);
            (y, y + 4.0, format::format_score(value))
        })
        .collect();

    let markers: Vec<(f64, f64, TrendPoint)> = coords
        .iter()
        .zip(series.points.iter().cloned())
        .map(|((x, y), point)| (*x, *y, point))
        .collect();

    let title = crate::t!("trend-title");
    let meta = crate::t!("trend-meta", count = series.len());
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let axis_end = WIDTH - PAD_RIGHT;
    let axis_label_x = PAD_LEFT - 8.0;
    let label_y = HEIGHT - PAD_BOTTOM / 2.0 + 6.0;

    rsx! {
        section { class: "results-card results-chart",
            div { class: "results-card__header",
                h2 { class: "results-chart__title", "{title}" }
                span { class: "results-card__meta", "{meta}" }
            }

            svg {
                class: "results-chart__canvas",
                view_box: "{view_box}",
                role: "img",
                preserve_aspect_ratio: "xMidYMid meet",

                for (y, text_y, label) in grid.into_iter() {
                    line {
                        class: "results-chart__grid",
                        x1: "{PAD_LEFT}",
                        x2: "{axis_end}",
                        y1: "{y:.1}",
                        y2: "{y:.1}",
                    }
                    text {
                        class: "results-chart__axis-label",
                        x: "{axis_label_x}",
                        y: "{text_y:.1}",
                        text_anchor: "end",
                        "{label}"
                    }
                }

                polyline {
                    class: "results-chart__line",
                    points: "{polyline}",
                    fill: "none",
                }

                for (x, y, point) in markers.into_iter() {
                    {render_marker(x, y, label_y, point)}
                }
            }
        }
    }
}

fn render_marker(x: f64, y: f64, label_y: f64, point: TrendPoint) -> Element {
    let tier = ScoreTier::for_score(point.value);
    let value = format::format_score(point.value);
    let TrendPoint { label, tooltip, .. } = point;

    rsx! {
        g { class: "results-chart__point",
            circle {
                class: "results-chart__marker {tier.css_class()}",
                cx: "{x:.1}",
                cy: "{y:.1}",
                r: "5",
                fill: "{tier.color()}",
                title { "{label}: {value} · {tooltip}" }
            }
            text {
                class: "results-chart__x-label",
                x: "{x:.1}",
                y: "{label_y:.1}",
                text_anchor: "middle",
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: f64, day: u32) -> HistoryRecord {
        HistoryRecord {
            id: Some(format!("r{day}")),
            overall_score: score,
            created_at: format!("2025-04-{day:02}T08:30:00Z"),
            scores: None,
            insights: None,
        }
    }

    #[test]
    fn zero_or_one_record_is_not_charted() {
        assert!(!TrendSeries::from_history(&[]).is_chartable());
        assert!(!TrendSeries::from_history(&[record(30.0, 1)]).is_chartable());
    }

    #[test]
    fn points_run_oldest_first_with_numbered_labels() {
        // Newest first, as the store returns them.
        let history = vec![record(41.0, 3), record(35.0, 2), record(22.0, 1)];
        let series = TrendSeries::from_history(&history);

        assert!(series.is_chartable());
        assert_eq!(series.len(), 3);
        let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![22.0, 35.0, 41.0]);
        assert_eq!(series.points[0].label, "Assessment 1");
        assert_eq!(series.points[2].label, "Assessment 3");
        assert_eq!(series.points[0].tooltip, "Apr 1, 2025 · 08:30");
    }

    #[test]
    fn plot_spans_the_frame_and_inverts_y() {
        let series = TrendSeries::from_history(&[record(50.0, 2), record(0.0, 1)]);
        let coords = series.plot();

        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0], (PAD_LEFT, HEIGHT - PAD_BOTTOM));
        assert_eq!(coords[1], (WIDTH - PAD_RIGHT, PAD_TOP));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(value_to_y(80.0), PAD_TOP);
        assert_eq!(value_to_y(-5.0), HEIGHT - PAD_BOTTOM);
        assert_eq!(value_to_y(f64::NAN), HEIGHT - PAD_BOTTOM);
    }

    #[test]
    fn only_ten_records_are_charted() {
        let history: Vec<_> = (1..=12).rev().map(|day| record(day as f64, day)).collect();
        let series = TrendSeries::from_history(&history);
        assert_eq!(series.len(), HISTORY_LIMIT);
        assert_eq!(series.points[0].value, 3.0);
    }

    #[test]
    fn chart_renders_one_marker_per_record() {
        crate::i18n::init();
        let history = vec![record(41.0, 4), record(35.0, 3), record(22.0, 2), record(18.0, 1)];
        let html = dioxus_ssr::render_element(rsx! { ResultsTrendChart { history } });

        assert_eq!(html.matches("<circle").count(), 4);
        assert_eq!(html.matches("results-chart__x-label").count(), 4);
        assert!(html.contains("Assessment 1"));
        assert!(html.contains("Assessment 4"));
    }
}
