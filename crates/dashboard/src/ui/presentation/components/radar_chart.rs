//! SVG radar chart
//!
//! `SvgRadarRenderer` implements the chart port by publishing a laid-out
//! frame into a signal; `RadarChart` draws whatever frame is live. Disposing
//! the handle clears the frame.

use dioxus::prelude::*;
use scoutdesk_domain::{RadarChartSpec, RadarGeometry, RadarPoint};

use crate::ports::outbound::{ChartHandle, ChartRenderer};

/// Side of the square drawing area, in SVG user units.
pub const CHART_SIZE: f64 = 360.0;

/// A chart that has been rendered and not yet disposed.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarFrame {
    pub spec: RadarChartSpec,
    pub geometry: RadarGeometry,
}

#[derive(Clone, Copy)]
pub struct SvgRadarRenderer {
    frame: Signal<Option<RadarFrame>>,
}

impl SvgRadarRenderer {
    pub fn new(frame: Signal<Option<RadarFrame>>) -> Self {
        Self { frame }
    }
}

impl ChartRenderer for SvgRadarRenderer {
    fn render(&self, spec: &RadarChartSpec) -> Box<dyn ChartHandle> {
        let mut frame = self.frame;
        frame.set(Some(RadarFrame {
            spec: spec.clone(),
            geometry: RadarGeometry::layout(spec, CHART_SIZE),
        }));
        Box::new(SvgRadarHandle { frame })
    }
}

struct SvgRadarHandle {
    frame: Signal<Option<RadarFrame>>,
}

impl ChartHandle for SvgRadarHandle {
    fn dispose(&mut self) {
        // The signal is already gone when the owning view unmounts first.
        if let Ok(mut frame) = self.frame.try_write() {
            *frame = None;
        }
    }
}

fn points(points: &[RadarPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn RadarChart(frame: Signal<Option<RadarFrame>>) -> Element {
    let Some(RadarFrame { spec, geometry }) = frame.read().clone() else {
        return rsx! {};
    };

    let size = geometry.size;
    let center = geometry.center;
    let shape = points(&geometry.polygon);

    rsx! {
        figure {
            class: "radar-chart flex flex-col items-center",
            figcaption { class: "text-lg font-semibold mb-2", "{spec.title}" }
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                role: "img",
                "aria-label": "{spec.dataset_label}",

                for (i, ring) in geometry.rings.iter().enumerate() {
                    polygon {
                        key: "ring-{i}",
                        points: points(ring),
                        fill: "none",
                        stroke: "#d1d5db",
                        stroke_width: "1",
                    }
                }

                for axis in geometry.axes.iter() {
                    line {
                        key: "axis-{axis.label}",
                        x1: "{center.x}",
                        y1: "{center.y}",
                        x2: "{axis.end.x}",
                        y2: "{axis.end.y}",
                        stroke: "#d1d5db",
                        stroke_width: "1",
                    }
                }

                polygon {
                    points: shape,
                    fill: "rgba(54, 162, 235, 0.2)",
                    stroke: "rgb(54, 162, 235)",
                    stroke_width: "2",
                }

                for (axis, value) in geometry.axes.iter().zip(spec.values.iter()) {
                    text {
                        key: "label-{axis.label}",
                        x: "{axis.label_at.x}",
                        y: "{axis.label_at.y}",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        font_size: "12",
                        "{axis.label} ({value})"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_space_separated_pairs() {
        let pts = [RadarPoint { x: 1.0, y: 2.26 }, RadarPoint { x: 3.5, y: 4.0 }];
        assert_eq!(points(&pts), "1.0,2.3 3.5,4.0");
    }
}
