//! Plotters-powered leaderboard chart widgets for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart`/`BarChart` widgets?
//! - nicer axis + tick-label rendering
//! - a proper horizontal reference line on the score chart
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
// Bring the plotters `Color` trait into scope for `.filled()` without colliding
// with ratatui's `Color` enum imported below.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::report::{HistogramBin, ScoreBar};

/// Per-group score bars (ranked order) with a horizontal reference line.
///
/// The widget is intentionally data-driven: all series and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test/benchmark the data prep separately.
pub struct ScoreBarsChart<'a> {
    /// Bars in ranked order, left to right.
    pub bars: &'a [ScoreBar],
    /// Horizontal reference line (score units).
    pub reference_line: f64,
    /// Y bounds (score units).
    pub y_bounds: [f64; 2],
    /// Y-axis description.
    pub y_label: &'a str,
}

impl Widget for ScoreBarsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let n = self.bars.len();
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];
        if n == 0 || !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(-0.5..(n as f64 - 0.5), y0..y1)?;

            // Axes + tick labels.
            //
            // We disable the mesh lines to reduce visual clutter in
            // low-resolution terminal rendering.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(self.y_label)
                .x_labels(n.min(8))
                .y_labels(5)
                .x_label_formatter(&|v| {
                    let idx = v.round();
                    if idx < 0.0 {
                        return String::new();
                    }
                    self.bars
                        .get(idx as usize)
                        .map(|b| truncate_label(&b.group, 8))
                        .unwrap_or_default()
                })
                .y_label_formatter(&|v| format!("{v:.2}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // Series styling: keep the palette high-contrast for terminal
            // readability. Podium bars take the medal color.
            let bar_color = RGBColor(0, 255, 255); // cyan
            let podium_color = RGBColor(255, 215, 0); // gold
            let reference_color = RGBColor(255, 0, 0); // red

            // 1) One rectangle per group, ranked order.
            chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
                let color = if bar.rank <= 3 { podium_color } else { bar_color };
                let x = i as f64;
                Rectangle::new([(x - 0.4, 0.0), (x + 0.4, bar.score)], color.filled())
            }))?;

            // 2) Horizontal reference line across the full x range.
            chart.draw_series(LineSeries::new(
                [
                    (-0.5, self.reference_line),
                    (n as f64 - 0.5, self.reference_line),
                ],
                &reference_color,
            ))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Score-distribution histogram.
pub struct HistogramChart<'a> {
    pub bins: &'a [HistogramBin],
    /// Y bounds (record counts).
    pub y_bounds: [f64; 2],
    pub y_label: &'a str,
}

impl Widget for HistogramChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let Some(first) = self.bins.first() else {
            return;
        };
        let Some(last) = self.bins.last() else {
            return;
        };

        let mut x0 = first.lo;
        let mut x1 = last.hi;
        if x1 <= x0 {
            // Degenerate single-value histogram still deserves a visible bar.
            x0 -= 0.5;
            x1 += 0.5;
        }
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| format!("{v:.2}"))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let bin_color = RGBColor(0, 255, 255); // cyan

            chart.draw_series(self.bins.iter().map(|bin| {
                let (lo, hi) = if bin.hi > bin.lo {
                    (bin.lo, bin.hi)
                } else {
                    (x0, x1)
                };
                Rectangle::new([(lo, 0.0), (hi, bin.count as f64)], bin_color.filled())
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
