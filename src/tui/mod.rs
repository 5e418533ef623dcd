//! Ratatui-based terminal dashboard.
//!
//! The TUI shows the statistics header, the standings table, and one of two
//! charts (per-group score bars with the reference line, or the score
//! histogram), with the threshold and bin count adjustable live.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::RunOutput;
use crate::domain::BoardConfig;
use crate::error::BoardError;

mod plotters_chart;

use plotters_chart::{HistogramChart, ScoreBarsChart};

/// Start the TUI with the resolved run configuration.
pub fn run(config: BoardConfig) -> Result<(), BoardError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| BoardError::render(format!("failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, BoardError> {
        enable_raw_mode()
            .map_err(|e| BoardError::render(format!("failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(BoardError::render(format!(
                "failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Bars,
    Histogram,
}

struct App {
    config: BoardConfig,
    run: Option<RunOutput>,
    chart: ChartKind,
    selected_field: usize,
    status: String,
}

impl App {
    fn new(config: BoardConfig) -> Self {
        let mut app = Self {
            config,
            run: None,
            chart: ChartKind::Bars,
            selected_field: 0,
            status: String::new(),
        };
        app.reload();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), BoardError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| BoardError::render(format!("terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| BoardError::render(format!("event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| BoardError::render(format!("event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('r') => {
                self.reload();
            }
            KeyCode::Char('c') => {
                self.chart = match self.chart {
                    ChartKind::Bars => ChartKind::Histogram,
                    ChartKind::Histogram => ChartKind::Bars,
                };
            }
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 2 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        let step = f64::from(delta);
        match self.selected_field {
            0 => {
                self.config.high_score_threshold =
                    (self.config.high_score_threshold + step * 0.01).clamp(0.0, 1.0);
                self.status = format!("threshold: {:.2}", self.config.high_score_threshold);
            }
            1 => {
                self.config.chart_reference_line =
                    (self.config.chart_reference_line + step * 0.01).clamp(0.0, 1.0);
                self.status = format!("reference line: {:.2}", self.config.chart_reference_line);
            }
            2 => {
                let next = if delta >= 0 {
                    self.config.histogram_bin_count.saturating_add(1)
                } else {
                    self.config.histogram_bin_count.saturating_sub(1)
                };
                self.config.histogram_bin_count = next.clamp(1, 50);
                self.status = format!("bins: {}", self.config.histogram_bin_count);
            }
            _ => {}
        }
        self.recompute();
    }

    /// Re-read the source file and re-run the whole pipeline.
    fn reload(&mut self) {
        match crate::app::pipeline::run_board(&self.config) {
            Ok(run) => {
                self.status = format!(
                    "loaded {} groups from {}",
                    run.table.records.len(),
                    self.config.source_path.display()
                );
                self.run = Some(run);
            }
            Err(err) => {
                // A failed run must not leave stale standings on screen.
                self.run = None;
                self.status = err.to_string();
            }
        }
    }

    /// Recompute from the already-ingested table (threshold/bin changes).
    fn recompute(&mut self) {
        let Some(run) = self.run.take() else {
            return;
        };
        match crate::app::pipeline::run_board_with_table(&self.config, run.table) {
            Ok(run) => self.run = Some(run),
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("lb", Style::default().fg(Color::Cyan)),
            Span::raw(" — ML competition leaderboard"),
        ]));

        let rows = self
            .run
            .as_ref()
            .map(|r| r.table.records.len())
            .unwrap_or(0);
        lines.push(Line::from(Span::styled(
            format!(
                "source: {} | n={rows} | threshold: {:.2} | ref: {:.2} | bins: {}",
                self.config.source_path.display(),
                self.config.high_score_threshold,
                self.config.chart_reference_line,
                self.config.histogram_bin_count,
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(run) = &self.run {
            lines.push(Line::from(Span::styled(
                format!(
                    "mean={:.3} | median={:.3} | stddev={:.3} | groups > {:.2}: {}",
                    run.stats.mean,
                    run.stats.median,
                    run.stats.stddev,
                    run.stats.threshold,
                    run.stats.count_above_threshold,
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(46), Constraint::Min(0)])
            .split(area);

        self.draw_standings(frame, columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[1]);

        self.draw_chart(frame, right[0]);
        self.draw_settings(frame, right[1]);
    }

    fn draw_standings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Standings").borders(Borders::ALL);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("No data — fix the source and press r.")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let mut items = Vec::with_capacity(run.standings.len() + 1);
        items.push(ListItem::new(Span::styled(
            format!("{:>4} {:<7} {:<20} {:>8}", "rank", "medal", "group", "score"),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        for row in &run.standings {
            let medal = row.medal.map(|m| m.display_name()).unwrap_or("");
            let style = match row.medal {
                Some(_) => Style::default().fg(Color::Yellow),
                None => Style::default(),
            };
            items.push(ListItem::new(Span::styled(
                format!(
                    "{:>4} {:<7} {:<20} {:>8.4}",
                    row.rank,
                    medal,
                    truncate(&row.group, 20),
                    row.score,
                ),
                style,
            )));
        }

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = match self.chart {
            ChartKind::Bars => "Scores by group",
            ChartKind::Histogram => "Score distribution",
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        match self.chart {
            ChartKind::Bars => {
                let y_bounds = bars_y_bounds(run);
                let widget = ScoreBarsChart {
                    bars: &run.score_series.bars,
                    reference_line: run.score_series.reference_line,
                    y_bounds,
                    y_label: "score",
                };
                frame.render_widget(widget, inner);
            }
            ChartKind::Histogram => {
                let y_bounds = histogram_y_bounds(run);
                let widget = HistogramChart {
                    bins: &run.histogram.bins,
                    y_bounds,
                    y_label: "groups",
                };
                frame.render_widget(widget, inner);
            }
        }
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!(
                "Threshold: {:.2}",
                self.config.high_score_threshold
            )),
            ListItem::new(format!(
                "Reference line: {:.2}",
                self.config.chart_reference_line
            )),
            ListItem::new(format!("Bins: {}", self.config.histogram_bin_count)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  c chart  r reload  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Y bounds for the score bar chart: baseline 0 to the padded data/ref maximum.
fn bars_y_bounds(run: &RunOutput) -> [f64; 2] {
    let mut y_max = run.score_series.reference_line;
    for bar in &run.score_series.bars {
        y_max = y_max.max(bar.score);
    }
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }
    [0.0, y_max * 1.05]
}

fn histogram_y_bounds(run: &RunOutput) -> [f64; 2] {
    let peak = run
        .histogram
        .bins
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    [0.0, (peak.max(1) as f64) * 1.05]
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
