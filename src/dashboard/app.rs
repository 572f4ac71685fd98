//! Terminal UI for the calculator dashboard
//!
//! This module implements the terminal user interface using ratatui. The app
//! owns the mutable parameter sets; every keystroke that changes a field
//! triggers a full synchronous recomputation of the derived metrics before
//! the next event is processed.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::calc::{self, Assumptions, FleetMetrics, FleetParams, OneWayMetrics, OneWayParams};
use crate::config::{Config, DisplayConfig};
use crate::format::{format_currency, format_percent};
use crate::report::{fleet_report, one_way_report};

/// Which calculator is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    OneWay,
    Fleet,
}

const ONE_WAY_FIELDS: [&str; 4] = [
    "Monthly Trips",
    "Detention Rate (per day)",
    "Current Base Rate",
    "Optimized Base Rate",
];

const FLEET_FIELDS: [&str; 4] = [
    "Trips Per Truck Per Month",
    "Monthly Lease Cost",
    "Monthly Fixed Cost",
    "One-Way Trip Rate",
];

/// Application state for the calculator dashboard
pub struct CalculatorApp {
    pub view: View,
    pub one_way: OneWayParams,
    pub fleet: FleetParams,
    pub one_way_metrics: OneWayMetrics,
    pub fleet_metrics: FleetMetrics,
    pub selected: usize,
    pub buffer: String,
    pub last_update: Option<DateTime<Local>>,
    assumptions: Assumptions,
    display: DisplayConfig,
    one_way_defaults: OneWayParams,
    fleet_defaults: FleetParams,
}

impl CalculatorApp {
    /// Create a new dashboard seeded from configuration defaults
    pub fn new(cfg: &Config, view: View) -> Self {
        let one_way_metrics = calc::one_way::compute(&cfg.one_way, &cfg.assumptions);
        let fleet_metrics = calc::fleet::compute(&cfg.fleet, &cfg.assumptions);

        let mut app = Self {
            view,
            one_way: cfg.one_way.clone(),
            fleet: cfg.fleet.clone(),
            one_way_metrics,
            fleet_metrics,
            selected: 0,
            buffer: String::new(),
            last_update: None,
            assumptions: cfg.assumptions.clone(),
            display: cfg.display.clone(),
            one_way_defaults: cfg.one_way.clone(),
            fleet_defaults: cfg.fleet.clone(),
        };
        app.load_buffer();
        app
    }

    /// Handle keyboard input, returns true when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.switch_view(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Down | KeyCode::Enter => self.select_next(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset_active_view(),
            KeyCode::Backspace => {
                if self.buffer.pop().is_some() {
                    self.commit_buffer();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                self.buffer.push(c);
                self.commit_buffer();
            }
            _ => {}
        }
        false
    }

    fn switch_view(&mut self) {
        self.view = match self.view {
            View::OneWay => View::Fleet,
            View::Fleet => View::OneWay,
        };
        self.selected = 0;
        self.load_buffer();
    }

    fn select_previous(&mut self) {
        self.selected = if self.selected == 0 {
            self.field_count() - 1
        } else {
            self.selected - 1
        };
        self.load_buffer();
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.field_count();
        self.load_buffer();
    }

    fn reset_active_view(&mut self) {
        match self.view {
            View::OneWay => self.one_way = self.one_way_defaults.clone(),
            View::Fleet => self.fleet = self.fleet_defaults.clone(),
        }
        self.load_buffer();
        self.recompute();
    }

    fn field_count(&self) -> usize {
        match self.view {
            View::OneWay => ONE_WAY_FIELDS.len(),
            View::Fleet => FLEET_FIELDS.len(),
        }
    }

    fn field_labels(&self) -> &'static [&'static str] {
        match self.view {
            View::OneWay => &ONE_WAY_FIELDS,
            View::Fleet => &FLEET_FIELDS,
        }
    }

    fn field_value(&self, index: usize) -> f64 {
        match self.view {
            View::OneWay => match index {
                0 => self.one_way.trips_per_month,
                1 => self.one_way.detention_rate_per_day,
                2 => self.one_way.base_rate_current,
                _ => self.one_way.base_rate_optimized,
            },
            View::Fleet => match index {
                0 => self.fleet.trips_per_truck_per_month,
                1 => self.fleet.monthly_lease_cost,
                2 => self.fleet.monthly_fixed_cost,
                _ => self.fleet.one_way_rate,
            },
        }
    }

    fn set_field(&mut self, index: usize, value: f64) {
        match self.view {
            View::OneWay => match index {
                0 => self.one_way.trips_per_month = value,
                1 => self.one_way.detention_rate_per_day = value,
                2 => self.one_way.base_rate_current = value,
                _ => self.one_way.base_rate_optimized = value,
            },
            View::Fleet => match index {
                0 => self.fleet.trips_per_truck_per_month = value,
                1 => self.fleet.monthly_lease_cost = value,
                2 => self.fleet.monthly_fixed_cost = value,
                _ => self.fleet.one_way_rate = value,
            },
        }
    }

    /// Seed the edit buffer from the selected field's current value
    fn load_buffer(&mut self) {
        let value = self.field_value(self.selected);
        self.buffer = if value.is_finite() && value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        };
    }

    /// Parse the edit buffer and recompute the derived metric set.
    ///
    /// An empty or unparsable buffer reads as zero, matching the behavior of
    /// a cleared numeric input field.
    fn commit_buffer(&mut self) {
        let value = self.buffer.parse::<f64>().unwrap_or(0.0);
        self.set_field(self.selected, value);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.one_way_metrics = calc::one_way::compute(&self.one_way, &self.assumptions);
        self.fleet_metrics = calc::fleet::compute(&self.fleet, &self.assumptions);
        self.last_update = Some(Local::now());
    }

    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(12),   // Body
                Constraint::Length(4), // Footer
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_body(f, chunks[1]);
        self.render_footer(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let view_name = match self.view {
            View::OneWay => "One-Way Trip Calculator",
            View::Fleet => "Dedicated Fleet Calculator",
        };

        let last_update = self
            .last_update
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "defaults".to_string());

        let title = vec![
            Line::from(vec![
                Span::styled(
                    "Trip Economics",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::styled(view_name, Style::default().fg(Color::Yellow)),
                Span::raw("  |  Last recompute: "),
                Span::styled(last_update, Style::default().fg(Color::Green)),
            ]),
            Line::from(Span::styled(
                "Press 'q' to quit | Tab to switch calculator | Up/Down to select field | type to edit | 'r' to reset",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_body(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.render_parameters(f, columns[0]);
        self.render_metrics(f, columns[1]);
    }

    fn render_parameters(&self, f: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .field_labels()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let selected = i == self.selected;
                let value = if selected {
                    format!("{}_", self.buffer)
                } else {
                    crate::format::format_number(self.field_value(i))
                };

                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                Row::new(vec![Cell::from(*label), Cell::from(value)]).style(style)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
            .block(Block::default().borders(Borders::ALL).title("Parameters"))
            .column_spacing(1);

        f.render_widget(table, area);
    }

    fn render_metrics(&self, f: &mut Frame, area: Rect) {
        let report = match self.view {
            View::OneWay => one_way_report(&self.one_way_metrics, &self.display),
            View::Fleet => fleet_report(&self.fleet_metrics, &self.display),
        };

        let header = Row::new([
            Cell::from("Metric").style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from("Value").style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .height(1)
        .bottom_margin(1);

        let rows: Vec<Row> = report
            .iter()
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.label),
                    Cell::from(r.metric.display.clone()),
                ])
                .height(1)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Percentage(55), Constraint::Percentage(45)])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Derived Metrics"),
            )
            .column_spacing(1);

        f.render_widget(table, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let content = match self.view {
            View::OneWay => {
                let savings = self.one_way_metrics.annual_savings;
                let style = if savings > 0.0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                vec![Line::from(vec![
                    Span::styled("Annual Savings: ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!(
                            "{} ({} reduction)",
                            format_currency(savings, &self.display.currency),
                            format_percent(self.one_way_metrics.savings_percentage)
                        ),
                        style,
                    ),
                ])]
            }
            View::Fleet => {
                let m = &self.fleet_metrics;
                let profit_style = if m.is_profitable {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                let impact_style = if m.fleet_annual_savings > 0.0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                vec![
                    Line::from(vec![
                        Span::styled("Per-Trip: ", Style::default().fg(Color::Cyan)),
                        Span::styled(
                            if m.is_profitable {
                                format!(
                                    "{} below market rate",
                                    format_currency(m.cost_difference, &self.display.currency)
                                )
                            } else {
                                format!(
                                    "{} above market rate",
                                    format_currency(
                                        m.cost_difference.abs(),
                                        &self.display.currency
                                    )
                                )
                            },
                            profit_style,
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Annual Impact: ", Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format_currency(m.fleet_annual_savings, &self.display.currency),
                            impact_style,
                        ),
                        Span::raw(format!(
                            "  |  Trucks required: {}",
                            crate::format::format_number(m.trucks_required)
                        )),
                    ]),
                ]
            }
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
