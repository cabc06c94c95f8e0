//! Ratatui-based terminal UI.
//!
//! The TUI shows five rank input fields and a Radiant toggle, then renders the
//! parsed ranks, their scale positions and the team average as the user types.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{BarChart, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::pipeline::{AverageDetails, compute_average_details};
use crate::domain::TEAM_SIZE;
use crate::error::{AppError, RankError};
use crate::rank::{Scale, parse_rank};
use crate::report::fmt_values;

/// Start the TUI.
pub fn run(include_radiant: bool) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(include_radiant);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
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

struct App {
    inputs: [String; TEAM_SIZE],
    include_radiant: bool,
    selected_field: usize,
    editing: bool,
    edit_buffer: String,
    status: String,
    outcome: Option<Result<AverageDetails, RankError>>,
}

impl App {
    fn new(include_radiant: bool) -> Self {
        Self {
            inputs: Default::default(),
            include_radiant,
            selected_field: 0,
            editing: false,
            edit_buffer: String::new(),
            status: "Enter на поле, чтобы ввести звание.".to_string(),
            outcome: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
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

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing {
            self.handle_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field + 1 < TEAM_SIZE {
                    self.selected_field += 1;
                }
            }
            KeyCode::Enter => {
                self.editing = true;
                self.edit_buffer = self.inputs[self.selected_field].clone();
                self.status = "Ввод звания. Enter — применить, Esc — отмена.".to_string();
            }
            KeyCode::Char('t') => {
                self.include_radiant = !self.include_radiant;
                self.recompute();
                self.status = if self.include_radiant {
                    "Radiant включен (25).".to_string()
                } else {
                    "Radiant отключен: трактуется как Immortal 3.".to_string()
                };
            }
            KeyCode::Char('c') => {
                self.inputs[self.selected_field].clear();
                self.recompute();
                self.status = format!("Поле {} очищено.", self.selected_field + 1);
            }
            _ => {}
        }

        false
    }

    fn handle_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.edit_buffer.clear();
                self.status = "Ввод отменен.".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.inputs[self.selected_field] = std::mem::take(&mut self.edit_buffer).trim().to_string();
                self.recompute();
                if self.selected_field + 1 < TEAM_SIZE {
                    self.selected_field += 1;
                }
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    fn recompute(&mut self) {
        let filled = self.inputs.iter().filter(|s| !s.is_empty()).count();
        if filled < TEAM_SIZE {
            self.outcome = None;
            self.status = format!("Заполнено {filled} из {TEAM_SIZE}.");
            return;
        }

        let outcome = compute_average_details(&self.inputs, self.include_radiant);
        self.status = match &outcome {
            Ok(details) => format!("Итоговое звание: {}", details.final_label),
            Err(err) => format!("Ошибка: {err}"),
        };
        self.outcome = Some(outcome);
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let radiant = if self.include_radiant {
            "Radiant: включен (25)"
        } else {
            "Radiant: отключен (= Immortal 3, 24)"
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("rank-avg", Style::default().fg(Color::Cyan)),
                Span::raw(" — среднее звание команды VALORANT"),
            ]),
            Line::from(Span::styled(radiant, Style::default().fg(Color::Gray))),
        ];
        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_inputs(frame, chunks[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(chunks[1]);
        self.draw_result(frame, right[0]);
        self.draw_chart(frame, right[1]);
    }

    fn draw_inputs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let scale = Scale::new(self.include_radiant);
        let items: Vec<ListItem> = self
            .inputs
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                let shown = if self.editing && idx == self.selected_field {
                    format!("{}▏", self.edit_buffer)
                } else {
                    raw.clone()
                };
                let preview = field_preview(raw, scale);
                ListItem::new(Line::from(vec![
                    Span::raw(format!("Звание {}: {shown:<16}", idx + 1)),
                    preview,
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Игроки").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Результат").borders(Borders::ALL);
        let text = match &self.outcome {
            None => Text::from(Span::styled(
                "Введите все 5 званий…",
                Style::default().fg(Color::Yellow),
            )),
            Some(Err(err)) => Text::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))),
            Some(Ok(details)) => Text::from(vec![
                Line::from(format!("Звания: {}", details.labels.join(", "))),
                Line::from(format!("Значения: {}", fmt_values(&details.values))),
                Line::from(format!("Среднее по шкале: {:.2}", details.average)),
                Line::from(Span::styled(
                    format!("Итоговое звание: {}", details.final_label),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
            ]),
        };
        let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Шкала").borders(Borders::ALL);
        let Some(Ok(details)) = &self.outcome else {
            frame.render_widget(block, area);
            return;
        };

        let labels: Vec<String> = (1..=details.values.len()).map(|i| i.to_string()).collect();
        let data: Vec<(&str, u64)> = labels
            .iter()
            .zip(&details.values)
            .map(|(label, &v)| (label.as_str(), u64::from(v)))
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(data.as_slice())
            .bar_width(5)
            .bar_gap(2)
            .max(u64::from(Scale::new(self.include_radiant).ceiling()))
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ поле  Enter ввод  t Radiant  c очистить  q выход";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Inline parse result shown next to each input field.
fn field_preview(raw: &str, scale: Scale) -> Span<'static> {
    if raw.is_empty() {
        return Span::raw("");
    }
    match parse_rank(raw) {
        Ok(parsed) => Span::styled(
            format!("{} ({})", parsed.rank.label(), scale.position(parsed.rank)),
            Style::default().fg(Color::Green),
        ),
        Err(_) => Span::styled("?", Style::default().fg(Color::Red)),
    }
}
