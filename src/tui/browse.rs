//! Interactive catalog browser using ratatui.
//!
//! The search box is always live: each keystroke schedules a debounced search
//! on the [`SearchController`], Enter runs it at once. The event loop waits on
//! terminal input for at most the time left until the pending search is due.

use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::debug;

use crate::controller::SearchController;
use crate::error::{ElecError, Result};
use crate::render::{CardView, NO_RESULTS_MESSAGE, ResultsArea};

/// Poll interval while no search is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Action to take after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Continue,
}

/// TUI application state.
pub struct BrowseTui {
    controller: SearchController,
    /// Text currently in the search box
    input: String,
    list_state: ListState,
    detail_scroll: u16,
    show_help: bool,
    status_message: Option<String>,
}

impl BrowseTui {
    #[must_use]
    pub fn new(controller: SearchController) -> Self {
        let status_message = controller
            .load_error()
            .map(|_| "catalog unavailable".to_string());
        let mut app = Self {
            controller,
            input: String::new(),
            list_state: ListState::default(),
            detail_scroll: 0,
            show_help: false,
            status_message,
        };
        app.reset_selection();
        app
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            let timeout = self
                .controller
                .time_until_due(Instant::now())
                .unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && self.handle_key(key.code, key.modifiers, Instant::now()) == Action::Quit
                    {
                        return Ok(());
                    }
                }
            }

            self.tick(Instant::now());
        }
    }

    /// Fire a due search and refresh the selection if one ran.
    fn tick(&mut self, now: Instant) {
        if self.controller.tick(now) {
            self.after_search();
        }
    }

    fn after_search(&mut self) {
        debug!(query = %self.controller.query(), "browser results updated");
        self.status_message = None;
        self.reset_selection();
    }

    fn cards(&self) -> &[CardView] {
        match self.controller.area().results() {
            Some(view) => view.cards(),
            None => &[],
        }
    }

    fn reset_selection(&mut self) {
        let selected = if self.cards().is_empty() { None } else { Some(0) };
        self.list_state.select(selected);
        self.detail_scroll = 0;
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Results
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_title_bar(f, chunks[0]);
        self.draw_search_bar(f, chunks[1]);
        self.draw_main_content(f, chunks[2]);
        Self::draw_help_bar(f, chunks[3]);

        if self.show_help {
            Self::draw_help_overlay(f);
        }
    }

    fn draw_title_bar(&self, f: &mut Frame, area: Rect) {
        let status = self
            .status_message
            .as_ref()
            .map(|m| format!(" | {m}"))
            .unwrap_or_default();
        let pending = if self.controller.has_pending() { " …" } else { "" };

        let title = Line::from(vec![
            Span::styled("elecdex browse", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " | {} items ({} shown){pending}{status}",
                self.controller.catalog().len(),
                self.cards().len(),
            )),
        ]);

        let paragraph = Paragraph::new(title).style(Style::default().fg(Color::Cyan));
        f.render_widget(paragraph, area);
    }

    fn draw_search_bar(&self, f: &mut Frame, area: Rect) {
        let (text, style) = if self.input.is_empty() {
            (
                "Search components, protocols, tools...".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (format!("{}_", self.input), Style::default())
        };

        let paragraph = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Search "),
        );
        f.render_widget(paragraph, area);
    }

    fn draw_main_content(&mut self, f: &mut Frame, area: Rect) {
        let notice = match self.controller.area() {
            ResultsArea::LoadFailed { notice } => Some((notice.clone(), Color::Red)),
            ResultsArea::Results { view } if view.shows_no_results() => {
                Some((NO_RESULTS_MESSAGE.to_string(), Color::DarkGray))
            }
            ResultsArea::Results { .. } => None,
        };

        if let Some((text, color)) = notice {
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(" Results "));
            f.render_widget(paragraph, area);
            return;
        }

        // Two columns: list (40%) + detail (60%)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        self.draw_list_panel(f, columns[0]);
        self.draw_detail_panel(f, columns[1]);
    }

    fn draw_list_panel(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .cards()
            .iter()
            .map(|card| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", card.icon)),
                    Span::raw(truncate(&card.name, 30)),
                    Span::styled(
                        format!("  {}", card.category),
                        Style::default().fg(category_color(&card.category)),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Results "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_detail_panel(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.selected_detail())
            .block(Block::default().borders(Borders::ALL).title(" Details "))
            .wrap(Wrap { trim: false })
            .scroll((self.detail_scroll, 0));

        f.render_widget(paragraph, area);
    }

    fn draw_help_bar(f: &mut Frame, area: Rect) {
        let help_text = "type: search  Enter: search now  ↑/↓: select  PgUp/PgDn: scroll  Esc: clear/quit  F1: help";
        let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, area);
    }

    fn draw_help_overlay(f: &mut Frame) {
        let area = f.area();
        let help_width = 56.min(area.width.saturating_sub(4));
        let help_height = 14.min(area.height.saturating_sub(4));
        let x = (area.width - help_width) / 2;
        let y = (area.height - help_height) / 2;
        let help_area = Rect::new(x, y, help_width, help_height);

        f.render_widget(Clear, help_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  any key      Edit the query (searches after a pause)"),
            Line::from("  Enter        Search immediately"),
            Line::from("  Up / Down    Move the selection"),
            Line::from("  PgUp/PgDn    Scroll the detail pane"),
            Line::from("  Esc          Clear the query, or quit when empty"),
            Line::from("  Ctrl-C       Quit"),
            Line::from(""),
            Line::from("Press F1 or Esc to close this help"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, help_area);
    }

    fn selected_card(&self) -> Option<&CardView> {
        self.list_state
            .selected()
            .and_then(|idx| self.cards().get(idx))
    }

    fn selected_detail(&self) -> Text<'static> {
        let Some(card) = self.selected_card() else {
            return Text::from("No item selected");
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(format!("{} {}", card.icon, card.name), bold)),
            Line::from(Span::styled(
                card.category.clone(),
                Style::default().fg(category_color(&card.category)),
            )),
            Line::from(""),
        ];
        lines.extend(card.description.lines().map(|l| Line::from(l.to_string())));

        if !card.links.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Links:", bold)));
            for link in &card.links {
                lines.push(Line::from(format!(
                    "  {} {}  {}",
                    link.kind.glyph(),
                    link.kind.label(),
                    link.href
                )));
            }
        }

        Text::from(lines)
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers, now: Instant) -> Action {
        if self.show_help {
            if matches!(key, KeyCode::F(1) | KeyCode::Esc | KeyCode::Enter) {
                self.show_help = false;
            }
            return Action::Continue;
        }

        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Esc => {
                if self.input.is_empty() {
                    return Action::Quit;
                }
                self.input.clear();
                self.controller.on_enter("");
                self.after_search();
            }
            KeyCode::Enter => {
                self.controller.on_enter(self.input.clone());
                self.after_search();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.controller.on_input(self.input.clone(), now);
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.controller.on_input(self.input.clone(), now);
                }
            }
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(3),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(3),
            _ => {}
        }
        Action::Continue
    }

    fn select_next(&mut self) {
        let len = self.cards().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
        self.detail_scroll = 0;
    }

    fn select_prev(&mut self) {
        let len = self.cards().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.detail_scroll = 0;
    }
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the browse TUI. `load` runs only once stdout is known to be a terminal.
pub fn run_browse_tui(load: impl FnOnce() -> SearchController) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(ElecError::NotInteractive(
            "browse command requires an interactive terminal".to_string(),
        ));
    }

    let controller = load();
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    BrowseTui::new(controller).run(&mut terminal)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        format!("{}...", s.chars().take(max_len.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}

fn category_color(category: &str) -> Color {
    match category {
        "Components" => Color::Yellow,
        "Microcontrollers" => Color::Green,
        "Protocols" => Color::Blue,
        "Topics" => Color::Magenta,
        "Tools" => Color::Cyan,
        _ => Color::White,
    }
}
