use anyhow::Result;
use crossterm::event;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::stdout;
use tracing::{debug, warn};

pub mod controller;
pub mod inputs;
pub mod theme;
pub mod viewport;

use crate::table::Table;
use controller::{BrowserEvent, DualPaneController, Flow, PaneSnapshot};
use theme::Palette;
use viewport::ViewportError;

/// Header and footer lines that are not available to the panes.
pub const CHROME_LINES: u16 = 2;

/// Presentation settings for the browser.
#[derive(Debug, Clone, Copy)]
pub struct UiOptions {
    /// Width of the row pane as a percentage of the terminal width
    pub left_pane_percent: u16,
}

struct AppState<'a> {
    table: &'a Table,
    controller: DualPaneController,
    left_pane_percent: u16,
    error: Option<String>,
}

impl<'a> AppState<'a> {
    fn new(table: &'a Table, options: &UiOptions, height: usize) -> Result<Self, ViewportError> {
        let controller = DualPaneController::new(table.row_count(), table.column_count(), height)?;
        debug!(
            rows = controller.row_viewport().length(),
            columns = controller.column_viewport().length(),
            height = controller.row_viewport().height(),
            "Browser state created"
        );
        Ok(Self {
            table,
            controller,
            left_pane_percent: options.left_pane_percent,
            error: None,
        })
    }

    /// Feed one event to the controller. A rejected resize keeps the old geometry and
    /// raises the error banner until the next successful resize.
    fn apply(&mut self, event: BrowserEvent) -> Flow {
        match self.controller.handle_event(event) {
            Ok(flow) => {
                if matches!(event, BrowserEvent::Resize(_)) {
                    self.error = None;
                }
                flow
            }
            Err(e) => {
                warn!(error = %e, "Resize rejected");
                self.error = Some(format!("Terminal too small: {e}"));
                Flow::Continue
            }
        }
    }
}

/// Launch the interactive browser. This is a blocking call that returns when the user quits.
pub fn run(table: &Table, options: &UiOptions) -> Result<()> {
    // 1. Size the panes before touching the terminal so a tiny window fails cleanly
    let (_, rows) = crossterm::terminal::size()?;
    let mut app = AppState::new(table, options, usize::from(inputs::pane_height(rows)))?;

    // 2. Enter alternate screen + raw mode
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // 3. Setup ratatui terminal
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 4. Event loop
    let res = run_app(&mut terminal, &mut app);

    // 5. Restore terminal state no matter what
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        let Some(browser_event) = inputs::event_to_browser_event(&event::read()?) else {
            continue;
        };
        if app.apply(browser_event) == Flow::Quit {
            debug!("Quit requested");
            break;
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, app: &AppState<'_>) {
    let size = f.area();

    // Split layout: header (1 line), panes (rest), footer (1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let bar = Style::default()
        .fg(Palette::BAR)
        .add_modifier(Modifier::REVERSED);

    let header = split_panes(chunks[0], app.left_pane_percent);
    f.render_widget(Paragraph::new("Row").style(bar), header[0]);
    f.render_widget(Paragraph::new("Column").style(bar), header[1]);

    let snapshot = app.controller.render_snapshot();
    let panes = split_panes(chunks[1], app.left_pane_percent);
    f.render_widget(row_pane(app.table, &snapshot.rows), panes[0]);
    f.render_widget(
        column_pane(app.table, &snapshot.columns, app.controller.selected_row()),
        panes[1],
    );

    let footer = Paragraph::new(format!("-- {} --", app.table.name())).style(bar);
    f.render_widget(footer, chunks[2]);

    // Error banner
    if let Some(err) = &app.error {
        let banner = Paragraph::new(err.as_str())
            .style(Style::default().fg(Palette::ERROR_FG).bg(Palette::ERROR_BG));
        let area = Rect::new(0, size.height.saturating_sub(2), size.width, 1);
        f.render_widget(banner, area);
    }
}

fn split_panes(area: Rect, left_percent: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(left_percent), Constraint::Min(0)])
        .split(area)
}

fn selected_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Palette::SELECTED_FG)
            .bg(Palette::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Palette::SELECTED_FG)
            .bg(Palette::INACTIVE_SELECTED_BG)
    }
}

/// Row labels. The selected record stays highlighted even without focus.
fn row_pane<'a>(table: &'a Table, pane: &PaneSnapshot) -> Paragraph<'a> {
    let lines: Vec<Line> = pane
        .visible
        .clone()
        .map(|i| {
            let label = table.labels().get(i).map_or("", String::as_str);
            let style = if pane.selected == Some(i) {
                selected_style(pane.focused)
            } else {
                Style::default().fg(Palette::NORMAL)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Palette::SEPARATOR)),
    )
}

/// `name: value` pairs for the selected record.
fn column_pane<'a>(table: &'a Table, pane: &PaneSnapshot, row: Option<usize>) -> Paragraph<'a> {
    let lines: Vec<Line> = pane
        .visible
        .clone()
        .map(|i| {
            let name = table.columns().get(i).map_or("", String::as_str);
            let value = row.and_then(|r| table.cell(r, i)).unwrap_or("");
            let style = if pane.focused && pane.selected == Some(i) {
                selected_style(true)
            } else {
                Style::default().fg(Palette::NORMAL)
            };
            Line::from(vec![
                Span::styled(format!("{name}:"), style),
                Span::styled(format!(" {value}"), Style::default().fg(Palette::VALUE)),
            ])
        })
        .collect();

    Paragraph::new(lines)
}
