use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::data::payment::{payment_columns, Payment};
use crate::dnd::events::DndEvent;
use crate::dnd::interaction::{ColumnDragInteraction, InteractionOutcome};
use crate::dnd::manager::DragDropManager;
use crate::logging::{get_log_buffer, LogRingBuffer};
use crate::table::controller::TableController;
use crate::table::position::PositionIndexMap;
use crate::ui::header_style::HeaderStyler;
use crate::ui::layout::{centered_rect, TableLayout};
use crate::ui::render_context::TableRenderContextBuilder;
use crate::ui::table_renderer::render_table;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const LOG_PANE_HEIGHT: u16 = 10;

/// Interactive payments table with draggable column headers
pub struct TableApp {
    config: Config,
    styler: HeaderStyler,
    table: TableController<Payment>,
    dnd: DragDropManager,
    interaction: ColumnDragInteraction,
    positions: PositionIndexMap,
    layout: TableLayout,
    log_buffer: Option<LogRingBuffer>,
    show_help: bool,
    show_logs: bool,
    status_message: String,
    should_quit: bool,
    ui_dirty: bool,
}

impl TableApp {
    pub fn new(config: Config, rows: Vec<Payment>) -> Result<Self> {
        let table = TableController::new(payment_columns(), rows)
            .context("Failed to build the payments table")?;
        let styler = HeaderStyler::new(&config.theme, &config.display);
        let show_logs = config.behavior.show_log_pane;

        info!(target: "ui", "Table ready with {} rows", table.rows().len());

        Ok(Self {
            config,
            styler,
            table,
            dnd: DragDropManager::new(),
            interaction: ColumnDragInteraction::new(),
            positions: PositionIndexMap::default(),
            layout: TableLayout::default(),
            log_buffer: get_log_buffer(),
            show_help: false,
            show_logs,
            status_message: "Drag a header onto another to move it".to_string(),
            should_quit: false,
            ui_dirty: true,
        })
    }

    pub fn table(&self) -> &TableController<Payment> {
        &self.table
    }

    pub fn dnd(&self) -> &DragDropManager {
        &self.dnd
    }

    pub fn interaction(&self) -> &ColumnDragInteraction {
        &self.interaction
    }

    /// Geometry of the last rendered table
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            let order_changed = self.table.redraw_flag().take();
            if order_changed || std::mem::take(&mut self.ui_dirty) || self.show_logs {
                terminal.draw(|f| self.draw(f))?;
            }

            if self.should_quit {
                break;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(target: "ui", "Terminal resized to {}x{}", width, height);
                    self.ui_dirty = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.dnd.is_dragging() {
                    let events = self.dnd.cancel();
                    self.apply_dnd(events);
                } else if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::F(5) => self.show_logs = !self.show_logs,
            KeyCode::Char('r') => match self.table.reset_order() {
                Ok(()) => self.status_message = "Column order reset".to_string(),
                Err(e) => self.report_error(&e),
            },
            _ => return,
        }
        self.ui_dirty = true;
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        let events = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.dnd.pointer_down(x, y),
            MouseEventKind::Drag(MouseButton::Left) => self.dnd.pointer_move(x, y),
            // Some terminals report plain moves while the button is held
            MouseEventKind::Moved if self.dnd.is_dragging() => self.dnd.pointer_move(x, y),
            MouseEventKind::Up(MouseButton::Left) => self.dnd.pointer_up(x, y),
            _ => return,
        };

        // The preview follows the pointer even when nothing else changed
        if self.dnd.is_dragging() && self.config.display.drag_preview {
            self.ui_dirty = true;
        }
        self.apply_dnd(events);
    }

    fn apply_dnd(&mut self, events: Vec<DndEvent>) {
        if events.is_empty() {
            return;
        }
        self.ui_dirty = true;

        match self
            .interaction
            .apply(events, &self.positions, &mut self.table)
        {
            Ok(outcomes) => {
                for outcome in outcomes {
                    self.status_message = describe(&outcome);
                }
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn report_error(&mut self, e: &dyn std::fmt::Display) {
        error!(target: "ui", "{}", e);
        self.status_message = format!("Error: {}", e);
    }

    /// Render one frame and refresh the drag-and-drop registrations to match
    /// what was drawn.
    pub fn draw(&mut self, f: &mut Frame) {
        let instance = self.table.instance();
        let headers = instance.headers();
        let row_model = instance.row_model();

        self.interaction.sync(&headers);
        self.positions = PositionIndexMap::from_headers(&headers);

        let ctx = TableRenderContextBuilder::new()
            .handle(self.styler.handle())
            .title("Payments")
            .headers(&headers, &self.interaction)
            .rows(&row_model)
            .display_options(
                self.config.display.show_row_numbers,
                self.config.display.column_spacing,
            )
            .drag_preview(&self.dnd, self.config.display.drag_preview)
            .build();

        let log_height = if self.show_logs { LOG_PANE_HEIGHT } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(f.area());

        self.layout = render_table(f, chunks[0], &ctx, &self.styler);
        self.interaction
            .register(&mut self.dnd, &self.layout.header_cells);

        if self.show_logs {
            self.render_log_pane(f, chunks[1]);
        }
        self.render_status_bar(f, chunks[2]);

        if self.show_help {
            self.render_help_popup(f);
        }
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let order = self
            .table
            .column_ids()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mode = if self.dnd.is_dragging() { "DRAG" } else { "VIEW" };
        let status_line = Line::from(vec![
            Span::styled(
                mode,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&self.status_message, Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(order, Style::default().fg(Color::Gray)),
            Span::raw(" | F1=Help q=Quit"),
        ]);

        let status = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(status, area);
    }

    fn render_log_pane(&self, f: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .log_buffer
            .as_ref()
            .map(|buffer| buffer.get_recent(visible))
            .unwrap_or_default()
            .iter()
            .map(|entry| Line::from(entry.format_for_display()))
            .collect();

        let logs = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Logs (F5)"))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(logs, area);
    }

    fn render_help_popup(&self, f: &mut Frame) {
        let area = centered_rect(60, 50, f.area());
        f.render_widget(Clear, area);

        let help_text = vec![
            Line::from(vec![Span::styled(
                "Column drag and drop",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Mouse:"),
            Line::from("  Press on a header and drag it onto another header"),
            Line::from("  Release away from the headers to cancel"),
            Line::from(""),
            Line::from("Keys:"),
            Line::from("  Esc       - Cancel drag / close help / quit"),
            Line::from("  r         - Reset column order"),
            Line::from("  F1        - Toggle this help"),
            Line::from("  F5        - Toggle log pane"),
            Line::from("  q, Ctrl+C - Quit"),
        ];

        let help_popup = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        f.render_widget(help_popup, area);
    }
}

fn describe(outcome: &InteractionOutcome) -> String {
    match outcome {
        InteractionOutcome::DragStarted(id) => format!("Dragging {}", id),
        InteractionOutcome::Dropped(drop) if drop.is_noop() => {
            format!("{} dropped onto itself", drop.column)
        }
        InteractionOutcome::Dropped(drop) => format!(
            "Moved {} from position {} to {}",
            drop.column, drop.from, drop.to
        ),
        InteractionOutcome::Cancelled(id) => format!("Drag of {} cancelled", id),
    }
}

/// Run the interactive table until the user quits
pub fn run_tui(config: Config, rows: Vec<Payment>) -> Result<()> {
    let mut app = TableApp::new(config, rows)?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    restore_on_err(
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture),
        restore_terminal,
    )
    .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = restore_on_err(Terminal::new(backend), restore_terminal)
        .context("Failed to create terminal")?;

    let res = app.run(&mut terminal);

    restore_terminal();
    let _ = terminal.show_cursor();

    info!(target: "ui", "Final column order: {:?}", app.table().column_ids());
    res
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Runs `restore` before handing back a failed setup step
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}
