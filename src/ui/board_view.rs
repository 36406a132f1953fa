use crate::calc::{build_board, format_date, Board, DateRange, Locale, Palette};
use crate::data::{BoardSettings, ReservationData, RoomLayout};
use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// Column widths for the group/room labels; day columns are 3 wide.
const GROUP_COL: u16 = 14;
const ROOM_COL: u16 = 12;
const DAY_COL: u16 = 3;

#[derive(PartialEq, Clone, Copy)]
enum BoardSpan {
    Week,
    Month,
}

pub struct App<'a> {
    reservations: &'a ReservationData,
    layout: &'a RoomLayout,
    settings: BoardSettings,
    locale: Locale,
    palette: Palette,
    today: NaiveDate,
    /// Anchor date for the rendered period; n/p move it by one span.
    anchor: NaiveDate,
    span: BoardSpan,
    board: Board,
    cursor_row: usize,
    cursor_col: usize,
}

impl<'a> App<'a> {
    pub fn new(
        reservations: &'a ReservationData,
        layout: &'a RoomLayout,
        settings: BoardSettings,
        today: NaiveDate,
    ) -> Self {
        let locale = Locale::from_tag(&settings.locale);
        let palette = Palette::default();
        let board = build_board(
            &DateRange::month(today),
            &reservations.reservations,
            layout,
            &palette,
            &settings.currency,
        );
        App {
            reservations,
            layout,
            settings,
            locale,
            palette,
            today,
            anchor: today,
            span: BoardSpan::Month,
            board,
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    fn range(&self) -> DateRange {
        match self.span {
            BoardSpan::Week => DateRange::week(self.anchor),
            BoardSpan::Month => DateRange::month(self.anchor),
        }
    }

    fn rebuild(&mut self) {
        self.board = build_board(
            &self.range(),
            &self.reservations.reservations,
            self.layout,
            &self.palette,
            &self.settings.currency,
        );
        let cols = self.board.range.num_days() as usize;
        if self.cursor_col >= cols {
            self.cursor_col = cols.saturating_sub(1);
        }
        if self.cursor_row >= self.board.rows.len() {
            self.cursor_row = self.board.rows.len().saturating_sub(1);
        }
    }

    fn set_span(&mut self, span: BoardSpan) {
        if self.span != span {
            self.span = span;
            self.rebuild();
        }
    }

    fn next_period(&mut self) {
        self.anchor = match self.span {
            BoardSpan::Week => self.anchor.checked_add_days(Days::new(7)),
            // first day after the rendered month
            BoardSpan::Month => self.range().end().checked_add_days(Days::new(1)),
        }
        .unwrap_or(self.anchor);
        self.rebuild();
    }

    fn prev_period(&mut self) {
        self.anchor = match self.span {
            BoardSpan::Week => self.anchor.checked_sub_days(Days::new(7)),
            // last day of the previous month
            BoardSpan::Month => self.range().start().pred_opt(),
        }
        .unwrap_or(self.anchor);
        self.rebuild();
    }

    fn go_today(&mut self) {
        self.anchor = self.today;
        self.rebuild();
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let rows = self.board.rows.len();
        let cols = self.board.range.num_days() as usize;
        if rows == 0 || cols == 0 {
            return;
        }
        self.cursor_row = self
            .cursor_row
            .saturating_add_signed(d_row)
            .min(rows - 1);
        self.cursor_col = self
            .cursor_col
            .saturating_add_signed(d_col)
            .min(cols - 1);
    }

    /// Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('w') => self.set_span(BoardSpan::Week),
            KeyCode::Char('m') => self.set_span(BoardSpan::Month),
            KeyCode::Char('n') => self.next_period(),
            KeyCode::Char('p') => self.prev_period(),
            KeyCode::Char('t') => self.go_today(),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            _ => {}
        }
        false
    }

    fn selected_cell_title(&self) -> String {
        match self.board.rows.get(self.cursor_row) {
            Some(row) => format!(
                "{} / {}",
                row.room,
                format_date(self.board.range.date_at(self.cursor_col as u64))
            ),
            None => "No rooms".to_string(),
        }
    }

    fn selected_tooltip(&self) -> &str {
        self.board
            .rows
            .get(self.cursor_row)
            .and_then(|row| row.cells.get(self.cursor_col))
            .map(|cell| cell.tooltip.as_str())
            .unwrap_or("")
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // title
                Constraint::Min(6),     // board table
                Constraint::Length(8),  // tooltip panel
                Constraint::Length(1),  // status line
            ])
            .split(f.area());

        self.render_title(f, chunks[0]);
        self.render_board(f, chunks[1]);
        self.render_tooltip(f, chunks[2]);
        self.render_status(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let range = &self.board.range;
        let title = format!(
            "{}  [{} - {}]",
            range.month_label(&self.locale, self.today),
            format_date(range.start()),
            format_date(range.end())
        );
        let widget = Paragraph::new(Line::from(title))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(widget, area);
    }

    fn render_board(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let range = &self.board.range;
        let n_days = range.num_days() as u64;

        let mut header_cells = vec![Cell::from(""), Cell::from("")];
        for i in 0..n_days {
            header_cells.push(Cell::from(format!(
                "{:>2}\n{:>2}",
                range.weekday_label(i, &self.locale),
                range.date_at(i).day()
            )));
        }
        let header = Row::new(header_cells)
            .height(2)
            .style(Style::default().add_modifier(Modifier::BOLD));

        let mut rows: Vec<Row> = Vec::with_capacity(self.board.rows.len() + 2);
        for (row_index, board_row) in self.board.rows.iter().enumerate() {
            let base = hex_color(board_row.cells.first().map_or("", |c| c.color.as_str()));
            let light = hex_color(board_row.cells.first().map_or("", |c| c.color_light.as_str()));
            let label_style = Style::default().bg(base).fg(Color::Black);

            let group_label = if board_row.first_in_group {
                board_row.group.as_str()
            } else {
                ""
            };
            let mut cells = vec![
                Cell::from(group_label).style(label_style),
                Cell::from(board_row.room.as_str()).style(label_style),
            ];
            for (col_index, cell) in board_row.cells.iter().enumerate() {
                let mut style = Style::default().bg(light).fg(Color::Black);
                if row_index == self.cursor_row && col_index == self.cursor_col {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                cells.push(Cell::from(format!(" {}", cell.symbol.glyph())).style(style));
            }
            rows.push(Row::new(cells));
        }

        let totals_style = Style::default().add_modifier(Modifier::BOLD);
        let mut occupancy_cells = vec![Cell::from("Rooms"), Cell::from("occupied")];
        let mut guest_cells = vec![Cell::from("Guests"), Cell::from("")];
        for i in 0..n_days {
            occupancy_cells.push(Cell::from(format!("{:>2}", self.board.occupancy_on(i))));
            guest_cells.push(Cell::from(format!("{:>2}", self.board.guests_on(i))));
        }
        rows.push(Row::new(occupancy_cells).style(totals_style));
        rows.push(Row::new(guest_cells).style(totals_style));

        let mut widths = vec![
            Constraint::Length(GROUP_COL),
            Constraint::Length(ROOM_COL),
        ];
        widths.extend((0..n_days).map(|_| Constraint::Length(DAY_COL)));

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(0)
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(table, area);
    }

    fn render_tooltip(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let widget = Paragraph::new(self.selected_tooltip()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.selected_cell_title()),
        );
        f.render_widget(widget, area);
    }

    fn render_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let status = format!(
            "Total revenue: {}   [q quit | w week | m month | n next | p prev | t today | arrows select]",
            self.board.total_revenue_text(&self.settings.currency)
        );
        f.render_widget(Paragraph::new(status), area);
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(100))? {
            if let CEvent::Key(key) = event::read()? {
                if app.handle_key(key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Parses a "#RRGGBB" string; anything else resets to the terminal default.
fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::Reset;
    }
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    Color::Rgb(channel(0), channel(2), channel(4))
}
