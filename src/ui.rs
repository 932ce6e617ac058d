use crate::badge::{PriorityBadge, StatusBadge};
use crate::format::{capitalize, format_currency};
use crate::shell::{self, Tab, ToolbarAction};
use crate::sort::{Column, SortDirection};
use crate::task::Task;
use crate::task_board::TaskBoard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusDraft,
    FocusTable,
    DraftInput(char),
    DraftBackspace,
    CommitDraft,
    PrevColumn,
    NextColumn,
    ScrollUp,
    ScrollDown,
    ToggleSort,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    Toolbar(ToolbarAction),
}

/// Board plus the view-only cursor state.
#[derive(Debug)]
pub struct App {
    pub board: TaskBoard,
    pub focus: Focus,
    pub header_cursor: usize,
    /// First body row shown; clamped again at draw time.
    pub scroll: usize,
}

impl App {
    pub fn new(board: TaskBoard) -> Self {
        Self {
            board,
            focus: Focus::Table,
            header_cursor: 0,
            scroll: 0,
        }
    }

    /// Data rows plus the trailing blank rows.
    pub fn body_rows(&self) -> usize {
        self.board.tasks().len() + shell::TRAILING_ROWS
    }

    /// Index of the draft input row in the body.
    pub fn draft_row(&self) -> usize {
        self.board.tasks().len()
    }

    /// Offset for a body showing `visible` rows. While the draft has focus
    /// its row is always on screen.
    pub fn table_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        let mut offset = self.scroll.min(self.body_rows().saturating_sub(visible));
        if self.focus == Focus::Draft {
            let row = self.draft_row();
            if row < offset {
                offset = row;
            } else if row >= offset + visible {
                offset = row + 1 - visible;
            }
        }
        offset
    }

    pub fn selected_column(&self) -> Column {
        Column::ALL[self.header_cursor]
    }

    /// Returns `false` once the user asked to quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::FocusDraft => self.focus = Focus::Draft,
            Action::FocusTable => self.focus = Focus::Table,
            Action::DraftInput(ch) => self.board.push_draft(ch),
            Action::DraftBackspace => self.board.pop_draft(),
            Action::CommitDraft => {
                self.board.add_task();
            }
            Action::PrevColumn => {
                self.header_cursor = self.header_cursor.saturating_sub(1);
            }
            Action::NextColumn => {
                if self.header_cursor < Column::ALL.len() - 1 {
                    self.header_cursor += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                if self.scroll + 1 < self.body_rows() {
                    self.scroll += 1;
                }
            }
            Action::ToggleSort => self.board.toggle_sort(self.selected_column()),
            Action::SelectTab(tab) => self.board.select_tab(tab),
            Action::NextTab => self.board.select_tab(self.board.active_tab().next()),
            Action::PrevTab => self.board.select_tab(self.board.active_tab().previous()),
            Action::Toolbar(toolbar) => self.board.trigger(toolbar),
        }
        true
    }
}

pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match focus {
        Focus::Draft => match key.code {
            KeyCode::Enter => Some(Action::CommitDraft),
            KeyCode::Esc => Some(Action::FocusTable),
            KeyCode::Backspace => Some(Action::DraftBackspace),
            KeyCode::Char(ch) => Some(Action::DraftInput(ch)),
            _ => None,
        },
        Focus::Table => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::FocusDraft),
            KeyCode::Left => Some(Action::PrevColumn),
            KeyCode::Right => Some(Action::NextColumn),
            KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::ToggleSort),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                Some(Action::SelectTab(Tab::ALL[index]))
            }
            KeyCode::Char(ch) => ToolbarAction::from_shortcut(ch).map(Action::Toolbar),
            _ => None,
        },
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = map_key(app.focus, key) {
                if !app.apply(action) {
                    return Ok(());
                }
            }
        }
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_toolbar(f, chunks[1]);
    draw_section_header(f, chunks[2]);
    draw_table(f, app, chunks[3]);
    draw_tabs(f, app.board.active_tab(), chunks[4]);
    draw_help(f, app.focus, chunks[5]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let muted = Style::default().fg(Color::Gray);
    let mut crumbs = Vec::new();
    for (i, crumb) in shell::BREADCRUMBS.iter().enumerate() {
        if i + 1 == shell::BREADCRUMBS.len() {
            crumbs.push(Span::styled(*crumb, Style::default().add_modifier(Modifier::BOLD)));
        } else {
            crumbs.push(Span::styled(*crumb, muted));
            crumbs.push(Span::styled(" › ", muted));
        }
    }

    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Min(20), Constraint::Length(30)])
        .split(inner);

    f.render_widget(Paragraph::new(Line::from(crumbs)), halves[0]);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("[ {} ]", shell::SEARCH_PLACEHOLDER), muted),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", shell::AVATAR),
                Style::default().fg(Color::White).bg(Color::Blue),
            ),
        ])),
        halves[1],
    );
}

fn draw_toolbar(f: &mut Frame, area: Rect) {
    let button = |action: ToolbarAction| {
        Span::raw(format!("[{}] {}  ", action.shortcut(), action.label()))
    };
    let mut spans = vec![Span::styled("Toolbar  ", Style::default().add_modifier(Modifier::BOLD))];
    spans.extend(ToolbarAction::LEFT.into_iter().map(button));
    spans.push(Span::raw("│  "));
    spans.extend(ToolbarAction::RIGHT.into_iter().map(|action| {
        if action == ToolbarAction::NewAction {
            Span::styled(
                format!("[{}] + {}", action.shortcut(), action.label()),
                Style::default().fg(Color::White).bg(Color::Green),
            )
        } else {
            button(action)
        }
    }));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_section_header(f: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(shell::SECTION_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
    ];
    let chip_colors = [Color::Green, Color::Magenta];
    for (chip, color) in shell::SECTION_CHIPS.iter().zip(chip_colors) {
        spans.push(Span::styled(format!(" {chip} "), Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(shell::SECTION_LABEL, Style::default().fg(Color::Gray)));
    spans.push(Span::raw(" (+)"));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn column_width(column: Column) -> u16 {
    match column {
        Column::Id => 4,
        Column::Task => 42,
        Column::Submitted | Column::DueDate => 11,
        Column::Status => 14,
        Column::Assignee => 14,
        Column::Url => 22,
        Column::Submitter => 17,
        Column::Priority => 9,
        Column::Extract => 12,
        Column::AddNew => 3,
    }
}

fn header_cell(app: &App, index: usize, column: Column) -> Cell<'static> {
    let marker = match app.board.sort_spec().direction_of(column) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };
    let mut style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
    if app.focus == Focus::Table && index == app.header_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Cell::from(Span::styled(format!("{}{marker}", column.header()), style))
}

fn task_cell(task: &Task, column: Column) -> Cell<'_> {
    match column {
        Column::Id => Cell::from(task.id.to_string()),
        Column::Task => Cell::from(task.task.as_str()),
        Column::Submitted => Cell::from(task.submitted.as_str()),
        Column::Status => Cell::from(Span::styled(
            capitalize(&task.status),
            StatusBadge::from_value(&task.status).style(),
        )),
        Column::Assignee => Cell::from(task.assignee.as_str()),
        Column::Url => Cell::from(Span::styled(
            task.url.as_str(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Column::Submitter => Cell::from(task.submitter.as_str()),
        Column::Priority => Cell::from(Span::styled(
            capitalize(&task.priority),
            PriorityBadge::from_value(&task.priority).style(),
        )),
        Column::DueDate => Cell::from(task.due_date.as_str()),
        Column::Extract => Cell::from(format_currency(task.extract)),
        Column::AddNew => Cell::from(""),
    }
}

fn draft_cell(app: &App) -> Cell<'_> {
    let draft = app.board.draft();
    let focused = app.focus == Focus::Draft;
    let line = if draft.is_empty() && !focused {
        Line::from(Span::styled(
            shell::DRAFT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        Line::from(vec![
            Span::raw(draft),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        Line::from(draft)
    };
    Cell::from(line).style(Style::default().add_modifier(Modifier::UNDERLINED))
}

fn draw_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(
        Column::ALL
            .iter()
            .enumerate()
            .map(|(i, &column)| header_cell(app, i, column)),
    );

    let view = app.board.rows();
    let mut rows: Vec<Row> = view
        .iter()
        .map(|task| Row::new(Column::ALL.iter().map(|&column| task_cell(task, column))))
        .collect();

    let len = app.board.tasks().len();
    for n in 1..=shell::TRAILING_ROWS {
        let label = Cell::from((len + n).to_string());
        if n == 1 {
            rows.push(Row::new(vec![label, draft_cell(app)]));
        } else {
            rows.push(Row::new(vec![label]));
        }
    }

    let widths = Column::ALL.iter().map(|&column| Constraint::Length(column_width(column)));
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL));
    // borders and header take three lines
    let visible = usize::from(area.height.saturating_sub(3));
    let mut state = TableState::default().with_offset(app.table_offset(visible));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_tabs(f: &mut Frame, active: Tab, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.label())).collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Min(10), Constraint::Length(3)])
        .split(inner);
    f.render_widget(tabs, parts[0]);
    f.render_widget(
        Paragraph::new(Span::styled(" + ", Style::default().fg(Color::Gray))),
        parts[1],
    );
}

fn draw_help(f: &mut Frame, focus: Focus, area: Rect) {
    let help = match focus {
        Focus::Table => "←/→ column · Enter/s sort · ↑/↓ scroll · 1-4/Tab tabs · a add task · q quit",
        Focus::Draft => "type a task · Enter add · Esc done",
    };
    f.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        area,
    );
}
