use std::{cell::Cell, time::Duration};

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph},
};
use rowline_engine::{GameController, GameKind, Player, Pos, TimerQueue, piece_label};
use tracing::debug;

use crate::{
    tui::App,
    view::{BoardDisplay, KeyBinding, KeyBindingDisplay, style},
};

const PLAYING_KEYS: &[KeyBinding<'static>] = &[
    ("←↑↓→", "Move"),
    ("Enter/Space/Click", "Play"),
    ("N", "New game"),
    ("D", "Difficulty"),
    ("Q", "Quit"),
];

const TIC_TAC_TOE_KEYS: &[KeyBinding<'static>] = &[
    ("←↑↓→", "Move"),
    ("Enter/Space/Click", "Play"),
    ("N", "New game"),
    ("Q", "Quit"),
];

#[derive(Debug)]
pub(super) struct PlayApp {
    kind: GameKind,
    controller: GameController,
    timers: TimerQueue,
    cursor: Pos,
    /// Grid area of the last drawn board, for mouse hit testing.
    grid_area: Cell<Rect>,
    is_exiting: bool,
}

impl PlayApp {
    pub(super) fn new(kind: GameKind, controller: GameController) -> Self {
        let center = controller.board_size() / 2;
        Self {
            kind,
            controller,
            timers: TimerQueue::new(),
            cursor: Pos::new(center, center),
            grid_area: Cell::new(Rect::default()),
            is_exiting: false,
        }
    }

    fn board_display(&self) -> BoardDisplay<'_> {
        let session = self.controller.session();
        BoardDisplay::new(session.board(), self.kind)
            .cursor(self.cursor)
            .last_move(session.last_move())
            .removing(session.removal().target())
            .block(Block::bordered().style(style::BOARD))
    }

    fn move_cursor(&mut self, delta: (isize, isize)) {
        if let Some(pos) = self.cursor.step(delta, 1, self.controller.board_size()) {
            self.cursor = pos;
        }
    }

    fn play_at(&mut self, pos: Pos) {
        self.cursor = pos;
        match self.controller.player_move(pos, &mut self.timers) {
            Ok(outcome) => debug!(placed = %outcome.placed(), "human move"),
            Err(e) => debug!(%pos, "move rejected: {e}"),
        }
    }

    fn new_game(&mut self) {
        self.timers.clear();
        self.controller.new_game(None);
    }

    fn cycle_difficulty(&mut self) {
        let difficulty = self.controller.difficulty().cycle();
        self.controller.set_difficulty(difficulty);
    }

    fn title(&self) -> Line<'static> {
        let you = piece_label(self.kind, Player::Human);
        let title = match self.kind {
            GameKind::Gomoku => format!(
                "{} | you: {you} | AI: {}",
                self.kind,
                self.controller.difficulty()
            ),
            GameKind::TicTacToe => format!("{} | you: {you}", self.kind),
        };
        Line::from(title)
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_press_event() {
            match event.code {
                KeyCode::Left => self.move_cursor((-1, 0)),
                KeyCode::Right => self.move_cursor((1, 0)),
                KeyCode::Up => self.move_cursor((0, -1)),
                KeyCode::Down => self.move_cursor((0, 1)),
                KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('d') if self.kind == GameKind::Gomoku => self.cycle_difficulty(),
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
            return;
        }

        if let Event::Mouse(mouse) = event
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
        {
            let hit = self
                .board_display()
                .cell_at(self.grid_area.get(), mouse.column, mouse.row);
            if let Some(pos) = hit {
                self.play_at(pos);
            }
        }
    }

    fn update(&mut self, elapsed: Duration) -> bool {
        let due = self.timers.advance(elapsed);
        let changed = !due.is_empty();
        for task in due {
            let result = self.controller.run_task(task, &mut self.timers);
            debug!(?result, "task finished");
        }
        changed
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(Block::new().style(style::DEFAULT), frame.area());

        let display = self.board_display();
        let [title_area, board_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(display.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let [board_area] = Layout::horizontal([Constraint::Length(display.width())])
            .flex(Flex::Center)
            .areas(board_area);

        self.grid_area.set(display.grid_area(board_area));

        frame.render_widget(self.title().centered(), title_area);
        frame.render_widget(&display, board_area);
        frame.render_widget(
            Line::from(self.controller.status_text()).centered(),
            status_area,
        );
        let keys = match self.kind {
            GameKind::Gomoku => PLAYING_KEYS,
            GameKind::TicTacToe => TIC_TAC_TOE_KEYS,
        };
        frame.render_widget(KeyBindingDisplay::new(keys), help_area);

        if self.controller.is_game_over() {
            let text = Text::from(vec![
                Line::from(self.controller.status_text()),
                Line::from("N: new game  Q: quit").style(style::HINT),
            ])
            .centered();
            let popup = popup_area(board_area, text.width(), text.height());
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Paragraph::new(text).block(Block::bordered().style(style::GAME_OVER)),
                popup,
            );
        }
    }
}

/// Centered area fitting `width`×`height` content plus a border.
fn popup_area(area: Rect, width: usize, height: usize) -> Rect {
    let width = u16::try_from(width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(height).unwrap_or(u16::MAX).saturating_add(2);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}
