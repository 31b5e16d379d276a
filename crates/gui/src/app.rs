//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::settings::Settings;
use crate::styles::PANEL_WIDTH;

use chess_session::{GameSession, GameStatus};
use iced::keyboard::{self, Key};
use iced::widget::{
    button, column, container, horizontal_rule, row, scrollable, text, vertical_space,
};
use iced::{Element, Length, Subscription, Task, Theme};
use shakmaty::{Color, Square};

/// Main application state
pub struct ChessApp {
    /// The one game in play; reset swaps in a fresh value
    session: GameSession,
    /// Settings loaded at startup
    settings: Settings,
    /// Board flipped?
    board_flipped: bool,
    /// Square where the current mouse press started
    press_origin: Option<Square>,
    /// Press origin if it may start a drag (piece of the side to move)
    drag_from: Option<Square>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    FlipBoard,
}

impl ChessApp {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load_or_default();
        (
            Self {
                session: GameSession::new(settings.promotion.role()),
                board_flipped: settings.flip_board,
                settings,
                press_origin: None,
                drag_from: None,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The `r` key resets the game, mirroring the New Game button.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            Key::Character("r") => Some(Message::NewGame),
            _ => None,
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(msg) => self.handle_board(msg),

            Message::NewGame => {
                self.session = GameSession::new(self.settings.promotion.role());
                self.press_origin = None;
                self.drag_from = None;
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
            }
        }
        Task::none()
    }

    /// Resolve square gestures into session calls.
    ///
    /// Press and release on the same square is a click; a release elsewhere
    /// completes a drag, but only if the press was allowed to start one. A
    /// release without a matching press is ignored.
    fn handle_board(&mut self, msg: BoardMessage) {
        match msg {
            BoardMessage::Pressed(sq) => {
                self.press_origin = Some(sq);
                self.drag_from = self.session.can_drag_from(sq).then_some(sq);
            }
            BoardMessage::Released(sq) => {
                let origin = self.press_origin.take();
                let drag_from = self.drag_from.take();
                match (origin, drag_from) {
                    (Some(origin), _) if origin == sq => self.session.activate_square(sq),
                    (Some(_), Some(from)) => self.session.drop_move(from, sq),
                    _ => {}
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.session, self.board_flipped)
            .view()
            .map(Message::Board);

        let panel = self.control_panel();

        row![
            board,
            container(panel)
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let turn_line = text(format!("{} to move", color_name(self.session.turn()))).size(16);

        // Distinct draw reasons collapse into one label here, on purpose
        let status = self.session.status();
        let status_line = text(match status {
            GameStatus::Checkmate { winner } => {
                format!("Checkmate! {} wins", color_name(winner))
            }
            GameStatus::Draw(_) => "Draw".to_string(),
            GameStatus::InProgress { .. } => "In progress".to_string(),
        })
        .size(16);

        let check_line = text(match status {
            GameStatus::InProgress { in_check: true } => "Check!",
            _ => "",
        })
        .size(16);

        // Move history
        let moves_title = text("Moves").size(16);
        let mut moves_list = column![].spacing(2);

        for (i, chunk) in self.session.moves().chunks(2).enumerate() {
            let move_num = i + 1;
            let white_move = chunk[0].san.as_str();
            let black_move = chunk.get(1).map(|m| m.san.as_str()).unwrap_or("");

            moves_list = moves_list
                .push(text(format!("{}. {} {}", move_num, white_move, black_move)).size(13));
        }

        let moves_scroll = scrollable(moves_list).height(Length::Fill);

        column![
            new_game_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            turn_line,
            status_line,
            check_line,
            vertical_space().height(10),
            horizontal_rule(1),
            vertical_space().height(10),
            moves_title,
            moves_scroll,
        ]
        .spacing(5)
        .into()
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
