//! Chess board widget rendering
//!
//! Rendering is total over any session state: every repaint derives all
//! highlights and glyphs from scratch, so a failed gesture only needs a
//! repaint to recover.

use crate::styles::{self, SQUARE_SIZE};
use chess_session::GameSession;
use iced::widget::{column, container, mouse_area, row, text};
use iced::{mouse, Background, Color, Element, Length};
use shakmaty::{File, Rank, Square};

/// Gesture events for board squares. A press and release on the same square
/// is a click; a press on one square and release on another is a drop.
#[derive(Debug, Clone, Copy)]
pub enum BoardMessage {
    Pressed(Square),
    Released(Square),
}

/// Renders the chess board
pub struct BoardView<'a> {
    session: &'a GameSession,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a GameSession, flipped: bool) -> Self {
        Self { session, flipped }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for rank in 0..8u32 {
            let display_rank = if self.flipped { rank } else { 7 - rank };
            let mut rank_row = row![].spacing(0);

            for file in 0..8u32 {
                let display_file = if self.flipped { 7 - file } else { file };
                let sq = Square::from_coords(File::new(display_file), Rank::new(display_rank));

                rank_row = rank_row.push(self.render_square(sq));
            }

            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: Square) -> Element<'a, BoardMessage> {
        let is_light = (sq.file() as usize + sq.rank() as usize) % 2 == 1;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        // Highlight selected square
        if self.session.selection() == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        // Highlight last move
        if let Some((from, to)) = self.session.last_move() {
            if sq == from || sq == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let piece = self.session.piece_at(sq);
        let is_legal_target = self.session.legal_targets().contains(&sq);

        let content: Element<'a, BoardMessage> = if let Some(piece) = piece {
            if is_legal_target {
                // Capture target: tint instead of a dot, the piece stays visible
                bg_color = blend_colors(bg_color, styles::LEGAL_CAPTURE);
            }
            text(styles::piece_char(piece.color, piece.role))
                .size(SQUARE_SIZE * 0.75)
                .center()
                .into()
        } else if is_legal_target {
            // Show dot for legal moves
            text('\u{25CF}')
                .size(SQUARE_SIZE * 0.3)
                .color(styles::LEGAL_DOT)
                .center()
                .into()
        } else {
            text("").into()
        };

        let cell = container(content)
            .width(SQUARE_SIZE)
            .height(SQUARE_SIZE)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(bg_color)),
                text_color: Some(Color::BLACK),
                ..Default::default()
            });

        // A grab cursor marks the pieces the side to move may pick up
        let interaction = if self.session.can_drag_from(sq) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        };

        mouse_area(cell)
            .on_press(BoardMessage::Pressed(sq))
            .on_release(BoardMessage::Released(sq))
            .interaction(interaction)
            .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
