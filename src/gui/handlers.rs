use crate::core::board::{Board, square_name};
use crate::gui::launch::Bonsai;

use eframe::egui::{Context, Key, Pos2, Rect, Response, Sense, Ui, Vec2, ViewportCommand};

impl Bonsai {
    /// Allocates the square board region (sized to the shorter side, so
    /// resizing letterboxes instead of stretching) and reports pointer
    /// input. Clicks are logged with the square they landed on and nothing
    /// more; Escape asks the window to close.
    pub fn handle_event(&self, ctx: &Context, ui: &mut Ui) -> Response {
        let max_size = ui.available_size();
        let size = Vec2::splat(max_size.x.min(max_size.y));
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let response = ui.interact(rect, ui.id().with("chessboard"), Sense::click());

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                match self.square_at_pos(pos, response.rect) {
                    Some((rank, file)) => {
                        tracing::info!(square = %square_name(rank, file), "board clicked");
                    }
                    None => tracing::debug!(x = pos.x, y = pos.y, "click outside the board"),
                }
            }
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        response
    }

    pub fn square_at_pos(&self, pos: Pos2, board_rect: Rect) -> Option<(usize, usize)> {
        let square_size = board_rect.width() / 8.0;
        let file = ((pos.x - board_rect.left()) / square_size).floor() as usize;
        let rank = ((pos.y - board_rect.top()) / square_size).floor() as usize;
        if Board::is_valid_pos((rank, file)) {
            Some((rank, file))
        } else {
            None
        }
    }
}
