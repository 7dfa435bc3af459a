use crate::core::board::square_name;
use crate::gui::launch::Bonsai;
use crate::gui::{DARK_SQUARE, LABEL_MARGIN, LIGHT_SQUARE};

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Response, Ui, Vec2};

/// Fill color of one square. `(rank + file) % 2 == 0` picks the light
/// color; this parity is the single source of truth for board coloring.
pub fn square_color(rank: usize, file: usize) -> Color32 {
    if (rank + file) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

/// Label color for one square: the opposite parity selection, so the text
/// stays legible against its own background.
pub fn label_color(rank: usize, file: usize) -> Color32 {
    if (rank + file) % 2 == 0 {
        DARK_SQUARE
    } else {
        LIGHT_SQUARE
    }
}

/// Screen rectangle of one square. Origins are multiples of `square_size`
/// rather than running sums, so the grid stays exact out to the last
/// rank and file.
pub fn square_rect(board: Rect, square_size: f32, rank: usize, file: usize) -> Rect {
    let x = board.left() + file as f32 * square_size;
    let y = board.top() + rank as f32 * square_size;
    Rect::from_min_size(Pos2::new(x, y), Vec2::splat(square_size))
}

impl Bonsai {
    /// Draws one complete frame from the board and the asset table: tile
    /// fill, coordinate label, then any occupant's artwork alpha-blended
    /// over the full square. Reads `self` only.
    pub fn render(&self, response: &Response, ui: &Ui) {
        let rect = response.rect;
        let square_size = rect.width() / 8.0;
        let painter = ui.painter_at(rect);

        for rank in 0..8 {
            for file in 0..8 {
                let square = square_rect(rect, square_size, rank, file);
                painter.rect_filled(square, 0.0, square_color(rank, file));

                painter.text(
                    square.min + Vec2::splat(LABEL_MARGIN),
                    Align2::LEFT_TOP,
                    square_name(rank, file),
                    FontId::monospace(14.0),
                    label_color(rank, file),
                );

                if let Some(kind) = self.board.piece_at((rank, file)) {
                    let texture = self.images.get_texture(kind);
                    painter.image(
                        texture.id(),
                        square,
                        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_splits_the_board_evenly() {
        let mut light = 0;
        let mut dark = 0;
        for rank in 0..8 {
            for file in 0..8 {
                if square_color(rank, file) == LIGHT_SQUARE {
                    assert_eq!((rank + file) % 2, 0);
                    light += 1;
                } else {
                    assert_eq!((rank + file) % 2, 1);
                    dark += 1;
                }
            }
        }
        assert_eq!(light, 32);
        assert_eq!(dark, 32);
    }

    #[test]
    fn labels_contrast_with_their_square() {
        for rank in 0..8 {
            for file in 0..8 {
                let fill = square_color(rank, file);
                let label = label_color(rank, file);
                assert_ne!(fill, label);
                assert!(label == LIGHT_SQUARE || label == DARK_SQUARE);
            }
        }
    }

    #[test]
    fn square_origins_are_exact_multiples() {
        let board = Rect::from_min_size(Pos2::ZERO, Vec2::splat(720.0));
        let square_size = board.width() / 8.0;
        assert_eq!(square_size, 90.0);

        for i in 0..8 {
            let square = square_rect(board, square_size, i, i);
            assert_eq!(square.min, Pos2::new(i as f32 * 90.0, i as f32 * 90.0));
        }

        let last = square_rect(board, square_size, 7, 7);
        assert_eq!(last.min, Pos2::new(630.0, 630.0));
        assert_eq!(last.max, Pos2::new(720.0, 720.0));
    }

    #[test]
    fn square_rects_tile_without_drift() {
        let board = Rect::from_min_size(Pos2::new(16.0, 24.0), Vec2::splat(720.0));
        let square_size = board.width() / 8.0;
        for rank in 0..8 {
            for file in 1..8 {
                let prev = square_rect(board, square_size, rank, file - 1);
                let here = square_rect(board, square_size, rank, file);
                assert_eq!(prev.max.x, here.min.x);
                assert_eq!(prev.min.y, here.min.y);
            }
        }
    }
}
