pub mod assets;
pub mod handlers;
pub mod launch;
pub mod render;

use eframe::egui::Color32;

/// Side length of the board at its native resolution, divisible by 8 so
/// every square is exactly `BOARD_LOGICAL_SIZE / 8.0` pixels.
pub const BOARD_LOGICAL_SIZE: f32 = 720.0;

pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(237, 237, 207);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(119, 148, 83);

/// Offset of the coordinate label from its square's top-left corner.
pub const LABEL_MARGIN: f32 = 5.0;
