use crate::core::board::Board;
use crate::gui::BOARD_LOGICAL_SIZE;
use crate::gui::assets::{AssetError, AssetTable, PieceSet};

use eframe::egui::{self, Context};
use eframe::{App, Frame};

/// Owns everything the board view needs: the piece placement and the
/// loaded artwork. Built once before the first frame; the event loop only
/// reads it.
pub struct Bonsai {
    pub board: Board,
    pub images: AssetTable,
}

impl Bonsai {
    /// Fails as a whole if the piece set cannot be found or any of its
    /// twelve files cannot be loaded, so the render loop never starts with
    /// a partial table.
    pub fn new(ctx: &egui::Context) -> Result<Self, AssetError> {
        let set = PieceSet::default();
        let dir = set.resolve_dir()?;
        tracing::info!(set = %set.name, dir = %dir.display(), "loading piece artwork");
        let images = AssetTable::load(ctx, &set, &dir, BOARD_LOGICAL_SIZE / 8.0)?;

        Ok(Self {
            board: Board::default(),
            images,
        })
    }
}

impl App for Bonsai {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = self.handle_event(ctx, ui);
            self.render(&response, ui);
        });
    }
}

pub fn launch() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chess Board")
            .with_inner_size([BOARD_LOGICAL_SIZE, BOARD_LOGICAL_SIZE]),
        ..Default::default()
    };

    eframe::run_native(
        "Chess Board",
        options,
        Box::new(|cc| Ok(Box::new(Bonsai::new(&cc.egui_ctx)?))),
    )
}
