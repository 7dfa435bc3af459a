use crate::core::piece::PieceKind;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eframe::egui::{self, ColorImage, Context, TextureHandle, Vec2};
use resvg::usvg;
use thiserror::Error;
use tiny_skia::{Pixmap, Transform};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no asset directory found for piece set `{0}`")]
    MissingDir(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    DecodePng {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to parse {path}: {source}")]
    ParseSvg {
        path: PathBuf,
        #[source]
        source: usvg::Error,
    },
    #[error("cannot rasterize {path} at {size} px")]
    Rasterize { path: PathBuf, size: u32 },
}

/// On-disk format of a piece set. Fixed per set, so every artwork filename
/// derives the same way.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Names the artwork directory and fixes its file format.
pub struct PieceSet {
    pub name: String,
    pub format: ImageFormat,
}

impl Default for PieceSet {
    fn default() -> Self {
        Self {
            name: "cburnett".to_string(),
            format: ImageFormat::Svg,
        }
    }
}

impl PieceSet {
    /// Filename of one piece's artwork, e.g. `wP.svg` or `bN.svg`.
    pub fn file_name(&self, kind: PieceKind) -> String {
        format!("{}.{}", kind.asset_stem(), self.format.extension())
    }

    /// Directory holding this set. Checked next to the executable first so
    /// the program works from any working directory, then the per-user
    /// data dir, then `assets/` under the working directory.
    pub fn resolve_dir(&self) -> Result<PathBuf, AssetError> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("assets").join(&self.name));
            }
        }
        if let Some(base_dirs) = BaseDirs::new() {
            candidates.push(
                base_dirs
                    .data_local_dir()
                    .join("Bonsai")
                    .join("assets")
                    .join(&self.name),
            );
        }
        if let Ok(current_dir) = std::env::current_dir() {
            candidates.push(current_dir.join("assets").join(&self.name));
        }

        candidates
            .into_iter()
            .find(|dir| dir.is_dir())
            .ok_or_else(|| AssetError::MissingDir(self.name.clone()))
    }
}

/// One uploaded texture per `PieceKind`, filled in before the first frame
/// and read-only afterwards.
pub struct AssetTable {
    textures: HashMap<PieceKind, TextureHandle>,
}

impl AssetTable {
    /// Loads every piece's artwork from `dir` and uploads it. SVG sets are
    /// rasterized at `pixel_size`. The first file that cannot be read or
    /// decoded fails the whole load; a partial table is never returned.
    pub fn load(
        ctx: &Context,
        set: &PieceSet,
        dir: &Path,
        pixel_size: f32,
    ) -> Result<Self, AssetError> {
        let mut textures = HashMap::new();

        for kind in PieceKind::ALL {
            let path = dir.join(set.file_name(kind));
            let img = decode_image(&path, set.format, pixel_size)?;
            let texture =
                ctx.load_texture(format!("{:?}", kind), img, egui::TextureOptions::default());
            textures.insert(kind, texture);
        }

        Ok(Self { textures })
    }

    /// Never fails after a successful `load`: the table holds a texture
    /// for every `PieceKind` variant.
    pub fn get_texture(&self, kind: PieceKind) -> &TextureHandle {
        &self.textures[&kind]
    }
}

pub fn decode_image(
    path: &Path,
    format: ImageFormat,
    pixel_size: f32,
) -> Result<ColorImage, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        ImageFormat::Png => png_to_image(path, &bytes),
        ImageFormat::Svg => svg_to_image(path, &bytes, pixel_size),
    }
}

fn png_to_image(path: &Path, bytes: &[u8]) -> Result<ColorImage, AssetError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| AssetError::DecodePng {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(rgba_to_color_image(width, height, rgba.as_raw()))
}

fn svg_to_image(path: &Path, bytes: &[u8], size: f32) -> Result<ColorImage, AssetError> {
    let opt = usvg::Options::default();
    let rtree = usvg::Tree::from_data(bytes, &opt).map_err(|source| AssetError::ParseSvg {
        path: path.to_path_buf(),
        source,
    })?;

    let pixmap_size = size.ceil() as u32;
    let mut pixmap = Pixmap::new(pixmap_size, pixmap_size).ok_or_else(|| AssetError::Rasterize {
        path: path.to_path_buf(),
        size: pixmap_size,
    })?;
    let scale_factor = pixmap_size as f32 / rtree.size().width();

    resvg::render(
        &rtree,
        Transform::from_scale(scale_factor, scale_factor),
        &mut pixmap.as_mut(),
    );

    Ok(rgba_to_color_image(pixmap_size, pixmap_size, pixmap.data()))
}

fn rgba_to_color_image(width: u32, height: u32, data: &[u8]) -> ColorImage {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for chunk in data.chunks(4) {
        pixels.push(egui::Color32::from_rgba_unmultiplied(
            chunk[0], chunk[1], chunk[2], chunk[3],
        ));
    }

    ColorImage {
        size: [width as usize, height as usize],
        source_size: Vec2::new(width as f32, height as f32),
        pixels,
    }
}
