mod canvas;
mod overlay;

pub use canvas::Canvas;
pub use overlay::ColorOverlay;

use image::RgbImage;
use log::{debug, info};

use crate::builder::SymbolEncoder;
use crate::common::{
    error::{QRError, QRResult},
    grid::ModuleGrid,
    metadata::{Color, ECLevel, Version},
    region::{Region, RegionMask},
};
use crate::reader::{ReadabilityOracle, SymbolDecoder};
use crate::render::{render, render_region_map, Layout};

// Editor
//------------------------------------------------------------------------------

/// Interactive pixel art editor over a QR symbol.
///
/// Starts out empty. [`Editor::generate`] encodes a payload and sets up a fresh [`Canvas`];
/// afterwards data modules can be painted, erased or flipped while every function pattern
/// module stays as encoded. [`Editor::verify`] checks that the result still decodes.
pub struct Editor<E, D> {
    encoder: E,
    oracle: ReadabilityOracle<D>,
    ecl: ECLevel,
    layout: Layout,
    data: Vec<u8>,
    canvas: Option<Canvas>,
}

impl<E: SymbolEncoder, D: SymbolDecoder> Editor<E, D> {
    pub fn new(encoder: E, decoder: D, ecl: ECLevel, layout: Layout) -> Self {
        Self {
            encoder,
            oracle: ReadabilityOracle::new(decoder),
            ecl,
            layout,
            data: Vec::new(),
            canvas: None,
        }
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn version(&self) -> Option<Version> {
        self.canvas.as_ref().map(Canvas::version)
    }

    pub fn grid(&self) -> Option<&ModuleGrid> {
        self.canvas.as_ref().map(Canvas::grid)
    }

    pub fn region_mask(&self) -> Option<&RegionMask> {
        self.canvas.as_ref().map(Canvas::region_mask)
    }

    pub fn overlay(&self) -> Option<&ColorOverlay> {
        self.canvas.as_ref().map(Canvas::overlay)
    }

    /// Encodes `data` and replaces the current symbol, dropping all edits. On failure the
    /// editor keeps whatever it held before.
    pub fn generate(&mut self, data: &[u8]) -> QRResult<()> {
        debug!("Generating symbol for {} bytes at ec level {:?}", data.len(), self.ecl);
        let grid = self.encoder.encode(data, self.ecl)?;
        let canvas = Canvas::new(grid);

        let paintable = canvas.region_mask().count(Region::Data);
        let dark = canvas.grid().count_dark_modules();
        info!(
            "Generated version {} symbol, {dark} dark modules, {paintable} paintable",
            *canvas.version()
        );
        self.data = data.to_vec();
        self.canvas = Some(canvas);
        Ok(())
    }

    /// Same as [`Editor::generate`]; reads better when a symbol already exists.
    pub fn update(&mut self, data: &[u8]) -> QRResult<()> {
        self.generate(data)
    }

    fn canvas_mut(&mut self) -> QRResult<&mut Canvas> {
        self.canvas.as_mut().ok_or(QRError::NotGenerated)
    }

    pub fn paint(&mut self, r: usize, c: usize, clr: Color) -> QRResult<()> {
        self.canvas_mut()?.paint(r, c, clr)
    }

    pub fn erase(&mut self, r: usize, c: usize) -> QRResult<()> {
        self.canvas_mut()?.erase(r, c)
    }

    pub fn flip(&mut self, r: usize, c: usize) -> QRResult<()> {
        self.canvas_mut()?.flip(r, c)
    }

    pub fn render(&self) -> QRResult<RgbImage> {
        let canvas = self.canvas.as_ref().ok_or(QRError::NotGenerated)?;
        render(canvas.overlay(), &self.layout)
    }

    pub fn render_region_map(&self) -> QRResult<RgbImage> {
        let canvas = self.canvas.as_ref().ok_or(QRError::NotGenerated)?;
        render_region_map(canvas.overlay(), canvas.region_mask(), &self.layout)
    }

    /// Whether the current overlay still decodes to the generated payload. False when nothing
    /// has been generated.
    pub fn verify(&self) -> bool {
        match &self.canvas {
            Some(canvas) => self.oracle.verify(canvas.overlay(), &self.layout, &self.data),
            None => false,
        }
    }

    /// Module under a pixel of an image produced by [`Editor::render`].
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        let w = self.canvas.as_ref()?.width();
        self.layout.cell_at(x, y, w)
    }
}
