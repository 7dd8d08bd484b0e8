use log::trace;

use super::overlay::ColorOverlay;
use crate::common::{
    error::{QRError, QRResult},
    grid::ModuleGrid,
    metadata::{Color, Version},
    region::{map_safe_area, RegionMask},
};

// Canvas
//------------------------------------------------------------------------------

/// A generated symbol together with its region mask and editable overlay. All edits go
/// through one guard, so function pattern modules keep the color the encoder gave them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    grid: ModuleGrid,
    mask: RegionMask,
    overlay: ColorOverlay,
}

impl Canvas {
    pub fn new(grid: ModuleGrid) -> Self {
        let mask = map_safe_area(grid.version());
        let overlay = ColorOverlay::new(&grid);
        Self { grid, mask, overlay }
    }

    pub fn version(&self) -> Version {
        self.grid.version()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn grid(&self) -> &ModuleGrid {
        &self.grid
    }

    pub fn region_mask(&self) -> &RegionMask {
        &self.mask
    }

    pub fn overlay(&self) -> &ColorOverlay {
        &self.overlay
    }

    // Returns the flat index of an editable module
    fn guard(&self, r: usize, c: usize) -> QRResult<usize> {
        let region = self.mask.get(r, c).ok_or(QRError::OutOfBounds)?;
        if !region.is_editable() {
            return Err(QRError::ImmutableRegion(region));
        }
        self.grid.index(r, c).ok_or(QRError::OutOfBounds)
    }

    pub fn paint(&mut self, r: usize, c: usize, clr: Color) -> QRResult<()> {
        let idx = self.guard(r, c)?;
        trace!("Painting ({r}, {c}) {clr:?}");
        self.overlay.set(idx, clr);
        Ok(())
    }

    /// Resets a module to the grid's color. Earlier paint is discarded, not undone step by step.
    pub fn erase(&mut self, r: usize, c: usize) -> QRResult<()> {
        let idx = self.guard(r, c)?;
        trace!("Erasing ({r}, {c})");
        self.overlay.set(idx, Color::from(self.grid.modules()[idx]));
        Ok(())
    }

    /// Toggles the underlying module bit.
    ///
    /// Unlike a bare monochrome toggle, this also rewrites the overlay module to the new bit's
    /// color, so [`render`](crate::render) and the readability check see the flip. Paint on the
    /// module is dropped: painting then flipping leaves it plain dark or light, and erasing
    /// afterwards restores the flipped bit rather than the encoded one.
    pub fn flip(&mut self, r: usize, c: usize) -> QRResult<()> {
        let idx = self.guard(r, c)?;
        let dark = self.grid.toggle(idx);
        trace!("Flipped ({r}, {c}) to {}", if dark { "dark" } else { "light" });
        self.overlay.set(idx, Color::from(dark));
        Ok(())
    }
}

#[cfg(test)]
mod canvas_tests {
    use super::Canvas;
    use crate::common::{
        error::QRError,
        grid::ModuleGrid,
        metadata::{Color, Version},
        region::Region,
    };

    const MAGENTA: Color = Color::Hue(255, 0, 255);

    fn canvas(ver: u8) -> Canvas {
        let ver = Version::new(ver).unwrap();
        let w = ver.width();
        let modules = (0..w * w).map(|i| (i * 7 + i / w) % 3 == 0).collect();
        Canvas::new(ModuleGrid::new(ver, modules).unwrap())
    }

    #[test]
    fn test_paint_and_erase() {
        let mut canvas = canvas(1);
        let orig = canvas.overlay().get(10, 10).unwrap();
        canvas.paint(10, 10, MAGENTA).unwrap();
        assert_eq!(canvas.overlay().get(10, 10), Some(MAGENTA));
        canvas.erase(10, 10).unwrap();
        assert_eq!(canvas.overlay().get(10, 10), Some(orig));
        assert_eq!(Some(orig), canvas.grid().get(10, 10).map(Color::from));
    }

    #[test]
    fn test_erase_ignores_history() {
        let mut canvas = canvas(1);
        let orig = canvas.overlay().get(12, 15).unwrap();
        canvas.paint(12, 15, MAGENTA).unwrap();
        canvas.paint(12, 15, Color::Hue(0, 128, 0)).unwrap();
        canvas.erase(12, 15).unwrap();
        assert_eq!(canvas.overlay().get(12, 15), Some(orig));
    }

    #[test]
    fn test_guard_regions() {
        let mut canvas = canvas(2);
        let before = canvas.clone();
        assert_eq!(canvas.paint(18, 18, MAGENTA), Err(QRError::ImmutableRegion(Region::Alignment)));
        assert_eq!(canvas.paint(0, 0, MAGENTA), Err(QRError::ImmutableRegion(Region::Finder)));
        assert_eq!(canvas.erase(7, 0), Err(QRError::ImmutableRegion(Region::Separator)));
        assert_eq!(canvas.flip(6, 12), Err(QRError::ImmutableRegion(Region::Timing)));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_guard_bounds() {
        let mut canvas = canvas(1);
        let before = canvas.clone();
        assert_eq!(canvas.paint(21, 10, MAGENTA), Err(QRError::OutOfBounds));
        assert_eq!(canvas.erase(10, 21), Err(QRError::OutOfBounds));
        assert_eq!(canvas.flip(usize::MAX, 0), Err(QRError::OutOfBounds));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_flip() {
        let mut canvas = canvas(1);
        let orig = canvas.grid().get(10, 10).unwrap();
        canvas.paint(10, 10, MAGENTA).unwrap();
        canvas.flip(10, 10).unwrap();
        assert_eq!(canvas.grid().get(10, 10), Some(!orig));
        assert_eq!(canvas.overlay().get(10, 10), Some(Color::from(!orig)));
        assert_eq!(canvas.region_mask().get(10, 10), Some(Region::Data));
        canvas.flip(10, 10).unwrap();
        assert_eq!(canvas.grid().get(10, 10), Some(orig));
    }

    #[test]
    fn test_flip_drops_paint() {
        let mut canvas = canvas(1);
        let orig = canvas.grid().get(12, 12).unwrap();
        canvas.paint(12, 12, MAGENTA).unwrap();
        canvas.flip(12, 12).unwrap();
        canvas.erase(12, 12).unwrap();
        assert_eq!(canvas.overlay().get(12, 12), Some(Color::from(!orig)));
        assert_eq!(canvas.overlay().count_painted(), 0);
    }
}
