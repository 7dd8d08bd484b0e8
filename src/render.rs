use image::{Rgb, RgbImage};

use crate::common::error::{QRError, QRResult};
use crate::common::region::{Region, RegionMask};
use crate::editor::ColorOverlay;

// Layout
//------------------------------------------------------------------------------

pub const DEFAULT_MODULE_SIZE: u32 = 10;
pub const DEFAULT_BORDER: u32 = 4;
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Pixel geometry shared by rendering and by any UI translating pointer positions back into
/// module coordinates.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Layout {
    /// Side of one module in pixels
    pub module_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    pub background: Rgb<u8>,
}

impl Default for Layout {
    fn default() -> Self {
        Self { module_size: DEFAULT_MODULE_SIZE, border: DEFAULT_BORDER, background: WHITE }
    }
}

impl Layout {
    /// One pixel per module, same quiet zone and background.
    pub fn minified(&self) -> Self {
        Self { module_size: 1, ..*self }
    }

    /// Side of the rendered image in pixels. Fails with [`QRError::InvalidLayout`] for a zero
    /// module size or when the side doesn't fit in a `u32`.
    pub fn image_size(&self, w: usize) -> QRResult<u32> {
        if self.module_size == 0 {
            return Err(QRError::InvalidLayout);
        }
        u32::try_from(w)
            .ok()
            .and_then(|w| self.border.checked_mul(2)?.checked_add(w))
            .and_then(|modules| modules.checked_mul(self.module_size))
            .ok_or(QRError::InvalidLayout)
    }

    /// Module under pixel `(x, y)` of an image rendered with this layout, as `(row, col)`.
    /// `None` for the quiet zone and anything outside the image.
    pub fn cell_at(&self, x: u32, y: u32, w: usize) -> Option<(usize, usize)> {
        if self.module_size == 0 {
            return None;
        }
        let qz_sz = self.border.checked_mul(self.module_size)?;
        let c = x.checked_sub(qz_sz)? / self.module_size;
        let r = y.checked_sub(qz_sz)? / self.module_size;
        let (r, c) = (r as usize, c as usize);
        (r < w && c < w).then_some((r, c))
    }
}

#[cfg(test)]
mod layout_tests {
    use super::Layout;
    use crate::common::error::QRError;

    #[test]
    fn test_image_size() {
        let layout = Layout::default();
        assert_eq!(layout.image_size(21), Ok(290));
        assert_eq!(layout.minified().image_size(21), Ok(29));
        assert_eq!(layout.minified().background, layout.background);
    }

    #[test]
    fn test_image_size_overflow() {
        let huge_border = Layout { border: 1 << 31, ..Layout::default() };
        assert_eq!(huge_border.image_size(21), Err(QRError::InvalidLayout));
        assert_eq!(huge_border.minified().image_size(21), Err(QRError::InvalidLayout));

        let huge_module = Layout { module_size: u32::MAX / 20, ..Layout::default() };
        assert_eq!(huge_module.image_size(21), Err(QRError::InvalidLayout));

        let empty = Layout { module_size: 0, ..Layout::default() };
        assert_eq!(empty.image_size(21), Err(QRError::InvalidLayout));
    }

    #[test]
    fn test_cell_at() {
        let layout = Layout { module_size: 15, border: 4, ..Layout::default() };
        assert_eq!(layout.cell_at(0, 0, 21), None);
        assert_eq!(layout.cell_at(59, 60, 21), None);
        assert_eq!(layout.cell_at(60, 60, 21), Some((0, 0)));
        assert_eq!(layout.cell_at(60 + 15 * 3 + 14, 60 + 15 * 2, 21), Some((2, 3)));
        assert_eq!(layout.cell_at(60 + 15 * 21, 60, 21), None);
        assert_eq!(Layout { module_size: 0, ..layout }.cell_at(60, 60, 21), None);
        assert_eq!(Layout { border: u32::MAX, ..layout }.cell_at(60, 60, 21), None);
    }
}

// Render
//------------------------------------------------------------------------------

/// Rasterizes the overlay, each module a `module_size` square block, surrounded by `border`
/// modules of background.
pub fn render(overlay: &ColorOverlay, layout: &Layout) -> QRResult<RgbImage> {
    let bg = layout.background;
    let colors = overlay.colors();
    render_modules(overlay.width(), layout, |i| colors[i].to_rgb(bg))
}

/// One pixel per module. What the readability check feeds the decoder.
pub fn render_minified(overlay: &ColorOverlay, layout: &Layout) -> QRResult<RgbImage> {
    render(overlay, &layout.minified())
}

const FINDER_HIGHLIGHT: Rgb<u8> = Rgb([255, 100, 100]);
const ALIGNMENT_HIGHLIGHT: Rgb<u8> = Rgb([100, 100, 255]);
const TIMING_HIGHLIGHT: Rgb<u8> = Rgb([255, 255, 100]);
const SEPARATOR_HIGHLIGHT: Rgb<u8> = Rgb([200, 200, 200]);

/// Like [`render`] but function pattern modules are drawn in a flat color per region, which
/// shows at a glance what is left to paint on.
pub fn render_region_map(
    overlay: &ColorOverlay,
    mask: &RegionMask,
    layout: &Layout,
) -> QRResult<RgbImage> {
    debug_assert_eq!(overlay.width(), mask.width(), "Overlay and mask widths differ");

    let bg = layout.background;
    let colors = overlay.colors();
    let regions = mask.regions();
    render_modules(overlay.width(), layout, |i| match regions[i] {
        Region::Data => colors[i].to_rgb(bg),
        Region::Finder => FINDER_HIGHLIGHT,
        Region::Alignment => ALIGNMENT_HIGHLIGHT,
        Region::Timing => TIMING_HIGHLIGHT,
        Region::Separator => SEPARATOR_HIGHLIGHT,
    })
}

fn render_modules(
    w: usize,
    layout: &Layout,
    pixel_at: impl Fn(usize) -> Rgb<u8>,
) -> QRResult<RgbImage> {
    // Quiet zone and every module offset stay below a side that fits
    let total_sz = layout.image_size(w)?;
    let module_sz = layout.module_size;
    let qz_sz = layout.border * module_sz;

    let mut canvas = RgbImage::from_pixel(total_sz, total_sz, layout.background);
    for r in 0..w {
        for c in 0..w {
            let pixel = pixel_at(r * w + c);
            if pixel == layout.background {
                continue;
            }
            let y = qz_sz + r as u32 * module_sz;
            let x = qz_sz + c as u32 * module_sz;
            for i in y..y + module_sz {
                for j in x..x + module_sz {
                    canvas.put_pixel(j, i, pixel);
                }
            }
        }
    }

    Ok(canvas)
}
