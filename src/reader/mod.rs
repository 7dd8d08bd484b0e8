mod oracle;

pub use oracle::ReadabilityOracle;

use image::GrayImage;
use log::debug;

use crate::common::error::{QRError, QRResult};

// Decoder
//------------------------------------------------------------------------------

/// Finds and decodes every symbol in an image, returning the raw payload bytes of each.
pub trait SymbolDecoder {
    fn decode(&self, img: &GrayImage) -> QRResult<Vec<Vec<u8>>>;
}

impl<F> SymbolDecoder for F
where
    F: Fn(&GrayImage) -> QRResult<Vec<Vec<u8>>>,
{
    fn decode(&self, img: &GrayImage) -> QRResult<Vec<Vec<u8>>> {
        self(img)
    }
}

pub const DEFAULT_SUPERSAMPLING: u32 = 8;

/// Decoder backed by the `rqrr` crate.
///
/// Finder detection in `rqrr` works on connected regions and needs several pixels per module,
/// so the image is upscaled by `scale` while being handed over. A one pixel per module
/// rendering stays cheap to produce and the upscaling costs no extra buffer.
#[derive(Debug, Clone, Copy)]
pub struct RqrrDecoder {
    scale: u32,
}

impl RqrrDecoder {
    pub fn new(scale: u32) -> Self {
        debug_assert!(scale > 0, "Supersampling factor must be positive");
        Self { scale: scale.max(1) }
    }
}

impl Default for RqrrDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_SUPERSAMPLING)
    }
}

impl SymbolDecoder for RqrrDecoder {
    fn decode(&self, img: &GrayImage) -> QRResult<Vec<Vec<u8>>> {
        let scale = self.scale;
        let (w, h) = img.dimensions();
        let upscale = |side: u32| {
            side.checked_mul(scale).and_then(|s| usize::try_from(s).ok()).ok_or_else(|| {
                debug!("Image side {side} too large to upscale by {scale}");
                QRError::DecodeFailed
            })
        };
        let (sw, sh) = (upscale(w)?, upscale(h)?);
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(sw, sh, |x, y| {
            img.get_pixel(x as u32 / scale, y as u32 / scale)[0]
        });

        let grids = prepared.detect_grids();
        debug!("Detected {} symbol(s)", grids.len());

        grids
            .iter()
            .map(|g| {
                let mut msg = Vec::new();
                g.decode_to(&mut msg).map_err(|e| {
                    debug!("Failed to decode detected symbol: {e:?}");
                    QRError::DecodeFailed
                })?;
                Ok(msg)
            })
            .collect()
    }
}
