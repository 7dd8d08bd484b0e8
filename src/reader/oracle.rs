use std::panic::{catch_unwind, AssertUnwindSafe};

use image::imageops::grayscale;
use log::{debug, warn};

use super::SymbolDecoder;
use crate::editor::ColorOverlay;
use crate::render::{render_minified, Layout};

// Readability oracle
//------------------------------------------------------------------------------

/// Answers whether an edited overlay still reads back as the payload it was generated from.
#[derive(Debug, Clone)]
pub struct ReadabilityOracle<D> {
    decoder: D,
}

impl<D: SymbolDecoder> ReadabilityOracle<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// True only if exactly one symbol is found and its bytes equal `data`. Layouts that can't be
    /// rendered, decoder errors and decoder panics all count as unreadable.
    pub fn verify(&self, overlay: &ColorOverlay, layout: &Layout, data: &[u8]) -> bool {
        let img = match render_minified(overlay, layout) {
            Ok(img) => grayscale(&img),
            Err(e) => {
                debug!("Symbol unrenderable: {e}");
                return false;
            }
        };

        let decoded = match catch_unwind(AssertUnwindSafe(|| self.decoder.decode(&img))) {
            Ok(Ok(decoded)) => decoded,
            Ok(Err(e)) => {
                debug!("Symbol unreadable: {e}");
                return false;
            }
            Err(_) => {
                warn!("Decoder panicked, treating symbol as unreadable");
                return false;
            }
        };

        match decoded.as_slice() {
            [msg] if msg == data => true,
            [msg] => {
                debug!(
                    "Decoded {} bytes that don't match the {} byte payload",
                    msg.len(),
                    data.len()
                );
                false
            }
            msgs => {
                debug!("Expected exactly one symbol, found {}", msgs.len());
                false
            }
        }
    }
}
