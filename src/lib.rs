//! # pixelqr
//!
//! A Rust library for painting pixel art over QR codes without breaking them.
//!
//! A QR symbol is made of function patterns (finders, separators, timing lines and alignment
//! blocks) that a reader needs to locate and sample the symbol, and data modules that carry the
//! payload plus error correction. With enough error correction, data modules can be recolored
//! freely while the symbol still reads. This crate works out which modules are which for any
//! version, keeps an editable color overlay where only data modules can change, renders it, and
//! checks that the result still decodes to the original payload.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pixelqr::{Color, ECLevel, EditorBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = EditorBuilder::new()
//!     .ec_level(ECLevel::H)   // High error correction leaves the most room for art
//!     .module_size(15)        // Pixels per module
//!     .border(4)              // Quiet zone in modules
//!     .build();
//!
//! editor.generate(b"https://example.com")?;
//!
//! // Data modules take any color
//! editor.paint(10, 10, "#FF00FF".parse()?)?;
//!
//! // Function pattern modules are refused
//! assert!(editor.paint(0, 0, Color::Hue(255, 0, 255)).is_err());
//!
//! if editor.verify() {
//!     editor.render()?.save("art.png")?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Regions
//!
//! [`map_safe_area`] classifies every module of a version into a [`Region`]:
//!
//! - **Finder**: 7x7 markers at the top-left, top-right and bottom-left corners
//! - **Separator**: the light ring completing each finder corner to 8x8
//! - **Timing**: alternating lines along row 6 and column 6
//! - **Alignment**: 5x5 markers for versions 2 and above
//! - **Data**: everything else, free to paint
//!
//! ## Collaborators
//!
//! Encoding and decoding are delegated through [`SymbolEncoder`] and [`SymbolDecoder`]. The
//! defaults wrap the `qrcode` and `rqrr` crates; closures with matching signatures work too.

pub mod builder;
pub(crate) mod common;
pub mod editor;
pub mod reader;
pub mod render;

pub use builder::{EditorBuilder, QrcodeEncoder, SymbolEncoder};
pub use common::error::{QRError, QRResult};
pub use common::grid::ModuleGrid;
pub use common::metadata::{Color, ECLevel, Version, MAX_VERSION, MIN_VERSION};
pub use common::region::{map_safe_area, Region, RegionMask};
pub use editor::{Canvas, ColorOverlay, Editor};
pub use reader::{ReadabilityOracle, RqrrDecoder, SymbolDecoder};
pub use render::{render, render_minified, render_region_map, Layout};
