use log::debug;
use qrcode::{types::QrError, EcLevel, QrCode};

use crate::common::{
    error::{QRError, QRResult},
    grid::ModuleGrid,
    metadata::{ECLevel, Version},
};

// Encoder
//------------------------------------------------------------------------------

/// Turns a payload into the module grid of the smallest symbol that fits it.
pub trait SymbolEncoder {
    fn encode(&self, data: &[u8], ecl: ECLevel) -> QRResult<ModuleGrid>;
}

impl<F> SymbolEncoder for F
where
    F: Fn(&[u8], ECLevel) -> QRResult<ModuleGrid>,
{
    fn encode(&self, data: &[u8], ecl: ECLevel) -> QRResult<ModuleGrid> {
        self(data, ecl)
    }
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

impl SymbolEncoder for QrcodeEncoder {
    fn encode(&self, data: &[u8], ecl: ECLevel) -> QRResult<ModuleGrid> {
        if data.is_empty() {
            return Err(QRError::EmptyData);
        }

        let ec_level = match ecl {
            ECLevel::L => EcLevel::L,
            ECLevel::M => EcLevel::M,
            ECLevel::Q => EcLevel::Q,
            ECLevel::H => EcLevel::H,
        };
        let code = QrCode::with_error_correction_level(data, ec_level).map_err(|e| {
            debug!("Encoder rejected {} bytes: {e}", data.len());
            match e {
                QrError::DataTooLong => QRError::DataTooLong,
                QrError::InvalidVersion => QRError::InvalidVersion,
                _ => QRError::EncodingFailed,
            }
        })?;

        let ver = match code.version() {
            qrcode::Version::Normal(v) => {
                Version::new(u8::try_from(v).map_err(|_| QRError::InvalidVersion)?)?
            }
            qrcode::Version::Micro(_) => return Err(QRError::InvalidVersion),
        };
        if code.width() != ver.width() {
            return Err(QRError::InvalidGridSize);
        }

        let modules = code.to_colors().into_iter().map(|c| c == qrcode::Color::Dark).collect();
        ModuleGrid::new(ver, modules)
    }
}
