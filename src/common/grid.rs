use super::error::{QRError, QRResult};
use super::metadata::Version;

// Module grid
//------------------------------------------------------------------------------

/// Raw module matrix as produced by an encoder. `true` is a dark module. Stored row major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    modules: Box<[bool]>,
    w: usize,
    ver: Version,
}

impl ModuleGrid {
    pub fn new(ver: Version, modules: Vec<bool>) -> QRResult<Self> {
        let w = ver.width();
        if modules.len() != w * w {
            return Err(QRError::InvalidGridSize);
        }
        Ok(Self { modules: modules.into_boxed_slice(), w, ver })
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    pub fn index(&self, r: usize, c: usize) -> Option<usize> {
        (r < self.w && c < self.w).then_some(r * self.w + c)
    }

    pub fn get(&self, r: usize, c: usize) -> Option<bool> {
        self.index(r, c).map(|i| self.modules[i])
    }

    pub(crate) fn toggle(&mut self, idx: usize) -> bool {
        self.modules[idx] = !self.modules[idx];
        self.modules[idx]
    }
}
