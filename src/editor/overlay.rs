use crate::common::{grid::ModuleGrid, metadata::Color};

// Color overlay
//------------------------------------------------------------------------------

/// Displayed color of every module, row major. Starts out as the monochrome rendering of a
/// [`ModuleGrid`]; only the guarded edits of [`Canvas`](super::Canvas) change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOverlay {
    colors: Box<[Color]>,
    w: usize,
}

impl ColorOverlay {
    pub fn new(grid: &ModuleGrid) -> Self {
        let colors = grid.modules().iter().map(|&m| Color::from(m)).collect();
        Self { colors, w: grid.width() }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, r: usize, c: usize) -> Option<Color> {
        (r < self.w && c < self.w).then(|| self.colors[r * self.w + c])
    }

    pub fn count_painted(&self) -> usize {
        self.colors.iter().filter(|c| !c.is_mono()).count()
    }

    pub(crate) fn set(&mut self, idx: usize, clr: Color) {
        self.colors[idx] = clr;
    }

    /// One line per row: `■` dark, `□` light, `▣` painted.
    pub fn to_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w * 3 + 1));
        for row in self.colors.chunks_exact(self.w) {
            for clr in row {
                res.push(match clr {
                    Color::Dark => '■',
                    Color::Light => '□',
                    Color::Hue(..) => '▣',
                });
            }
            res.push('\n');
        }
        res
    }
}
