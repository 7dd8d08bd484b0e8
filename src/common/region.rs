use log::trace;

use super::metadata::Version;

// Region
//------------------------------------------------------------------------------

/// Role of a module within the symbol. Everything but `Data` is a function pattern the
/// decoder relies on to find and sample the symbol, and must keep its encoder-given color.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Region {
    Data,
    Finder,
    Separator,
    Timing,
    Alignment,
}

impl Region {
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Data)
    }
}

// Region mask
//------------------------------------------------------------------------------

/// Per module classification of a symbol, row major. Depends on the version alone, never on
/// module colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMask {
    regions: Box<[Region]>,
    w: usize,
    ver: Version,
}

/// Classifies every module of a `ver` symbol as data or one of the protected patterns.
pub fn map_safe_area(ver: Version) -> RegionMask {
    let w = ver.width();
    let mut mask = RegionMask { regions: vec![Region::Data; w * w].into_boxed_slice(), w, ver };
    mask.mark_finder_patterns();
    mask.mark_timing_pattern();
    mask.mark_alignment_patterns();
    trace!("Mapped safe area for version {}: {} data modules", *ver, mask.count(Region::Data));
    mask
}

impl RegionMask {
    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, r: usize, c: usize) -> Option<Region> {
        (r < self.w && c < self.w).then(|| self.regions[r * self.w + c])
    }

    pub fn count(&self, region: Region) -> usize {
        self.regions.iter().filter(|&&r| r == region).count()
    }

    fn set(&mut self, r: usize, c: usize, region: Region) {
        debug_assert!(r < self.w && c < self.w, "Module ({r}, {c}) outside {0}x{0} mask", self.w);
        self.regions[r * self.w + c] = region;
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w;
        let mut res = String::with_capacity(w * (w + 1) + 1);
        res.push('\n');
        for row in self.regions.chunks_exact(w) {
            for region in row {
                res.push(match region {
                    Region::Data => '.',
                    Region::Finder => 'F',
                    Region::Separator => 'S',
                    Region::Timing => 'T',
                    Region::Alignment => 'A',
                });
            }
            res.push('\n');
        }
        res
    }
}

// Finder pattern & separator
//------------------------------------------------------------------------------

impl RegionMask {
    fn mark_finder_patterns(&mut self) {
        let far = self.w - 8;
        for (r0, c0) in [(0, 0), (0, far), (far, 0)] {
            for i in 0..8 {
                for j in 0..8 {
                    let region = if i == 7 || j == 7 { Region::Separator } else { Region::Finder };
                    self.set(r0 + i, c0 + j, region);
                }
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl RegionMask {
    fn mark_timing_pattern(&mut self) {
        for i in 8..self.w - 8 {
            self.set(6, i, Region::Timing);
            self.set(i, 6, Region::Timing);
        }
    }
}

#[cfg(test)]
mod timing_pattern_tests {
    use super::{Region, RegionMask};
    use crate::common::metadata::Version;

    #[test]
    fn test_timing_pattern() {
        let ver = Version::new(1).unwrap();
        let w = ver.width();
        let mut mask =
            RegionMask { regions: vec![Region::Data; w * w].into_boxed_slice(), w, ver };
        mask.mark_timing_pattern();
        assert_eq!(
            mask.to_debug_str(),
            "\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........TTTTT........\n\
             .....................\n\
             ......T..............\n\
             ......T..............\n\
             ......T..............\n\
             ......T..............\n\
             ......T..............\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n"
        );
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl RegionMask {
    fn mark_alignment_patterns(&mut self) {
        if *self.ver == 1 {
            return;
        }
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.mark_alignment_pattern_at(r, c);
            }
        }
    }

    fn mark_alignment_pattern_at(&mut self, r: usize, c: usize) {
        let w = self.w;
        if (r < 9 && c < 9) || (r < 9 && c > w - 9) || (r > w - 9 && c < 9) {
            return;
        }
        for i in r - 2..=r + 2 {
            for j in c - 2..=c + 2 {
                self.set(i, j, Region::Alignment);
            }
        }
    }
}


// Safe area
//------------------------------------------------------------------------------
