use std::fmt::Display;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::arg_parse_err::ArgParseErr;

#[cfg(test)]
use quickcheck::Arbitrary;

/// Longest side any supported panel has, with room to spare
pub const MAX_SIDE: u32 = 16384;
/// Caps the size of the generated array at 32 MiB
pub const MAX_PIXELS: usize = 4096 * 4096;

/// Output resolution in `WIDTHxHEIGHT` form, e.g. `320x240`.
///
/// Unlike a general image geometry there are no offsets, percentages or flags:
/// the display has a fixed number of pixels and both sides must be given.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargetSize {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl TargetSize {
    pub const fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width.get() as usize * self.height.get() as usize
    }
}

#[cfg(test)]
impl Arbitrary for TargetSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut side = || NonZeroU32::MIN.saturating_add(u32::arbitrary(g) % 4096);
        Self {
            width: side(),
            height: side(),
        }
    }
}

impl Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TargetSize {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid_geometry_err = || ArgParseErr::with_msg(format!("invalid geometry `{s}'"));

        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(invalid_geometry_err)?;
        if !is_plain_number(width) || !is_plain_number(height) {
            return Err(invalid_geometry_err());
        }
        let width: u32 = width.parse()?;
        let height: u32 = height.parse()?;
        let size = match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Self { width, height },
            _ => {
                return Err(ArgParseErr::with_msg(format!(
                    "geometry must not have a zero side `{s}'"
                )))
            }
        };
        if width > MAX_SIDE || height > MAX_SIDE || size.pixel_count() > MAX_PIXELS {
            return Err(ArgParseErr::with_msg(format!(
                "geometry `{s}' is larger than a display frame can be, \
                 at most {MAX_SIDE} per side and {MAX_PIXELS} pixels"
            )));
        }
        Ok(size)
    }
}

/// `u32::from_str` accepts a leading `+`, which is not valid in a geometry
fn is_plain_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Value parser for `clap`
pub fn parse_target_size(s: &str) -> Result<TargetSize, ArgParseErr> {
    TargetSize::from_str(s)
}
