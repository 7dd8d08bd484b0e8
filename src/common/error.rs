use std::fmt::{Debug, Display, Error, Formatter};

use super::region::Region;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Encoding
    EmptyData,
    DataTooLong,
    InvalidVersion,
    InvalidGridSize,
    EncodingFailed,

    // Editing
    NotGenerated,
    OutOfBounds,
    ImmutableRegion(Region),
    InvalidColor,
    InvalidLayout,

    // Reading
    DecodeFailed,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Encoding
            Self::EmptyData => "Empty data",
            Self::DataTooLong => "Data too long",
            Self::InvalidVersion => "Invalid version",
            Self::InvalidGridSize => "Module count doesn't match version width",
            Self::EncodingFailed => "Encoder couldn't represent data",

            // Editing
            Self::NotGenerated => "No symbol generated yet",
            Self::OutOfBounds => "Module coordinate out of bounds",
            Self::ImmutableRegion(Region::Finder) => "Finder module cannot be edited",
            Self::ImmutableRegion(Region::Separator) => "Separator module cannot be edited",
            Self::ImmutableRegion(Region::Timing) => "Timing module cannot be edited",
            Self::ImmutableRegion(Region::Alignment) => "Alignment module cannot be edited",
            Self::ImmutableRegion(Region::Data) => "Data module rejected edit",
            Self::InvalidColor => "Invalid color",
            Self::InvalidLayout => "Layout doesn't fit a renderable image",

            // Reading
            Self::DecodeFailed => "Failed to decode symbol",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
