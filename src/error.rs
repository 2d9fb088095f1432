use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MorphError {
    /// A transition was requested towards the icon type already shown.
    SameIconType,
    /// Integer icon types are 0 (returned), 1 (done) and 2 (late).
    InvalidIconType(u8),
    /// The pixel or mask buffer can't hold `stride × height` entries.
    BufferTooSmall,
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::SameIconType => f.write_str("cannot transition to the current icon type"),
            MorphError::InvalidIconType(n) => write!(f, "invalid icon type: {}", n),
            MorphError::BufferTooSmall => f.write_str("destination buffer is too small"),
        }
    }
}

pub type MorphResult<T> = Result<T, MorphError>;
