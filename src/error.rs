use crate::Position;
use std::{fmt, io};

/// The broad category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A pixel coordinate outside the target, or a vertex index outside the vertex array.
    OutOfBounds,
    /// A malformed argument, such as an index list whose length is not a multiple of 3.
    InvalidArgument,
    /// Three vertices that do not form a triangle.
    DegenerateTriangle,
    /// The underlying file or stream failed.
    Io,
    /// An image file with a malformed or truncated header or body.
    Format,
}

/// Errors produced while drawing to, loading, or saving a canvas.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    PixelOutOfBounds {
        position: Position,
        size: [usize; 2],
    },
    /// A shaded fragment whose coordinates do not truncate to a valid [`Position`].
    FragmentOutOfBounds {
        x: f64,
        y: f64,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    VertexCount {
        len: usize,
    },
    IndexCount {
        len: usize,
    },
    InterpolationFactor {
        t: f64,
    },
    NonFiniteVertex,
    DegenerateTriangle {
        vertices: [Position; 3],
    },
    Io(io::Error),
    Format {
        reason: String,
    },
}

impl Error {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PixelOutOfBounds { .. }
            | Self::FragmentOutOfBounds { .. }
            | Self::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::VertexCount { .. }
            | Self::IndexCount { .. }
            | Self::InterpolationFactor { .. }
            | Self::NonFiniteVertex => ErrorKind::InvalidArgument,
            Self::DegenerateTriangle { .. } => ErrorKind::DegenerateTriangle,
            Self::Io(_) => ErrorKind::Io,
            Self::Format { .. } => ErrorKind::Format,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutOfBounds { position, size } => write!(
                f,
                "pixel ({}, {}) is outside of a {}x{} target",
                position.x, position.y, size[0], size[1]
            ),
            Self::FragmentOutOfBounds { x, y } => {
                write!(f, "fragment at ({}, {}) has no pixel position", x, y)
            }
            Self::IndexOutOfBounds { index, len } => write!(
                f,
                "vertex index {} is out of bounds for {} vertices",
                index, len
            ),
            Self::VertexCount { len } => {
                write!(f, "vertex count {} is not a multiple of 3", len)
            }
            Self::IndexCount { len } => write!(f, "index count {} is not a multiple of 3", len),
            Self::InterpolationFactor { t } => {
                write!(f, "interpolation factor {} is outside of [0, 1]", t)
            }
            Self::NonFiniteVertex => write!(f, "vertex has a non-finite coordinate"),
            Self::DegenerateTriangle { vertices: [a, b, c] } => write!(
                f,
                "({}, {}), ({}, {}), ({}, {}) do not form a triangle",
                a.x, a.y, b.x, b.y, c.x, c.y
            ),
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Format { reason } => write!(f, "malformed ppm image: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_variants() {
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 3 }.kind(),
            ErrorKind::OutOfBounds
        );
        assert_eq!(Error::IndexCount { len: 4 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::InterpolationFactor { t: 1.1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::format("short").kind(), ErrorKind::Format);
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "i/o error: gone");
    }
}
