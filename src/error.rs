use crate::nbt::NbtError;
use thiserror::Error;

/// Errors raised while loading a schematic file.
///
/// Everything except `UnsupportedOperation` means the input is not a valid
/// instance of the format; nothing is retried and no partial clipboard is
/// returned. `UnsupportedOperation` marks the permanently disabled save path.
#[derive(Debug, Error)]
pub enum SchematicError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Nbt(#[from] NbtError),

    #[error("tag \"{0}\" does not exist or is not first")]
    WrongRootTag(String),

    #[error("schematic file is missing a \"{0}\" tag")]
    MissingTag(&'static str),

    #[error("\"{key}\" tag is not of type {expected}")]
    WrongTagType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("schematic file is not an Alpha schematic (Materials = \"{0}\")")]
    UnsupportedMaterials(String),

    #[error("invalid dimensions {width}x{height}x{length}")]
    InvalidDimensions { width: i16, height: i16, length: i16 },

    #[error("\"{key}\" tag holds {actual} bytes, expected {expected}")]
    LengthMismatch {
        key: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("tile entity at ({x}, {y}, {z}) lies outside the region")]
    TileEntityOutOfBounds { x: i32, y: i32, z: i32 },

    #[error("{0}")]
    UnsupportedOperation(&'static str),
}
