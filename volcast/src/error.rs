//! Error types of the library

use thiserror::Error;

/// Failure while loading a volume.
///
/// A failed load never produces a partially filled grid.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File cannot be opened or mapped, or holds fewer bytes than the header promises.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header dimensions outside of `(0;1000>`, usually a different kind of file.
    #[error("invalid volume dimensions {width}x{height}x{depth} (wrong file type?)")]
    Format {
        width: usize,
        height: usize,
        depth: usize,
    },

    /// Number of voxels does not match dimensions.
    #[error("data size mismatch: expected {expected} voxels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Rejected render setting.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RenderStateError {
    #[error("sample step must be at least 1")]
    ZeroSampleStep,

    #[error("transparency must be positive and finite, got {0}")]
    InvalidTransparency(f32),

    #[error("scale factor must be at least 1")]
    ZeroScale,
}
