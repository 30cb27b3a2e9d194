use crate::foundation::error::{MaskforgeError, MaskforgeResult};

/// Index of a single output frame, 0-based.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Total number of output frames in a generated batch.
///
/// A fade needs at least a first and a last frame, so spans shorter than 2
/// frames are rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan(u64);

impl FrameSpan {
    /// Build a validated frame span.
    pub fn new(frames: u64) -> MaskforgeResult<Self> {
        if frames < 2 {
            return Err(MaskforgeError::configuration(
                "frame span must cover at least 2 frames",
            ));
        }
        Ok(Self(frames))
    }

    /// Number of frames in the span.
    pub fn frames(self) -> u64 {
        self.0
    }

    /// Index of the final frame (`frames - 1`).
    pub fn last_frame(self) -> FrameIndex {
        FrameIndex(self.0 - 1)
    }

    /// Iterate all frame indices in the span, in order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }
}

/// Output plane resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlaneSize {
    /// Plane width in pixels.
    pub width: u32,
    /// Plane height in pixels.
    pub height: u32,
}

impl PlaneSize {
    /// Build a validated plane size.
    pub fn new(width: u32, height: u32) -> MaskforgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskforgeError::configuration(
                "plane width and height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Pixels per plane (`width * height`).
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}
