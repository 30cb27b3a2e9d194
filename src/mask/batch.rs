use rayon::prelude::*;

use crate::{
    foundation::core::{FrameIndex, FrameSpan, PlaneSize},
    foundation::error::{MaskforgeError, MaskforgeResult},
};

/// A batch of single-channel intensity planes, one per output frame.
///
/// Storage is a dense `f32` buffer of shape `(frames, height, width)`,
/// frame-major then row-major, tightly packed.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskBatch {
    frames: u64,
    size: PlaneSize,
    data: Vec<f32>,
}

impl MaskBatch {
    /// Build a zero-filled batch covering `span` at `size`.
    pub fn zeroed(span: FrameSpan, size: PlaneSize) -> Self {
        let len = span.frames() as usize * size.pixel_count();
        Self {
            frames: span.frames(),
            size,
            data: vec![0.0; len],
        }
    }

    /// Build a batch from raw parts, validating shape/storage agreement.
    pub fn from_parts(frames: u64, size: PlaneSize, data: Vec<f32>) -> MaskforgeResult<Self> {
        let expected = frames as usize * size.pixel_count();
        if data.len() != expected {
            return Err(MaskforgeError::configuration(format!(
                "mask storage holds {} values, shape requires {expected}",
                data.len()
            )));
        }
        Ok(Self { frames, size, data })
    }

    /// Number of frame planes in the batch.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Per-plane resolution.
    pub fn size(&self) -> PlaneSize {
        self.size
    }

    /// The whole buffer, frame-major then row-major.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// One frame's plane as a row-major slice, if `frame` is in range.
    pub fn plane(&self, frame: FrameIndex) -> Option<&[f32]> {
        if frame.0 >= self.frames {
            return None;
        }
        let len = self.size.pixel_count();
        let start = frame.0 as usize * len;
        Some(&self.data[start..start + len])
    }

    /// Fill every plane from a per-frame scalar source.
    ///
    /// Each plane holds a single constant value, so the fill runs in
    /// parallel across whole frames.
    pub fn fill_from<F>(&mut self, per_frame: F)
    where
        F: Fn(FrameIndex) -> f32 + Sync,
    {
        let len = self.size.pixel_count();
        self.data
            .par_chunks_mut(len)
            .enumerate()
            .for_each(|(i, plane)| plane.fill(per_frame(FrameIndex(i as u64))));
    }

    /// Element-wise inversion (`v -> 1.0 - v`) across the whole batch.
    pub fn invert(&mut self) {
        for v in &mut self.data {
            *v = 1.0 - *v;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/batch.rs"]
mod tests;
