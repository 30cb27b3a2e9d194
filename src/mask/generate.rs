use crate::{
    animation::ease::Ease,
    animation::keyframes::{FadeTrack, parse_points},
    foundation::core::{FrameSpan, PlaneSize},
    foundation::error::MaskforgeResult,
    mask::batch::MaskBatch,
};

/// Parameters for one fade-mask generation.
///
/// `span` and `size` are validated at construction ([`FrameSpan::new`],
/// [`PlaneSize::new`]), so a `FadeParams` value is structurally sound by the
/// time it reaches [`generate`].
#[derive(Clone, Copy, Debug)]
pub struct FadeParams<'a> {
    /// Textual keyframe encoding, e.g. `"0:(0.0),15:(1.0)"`.
    pub points: &'a str,
    /// Output frame count.
    pub span: FrameSpan,
    /// Output plane resolution.
    pub size: PlaneSize,
    /// Invert the finished batch element-wise (`v -> 1.0 - v`).
    pub invert: bool,
    /// Easing curve applied between keyframes.
    pub ease: Ease,
}

/// Generate a batch of interpolated fade masks from a points string.
///
/// Pipeline:
/// 1. parse the points string into keyframes ([`parse_points`])
/// 2. fix up ordering and final-frame coverage ([`FadeTrack::from_keys`])
/// 3. sample a clamped, eased intensity per output frame and fill that
///    frame's plane with the constant value (parallel across frames)
/// 4. apply global inversion last, if requested
///
/// Either the full batch is produced or an error is returned before any
/// synthesis. The function is pure: identical inputs yield bit-identical
/// batches.
#[tracing::instrument(skip(params), fields(
    frames = params.span.frames(),
    width = params.size.width,
    height = params.size.height,
))]
pub fn generate(params: &FadeParams<'_>) -> MaskforgeResult<MaskBatch> {
    let keys = parse_points(params.points)?;
    let track = FadeTrack::from_keys(keys, params.span, params.ease);

    let mut batch = MaskBatch::zeroed(params.span, params.size);
    batch.fill_from(|frame| track.intensity_at(frame) as f32);

    if params.invert {
        batch.invert();
    }

    tracing::debug!(keys = track.keys().len(), "generated fade mask batch");
    Ok(batch)
}

#[cfg(test)]
#[path = "../../tests/unit/mask/generate.rs"]
mod tests;
