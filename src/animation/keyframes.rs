use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, FrameSpan},
    foundation::error::{MaskforgeError, MaskforgeResult},
};

/// A (frame index, intensity) anchor point used for interpolation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Output frame index this key anchors.
    pub frame: FrameIndex,
    /// Target intensity at `frame`.
    pub intensity: f64,
}

/// Parse a compact textual keyframe encoding: comma-separated entries of the
/// form `"<int>:(<float>)"`, e.g. `"0:(0.0),15:(1.0)"`.
///
/// Trailing whitespace/newlines are stripped before parsing. Entries keep
/// their textual order; ordering and coverage of the final frame are handled
/// by [`FadeTrack::from_keys`].
pub fn parse_points(text: &str) -> MaskforgeResult<Vec<Keyframe>> {
    let text = text.trim_end();
    if text.is_empty() {
        return Err(MaskforgeError::parse("points string must be non-empty"));
    }
    text.split(',').map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> MaskforgeResult<Keyframe> {
    let (frame_part, value_part) = entry.split_once(':').ok_or_else(|| {
        MaskforgeError::parse(format!("missing ':' in entry '{}'", entry.trim()))
    })?;

    let frame_part = frame_part.trim();
    let frame: u64 = frame_part
        .parse()
        .map_err(|_| MaskforgeError::parse(format!("invalid frame index '{frame_part}'")))?;

    let inner = value_part
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| {
            MaskforgeError::parse(format!(
                "unbalanced parentheses in entry '{}'",
                entry.trim()
            ))
        })?;
    let intensity: f64 = inner
        .trim()
        .parse()
        .map_err(|_| MaskforgeError::parse(format!("invalid intensity '{}'", inner.trim())))?;

    Ok(Keyframe {
        frame: FrameIndex(frame),
        intensity,
    })
}

/// A fixed-up keyframe track covering a frame span, ready for sampling.
///
/// Construction guarantees the invariants the sampler relies on:
///
/// - the track always contains a key at the span's final frame;
/// - keys are sorted ascending by frame;
/// - frame indices are unique (duplicates resolve last-write-wins).
#[derive(Clone, Debug)]
pub struct FadeTrack {
    keys: Vec<Keyframe>,
    ease: Ease,
}

impl FadeTrack {
    /// Fix up parsed keys into a sampleable track.
    ///
    /// If the last parsed key does not land on the span's final frame, a
    /// synthetic key is appended there carrying the previous last intensity
    /// (or `0.0` for an empty list).
    pub fn from_keys(mut keys: Vec<Keyframe>, span: FrameSpan, ease: Ease) -> Self {
        let last = span.last_frame();
        match keys.last().copied() {
            Some(key) if key.frame != last => {
                tracing::trace!(
                    frame = last.0,
                    intensity = key.intensity,
                    "synthesizing final keyframe"
                );
                keys.push(Keyframe {
                    frame: last,
                    intensity: key.intensity,
                });
            }
            None => {
                keys.push(Keyframe {
                    frame: last,
                    intensity: 0.0,
                });
            }
            _ => {}
        }

        keys.sort_by_key(|k| k.frame);
        // Stable sort keeps textual order within equal frames; the last
        // entry for a frame wins.
        keys.dedup_by(|cur, kept| {
            if cur.frame == kept.frame {
                kept.intensity = cur.intensity;
                true
            } else {
                false
            }
        });

        Self { keys, ease }
    }

    /// The fixed-up keys, sorted ascending by frame.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Clamped, eased intensity for output frame `i`.
    ///
    /// Locates the bracketing key pair around `i`, eases the normalized
    /// position between them, blends the two intensities, and clamps the
    /// result into `[0, 255]`.
    pub fn intensity_at(&self, i: FrameIndex) -> f64 {
        let idx = self
            .keys
            .partition_point(|k| k.frame < i)
            .min(self.keys.len() - 1);

        if idx == 0 {
            // `i` is at or before the first key; there is no bracketing
            // pair and the denominator below would be zero.
            return self.keys[0].intensity.clamp(0.0, 255.0);
        }

        let prev = self.keys[idx - 1];
        let next = self.keys[idx];

        let denom = next.frame.0 - prev.frame.0;
        let t = (i.0.saturating_sub(prev.frame.0)) as f64 / denom as f64;
        let te = self.ease.apply(t);
        let value = prev.intensity - te * (prev.intensity - next.intensity);
        value.clamp(0.0, 255.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
