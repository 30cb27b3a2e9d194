use super::*;

fn span(frames: u64) -> FrameSpan {
    FrameSpan::new(frames).unwrap()
}

fn key(frame: u64, intensity: f64) -> Keyframe {
    Keyframe {
        frame: FrameIndex(frame),
        intensity,
    }
}

#[test]
fn parses_compact_entries() {
    let keys = parse_points("0:(0.0),15:(1.0)").unwrap();
    assert_eq!(keys, vec![key(0, 0.0), key(15, 1.0)]);
}

#[test]
fn tolerates_interior_and_trailing_whitespace() {
    let keys = parse_points("0:(0.0),\n15:(1.0)\n").unwrap();
    assert_eq!(keys, vec![key(0, 0.0), key(15, 1.0)]);
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(parse_points(""), Err(MaskforgeError::Parse(_))));
    assert!(matches!(parse_points("\n\n"), Err(MaskforgeError::Parse(_))));
}

#[test]
fn rejects_malformed_entries() {
    // no colon
    assert!(matches!(
        parse_points("garbage"),
        Err(MaskforgeError::Parse(_))
    ));
    // missing parentheses
    assert!(parse_points("0:0.5").is_err());
    // unbalanced parentheses
    assert!(parse_points("0:(0.5").is_err());
    assert!(parse_points("0:0.5)").is_err());
    // non-numeric frame
    assert!(parse_points("a:(0.5)").is_err());
    // negative frame
    assert!(parse_points("-1:(0.5)").is_err());
    // non-numeric intensity
    assert!(parse_points("0:(abc)").is_err());
}

#[test]
fn parse_errors_name_the_offending_entry() {
    let err = parse_points("0:(0.0),7:oops").unwrap_err();
    assert!(err.to_string().contains("7:oops"));
}

#[test]
fn fixup_synthesizes_final_keyframe_carrying_last_intensity() {
    let keys = parse_points("0:(0.0),7:(1.0)").unwrap();
    let track = FadeTrack::from_keys(keys, span(16), Ease::Linear);
    assert_eq!(track.keys().last().copied(), Some(key(15, 1.0)));
}

#[test]
fn fixup_leaves_covered_spans_alone() {
    let keys = parse_points("0:(0.0),15:(1.0)").unwrap();
    let track = FadeTrack::from_keys(keys, span(16), Ease::Linear);
    assert_eq!(track.keys(), &[key(0, 0.0), key(15, 1.0)]);
}

#[test]
fn fixup_sorts_ascending_by_frame() {
    let keys = parse_points("8:(0.25),2:(0.75)").unwrap();
    let track = FadeTrack::from_keys(keys, span(16), Ease::Linear);
    assert_eq!(
        track.keys(),
        &[key(2, 0.75), key(8, 0.25), key(15, 0.75)]
    );
}

#[test]
fn fixup_of_empty_keys_defaults_to_zero() {
    let track = FadeTrack::from_keys(Vec::new(), span(5), Ease::Linear);
    assert_eq!(track.keys(), &[key(4, 0.0)]);
}

#[test]
fn duplicate_frames_resolve_last_write_wins() {
    let keys = parse_points("0:(0.1),5:(0.2),5:(0.9),9:(1.0)").unwrap();
    let track = FadeTrack::from_keys(keys, span(10), Ease::Linear);
    assert_eq!(
        track.keys(),
        &[key(0, 0.1), key(5, 0.9), key(9, 1.0)]
    );
}

#[test]
fn linear_sampling_matches_frame_ratio() {
    let keys = parse_points("0:(0.0),\n15:(1.0)\n").unwrap();
    let track = FadeTrack::from_keys(keys, span(16), Ease::Linear);
    let v = track.intensity_at(FrameIndex(7));
    assert!((v - 7.0 / 15.0).abs() < 1e-12);
}

#[test]
fn sampling_on_a_keyframe_returns_its_intensity() {
    let keys = parse_points("0:(0.2),8:(0.6),15:(1.0)").unwrap();
    let track = FadeTrack::from_keys(keys, span(16), Ease::Linear);
    assert_eq!(track.intensity_at(FrameIndex(0)), 0.2);
    assert!((track.intensity_at(FrameIndex(8)) - 0.6).abs() < 1e-12);
    assert!((track.intensity_at(FrameIndex(15)) - 1.0).abs() < 1e-12);
}

#[test]
fn single_key_guards_zero_denominator() {
    let keys = parse_points("0:(0.5)").unwrap();
    let track = FadeTrack::from_keys(keys, span(5), Ease::Linear);
    assert_eq!(track.keys(), &[key(0, 0.5), key(4, 0.5)]);
    assert_eq!(track.intensity_at(FrameIndex(0)), 0.5);
}

#[test]
fn samples_stay_between_bracketing_intensities() {
    for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
        let keys = parse_points("0:(0.2),9:(0.8)").unwrap();
        let track = FadeTrack::from_keys(keys, span(10), ease);
        for i in 0..10 {
            let v = track.intensity_at(FrameIndex(i));
            assert!(
                v >= 0.2 - 1e-9 && v <= 0.8 + 1e-9,
                "{ease:?} frame {i}: {v}"
            );
        }
    }
}

#[test]
fn eased_sampling_applies_the_curve() {
    let keys = parse_points("0:(0.0),10:(1.0)").unwrap();
    let track = FadeTrack::from_keys(keys, span(11), Ease::EaseIn);
    assert!((track.intensity_at(FrameIndex(5)) - 0.25).abs() < 1e-12);
}

#[test]
fn intensities_clamp_to_byte_range() {
    let keys = parse_points("0:(-50.0),9:(300.0)").unwrap();
    let track = FadeTrack::from_keys(keys, span(10), Ease::Linear);
    assert_eq!(track.intensity_at(FrameIndex(0)), 0.0);
    assert_eq!(track.intensity_at(FrameIndex(9)), 255.0);
    for i in 0..10 {
        let v = track.intensity_at(FrameIndex(i));
        assert!((0.0..=255.0).contains(&v));
    }
}
