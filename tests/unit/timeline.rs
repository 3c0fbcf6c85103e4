use super::*;

fn spec(n: usize, total: f64, cycle: Option<f64>, playback: Playback) -> TimelineSpec {
    TimelineSpec {
        base_frames: n,
        total_secs: total,
        cycle_secs: cycle,
        playback,
    }
}

#[test]
fn loop_fps_and_wraparound() {
    let t = Timeline::build(spec(10, 6.0, Some(2.0), Playback::Loop)).unwrap();
    assert_eq!(t.fps(), 5.0);
    assert_eq!(t.total_output_frames(), 30);
    assert_eq!(t.base_index(FrameIndex(23)), 3);
    assert_eq!(t.base_index(FrameIndex(9)), 9);
    assert_eq!(t.base_index(FrameIndex(10)), 0);
}

#[test]
fn loop_index_is_modulo_for_every_frame() {
    for n in 1..=12usize {
        for cycle in [0.25, 1.0, 3.5] {
            let t = Timeline::build(spec(n, 10.0, Some(cycle), Playback::Loop)).unwrap();
            assert_eq!(t.fps(), n as f64 / cycle);
            for i in 0..t.total_output_frames() {
                assert_eq!(t.base_index(FrameIndex(i)), (i % n as u64) as usize);
            }
        }
    }
}

#[test]
fn freeze_holds_last_frame() {
    let t = Timeline::build(spec(5, 3.0, Some(1.0), Playback::Freeze)).unwrap();
    assert_eq!(t.fps(), 5.0);
    assert_eq!(t.total_output_frames(), 15);
    assert_eq!(t.base_index(FrameIndex(10)), 4);
    assert_eq!(t.base_index(FrameIndex(3)), 3);
    assert_eq!(t.base_index(FrameIndex(14)), 4);
}

#[test]
fn freeze_index_is_min_for_every_frame() {
    let t = Timeline::build(spec(7, 4.0, Some(0.5), Playback::Freeze)).unwrap();
    for i in 0..t.total_output_frames() {
        assert_eq!(t.base_index(FrameIndex(i)), (i as usize).min(6));
    }
}

#[test]
fn cycle_defaults_to_total_duration() {
    let t = Timeline::build(spec(12, 4.0, None, Playback::Freeze)).unwrap();
    assert_eq!(t.fps(), 3.0);
    assert_eq!(t.total_output_frames(), 12);
    assert_eq!(t.base_index(FrameIndex(11)), 11);
}

#[test]
fn rounding_happens_once_on_frame_count() {
    let t = Timeline::build(spec(7, 2.0, Some(3.0), Playback::Loop)).unwrap();
    assert_eq!(t.fps(), 7.0 / 3.0);
    // 2.0 * 7/3 = 4.666.. -> 5
    assert_eq!(t.total_output_frames(), 5);
    assert!((t.effective_secs() - 5.0 / (7.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn single_frame_loop_is_a_still_image() {
    let t = Timeline::build(spec(1, 2.0, Some(0.5), Playback::Loop)).unwrap();
    assert_eq!(t.fps(), 2.0);
    assert_eq!(t.total_output_frames(), 4);
    for i in 0..4 {
        assert_eq!(t.base_index(FrameIndex(i)), 0);
    }
}

#[test]
fn empty_selection_is_rejected_first() {
    assert!(matches!(
        Timeline::build(spec(0, -1.0, Some(0.0), Playback::Loop)),
        Err(SpriteError::EmptySelection(_))
    ));
}

#[test]
fn non_positive_durations_are_domain_errors() {
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Timeline::build(spec(4, 1.0, Some(bad), Playback::Loop)),
            Err(SpriteError::Domain(_))
        ));
        assert!(matches!(
            Timeline::build(spec(4, bad, None, Playback::Freeze)),
            Err(SpriteError::Domain(_))
        ));
    }
}

#[test]
fn zero_frame_videos_are_domain_errors() {
    // 1 frame over 10s is 0.1 fps; 1s of that rounds to 0 frames.
    assert!(matches!(
        Timeline::build(spec(1, 1.0, Some(10.0), Playback::Loop)),
        Err(SpriteError::Domain(_))
    ));
}

#[test]
fn playback_from_flag() {
    assert_eq!(Playback::from_loop_flag(true), Playback::Loop);
    assert_eq!(Playback::from_loop_flag(false), Playback::Freeze);
}
