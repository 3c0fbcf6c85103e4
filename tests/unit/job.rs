use image::{Rgba, RgbaImage};

use super::*;
use crate::encode::codec::EncoderPreference;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::SpriteError;

/// 6 frames of 8x8, frame `i` filled with green = (i + 1) * 20.
fn sheet() -> SpriteSheet {
    let img = RgbaImage::from_fn(48, 8, |x, _| Rgba([0, ((x / 8 + 1) * 20) as u8, 0, 255]));
    SpriteSheet::from_rgba(img).unwrap()
}

fn config() -> JobConfig {
    let mut cfg = JobConfig::new("walk.png", 8, Canvas::new(16, 12).unwrap(), 3.0);
    cfg.encoder = EncoderPreference::Software;
    cfg
}

fn center_green(sink: &InMemorySink) -> Vec<u8> {
    sink.frames()
        .iter()
        .map(|(_, f)| f.pixel(8, 6).unwrap()[1])
        .collect()
}

#[test]
fn plan_describes_freeze_job() {
    let mut cfg = config();
    cfg.start = Some(2);
    cfg.end = Some(4);
    cfg.cycle_secs = Some(1.0);
    let job = RenderJob::with_sheet(cfg, sheet()).unwrap();

    let plan = job.plan().unwrap();
    assert_eq!(plan.sheet_frames, 6);
    assert_eq!(plan.selection, FrameSelection::new(2, 4).unwrap());
    assert_eq!(plan.fps, 3.0);
    assert_eq!(plan.output_frames, 9);
    assert_eq!(plan.playback, Playback::Freeze);
    assert_eq!(plan.out_path, PathBuf::from("walk.mp4"));
}

#[test]
fn run_freezes_on_last_selected_frame() {
    let mut cfg = config();
    cfg.start = Some(2);
    cfg.end = Some(4);
    cfg.cycle_secs = Some(1.0);
    let job = RenderJob::with_sheet(cfg, sheet()).unwrap();

    let mut sink = InMemorySink::new();
    let report = job.run_with_sink(&mut sink).unwrap();
    assert_eq!(report.codec, VideoCodec::Libx264);
    assert!(!report.fallback_used);
    assert_eq!(center_green(&sink), vec![40, 60, 80, 80, 80, 80, 80, 80, 80]);
}

#[test]
fn run_loops_whole_sheet() {
    let mut cfg = config();
    cfg.looped = true;
    cfg.cycle_secs = Some(2.0);
    cfg.duration_secs = 4.0;
    let job = RenderJob::with_sheet(cfg, sheet()).unwrap();

    let mut sink = InMemorySink::new();
    let report = job.run_with_sink(&mut sink).unwrap();
    assert_eq!(report.plan.fps, 3.0);
    assert_eq!(report.plan.output_frames, 12);
    assert_eq!(
        center_green(&sink),
        vec![20, 40, 60, 80, 100, 120, 20, 40, 60, 80, 100, 120]
    );
}

#[test]
fn single_frame_loop_renders_a_still() {
    let mut cfg = config();
    cfg.start = Some(3);
    cfg.end = Some(3);
    cfg.looped = true;
    cfg.cycle_secs = Some(0.5);
    cfg.duration_secs = 2.0;
    let job = RenderJob::with_sheet(cfg, sheet()).unwrap();

    let mut sink = InMemorySink::new();
    let report = job.run_with_sink(&mut sink).unwrap();
    assert_eq!(report.plan.output_frames, 4);
    assert_eq!(center_green(&sink), vec![60; 4]);
}

#[test]
fn invalid_configs_fail_before_encoding() {
    let mut cfg = config();
    cfg.frame_width = 49;
    assert!(matches!(
        RenderJob::with_sheet(cfg, sheet()),
        Err(SpriteError::InvalidDimension(_))
    ));

    let mut cfg = config();
    cfg.end = Some(7);
    assert!(RenderJob::with_sheet(cfg, sheet()).is_err());
}

#[test]
fn report_serializes_flat() {
    let job = RenderJob::with_sheet(config(), sheet()).unwrap();
    let mut sink = InMemorySink::new();
    let report = job.run_with_sink(&mut sink).unwrap();

    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["codec"], "libx264");
    assert_eq!(v["output_frames"], 6);
    assert_eq!(v["playback"], "freeze");
    assert_eq!(v["selection"]["end"], 6);
}
