use super::*;

fn hd() -> Canvas {
    Canvas::new(1920, 1080).unwrap()
}

#[test]
fn presets_and_custom_resolutions() {
    assert_eq!(parse_resolution("1080p").unwrap(), hd());
    assert_eq!(
        parse_resolution(" 4K ").unwrap(),
        Canvas::new(3840, 2160).unwrap()
    );
    assert_eq!(
        parse_resolution("2k").unwrap(),
        Canvas::new(2560, 1440).unwrap()
    );
    assert_eq!(
        parse_resolution("640x480").unwrap(),
        Canvas::new(640, 480).unwrap()
    );
    assert!(parse_resolution("wide").is_err());
    assert!(parse_resolution("0x10").is_err());
    assert!(parse_resolution("10x").is_err());
}

#[test]
fn durations_accept_unit_suffixes() {
    assert_eq!(parse_duration_secs("4").unwrap(), 4.0);
    assert_eq!(parse_duration_secs("2.5s").unwrap(), 2.5);
    assert_eq!(parse_duration_secs("1.5m").unwrap(), 90.0);
    assert_eq!(parse_duration_secs("2H").unwrap(), 7200.0);
    assert!(parse_duration_secs("0").is_err());
    assert!(parse_duration_secs("-3s").is_err());
    assert!(parse_duration_secs("soon").is_err());
}

#[test]
fn output_path_defaults_and_extension() {
    let mut cfg = JobConfig::new("art/walk.png", 64, hd(), 4.0);
    assert_eq!(cfg.resolved_out_path(), PathBuf::from("art/walk.mp4"));

    cfg.out = Some(PathBuf::from("renders/walk"));
    assert_eq!(cfg.resolved_out_path(), PathBuf::from("renders/walk.mp4"));

    cfg.out = Some(PathBuf::from("renders/walk.MP4"));
    assert_eq!(cfg.resolved_out_path(), PathBuf::from("renders/walk.MP4"));

    cfg.out = Some(PathBuf::from("renders/walk.v2"));
    assert_eq!(cfg.resolved_out_path(), PathBuf::from("renders/walk.v2.mp4"));
}

#[test]
fn validate_defaults_selection_to_whole_sheet() {
    let cfg = JobConfig::new("walk.png", 64, hd(), 4.0);
    let sel = cfg.validate(8).unwrap();
    assert_eq!(sel, FrameSelection::new(1, 8).unwrap());
    assert_eq!(cfg.playback(), Playback::Freeze);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let base = JobConfig::new("walk.png", 64, hd(), 4.0);

    let mut cfg = base.clone();
    cfg.end = Some(9);
    assert!(matches!(cfg.validate(8), Err(SpriteError::Validation(_))));

    let mut cfg = base.clone();
    cfg.start = Some(5);
    cfg.end = Some(4);
    assert!(matches!(cfg.validate(8), Err(SpriteError::EmptySelection(_))));

    let mut cfg = base.clone();
    cfg.scale = 0.0;
    assert!(matches!(cfg.validate(8), Err(SpriteError::InvalidScale(_))));

    let mut cfg = base.clone();
    cfg.cycle_secs = Some(-1.0);
    assert!(cfg.validate(8).is_err());

    let mut cfg = base.clone();
    cfg.canvas = Canvas {
        width: 1921,
        height: 1080,
    };
    assert!(matches!(cfg.validate(8), Err(SpriteError::Validation(_))));

    let mut cfg = base;
    cfg.frame_width = 0;
    assert!(matches!(
        cfg.validate(8),
        Err(SpriteError::InvalidDimension(_))
    ));
}

#[test]
fn json_defaults_and_relative_paths() {
    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let job = dir.join("job.json");
    std::fs::write(
        &job,
        r#"{
            "sheet": "sheets/run.png",
            "frame_width": 32,
            "canvas": { "width": 1280, "height": 720 },
            "duration_secs": 3.0,
            "loop": true,
            "cycle_secs": 0.5,
            "encoder": "software"
        }"#,
    )
    .unwrap();

    let cfg = JobConfig::from_json_file(&job).unwrap();
    assert_eq!(cfg.sheet, dir.join("sheets/run.png"));
    assert_eq!(cfg.scale, 1.0);
    assert!(cfg.overwrite);
    assert_eq!(cfg.playback(), Playback::Loop);
    assert_eq!(cfg.encoder, EncoderPreference::Software);
    assert_eq!(cfg.resolved_out_path(), dir.join("sheets/run.mp4"));
}

#[test]
fn json_round_trips_and_rejects_unknown_fields() {
    let cfg = JobConfig::new("walk.png", 16, hd(), 2.0);
    let text = cfg.to_json_pretty().unwrap();
    assert!(text.contains("\"loop\": false"));
    let back: JobConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);

    let dir = PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let job = dir.join("bad.json");
    std::fs::write(&job, r#"{ "sheet": "a.png", "frame_width": 1, "bogus": 1 }"#).unwrap();
    assert!(matches!(
        JobConfig::from_json_file(&job),
        Err(SpriteError::Serde(_))
    ));
}
