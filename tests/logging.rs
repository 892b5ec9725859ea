use grid_atlas::{generate, AtlasConfig};
use image::{Rgba, RgbaImage};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn skipped_files_are_reported_only_when_undecodable() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255]))
        .save(input.path().join("good.png"))
        .unwrap();
    std::fs::write(input.path().join("bad.png"), b"\x89PNG\r\n\x1a\ntruncated").unwrap();
    std::fs::write(input.path().join("readme.txt"), "not an image").unwrap();

    let config = AtlasConfig::new(input.path(), output.path().join("atlas"), "sprites");
    let result = generate(&config).unwrap();
    assert_eq!(result.mapping.len(), 1);

    let records = LOGGER.records.lock().unwrap();
    let warnings: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .collect();
    assert_eq!(warnings.len(), 1, "{:?}", *records);
    assert!(warnings[0].1.contains("bad.png"), "{:?}", warnings);

    assert!(!records
        .iter()
        .any(|(level, msg)| *level <= Level::Warn && msg.contains("readme.txt")));
    assert!(!records
        .iter()
        .any(|(level, msg)| *level <= Level::Warn && msg.contains("good.png")));
}
