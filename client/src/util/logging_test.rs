use std::sync::Mutex;

struct Capture(Mutex<Vec<String>>);

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.0
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static CAPTURED: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn tracing_events_reach_the_log_facade() {
    log::set_logger(&CAPTURED).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    tracing::warn!(code = "E_API", "profile fetch failed");

    let lines = CAPTURED.0.lock().unwrap();
    assert!(
        lines.iter().any(|l| l.starts_with("WARN") && l.contains("profile fetch failed")),
        "captured: {lines:?}"
    );
}
