use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Write a diagnostic line to stderr when `--debug` is on
pub fn debug_log(message: impl AsRef<str>) {
    if debug_enabled() {
        eprintln!("[debug] {}", message.as_ref());
    }
}
