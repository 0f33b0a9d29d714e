use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Initialize logging to a file
pub fn init() -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dialpick")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("dialpick_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log("=== dialpick started ===");

    Ok(log_path)
}

/// Log a message with timestamp.
///
/// Silently does nothing until `init` has been called, so library code can
/// log unconditionally.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log an input event
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Log a value handed to the sink
pub fn log_commit(value: i64, source: &str) {
    log(&format!("[COMMIT] {} via {}", value, source));
}

/// Install a panic hook that logs the panic before the default hook runs.
///
/// `restore` runs first so the message is not swallowed by the alternate screen.
pub fn install_panic_hook(restore: fn()) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        log(&format!("PANIC: {}", info));
        default_hook(info);
    }));
}
