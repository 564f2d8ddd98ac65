use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();
static START: OnceLock<Instant> = OnceLock::new();

/// Initialise the optional file logger.
///
/// Reads `LINE_NOTIFY_LOG_FILE`; when set to a non-empty path the file is
/// opened in append mode and all subsequent `nlog!()` calls write to it.
/// Hook runs have no terminal attached, so this is the only way to see what
/// a misbehaving run did.
pub fn init() {
    if let Ok(path) = std::env::var("LINE_NOTIFY_LOG_FILE") {
        if !path.is_empty() {
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
                let _ = LOG_FILE.set(Mutex::new(file));
                START.get_or_init(Instant::now);
            }
        }
    }
}

pub fn write(msg: &str) {
    if let Some(file) = LOG_FILE.get() {
        if let Ok(mut f) = file.lock() {
            // Concurrent agent runs append to the same file; tag lines with
            // the pid so they can be told apart.
            let pid = std::process::id();
            let elapsed = START.get().map_or(0.0, |s| s.elapsed().as_secs_f64());
            let _ = writeln!(f, "[{pid}] [{elapsed:>7.3}] {msg}");
            let _ = f.flush();
        }
    }
}

#[macro_export]
macro_rules! nlog {
    ($($arg:tt)*) => {
        $crate::log::write(&format!($($arg)*))
    };
}
