// util.rs

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a failure on stderr. The loop keeps going after every report.
pub fn report<E: std::fmt::Display>(err: E) {
    let _ = writeln_ignore_broken_pipe(std::io::stderr(), format!("minish: {}", err));
}

pub fn debug<S: AsRef<str>>(msg: S) {
    if verbose() {
        let _ = writeln_ignore_broken_pipe(std::io::stderr(), format!("minish: debug: {}", msg.as_ref()));
    }
}
