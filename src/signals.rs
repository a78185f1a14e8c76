// signals.rs

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

extern "C" fn ignore_interrupt(_: libc::c_int) {}

/// Ctrl-C interrupts the foreground child, not the shell.
///
/// A handler rather than SIG_IGN: exec resets handlers to the default, so
/// children stay interruptible.
pub fn install() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(ignore_interrupt),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    unsafe { sigaction(Signal::SIGINT, &action) }?;
    Ok(())
}
