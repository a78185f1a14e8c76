// memdump.rs

use crate::error::{Result, ShellError};
use crate::exec;
use crate::util::writeln_ignore_broken_pipe;
use nix::errno::Errno;
use nix::sys::signal::kill;
use nix::unistd::Pid;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Signal-0 probe. EPERM still means the process is there.
pub fn process_exists(pid: i32) -> Result<bool> {
    match kill(Pid::from_raw(pid), None) {
        Ok(()) | Err(Errno::EPERM) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// gcore writes `<prefix>.<pid>` for a `-o <prefix>` argument.
pub fn core_path(dump_dir: &Path, pid: i32) -> PathBuf {
    dump_dir.join(format!("core.{}", pid))
}

/// `\mem PID`: dump the process image with gcore.
pub fn dump<W: Write>(pid: i32, dump_dir: &Path, out: &mut W) -> Result<()> {
    if !process_exists(pid)? {
        return Err(ShellError::NoSuchProcess(pid));
    }
    std::fs::create_dir_all(dump_dir).map_err(|e| ShellError::path(dump_dir, e))?;
    let prefix = dump_dir.join("core");
    let prefix = prefix.to_string_lossy();
    let pid_arg = pid.to_string();
    exec::run_checked("gcore", &["-o", &*prefix, pid_arg.as_str()])?;
    writeln_ignore_broken_pipe(out, format!("{}", core_path(dump_dir, pid).display()))?;
    Ok(())
}
