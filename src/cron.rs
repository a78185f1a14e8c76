// cron.rs

use crate::error::{Result, ShellError};
use crate::exec;
use crate::util::{debug, writeln_ignore_broken_pipe};
use std::io::Write;
use std::path::{Path, PathBuf};

/// `\cron`: the user's crontab, or every spool file if crontab can't help.
pub fn list_jobs<W: Write>(spool_dir: &Path, out: &mut W) -> Result<()> {
    match exec::run("crontab", &["-l"]) {
        Ok(status) if status.success() => return Ok(()),
        Ok(status) => debug(format!("crontab -l exited with {}, listing {}", status.code(), spool_dir.display())),
        Err(ShellError::CommandNotFound(_)) => debug(format!("no crontab binary, listing {}", spool_dir.display())),
        Err(e) => return Err(e),
    }
    for file in spool_files(spool_dir)? {
        let name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        writeln_ignore_broken_pipe(&mut *out, format!("# {}", name))?;
        out.flush()?;
        let path = file.to_string_lossy();
        exec::run_checked("cat", &[&*path])?;
    }
    Ok(())
}

/// Regular files directly under `dir`, sorted by name.
pub fn spool_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ShellError::path(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ShellError::path(dir, e))?;
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
