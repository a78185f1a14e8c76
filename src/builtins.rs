// builtins.rs

use crate::error::{Result, ShellError};
use crate::history::History;
use crate::util::writeln_ignore_broken_pipe;
use std::io::Write;

pub fn echo<W: Write>(text: &str, out: &mut W) -> Result<()> {
    writeln_ignore_broken_pipe(&mut *out, text)?;
    out.flush()?;
    Ok(())
}

/// Raw lines, oldest first. `last` limits the listing to the most recent entries.
pub fn history<W: Write>(history: &History, last: Option<usize>, out: &mut W) -> Result<()> {
    let entries = match last {
        Some(n) => history.tail(n),
        None => history.all(),
    };
    for entry in entries {
        writeln_ignore_broken_pipe(&mut *out, entry)?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_var<W: Write, F>(name: &str, lookup: F, out: &mut W) -> Result<()>
where
    F: FnOnce(&str) -> Option<String>,
{
    let value = lookup(name).ok_or_else(|| ShellError::UnsetVariable(name.to_string()))?;
    writeln_ignore_broken_pipe(&mut *out, value)?;
    Ok(())
}
