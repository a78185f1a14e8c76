// repl.rs

use crate::completion::CommandCompleter;
use crate::config::Config;
use crate::shell::{Flow, Shell};
use crate::util::debug;
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as EditorConfig, Editor};
use std::io::{ErrorKind, Read, Write};

pub const BANNER: &str = "Welcome to minish! Type a command, or leave with Ctrl+D, 'exit' or '\\q'.";

/// Where input lines come from. `Ok(None)` is end-of-input.
pub trait LineSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

pub struct EditorSource {
    editor: Editor<CommandCompleter, DefaultHistory>,
}

impl EditorSource {
    pub fn new() -> anyhow::Result<Self> {
        let config = EditorConfig::builder().completion_type(CompletionType::List).build();
        let mut editor = Editor::with_config(config).context("failed to create line editor")?;
        editor.set_helper(Some(CommandCompleter::new()));
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl-C abandons the current line only
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read line"),
        }
    }
}

/// Plain line reader for piped input: no prompt, no editing.
///
/// Reads one byte at a time so nothing past the current newline is consumed;
/// a child started for this line reads the rest of stdin itself.
pub struct PipedSource<R> {
    reader: R,
}

impl<R: Read> PipedSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> LineSource for PipedSource<R> {
    fn next_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            match self.read_byte().context("failed to read stdin")? {
                Some(b'\n') => break,
                Some(byte) => buf.push(byte),
                None if buf.is_empty() => return Ok(None),
                None => break,
            }
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        // bad bytes become U+FFFD instead of ending the session
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Unbuffered fd 0; `std::io::stdin()` would read ahead of the current line.
pub struct RawStdin;

impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        nix::unistd::read(libc::STDIN_FILENO, buf).map_err(std::io::Error::from)
    }
}

/// Reads and runs lines until `exit`, `\q` or end-of-input.
pub fn run<S: LineSource, W: Write>(shell: &mut Shell, source: &mut S, out: &mut W) -> anyhow::Result<()> {
    let prompt = shell.config().prompt.clone();
    while let Some(line) = source.next_line(&prompt)? {
        if shell.execute_line(&line, out) == Flow::Exit {
            debug("exit requested");
            return Ok(());
        }
    }
    debug("end of input");
    Ok(())
}

pub fn start_repl(config: Config) -> anyhow::Result<()> {
    let interactive = config.interactive;
    let mut shell = Shell::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if interactive {
        writeln!(out, "{}", BANNER)?;
        let mut source = EditorSource::new()?;
        run(&mut shell, &mut source, &mut out)?;
        writeln!(out, "Exiting...")?;
    } else {
        let mut source = PipedSource::new(RawStdin);
        run(&mut shell, &mut source, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
