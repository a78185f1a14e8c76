// shell.rs

use crate::builtins;
use crate::config::Config;
use crate::cron;
use crate::disk;
use crate::error::{Result, ShellError};
use crate::exec::{self, Status};
use crate::history::History;
use crate::memdump;
use crate::parser::Command;
use crate::util::{debug, report};
use std::io::Write;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    config: Config,
    history: History,
    last_status: Option<Status>,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        let history = History::new(Some(config.history_file.clone()));
        Self::with_history(config, history)
    }

    pub fn with_history(config: Config, history: History) -> Self {
        Self { config, history, last_status: None }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Status of the most recent external command, if one has run.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Runs one input line. Failures are reported on stderr and never stop the loop.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Flow {
        let command = Command::parse(line);
        if command == Command::Empty {
            return Flow::Continue;
        }
        debug(format!("dispatch {:?}", command));

        let flow = match self.dispatch(command, out) {
            Ok(flow) => flow,
            Err(e) => {
                report(e);
                Flow::Continue
            }
        };
        // recorded raw, after running, so `history` lists only earlier lines
        if let Err(e) = self.history.add(line) {
            report(e);
        }
        flow
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Exit => return Ok(Flow::Exit),
            Command::Echo(text) => builtins::echo(&text, out)?,
            Command::History(last) => builtins::history(&self.history, last, out)?,
            Command::Env(name) => builtins::print_var(&name, |k| std::env::var(k).ok(), out)?,
            Command::Partitions(device) => disk::list_partitions(device.as_deref(), out)?,
            Command::Cron => cron::list_jobs(&self.config.cron_dir, out)?,
            Command::Mem(pid) => memdump::dump(pid, &self.config.dump_dir, out)?,
            Command::Invalid { cmd, message } => return Err(ShellError::Usage { cmd, message }),
            Command::External { program, args } => {
                out.flush()?;
                self.last_status = None;
                let status = exec::run(&program, &args)?;
                self.last_status = Some(status);
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;

    fn shell() -> Shell {
        let config = Config::resolve(Args::default(), false, |_| None);
        Shell::with_history(config, History::new(None))
    }

    fn run(sh: &mut Shell, line: &str) -> (Flow, String) {
        let mut out: Vec<u8> = Vec::new();
        let flow = sh.execute_line(line, &mut out);
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn echo_prints_its_argument() {
        let mut sh = shell();
        assert_eq!(run(&mut sh, "echo x"), (Flow::Continue, "x\n".to_string()));
    }

    #[test]
    fn history_lists_prior_inputs_in_order() {
        let mut sh = shell();
        run(&mut sh, "echo one");
        run(&mut sh, "true");
        run(&mut sh, "echo three");
        let (_, out) = run(&mut sh, "history");
        assert_eq!(out, "echo one\ntrue\necho three\n");
        // the history command itself is recorded afterwards
        assert_eq!(sh.history().len(), 4);
    }

    #[test]
    fn blank_lines_are_not_recorded() {
        let mut sh = shell();
        assert_eq!(run(&mut sh, "   "), (Flow::Continue, String::new()));
        assert!(sh.history().is_empty());
    }

    #[test]
    fn true_runs_externally_with_status_zero() {
        let mut sh = shell();
        let (flow, out) = run(&mut sh, "true");
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert_eq!(sh.last_status(), Some(Status::Exited(0)));
    }

    #[test]
    fn unknown_program_keeps_the_loop_going() {
        let mut sh = shell();
        let (flow, out) = run(&mut sh, "minish-no-such-program --flag");
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert_eq!(sh.last_status(), None);
        assert_eq!(sh.history().all(), ["minish-no-such-program --flag"]);
    }

    #[test]
    fn exit_and_quit_stop_the_loop() {
        let mut sh = shell();
        assert_eq!(run(&mut sh, "exit").0, Flow::Exit);
        assert_eq!(run(&mut sh, "\\q").0, Flow::Exit);
    }

    #[test]
    fn exit_with_arguments_keeps_running() {
        let mut sh = shell();
        assert_eq!(run(&mut sh, "exit now"), (Flow::Continue, String::new()));
        assert_eq!(run(&mut sh, "\\q foo").0, Flow::Continue);
    }

    #[test]
    fn history_keeps_the_raw_line() {
        let mut sh = shell();
        run(&mut sh, "  echo   spaced\t");
        let (_, out) = run(&mut sh, "history");
        assert_eq!(out, "  echo   spaced\t\n");
    }

    #[test]
    fn env_prints_variable() {
        let mut sh = shell();
        let expected = std::env::var("PATH").unwrap();
        let (_, out) = run(&mut sh, "\\e $PATH");
        assert_eq!(out, format!("{}\n", expected));
    }

    #[test]
    fn usage_errors_print_nothing_on_stdout() {
        let mut sh = shell();
        assert_eq!(run(&mut sh, "\\mem nope"), (Flow::Continue, String::new()));
        assert_eq!(run(&mut sh, "\\e"), (Flow::Continue, String::new()));
    }

    #[test]
    fn lines_are_mirrored_to_the_history_file() {
        let path = std::env::temp_dir().join(format!("minish-shell-history-{}", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let config = Config {
            history_file: path.clone(),
            ..Config::resolve(Args::default(), false, |_| None)
        };
        let mut sh = Shell::new(config);
        run(&mut sh, "  echo hi  ");
        run(&mut sh, "history");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "  echo hi  \nhistory\n");
        let _ = std::fs::remove_file(&path);
    }
}
