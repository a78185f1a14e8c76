// config.rs

use argh::FromArgs;
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "> ";
pub const HISTORY_FILE_NAME: &str = ".minish_history";
pub const DEFAULT_CRON_DIR: &str = "/var/spool/cron/crontabs";

#[derive(FromArgs, Debug, Default)]
/// A small interactive command shell.
pub struct Args {
    #[argh(option)]
    /// file to append every entered line to (default: $HISTFILE or ~/.minish_history)
    pub history_file: Option<PathBuf>,

    #[argh(option)]
    /// prompt shown before each line in interactive mode
    pub prompt: Option<String>,

    #[argh(option)]
    /// directory where \mem writes core dumps (default: the system temp dir)
    pub dump_dir: Option<PathBuf>,

    #[argh(option)]
    /// spool directory listed by \cron when crontab is unavailable
    pub cron_dir: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// print dispatch and exit-status traces on stderr
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub history_file: PathBuf,
    pub prompt: String,
    pub dump_dir: PathBuf,
    pub cron_dir: PathBuf,
    pub interactive: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args, interactive: bool) -> Self {
        Self::resolve(args, interactive, |key| std::env::var(key).ok())
    }

    /// Flags win over the environment, the environment over built-in defaults.
    pub fn resolve<F>(args: Args, interactive: bool, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let history_file = args
            .history_file
            .or_else(|| env("HISTFILE").filter(|s| !s.is_empty()).map(PathBuf::from))
            .or_else(|| {
                env("HOME")
                    .filter(|s| !s.is_empty())
                    .map(|home| PathBuf::from(home).join(HISTORY_FILE_NAME))
            })
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME));
        Self {
            history_file,
            prompt: args.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            dump_dir: args.dump_dir.unwrap_or_else(std::env::temp_dir),
            cron_dir: args.cron_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CRON_DIR)),
            interactive,
            verbose: args.verbose,
        }
    }
}

/// True when stdin is a terminal.
pub fn stdin_is_tty() -> bool {
    nix::unistd::isatty(libc::STDIN_FILENO).unwrap_or(false)
}
