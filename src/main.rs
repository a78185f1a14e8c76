use anyhow::Context;
use minish::config::{self, Args, Config};
use minish::{repl, signals, util};

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    let config = Config::from_args(args, config::stdin_is_tty());
    util::set_verbose(config.verbose);
    util::debug(format!("history file {}", config.history_file.display()));

    signals::install().context("failed to install SIGINT handler")?;
    repl::start_repl(config)
}
