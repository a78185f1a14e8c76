//! minish: a tiny interactive shell.
//!
//! Each line is matched on its first word against a handful of builtins
//! (`echo`, `history`, `\e`, `\l`, `\cron`, `\mem`, `exit`/`\q`); anything
//! else is executed as a program found on `PATH`.

pub mod builtins;
pub mod completion;
pub mod config;
pub mod cron;
pub mod disk;
pub mod error;
pub mod exec;
pub mod history;
pub mod memdump;
pub mod parser;
pub mod repl;
pub mod shell;
pub mod signals;
pub mod util;

pub use error::{Result, ShellError};
pub use shell::{Flow, Shell};
