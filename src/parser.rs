// parser.rs

use itertools::Itertools;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Empty,
    Echo(String),
    History(Option<usize>),
    Env(String),
    Partitions(Option<String>),
    Cron,
    Mem(i32),
    Exit,
    External { program: String, args: Vec<String> },
    Invalid { cmd: &'static str, message: String },
}

pub const BUILTINS: [&str; 8] = ["echo", "history", "exit", "\\q", "\\e", "\\l", "\\cron", "\\mem"];

impl Command {
    /// Dispatches on the first whitespace-separated word. There is no quoting.
    pub fn parse(line: &str) -> Command {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Empty;
        };
        let rest: Vec<&str> = words.collect();

        if head.eq_ignore_ascii_case("exit") || head == "\\q" {
            return match rest.first() {
                None => Command::Exit,
                Some(_) => invalid("exit", "too many arguments"),
            };
        }

        match head {
            "echo" => Command::Echo(rest.iter().join(" ")),
            "history" => match rest.first() {
                None => Command::History(None),
                Some(n) => match n.parse::<usize>() {
                    Ok(n) => Command::History(Some(n)),
                    Err(_) => invalid("history", format!("{}: numeric argument required", n)),
                },
            },
            "\\e" => match rest.first() {
                Some(var) => {
                    let name = var.strip_prefix('$').unwrap_or(var);
                    if name.is_empty() {
                        invalid("\\e", "missing variable name")
                    } else {
                        Command::Env(name.to_string())
                    }
                }
                None => invalid("\\e", "usage: \\e $NAME"),
            },
            "\\l" => Command::Partitions(rest.first().map(|d| d.to_string())),
            "\\cron" => Command::Cron,
            "\\mem" => match rest.first() {
                Some(pid) => match pid.parse::<i32>() {
                    Ok(pid) if pid > 0 => Command::Mem(pid),
                    _ => invalid("\\mem", format!("{}: not a process id", pid)),
                },
                None => invalid("\\mem", "usage: \\mem PID"),
            },
            _ => Command::External {
                program: head.to_string(),
                args: rest.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

fn invalid(cmd: &'static str, message: impl Into<String>) -> Command {
    Command::Invalid { cmd, message: message.into() }
}
