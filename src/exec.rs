// exec.rs

use crate::error::{Result, ShellError};
use crate::util::debug;
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{execv, fork, ForkResult};
use std::env;
use std::ffi::CString;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Exited(i32),
    Signaled(Signal),
}

impl Status {
    pub fn success(&self) -> bool {
        matches!(self, Status::Exited(0))
    }

    /// Shell-style numeric status: 128 + signal number for killed children.
    pub fn code(&self) -> i32 {
        match self {
            Status::Exited(code) => *code,
            Status::Signaled(sig) => 128 + *sig as i32,
        }
    }
}

pub fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Finds `program` the way execvp would: as given if it has a slash, otherwise in `PATH`.
pub fn resolve(program: &str) -> Option<PathBuf> {
    if program.contains('/') {
        let path = PathBuf::from(program);
        return is_executable(&path).then_some(path);
    }
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

/// Forks and execs `program`, inheriting stdin/stdout/stderr, and blocks until it exits.
pub fn run<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Status> {
    let exec_path = resolve(program).ok_or_else(|| ShellError::CommandNotFound(program.to_string()))?;

    // Everything the child touches is built before fork.
    let path_c = CString::new(exec_path.as_os_str().as_encoded_bytes())
        .map_err(|_| ShellError::NulInArgument(program.to_string()))?;
    let mut argv = Vec::with_capacity(args.len() + 1);
    for arg in std::iter::once(program).chain(args.iter().map(|a| a.as_ref())) {
        argv.push(CString::new(arg).map_err(|_| ShellError::NulInArgument(program.to_string()))?);
    }

    debug(format!("exec {} {:?}", exec_path.display(), &argv[1..]));
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();

    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            let _ = execv(&path_c, &argv);
            unsafe { libc::_exit(127) }
        }
        Ok(ForkResult::Parent { child }) => loop {
            match waitpid(child, None) {
                Ok(WaitStatus::Exited(_, code)) => {
                    debug(format!("{} exited with {}", program, code));
                    return Ok(Status::Exited(code));
                }
                Ok(WaitStatus::Signaled(_, sig, _)) => {
                    debug(format!("{} killed by {}", program, sig));
                    return Ok(Status::Signaled(sig));
                }
                Ok(_) | Err(Errno::EINTR) => continue,
                Err(source) => {
                    return Err(ShellError::Wait { program: program.to_string(), source });
                }
            }
        },
        Err(source) => Err(ShellError::Spawn { program: program.to_string(), source }),
    }
}

/// Like [`run`], but a non-zero exit becomes an error.
pub fn run_checked<S: AsRef<str>>(program: &str, args: &[S]) -> Result<()> {
    let status = run(program, args)?;
    if status.success() {
        Ok(())
    } else {
        Err(ShellError::ToolFailed { program: program.to_string(), code: status.code() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: [&str; 0] = [];

    #[test]
    fn true_exits_zero() {
        assert_eq!(run("true", &NO_ARGS).unwrap(), Status::Exited(0));
    }

    #[test]
    fn false_exits_nonzero() {
        let status = run("false", &NO_ARGS).unwrap();
        assert!(!status.success());
        assert_eq!(status.code(), 1);
    }

    #[test]
    fn arguments_reach_the_child() {
        let status = run("sh", &["-c", "exit $0", "7"]).unwrap();
        assert_eq!(status, Status::Exited(7));
    }

    #[test]
    fn missing_program_is_not_found() {
        let err = run("minish-no-such-program", &NO_ARGS).unwrap_err();
        assert!(matches!(err, ShellError::CommandNotFound(ref p) if p == "minish-no-such-program"));
    }

    #[test]
    fn resolves_through_path_and_absolute() {
        let sh = resolve("sh").expect("sh on PATH");
        assert!(sh.is_absolute());
        assert_eq!(resolve(sh.to_str().unwrap()), Some(sh.clone()));
        assert_eq!(resolve("/definitely/not/here"), None);
    }

    #[test]
    fn run_checked_turns_failure_into_error() {
        assert!(run_checked("true", &NO_ARGS).is_ok());
        let err = run_checked("false", &NO_ARGS).unwrap_err();
        assert!(matches!(err, ShellError::ToolFailed { code: 1, .. }));
    }

    #[test]
    fn signaled_status_code() {
        assert_eq!(Status::Signaled(Signal::SIGINT).code(), 130);
    }
}
