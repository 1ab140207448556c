#![allow(dead_code)]

use linelog::writers::{Journal, JournalPriority};
use std::{
    process::{Command, Output},
    sync::Mutex,
};

const CTRL_INDEX: &str = "CTRL_INDEX";

// Returns the role this process was launched with by `run_child`,
// or None in the controlling test process.
pub fn role() -> Option<String> {
    std::env::var(CTRL_INDEX).ok()
}

// Launches the given test of this executable in a child process, with the given role
// and the given additional environment variables, and waits for its termination.
//
// LOGGER_LEVELS is only set in the child if it is part of `envs`.
pub fn run_child(test_name: &str, role: &str, envs: &[(&str, &str)]) -> Output {
    let progname = std::env::args().next().unwrap();
    let mut command = Command::new(progname);
    command
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CTRL_INDEX, role)
        .env_remove(linelog::LEVELS_ENV_VAR);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Command failed to start")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// A journal that is never reachable.
pub struct NoJournal;

impl Journal for NoJournal {
    fn is_available(&self) -> bool {
        false
    }

    fn send(&self, _: &str, _: JournalPriority, _: &[(&str, &str)]) -> std::io::Result<()> {
        Err(std::io::Error::other("no journal"))
    }
}

// A reachable journal that keeps what it receives.
#[derive(Default)]
pub struct MemJournal {
    pub entries: Mutex<Vec<(String, JournalPriority, String)>>,
}

impl Journal for MemJournal {
    fn is_available(&self) -> bool {
        true
    }

    fn send(
        &self,
        message: &str,
        priority: JournalPriority,
        fields: &[(&str, &str)],
    ) -> std::io::Result<()> {
        let identifier = fields
            .iter()
            .find(|(k, _)| *k == "SYSLOG_IDENTIFIER")
            .map(|(_, v)| (*v).to_string())
            .unwrap_or_default();
        self.entries
            .lock()
            .unwrap()
            .push((message.to_string(), priority, identifier));
        Ok(())
    }
}
