//! Shared test helpers: a scripted command runner and a log capture.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use hanactl::{format_su_cmd, CommandRunner, HanaError, HanaInstance, InstanceIdentity, ProcessResult};

/// One recorded `execute` call: (command, user, password)
pub type Call = (String, Option<String>, Option<String>);

/// Runner that records every call and replays queued outcomes in order
///
/// Calls without a queued outcome succeed with empty output. The executed
/// command recorded in each result is the `su`-wrapped form, like the real runner.
#[derive(Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<Call>>,
    outcomes: RefCell<VecDeque<Result<(i32, String), HanaError>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome with the given return code and stdout
    pub fn then(self, returncode: i32, output: &str) -> Self {
        self.outcomes.borrow_mut().push_back(Ok((returncode, output.to_string())));
        self
    }

    /// Queue a spawn failure
    pub fn then_fail(self, err: HanaError) -> Self {
        self.outcomes.borrow_mut().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(
        &self,
        command: &str,
        user: Option<&str>,
        password: Option<&str>,
    ) -> hanactl::Result<ProcessResult> {
        self.calls.borrow_mut().push((
            command.to_string(),
            user.map(str::to_string),
            password.map(str::to_string),
        ));

        let executed = match user {
            Some(user) => format_su_cmd(command, user),
            None => command.to_string(),
        };

        match self.outcomes.borrow_mut().pop_front() {
            Some(Ok((returncode, output))) => Ok(ProcessResult::new(executed, returncode, output, "")),
            Some(Err(err)) => Err(err),
            None => Ok(ProcessResult::new(executed, 0, "", "")),
        }
    }
}

/// Facade for sid `prd`, instance `00`, password `pass`
pub fn prd(runner: ScriptedRunner) -> HanaInstance<ScriptedRunner> {
    HanaInstance::with_runner(InstanceIdentity::new("prd", "00", "pass"), runner)
}

pub fn admin_call(command: &str) -> Call {
    (command.to_string(), Some("prdadm".to_string()), Some("pass".to_string()))
}

/// In-memory sink for a scoped tracing subscriber
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that captures log output, returning both
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
