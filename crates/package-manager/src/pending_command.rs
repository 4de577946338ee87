use depman_process::{Command, Output};
use std::ffi::OsStr;
use std::path::Path;

/// A package manager command whose arguments have been fully computed,
/// but that has not been spawned yet. Inspect or modify it, then call
/// [`PendingCommand::exec`] to run it.
#[derive(Clone, Debug)]
pub struct PendingCommand {
    command: Command,
    silent: bool,
}

impl PendingCommand {
    pub fn new(command: Command, silent: bool) -> Self {
        Self { command, silent }
    }

    pub fn arg<A: AsRef<OsStr>>(&mut self, arg: A) -> &mut Self {
        self.command.arg(arg);
        self
    }

    pub fn args<I, A>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        self.command.args(args);
        self
    }

    pub fn env<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.command.env(key, value);
        self
    }

    pub fn get_args_list(&self) -> Vec<String> {
        self.command.get_args_list()
    }

    pub fn get_bin_name(&self) -> &str {
        self.command.get_bin_name()
    }

    pub fn get_command(&self) -> &Command {
        &self.command
    }

    pub fn get_command_mut(&mut self) -> &mut Command {
        &mut self.command
    }

    pub fn get_cwd(&self) -> Option<&Path> {
        self.command.get_cwd()
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn set_silent(&mut self, state: bool) -> &mut Self {
        self.silent = state;

        if state {
            self.command.set_print_command(false);
        }

        self
    }

    /// Spawn the command and wait for it to exit. Output is captured when
    /// silent, otherwise streamed. Non-zero exits are returned as errors.
    pub async fn exec(self) -> miette::Result<Output> {
        let mut command = self.command.create_async();

        let output = if self.silent {
            command.exec_capture_output().await?
        } else {
            command.exec_stream_output().await?
        };

        Ok(output)
    }
}
