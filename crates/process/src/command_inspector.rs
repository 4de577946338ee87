use crate::command::Command;
use depman_common::color;
use shell_words::join;
use std::env;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, enabled};

#[derive(Debug)]
pub struct CommandLine {
    pub main_command: String,
}

impl CommandLine {
    pub fn new(command: &Command) -> CommandLine {
        let mut line: Vec<String> = vec![command.bin.clone()];

        for arg in &command.args {
            line.push(arg.to_string_lossy().to_string());
        }

        CommandLine {
            main_command: join(&line),
        }
    }
}

impl Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.main_command)
    }
}

pub struct CommandInspector<'cmd> {
    command: &'cmd Command,
    line_cache: OnceLock<CommandLine>,
}

impl<'cmd> CommandInspector<'cmd> {
    pub fn new(command: &'cmd Command) -> Self {
        Self {
            command,
            line_cache: OnceLock::new(),
        }
    }

    pub fn get_command_line(&self) -> &CommandLine {
        self.line_cache
            .get_or_init(|| CommandLine::new(self.command))
    }

    pub fn should_error_nonzero(&self) -> bool {
        self.command.error_on_nonzero
    }

    pub fn format_command(&self, line: &str, working_dir: Option<&Path>) -> String {
        match working_dir {
            Some(dir) => format!(
                "{} {}",
                color::muted_light(line),
                color::muted(format!("(in {})", dir.display()))
            ),
            None => color::muted_light(line),
        }
    }

    pub fn log_command(&self) {
        let command_line = self.get_command_line();
        let working_dir = self.command.cwd.as_deref();

        if self.command.print_command {
            println!(
                "{}",
                self.format_command(&command_line.main_command, working_dir)
            );
        }

        // Avoid all this overhead if we're not logging
        if !enabled!(tracing::Level::DEBUG) {
            return;
        }

        let debug_env = env::var("DEPMAN_DEBUG_PROCESS_ENV").is_ok();

        let env_vars_field = self
            .command
            .env
            .iter()
            .filter(|(key, _)| {
                debug_env || key.to_str().is_some_and(|key| key.starts_with("DEPMAN_"))
            })
            .map(|(key, value)| {
                (
                    key.to_string_lossy().to_string(),
                    value.to_string_lossy().to_string(),
                )
            })
            .collect::<Vec<_>>();

        debug!(
            env_vars = ?env_vars_field,
            working_dir = working_dir.map(|dir| dir.display().to_string()),
            "Running command {}",
            color::shell(command_line.to_string())
        );
    }
}
