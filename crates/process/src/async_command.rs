use crate::command::Command;
use crate::command_inspector::CommandInspector;
use crate::output::output_to_error;
use crate::process_error::ProcessError;
use std::process::{Output, Stdio};
use tokio::process::Command as TokioCommand;

pub struct AsyncCommand<'cmd> {
    inner: TokioCommand,
    inspector: CommandInspector<'cmd>,
}

impl<'cmd> AsyncCommand<'cmd> {
    pub fn new(command: &'cmd Command) -> Self {
        let mut inner = TokioCommand::new(&command.bin);
        inner.args(&command.args);
        inner.envs(&command.env);
        inner.kill_on_drop(true);

        if let Some(cwd) = &command.cwd {
            inner.current_dir(cwd);
        }

        Self {
            inner,
            inspector: CommandInspector::new(command),
        }
    }

    pub async fn exec_capture_output(&mut self) -> Result<Output, ProcessError> {
        self.inspector.log_command();

        let output = self
            .inner
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|error| ProcessError::Capture {
                bin: self.get_bin_name(),
                error: Box::new(error),
            })?;

        self.handle_nonzero_status(&output, true)?;

        Ok(output)
    }

    pub async fn exec_stream_output(&mut self) -> Result<Output, ProcessError> {
        self.inspector.log_command();

        let mut child = self
            .inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|error| ProcessError::Stream {
                bin: self.get_bin_name(),
                error: Box::new(error),
            })?;

        let status = child.wait().await.map_err(|error| ProcessError::Stream {
            bin: self.get_bin_name(),
            error: Box::new(error),
        })?;

        let output = Output {
            status,
            stderr: vec![],
            stdout: vec![],
        };

        self.handle_nonzero_status(&output, false)?;

        Ok(output)
    }

    fn get_bin_name(&self) -> String {
        self.inner
            .as_std()
            .get_program()
            .to_string_lossy()
            .to_string()
    }

    fn handle_nonzero_status(
        &self,
        output: &Output,
        with_message: bool,
    ) -> Result<(), ProcessError> {
        if self.inspector.should_error_nonzero() && !output.status.success() {
            return Err(output_to_error(self.get_bin_name(), output, with_message));
        }

        Ok(())
    }
}
