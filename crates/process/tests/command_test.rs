use depman_process::{Command, CommandLine, ProcessError, output_to_trimmed_string};

mod command {
    use super::*;

    #[test]
    fn collects_args_in_order() {
        let mut command = Command::new("yarnpkg");
        command.arg("add").args(["--dev", "typescript"]);

        assert_eq!(command.get_bin_name(), "yarnpkg");
        assert_eq!(command.get_args_list(), vec!["add", "--dev", "typescript"]);
    }

    #[test]
    fn skips_existing_args() {
        let mut command = Command::new("yarnpkg");
        command.args(["install", "--offline"]);
        command.arg_if_missing("--offline");
        command.arg_if_missing("--frozen-lockfile");

        assert_eq!(
            command.get_args_list(),
            vec!["install", "--offline", "--frozen-lockfile"]
        );
    }

    #[test]
    fn tracks_cwd_and_env() {
        let mut command = Command::new("npm");
        command.cwd("/tmp/project").env("ADBLOCK", "1");

        assert_eq!(
            command.get_cwd().map(|dir| dir.to_string_lossy().to_string()),
            Some("/tmp/project".to_owned())
        );
        assert_eq!(
            command.get_env("ADBLOCK").map(|value| value.to_os_string()),
            Some("1".into())
        );
        assert!(command.get_env("MISSING").is_none());
    }

    #[test]
    fn renders_command_line_with_quoting() {
        let mut command = Command::new("yarnpkg");
        command.args(["run", "build", "--message", "hello world"]);

        let line = CommandLine::new(&command);

        assert_eq!(line.to_string(), "yarnpkg run build --message 'hello world'");
    }
}

#[cfg(unix)]
mod exec {
    use super::*;

    #[tokio::test]
    async fn captures_stdout() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo hello"]);

        let output = command.create_async().exec_capture_output().await.unwrap();

        assert!(output.status.success());
        assert_eq!(output_to_trimmed_string(&output.stdout), "hello");
    }

    #[tokio::test]
    async fn runs_in_cwd() {
        let dir = std::env::temp_dir();
        let mut command = Command::new("sh");
        command.args(["-c", "pwd"]).cwd(&dir);

        let output = command.create_async().exec_capture_output().await.unwrap();
        let pwd = output_to_trimmed_string(&output.stdout);

        assert_eq!(
            std::fs::canonicalize(pwd).unwrap(),
            std::fs::canonicalize(dir).unwrap()
        );
    }

    #[tokio::test]
    async fn errors_on_nonzero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 3"]);

        let error = command
            .create_async()
            .exec_capture_output()
            .await
            .unwrap_err();

        assert!(matches!(error, ProcessError::ExitNonZero { code: 3, .. }));
        assert_eq!(error.get_exit_code(), Some(3));
    }

    #[tokio::test]
    async fn includes_stderr_in_nonzero_error() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo broken >&2; exit 1"]);

        let error = command
            .create_async()
            .exec_capture_output()
            .await
            .unwrap_err();

        match error {
            ProcessError::ExitNonZeroWithOutput { code, output, .. } => {
                assert_eq!(code, 1);
                assert_eq!(output, "broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn can_ignore_nonzero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 2"]).set_error_on_nonzero(false);

        let output = command.create_async().exec_capture_output().await.unwrap();

        assert_eq!(output.status.code(), Some(2));
    }

    #[tokio::test]
    async fn errors_when_binary_missing() {
        let command = Command::new("depman-binary-that-does-not-exist");

        let error = command
            .create_async()
            .exec_capture_output()
            .await
            .unwrap_err();

        assert!(matches!(error, ProcessError::Capture { .. }));
        assert!(error.get_exit_code().is_none());
    }

    #[tokio::test]
    async fn errors_when_streaming_missing_binary() {
        let command = Command::new("depman-binary-that-does-not-exist");

        let error = command
            .create_async()
            .exec_stream_output()
            .await
            .unwrap_err();

        assert!(matches!(error, ProcessError::Stream { .. }));
    }

    #[tokio::test]
    async fn streams_without_capturing() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 0"]);

        let output = command.create_async().exec_stream_output().await.unwrap();

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }
}
