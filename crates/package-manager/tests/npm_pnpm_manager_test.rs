use depman_package_manager::*;
use starbase_sandbox::create_empty_sandbox;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

mod npm {
    use super::*;

    fn create_npm() -> NpmPackageManager {
        NpmPackageManager::new(PackageManagerOptions::default())
    }

    #[tokio::test]
    async fn run_separates_args() {
        let npm = create_npm();

        assert_eq!(
            npm.run_command("build", &[]).await.get_args_list(),
            names(&["run", "build"])
        );
        assert_eq!(
            npm.run_command("build", &names(&["--watch"]))
                .await
                .get_args_list(),
            names(&["run", "build", "--", "--watch"])
        );
    }

    #[tokio::test]
    async fn install_and_add() {
        let npm = create_npm();

        assert_eq!(
            npm.install_command(&names(&["--no-audit"]))
                .await
                .get_args_list(),
            names(&["install", "--no-audit"])
        );
        assert_eq!(
            npm.add_command(&names(&["react"])).await.get_args_list(),
            names(&["install", "--save", "react"])
        );
        assert_eq!(
            npm.add_dev_command(&names(&["jest"])).await.get_args_list(),
            names(&["install", "--save-dev", "jest"])
        );
        assert_eq!(
            npm.add_global_command(&names(&["typescript"]))
                .await
                .get_args_list(),
            names(&["install", "--global", "typescript"])
        );
    }

    #[tokio::test]
    async fn add_installs_when_empty() {
        let npm = create_npm();

        assert_eq!(
            npm.add_dev_command(&[]).await.get_args_list(),
            names(&["install"])
        );
    }

    #[tokio::test]
    async fn remove_variants() {
        let npm = create_npm();

        assert_eq!(
            npm.remove_command(&names(&["react"])).await.get_args_list(),
            names(&["uninstall", "react"])
        );
        assert_eq!(
            npm.remove_dev_command(&names(&["jest"])).await.get_args_list(),
            names(&["uninstall", "--save-dev", "jest"])
        );
        assert_eq!(
            npm.remove_global_command(&names(&["typescript"]))
                .await
                .get_args_list(),
            names(&["uninstall", "--global", "typescript"])
        );
    }

    #[test]
    fn finds_workspace_root_from_package_json() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("package.json", r#"{ "workspaces": ["packages/*"] }"#);
        sandbox.create_file("packages/app/package.json", "{}");

        let npm = NpmPackageManager::new(
            PackageManagerOptions::default().with_cwd(sandbox.path().join("packages/app")),
        );

        let root = npm.workspace_root().unwrap().unwrap();

        assert_eq!(root.get_options().cwd.as_deref(), Some(sandbox.path()));
    }
}

mod pnpm {
    use super::*;

    fn create_pnpm() -> PnpmPackageManager {
        PnpmPackageManager::new(PackageManagerOptions::default())
    }

    #[tokio::test]
    async fn run_passes_args_through() {
        let pnpm = create_pnpm();

        assert_eq!(
            pnpm.run_command("build", &names(&["--watch"]))
                .await
                .get_args_list(),
            names(&["run", "build", "--watch"])
        );
    }

    #[tokio::test]
    async fn install_keeps_explicit_lockfile_flag() {
        let pnpm = create_pnpm();

        assert_eq!(
            pnpm.install_command(&names(&["--frozen-lockfile"]))
                .await
                .get_args_list(),
            names(&["install", "--frozen-lockfile"])
        );
    }

    #[tokio::test]
    async fn add_variants() {
        let pnpm = create_pnpm();

        assert_eq!(
            pnpm.add_command(&names(&["react"])).await.get_args_list(),
            names(&["add", "react"])
        );
        assert_eq!(
            pnpm.add_dev_command(&names(&["jest"])).await.get_args_list(),
            names(&["add", "--save-dev", "jest"])
        );
        assert_eq!(
            pnpm.add_global_command(&names(&["typescript"]))
                .await
                .get_args_list(),
            names(&["add", "--global", "typescript"])
        );
    }

    #[tokio::test]
    async fn add_installs_when_empty() {
        let pnpm = create_pnpm();

        assert_eq!(
            pnpm.add_command(&[]).await.get_args_list(),
            pnpm.install_command(&[]).await.get_args_list()
        );
    }

    #[tokio::test]
    async fn remove_variants() {
        let pnpm = create_pnpm();

        assert_eq!(
            pnpm.remove_command(&names(&["react"])).await.get_args_list(),
            names(&["remove", "react"])
        );
        assert_eq!(
            pnpm.remove_dev_command(&names(&["jest"])).await.get_args_list(),
            names(&["remove", "--save-dev", "jest"])
        );
        assert_eq!(
            pnpm.remove_global_command(&names(&["typescript"]))
                .await
                .get_args_list(),
            names(&["remove", "--global", "typescript"])
        );
    }

    #[test]
    fn finds_workspace_root_from_pnpm_workspace() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("pnpm-workspace.yaml", "packages:\n  - 'apps/*'\n");
        sandbox.create_file("apps/web/package.json", "{}");

        let pnpm = PnpmPackageManager::new(
            PackageManagerOptions::default().with_cwd(sandbox.path().join("apps/web")),
        );

        let root = pnpm.workspace_root().unwrap().unwrap();

        assert_eq!(root.get_options().cwd.as_deref(), Some(sandbox.path()));
    }

    #[test]
    fn ignores_yarn_lockfile() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("yarn.lock", "");
        sandbox.create_file("apps/web/package.json", "{}");

        let pnpm = PnpmPackageManager::new(
            PackageManagerOptions::default().with_cwd(sandbox.path().join("apps/web")),
        );

        assert!(pnpm.workspace_root().unwrap().is_none());
    }
}
