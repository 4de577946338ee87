pub mod add;
pub mod install;
pub mod remove;
pub mod run;
pub mod version;
pub mod which;
pub mod workspace_root;
