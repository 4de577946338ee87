mod async_command;
mod command;
mod command_inspector;
mod output;
mod process_error;

pub use async_command::*;
pub use command::*;
pub use command_inspector::*;
pub use output::*;
pub use process_error::*;
