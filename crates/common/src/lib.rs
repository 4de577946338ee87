pub mod consts;
mod env;

pub use env::*;
pub use starbase_styles::*;
