pub mod config;
pub mod keys;
pub mod process;

pub use config::*;
pub use keys::*;
pub use process::*;
