//! CLI command implementations

pub mod apps;
pub mod history;
pub mod init;
pub mod listen;
pub mod run;
