//! Process creation seam.

use std::process::{Command, Stdio};

/// Starts a detached process
pub trait Spawner: Send + Sync {
    fn spawn(&self, program: &str, args: &[&str]) -> std::io::Result<()>;
}

/// Spawns real OS processes with null stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, program: &str, args: &[&str]) -> std::io::Result<()> {
        // The child is not waited on; the launched app outlives the cycle
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
    }
}
