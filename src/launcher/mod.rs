//! Application launch collaborator
//!
//! A [`Launcher`] starts external applications and opens URLs. One variant
//! exists per platform and is picked once at startup from [`Platform::detect`]:
//!
//! - [`WindowsLauncher`]: table lookup, candidate lists tried in order
//! - [`MacLauncher`]: `open -a <Application Name>`
//! - [`LinuxLauncher`]: runs the command directly
//!
//! Process creation goes through the [`Spawner`] trait so tests can observe
//! launch attempts without starting anything.

mod linux;
mod macos;
mod platform;
mod spawner;
mod windows;

pub use linux::LinuxLauncher;
pub use macos::MacLauncher;
pub use platform::Platform;
pub use spawner::{Spawner, SystemSpawner};
pub use windows::WindowsLauncher;

use std::sync::Arc;

use crate::config::AppTable;

/// Error type for application launches
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No candidate for {0} could be started")]
    NoCandidates(String),

    #[error("Launching applications is not supported on {0}")]
    Unsupported(Platform),
}

/// Starts applications and opens URLs on one platform
pub trait Launcher: Send + Sync {
    /// Launch an application by spoken name, or the literal name when unmapped
    fn launch(&self, name: &str) -> Result<(), LaunchError>;

    /// Open a URL in the default browser
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;

    /// Platform this launcher targets
    fn platform(&self) -> Platform;
}

/// Launcher used on platforms without a launch strategy
pub struct UnsupportedLauncher {
    platform: Platform,
}

impl Launcher for UnsupportedLauncher {
    fn launch(&self, _name: &str) -> Result<(), LaunchError> {
        Err(LaunchError::Unsupported(self.platform))
    }

    fn open_url(&self, _url: &str) -> Result<(), LaunchError> {
        Err(LaunchError::Unsupported(self.platform))
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}

/// Build the launcher for `platform` with its application table
pub fn launcher_for(
    platform: Platform,
    apps: AppTable,
    spawner: Arc<dyn Spawner>,
) -> Box<dyn Launcher> {
    match platform {
        Platform::Windows => Box::new(WindowsLauncher::new(apps, spawner)),
        Platform::MacOs => Box::new(MacLauncher::new(apps, spawner)),
        Platform::Linux => Box::new(LinuxLauncher::new(apps, spawner)),
        Platform::Other => Box::new(UnsupportedLauncher { platform }),
    }
}

/// Spawn `program`, mapping the I/O error into a [`LaunchError`]
fn spawn_logged(spawner: &dyn Spawner, program: &str, args: &[&str]) -> Result<(), LaunchError> {
    tracing::debug!("[habla:launcher] spawn {} {:?}", program, args);
    spawner
        .spawn(program, args)
        .map_err(|source| LaunchError::Spawn {
            program: program.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests;
