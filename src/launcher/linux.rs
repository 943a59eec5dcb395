use std::sync::Arc;

use super::{spawn_logged, LaunchError, Launcher, Platform, Spawner};
use crate::config::AppTable;

/// Runs commands directly, consulting the (usually empty) Linux table first
pub struct LinuxLauncher {
    apps: AppTable,
    spawner: Arc<dyn Spawner>,
}

impl LinuxLauncher {
    pub fn new(apps: AppTable, spawner: Arc<dyn Spawner>) -> Self {
        Self { apps, spawner }
    }
}

impl Launcher for LinuxLauncher {
    fn launch(&self, name: &str) -> Result<(), LaunchError> {
        let Some(target) = self.apps.get(&name.to_lowercase()) else {
            // Command names are case-sensitive here, so run what was heard
            return spawn_logged(self.spawner.as_ref(), name, &[]);
        };

        for candidate in target.candidates() {
            if spawn_logged(self.spawner.as_ref(), candidate, &[]).is_ok() {
                return Ok(());
            }
        }
        Err(LaunchError::NoCandidates(name.to_string()))
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        spawn_logged(self.spawner.as_ref(), "xdg-open", &[url])
    }

    fn platform(&self) -> Platform {
        Platform::Linux
    }
}
