use std::sync::Arc;

use super::{spawn_logged, LaunchError, Launcher, Platform, Spawner};
use crate::config::AppTable;

/// Launches executables from the Windows application table
pub struct WindowsLauncher {
    apps: AppTable,
    spawner: Arc<dyn Spawner>,
}

impl WindowsLauncher {
    pub fn new(apps: AppTable, spawner: Arc<dyn Spawner>) -> Self {
        Self { apps, spawner }
    }
}

impl Launcher for WindowsLauncher {
    fn launch(&self, name: &str) -> Result<(), LaunchError> {
        let key = name.to_lowercase();

        let Some(target) = self.apps.get(&key) else {
            // Unmapped names are run as given
            return spawn_logged(self.spawner.as_ref(), &key, &[]);
        };

        let candidates = target.candidates();
        if let [single] = candidates.as_slice() {
            return spawn_logged(self.spawner.as_ref(), single, &[]);
        }

        for candidate in candidates {
            match spawn_logged(self.spawner.as_ref(), candidate, &[]) {
                Ok(()) => return Ok(()),
                Err(e) => tracing::debug!("[habla:launcher] candidate failed: {}", e),
            }
        }
        Err(LaunchError::NoCandidates(key))
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        spawn_logged(self.spawner.as_ref(), "cmd", &["/C", "start", "", url])
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}
