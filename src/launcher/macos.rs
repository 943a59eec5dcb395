use std::sync::Arc;

use super::{spawn_logged, LaunchError, Launcher, Platform, Spawner};
use crate::config::AppTable;

/// Launches applications through `open -a`
pub struct MacLauncher {
    apps: AppTable,
    spawner: Arc<dyn Spawner>,
}

impl MacLauncher {
    pub fn new(apps: AppTable, spawner: Arc<dyn Spawner>) -> Self {
        Self { apps, spawner }
    }
}

impl Launcher for MacLauncher {
    fn launch(&self, name: &str) -> Result<(), LaunchError> {
        let key = name.to_lowercase();
        let app_name = match self.apps.get(&key) {
            Some(target) => target.candidates().first().copied().unwrap_or(key.as_str()),
            None => key.as_str(),
        };
        spawn_logged(self.spawner.as_ref(), "open", &["-a", app_name])
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        spawn_logged(self.spawner.as_ref(), "open", &[url])
    }

    fn platform(&self) -> Platform {
        Platform::MacOs
    }
}
