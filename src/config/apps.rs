//! Per-platform application tables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::launcher::Platform;

/// Executable for an application name: one command or candidates tried in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppTarget {
    Single(String),
    Candidates(Vec<String>),
}

impl AppTarget {
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            AppTarget::Single(path) => vec![path.as_str()],
            AppTarget::Candidates(paths) => paths.iter().map(|p| p.as_str()).collect(),
        }
    }
}

impl From<&str> for AppTarget {
    fn from(path: &str) -> Self {
        AppTarget::Single(path.to_string())
    }
}

/// Spoken application name -> executable
pub type AppTable = BTreeMap<String, AppTarget>;

/// Application tables for every supported platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppTables {
    #[serde(default = "default_windows_apps")]
    pub windows: AppTable,
    #[serde(default = "default_macos_apps")]
    pub macos: AppTable,
    #[serde(default = "default_linux_apps")]
    pub linux: AppTable,
}

impl Default for AppTables {
    fn default() -> Self {
        Self {
            windows: default_windows_apps(),
            macos: default_macos_apps(),
            linux: default_linux_apps(),
        }
    }
}

impl AppTables {
    /// Table for the given platform (empty for unsupported platforms)
    pub fn for_platform(&self, platform: Platform) -> AppTable {
        match platform {
            Platform::Windows => self.windows.clone(),
            Platform::MacOs => self.macos.clone(),
            Platform::Linux => self.linux.clone(),
            Platform::Other => AppTable::new(),
        }
    }
}

fn table(entries: &[(&str, &str)]) -> AppTable {
    entries
        .iter()
        .map(|(name, path)| (name.to_string(), AppTarget::from(*path)))
        .collect()
}

fn default_windows_apps() -> AppTable {
    let mut apps = table(&[
        ("brave", "brave.exe"),
        ("navegador", "brave.exe"),
        ("chrome", "chrome.exe"),
        ("firefox", "firefox.exe"),
        ("word", "winword.exe"),
        ("excel", "excel.exe"),
        ("bloc de notas", "notepad.exe"),
        ("notepad", "notepad.exe"),
        ("calculadora", "calc.exe"),
        ("explorador de archivos", "explorer.exe"),
    ]);
    apps.insert(
        "steam".to_string(),
        AppTarget::Candidates(vec![
            r"C:\Program Files (x86)\Steam\steam.exe".to_string(),
            r"C:\Program Files\Steam\steam.exe".to_string(),
            "steam.exe".to_string(),
        ]),
    );
    apps
}

fn default_macos_apps() -> AppTable {
    table(&[
        ("brave", "Brave Browser"),
        ("navegador", "Brave Browser"),
        ("chrome", "Google Chrome"),
        ("safari", "Safari"),
        ("firefox", "Firefox"),
        ("word", "Microsoft Word"),
        ("excel", "Microsoft Excel"),
        ("notas", "Notes"),
        ("calculadora", "Calculator"),
        ("finder", "Finder"),
    ])
}

fn default_linux_apps() -> AppTable {
    // Linux launches the spoken name as a command unless mapped here
    AppTable::new()
}
