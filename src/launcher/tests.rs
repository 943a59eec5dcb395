//! Unit tests for the platform launchers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::*;
use crate::config::{AppTables, AppTarget};

/// Records every spawn and fails for programs listed in `missing`
#[derive(Default)]
struct FakeSpawner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    missing: HashSet<String>,
}

impl FakeSpawner {
    fn missing(programs: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            missing: programs.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn programs(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    fn last_args(&self) -> Vec<String> {
        self.calls.lock().unwrap().last().map(|(_, a)| a.clone()).unwrap_or_default()
    }
}

impl Spawner for FakeSpawner {
    fn spawn(&self, program: &str, args: &[&str]) -> std::io::Result<()> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        if self.missing.contains(program) {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "not found"));
        }
        Ok(())
    }
}

fn calc_table() -> AppTable {
    let mut apps = AppTable::new();
    apps.insert("calc".to_string(), AppTarget::from("C:\\Windows\\calc.exe"));
    apps
}

#[test]
fn test_platform_from_os() {
    assert_eq!(Platform::from_os("windows"), Platform::Windows);
    assert_eq!(Platform::from_os("macos"), Platform::MacOs);
    assert_eq!(Platform::from_os("linux"), Platform::Linux);
    assert_eq!(Platform::from_os("freebsd"), Platform::Other);
}

#[test]
fn test_windows_mapped_name_launches_table_path() {
    let spawner = Arc::new(FakeSpawner::default());
    let launcher = WindowsLauncher::new(calc_table(), spawner.clone());

    launcher.launch("Calc").unwrap();
    assert_eq!(spawner.programs(), vec!["C:\\Windows\\calc.exe"]);
}

#[test]
fn test_windows_unmapped_name_launches_literal() {
    let spawner = Arc::new(FakeSpawner::missing(&["paint"]));
    let launcher = WindowsLauncher::new(calc_table(), spawner.clone());

    let err = launcher.launch("paint").unwrap_err();
    assert!(matches!(err, LaunchError::Spawn { .. }));
    assert_eq!(spawner.programs(), vec!["paint"]);
}

#[test]
fn test_windows_candidates_tried_in_order() {
    let tables = AppTables::default();
    let spawner = Arc::new(FakeSpawner::missing(&[
        r"C:\Program Files (x86)\Steam\steam.exe",
    ]));
    let launcher = WindowsLauncher::new(tables.windows, spawner.clone());

    launcher.launch("steam").unwrap();
    assert_eq!(
        spawner.programs(),
        vec![
            r"C:\Program Files (x86)\Steam\steam.exe",
            r"C:\Program Files\Steam\steam.exe",
        ]
    );
}

#[test]
fn test_windows_all_candidates_failing() {
    let spawner = Arc::new(FakeSpawner::missing(&["a.exe", "b.exe"]));
    let mut apps = AppTable::new();
    apps.insert(
        "game".to_string(),
        AppTarget::Candidates(vec!["a.exe".to_string(), "b.exe".to_string()]),
    );
    let launcher = WindowsLauncher::new(apps, spawner.clone());

    let err = launcher.launch("game").unwrap_err();
    assert!(matches!(err, LaunchError::NoCandidates(ref name) if name == "game"));
    assert_eq!(spawner.programs().len(), 2);
}

#[test]
fn test_windows_open_url_uses_start() {
    let spawner = Arc::new(FakeSpawner::default());
    let launcher = WindowsLauncher::new(AppTable::new(), spawner.clone());

    launcher.open_url("https://example.com").unwrap();
    assert_eq!(spawner.programs(), vec!["cmd"]);
    assert_eq!(spawner.last_args(), vec!["/C", "start", "", "https://example.com"]);
}

#[test]
fn test_macos_uses_open_dash_a() {
    let tables = AppTables::default();
    let spawner = Arc::new(FakeSpawner::default());
    let launcher = MacLauncher::new(tables.macos, spawner.clone());

    launcher.launch("calculadora").unwrap();
    assert_eq!(spawner.programs(), vec!["open"]);
    assert_eq!(spawner.last_args(), vec!["-a", "Calculator"]);

    launcher.launch("Spotify").unwrap();
    assert_eq!(spawner.last_args(), vec!["-a", "spotify"]);
}

#[test]
fn test_linux_runs_name_as_given() {
    let spawner = Arc::new(FakeSpawner::default());
    let launcher = LinuxLauncher::new(AppTable::new(), spawner.clone());

    launcher.launch("gnome-calculator").unwrap();
    launcher.open_url("https://example.com").unwrap();
    assert_eq!(spawner.programs(), vec!["gnome-calculator", "xdg-open"]);
}

#[test]
fn test_linux_failure_is_reported_not_raised() {
    let spawner = Arc::new(FakeSpawner::missing(&["nonexistent-app"]));
    let launcher = LinuxLauncher::new(AppTable::new(), spawner);

    assert!(launcher.launch("nonexistent-app").is_err());
}

#[test]
fn test_launcher_for_selects_variant() {
    let spawner: Arc<dyn Spawner> = Arc::new(FakeSpawner::default());
    for platform in [Platform::Windows, Platform::MacOs, Platform::Linux, Platform::Other] {
        let launcher = launcher_for(platform, AppTable::new(), spawner.clone());
        assert_eq!(launcher.platform(), platform);
    }

    let other = launcher_for(Platform::Other, AppTable::new(), spawner);
    assert!(matches!(other.launch("x"), Err(LaunchError::Unsupported(Platform::Other))));
}
