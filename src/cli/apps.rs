//! Apps command implementation

use habla::config::{AppTarget, Config};
use habla::launcher::Platform;

/// Print the application table for the detected platform
pub fn apps_command(config: &Config) {
    let platform = Platform::detect();
    let apps = config.apps.for_platform(platform);

    if apps.is_empty() {
        println!("No applications configured for {}.", platform);
        println!("Spoken names are launched as commands.");
        return;
    }

    println!("Applications ({}, {}):\n", platform, apps.len());

    for (name, target) in &apps {
        match target {
            AppTarget::Single(program) => println!("  {:<16} {}", name, program),
            AppTarget::Candidates(candidates) => {
                println!("  {:<16} (first that starts)", name);
                for candidate in candidates {
                    println!("  {:<16}   {}", "", candidate);
                }
            }
        }
    }
}
