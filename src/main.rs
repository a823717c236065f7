use clap::{Parser, Subcommand};
use rulesync::{
    list_rule_sets, load_config, record_project_in_config, remove_project_from_config,
    resolve_rules_root, sync_project, SyncReport,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "rulesync")]
#[command(about = "A CLI tool for syncing AI-agent rule sets into projects")]
struct Cli {
    /// Directory containing the <tech>_rules/ rule sets (defaults to the executable's directory)
    #[arg(long, global = true, value_name = "DIR")]
    rules_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync a technology's rules and skills into a target project
    Sync {
        /// Technology name selecting the <tech>_rules/ directory
        tech: String,
        /// Target project root
        #[arg(default_value = ".")]
        target: PathBuf,
    },
    /// List the rule sets available under the rules directory
    List,
    /// Re-run sync for every recorded project
    Resync,
    /// Remove a project from the synced-project registry
    Forget {
        /// Project root to forget
        #[arg(default_value = ".")]
        target: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let rules_root = match resolve_rules_root(cli.rules_dir.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error resolving rules directory: {}", e);
            process::exit(1);
        }
    };

    match &cli.command {
        Commands::Sync { tech, target } => {
            println!("Syncing {} rules to {}", tech, target.display());
            match sync_project(&rules_root, tech, target) {
                Ok(report) => {
                    print_report(&report);
                    record_synced_project(target, tech);
                    println!("Done.");
                }
                Err(e) => {
                    eprintln!("Error syncing {} rules: {}", tech, e);
                    process::exit(1);
                }
            }
        }
        Commands::List => match list_rule_sets(&rules_root) {
            Ok(techs) => {
                if techs.is_empty() {
                    println!("No rule sets found in {}", rules_root.display());
                } else {
                    println!("Available rule sets in {}:", rules_root.display());
                    for tech in techs {
                        println!("  {}", tech);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error listing rule sets: {}", e);
                process::exit(1);
            }
        },
        Commands::Resync => {
            let config = match load_config() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading configuration: {}", e);
                    process::exit(1);
                }
            };

            if config.project_count() == 0 {
                println!("No recorded projects to resync");
                return;
            }

            for (project, tech) in config.projects() {
                if !project.is_dir() {
                    eprintln!(
                        "Warning: skipping recorded project {} (directory no longer exists)",
                        project.display()
                    );
                    continue;
                }

                println!("Syncing {} rules to {}", tech, project.display());
                match sync_project(&rules_root, tech, project) {
                    Ok(report) => print_report(&report),
                    Err(e) => {
                        eprintln!("Error syncing {} rules to {}: {}", tech, project.display(), e);
                        process::exit(1);
                    }
                }
            }
            println!("Done.");
        }
        Commands::Forget { target } => match remove_project_from_config(target) {
            Ok(removed) => {
                if removed {
                    println!("Successfully removed '{}' from recorded projects", target.display());
                } else {
                    println!("Project '{}' is not in the recorded projects list", target.display());
                }
            }
            Err(e) => {
                eprintln!("Error updating configuration: {}", e);
                process::exit(1);
            }
        },
    }
}

fn print_report(report: &SyncReport) {
    for file in &report.files_written {
        println!("Wrote: {}", file.display());
    }
    println!("Synced {} skill(s)", report.skills.len());
}

/// Records a synced project in the configuration. Failures here are warnings;
/// the sync itself already succeeded.
fn record_synced_project(target: &Path, tech: &str) {
    if let Err(e) = record_project_in_config(target, tech) {
        eprintln!("Warning: Failed to record project in config: {}", e);
    }
}
