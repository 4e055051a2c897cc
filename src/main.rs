use anyhow::Result;
use clap::Parser;

use relver::cli::{run_list_workflow, ListWorkflowArgs};
use relver::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "relver",
    about = "List release versions newest first, including git describe versions"
)]
struct Args {
    #[arg(help = "Versions to sort instead of scanning the releases directory")]
    versions: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Release output directory containing 'releases'")]
    output_dir: Option<String>,

    #[arg(short, long, help = "Print only the newest version")]
    latest: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.version {
        println!("relver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let scanning = args.versions.is_empty();
    let workflow_args = ListWorkflowArgs {
        output_dir: args.output_dir,
        versions: args.versions,
        latest_only: args.latest,
    };

    let listing = match run_list_workflow(workflow_args, &config) {
        Ok(listing) => listing,
        Err(e) => {
            ui::display_error(&format!("Failed to list release versions: {}", e));
            std::process::exit(1);
        }
    };

    for warning in &listing.warnings {
        ui::display_scan_warning(warning);
    }

    if scanning {
        if listing.versions.is_empty() {
            ui::display_status("No release versions found");
        } else {
            ui::display_success(&format!("Newest release: {}", listing.versions[0]));
        }
    }

    ui::display_versions(&listing.versions);
    Ok(())
}
