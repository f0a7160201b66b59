//! stormstack-keys: JWT signing-key provisioning CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use stormstack_keys::config;
use stormstack_keys::constants;
use stormstack_keys::env;
use stormstack_keys::keygen;
use stormstack_keys::locate;
use stormstack_keys::provision;
use stormstack_keys::verify;

use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, Command, OutputFormat, ProvisionArgs};
use config::Config;
use env::Env;
use keygen::OpensslKeyGenerator;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Provision(args) => run_provision(args).await,
        Command::Locations => run_locations(),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        "stormstack-keys".bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// List the configured key locations and their artifact filenames.
fn run_locations() -> Result<()> {
    for location in provision::KEY_LOCATIONS {
        println!("  {}", location.service.bold());
        println!("         {}  {}", "path:".cyan(), location.path);
        println!(
            "         {}  {}, {}",
            "files:".cyan(),
            constants::PRIVATE_KEY_FILENAME,
            constants::PUBLIC_KEY_FILENAME,
        );
    }
    Ok(())
}

/// Run the provisioning workflow: locate the root, provision every
/// location, verify completion, and render the report.
async fn run_provision(args: ProvisionArgs) -> Result<()> {
    // Resolve the starting point for root discovery (default: cwd).
    let start_dir = std::fs::canonicalize(&args.path)
        .with_context(|| format!("--path directory not found: {}", args.path.display()))?;
    let root = locate::find_project_root(&start_dir);

    // Load config with layering
    let config =
        Config::load(Some(&root), &Env::real()).context("failed to load configuration")?;

    let quiet = args.quiet || config.output.quiet;
    let show_progress = !quiet && args.format == OutputFormat::Terminal;

    if show_progress {
        cli::print_banner();
        eprintln!("  {} {}", "project root:".dimmed(), root.display());
        eprintln!(
            "  {} {} location(s){}",
            "provisioning".dimmed(),
            provision::KEY_LOCATIONS.len(),
            if args.force { " (forced)" } else { "" },
        );
        eprintln!();
    }

    let generator = OpensslKeyGenerator::from_config(&config);
    let reports =
        provision::provision_all(&generator, &root, provision::KEY_LOCATIONS, args.force).await;

    // Re-check the filesystem independently of the reported outcomes.
    let verification = verify::verify_locations(&root, provision::KEY_LOCATIONS);

    let rendered = args.format.render(&reports, &verification);
    print!("{rendered}");

    if provision::any_tool_unavailable(&reports) && args.format == OutputFormat::Terminal {
        eprintln!(
            "\n  {} {}",
            "ℹ".dimmed(),
            "OpenSSL is required for key generation. Install it via your package \
             manager, or point keygen.openssl_path at an existing binary."
                .dimmed(),
        );
    }

    if !verification.is_complete() {
        bail!(
            "{} location(s) still missing key material after provisioning",
            verification.missing.len(),
        );
    }

    Ok(())
}
