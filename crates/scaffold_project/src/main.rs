// crates/scaffold_project/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::env;

use scaffold_project::run_setup;

fn main() -> Result<()> {
    let matches = Command::new("scaffold_project")
        .version("0.1.0")
        .about("Creates the Wandr AI project tree from its markdown implementation documents")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // An interrupt halts immediately; partially written files are left as-is.
    ctrlc::set_handler(|| {
        eprintln!();
        eprintln!("Setup cancelled by user");
        std::process::exit(1);
    })
    .context("Failed to install interrupt handler")?;

    println!("Wandr AI - Automated Setup");
    println!("--------------------------------------------------");

    let root = env::current_dir().context("Failed to get current directory")?;
    let report = run_setup(&root)?;

    println!("--------------------------------------------------");
    println!(
        "Setup complete: {} file(s) created, {} block(s) without a match",
        report.written(),
        report.skipped()
    );
    print_next_steps();

    Ok(())
}

/// Manual follow-up commands. Printed only; nothing here is executed.
fn print_next_steps() {
    println!("--------------------------------------------------");
    println!("Next steps:");
    println!();
    println!("1. Install dependencies:");
    println!("   npm install");
    println!("   cd mcp-servers/reddit && npm install && cd ../..");
    println!("   cd mcp-servers/google-maps && npm install && cd ../..");
    println!();
    println!("2. Create .env.local:");
    println!("   cp .env.local.example .env.local");
    println!("   # Edit with your API keys");
    println!();
    println!("3. Setup Supabase:");
    println!("   - Create project at https://supabase.com");
    println!("   - Run SQL from supabase/migrations/001_initial_schema.sql");
    println!("   - Copy credentials to .env.local");
    println!();
    println!("4. Run the project:");
    println!("   npm run dev");
    println!();
    println!("5. Open: http://localhost:3000");
}
