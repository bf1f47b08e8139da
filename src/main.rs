use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jiro_order_rs::catalog::{Catalog, default_catalog, load_catalog, save_catalog};
use jiro_order_rs::cli::{Cli, Command, SolveArgs};
use jiro_order_rs::error::Result;
use jiro_order_rs::interface::{
    display_catalog, display_solve_result, parse_usual_order, prompt_usual_order, prompt_yes_no,
    write_plans_csv, write_plans_json,
};
use jiro_order_rs::models::SolveResult;
use jiro_order_rs::planner::{ModelBuilder, SamplerConfig, Solver};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let loaded;
    let catalog: &Catalog = match &cli.catalog {
        Some(path) => {
            loaded = load_catalog(path)?;
            info!(path = %path.display(), items = loaded.len(), "loaded catalog");
            &loaded
        }
        None => default_catalog(),
    };

    match cli.command.unwrap_or_default() {
        Command::Solve(args) => cmd_solve(catalog, &args),
        Command::Catalog => {
            display_catalog(catalog);
            Ok(())
        }
        Command::ExportCatalog { path } => cmd_export_catalog(catalog, &path),
    }
}

/// Optimize an order and print the ranked plans.
fn cmd_solve(catalog: &Catalog, args: &SolveArgs) -> Result<()> {
    let limits = args.limits();
    let sliders = args.sliders();

    let usual = if let Some(text) = &args.usual {
        Some(parse_usual_order(catalog, text)?)
    } else if args.ask_usual {
        Some(prompt_usual_order(catalog)?)
    } else {
        None
    };

    let config = SamplerConfig {
        num_reads: args.reads,
        num_sweeps: args.sweeps,
        seed: args.seed,
        ..SamplerConfig::default()
    };
    let mut builder = ModelBuilder::new();
    if let Some(strength) = args.penalty {
        builder = builder.with_penalty_strength(strength);
    }
    let solver = Solver::annealing(catalog, config).with_builder(builder);

    println!(
        "Searching {} restarts x {} sweeps over {} items...",
        args.reads,
        args.sweeps,
        catalog.len()
    );
    let result = solver.solve(&limits, &sliders, usual.as_deref())?;
    display_solve_result(&result, &limits);

    if let SolveResult::Ok {
        plans,
        approximate,
        usual,
    } = &result
    {
        if let Some(path) = &args.csv {
            write_plans_csv(plans, path)?;
            println!("Plans written to {}", path.display());
        }
        if let Some(path) = &args.json {
            write_plans_json(plans, *approximate, usual.as_ref(), path)?;
            println!("Plans written to {}", path.display());
        }
    }

    Ok(())
}

/// Write the active catalog to a JSON file.
fn cmd_export_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if path.exists() {
        let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", path.display()), false)?;
        if !overwrite {
            println!("Export cancelled.");
            return Ok(());
        }
    }

    save_catalog(path, catalog)?;
    println!("Catalog with {} items written to {}", catalog.len(), path.display());
    Ok(())
}
