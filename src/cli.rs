use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{PreferenceSliders, ResourceLimits};
use crate::planner::{DEFAULT_NUM_READS, DEFAULT_NUM_SWEEPS};

/// JiroOrder: finds a ramen order that fits your budget, calories, and salt.
#[derive(Parser, Debug)]
#[command(name = "jiro_order")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON catalog to use instead of the built-in menu.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for the best orders under the given limits.
    Solve(SolveArgs),

    /// List the active catalog.
    Catalog,

    /// Write the active catalog as JSON.
    ExportCatalog {
        /// Destination file.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve(SolveArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Budget in yen.
    #[arg(long, default_value_t = 1000)]
    pub budget: u32,

    /// Calorie limit in kcal.
    #[arg(long, default_value_t = 1800)]
    pub calories: u32,

    /// Salt limit in grams.
    #[arg(long, default_value_t = 8.0)]
    pub sodium: f64,

    /// Noodle preference, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.5)]
    pub noodle: f64,

    /// Pork preference, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.5)]
    pub pork: f64,

    /// Vegetable preference, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.5)]
    pub vegetable: f64,

    /// Fat and garlic preference, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.5)]
    pub punch: f64,

    /// Topping preference, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.5)]
    pub topping: f64,

    /// Your usual order as comma-separated item names.
    #[arg(long, conflicts_with = "ask_usual")]
    pub usual: Option<String>,

    /// Pick your usual order interactively.
    #[arg(long)]
    pub ask_usual: bool,

    /// Number of annealing restarts.
    #[arg(long, default_value_t = DEFAULT_NUM_READS)]
    pub reads: usize,

    /// Sweeps per restart.
    #[arg(long, default_value_t = DEFAULT_NUM_SWEEPS)]
    pub sweeps: usize,

    /// Seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed penalty strength instead of the adaptive one.
    #[arg(long)]
    pub penalty: Option<f64>,

    /// Write the ranked plans to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the ranked plans to a JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl SolveArgs {
    pub fn limits(&self) -> ResourceLimits {
        ResourceLimits::new(self.budget, self.calories, self.sodium)
    }

    pub fn sliders(&self) -> PreferenceSliders {
        PreferenceSliders {
            noodle: self.noodle,
            pork: self.pork,
            vegetable: self.vegetable,
            punch: self.punch,
            topping: self.topping,
        }
    }
}

impl Default for SolveArgs {
    fn default() -> Self {
        let limits = ResourceLimits::default();
        let sliders = PreferenceSliders::default();
        Self {
            budget: limits.budget,
            calories: limits.calories,
            sodium: limits.sodium,
            noodle: sliders.noodle,
            pork: sliders.pork,
            vegetable: sliders.vegetable,
            punch: sliders.punch,
            topping: sliders.topping,
            usual: None,
            ask_usual: false,
            reads: DEFAULT_NUM_READS,
            sweeps: DEFAULT_NUM_SWEEPS,
            seed: None,
            penalty: None,
            csv: None,
            json: None,
        }
    }
}
