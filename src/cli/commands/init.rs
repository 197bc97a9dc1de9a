//! `stock init` command - Create a StockMaster project

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{CommandError, Config, Ledger, Project};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: --root, else the current directory)
    #[arg()]
    pub path: Option<PathBuf>,

    /// Load the demo products after creating the project
    #[arg(long)]
    pub seed: bool,

    /// Rewrite the config of an existing project; stock data is kept
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let root = match args.path.or_else(|| global.root.clone()) {
        Some(path) => path,
        None => std::env::current_dir().into_diagnostic()?,
    };

    let project = Project::init_with(&root, args.force).map_err(|e| miette::miette!("{}", e))?;
    let config = Config::load(Some(&project)).map_err(|e| miette::miette!("{}", e))?;
    let store = project.store().map_err(|e| miette::miette!("{}", e))?;

    let mut ledger =
        Ledger::new(store).with_low_stock_threshold(config.inventory.low_stock_threshold);
    ledger.init().map_err(CommandError::from)?;

    println!(
        "{} Initialized StockMaster project at {}",
        style("✓").green(),
        style(project.root().display()).cyan()
    );

    if args.seed {
        if ledger.seed_demo().map_err(CommandError::from)? {
            println!("{} Loaded demo inventory", style("✓").green());
        } else {
            println!(
                "{} Project already holds products; demo data skipped",
                style("!").yellow()
            );
        }
    }

    Ok(())
}
