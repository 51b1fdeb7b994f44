use log::{error, info};
use std::path::Path;
use std::process;
use suite_evolve::report::write_artifact;
use suite_evolve::{optimize, Catalog, OptimizerConfig, Result};

const CONFIG_FILE: &str = "suite-evolve.toml";

fn load_config() -> Result<OptimizerConfig> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        info!("Loading configuration from '{CONFIG_FILE}'...");
        OptimizerConfig::load(path)
    } else {
        info!("No '{CONFIG_FILE}' found, using defaults.");
        Ok(OptimizerConfig::default())
    }
}

fn run() -> Result<()> {
    let config = load_config()?;
    config.validate()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        "Catalog ready: {} test cases.",
        catalog.test_cases().len()
    );

    let result = optimize(&catalog, &config)?;
    write_artifact(&config.output.path, &result.artifact)?;

    info!(
        "Run finished: {} generations, seed {}, fitness {:.6}.",
        result.generations, result.seed, result.fitness
    );
    println!(
        "Test cases written to {} file.",
        config.output.path.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        process::exit(1);
    }
}
