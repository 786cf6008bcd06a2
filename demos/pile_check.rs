use pile_core::calculation::{CalculationConfig, PileCalculationContext};
use pile_core::input::InputDocument;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "demos/data/pile.toml".into());
    let config_path = args.next();

    println!("=== Capped Pile Moment Check ===\n");

    if let Err(e) = run(&input_path, config_path.as_deref()) {
        eprintln!("Calculation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(input_path: &str, config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => CalculationConfig::from_toml_file(path)?,
        None => CalculationConfig::default(),
    };
    let context = PileCalculationContext::from_config(&config)?;

    let document = InputDocument::from_file(input_path)?;
    println!("{}", document.pile.summary());

    let result = context.execute_supplied(&document)?;
    println!("{}", result.summary());

    println!("{}", "-".repeat(50));
    println!("{}", result.to_json()?);
    Ok(())
}
