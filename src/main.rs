use clap::Parser;
use small_seq::utils::logger;
use small_seq::{CliConfig, DemoEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-seq demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut engine = DemoEngine::new(stdout.lock());

    if let Err(e) = engine.run() {
        tracing::error!("❌ Demo failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Demo completed successfully!");
    Ok(())
}
