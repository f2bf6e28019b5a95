use clap::Parser;
use subscriber_billing::utils::{logger, validation::Validate};
use subscriber_billing::{
    BillingEngine, BillingPipeline, CliConfig, DemoRoster, FileSource, LocalSink,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting subscriber-billing CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sink = LocalSink::new(config.output_path.clone());

    let result = match config.subscribers.clone() {
        Some(path) => {
            let pipeline = BillingPipeline::new(FileSource::new(path), sink, config);
            BillingEngine::new(pipeline).run()
        }
        None => {
            tracing::warn!("No subscriber file configured, using built-in demo roster");
            let pipeline = BillingPipeline::new(DemoRoster, sink, config);
            BillingEngine::new(pipeline).run()
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Billing run completed successfully!");
            println!("✅ Billing run completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Billing run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
