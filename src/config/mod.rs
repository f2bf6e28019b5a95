pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{require_extension, require_non_empty_config, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "subscriber-billing")]
#[command(about = "A small rules evaluator for subscription eligibility and pricing")]
pub struct CliConfig {
    #[arg(
        long,
        help = "JSON subscriber roster; omit to run the built-in demo roster"
    )]
    pub subscribers: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        require_non_empty_config("output_path", &self.output_path)?;

        if let Some(path) = &self.subscribers {
            require_extension("subscribers", path, "json")?;
        }

        Ok(())
    }
}
