#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{
    cli::{DemoRoster, FileSource, LocalSink},
    CliConfig,
};

pub use crate::core::{
    engine::BillingEngine, pipeline::BillingPipeline, pricing::calc_total, validation::validate,
};
pub use crate::domain::model::{
    BillingReport, Disposition, Eligibility, Statement, Status, Subscriber,
};
pub use crate::utils::error::{BillingError, Result};
