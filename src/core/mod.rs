pub mod engine;
pub mod pipeline;
pub mod pricing;
pub mod validation;

pub use crate::domain::model::{BillingReport, Eligibility, Statement, Status, Subscriber};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ReportSink, SubscriberSource};
pub use crate::utils::error::Result;
