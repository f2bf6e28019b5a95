use crate::domain::model::{BillingReport, Subscriber};
use crate::utils::error::Result;

pub trait SubscriberSource: Send + Sync {
    fn subscribers(&self) -> Result<Vec<Subscriber>>;
}

pub trait ReportSink: Send + Sync {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<Subscriber>>;
    fn assess(&self, subscribers: Vec<Subscriber>) -> Result<BillingReport>;
    fn load(&self, report: &BillingReport) -> Result<String>;
}
