use crate::core::pricing::calc_total;
use crate::core::validation::validate;
use crate::core::{
    BillingReport, ConfigProvider, Pipeline, ReportSink, Statement, Subscriber, SubscriberSource,
};
use crate::domain::model::Disposition;
use crate::utils::error::Result;

pub const REPORT_FILE: &str = "billing_report.json";

pub struct BillingPipeline<S: SubscriberSource, K: ReportSink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
}

impl<S: SubscriberSource, K: ReportSink, C: ConfigProvider> BillingPipeline<S, K, C> {
    pub fn new(source: S, sink: K, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }
}

impl<S: SubscriberSource, K: ReportSink, C: ConfigProvider> Pipeline
    for BillingPipeline<S, K, C>
{
    fn extract(&self) -> Result<Vec<Subscriber>> {
        let subscribers = self.source.subscribers()?;
        tracing::debug!("Loaded {} subscriber records", subscribers.len());
        Ok(subscribers)
    }

    fn assess(&self, subscribers: Vec<Subscriber>) -> Result<BillingReport> {
        let mut statements = Vec::with_capacity(subscribers.len());

        for sub in subscribers {
            let eligibility = validate(Some(&sub));
            let disposition = if eligibility.eligible {
                Disposition::Billed {
                    total: calc_total(Some(&sub))?,
                }
            } else {
                tracing::debug!("Subscriber {} rejected: {}", sub.id(), eligibility.reason);
                Disposition::Rejected {
                    reason: eligibility.reason,
                }
            };

            statements.push(Statement {
                id: sub.id().to_string(),
                status: sub.status(),
                region: sub.region().to_string(),
                disposition,
            });
        }

        Ok(BillingReport { statements })
    }

    fn load(&self, report: &BillingReport) -> Result<String> {
        let output_path = format!("{}/{}", self.config.output_path(), REPORT_FILE);
        let json = serde_json::to_string_pretty(report)?;

        tracing::debug!("Writing billing report ({} bytes)", json.len());
        self.sink.write_report(REPORT_FILE, json.as_bytes())?;

        Ok(output_path)
    }
}
