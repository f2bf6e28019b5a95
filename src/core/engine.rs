use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BillingEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BillingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting billing run...");

        println!("Loading subscribers...");
        let subscribers = self.pipeline.extract()?;
        println!("Loaded {} subscribers", subscribers.len());

        println!("Assessing subscribers...");
        let report = self.pipeline.assess(subscribers)?;
        for statement in &report.statements {
            println!("  {}", statement);
        }
        println!(
            "Billed {} of {} subscribers ({} rejected)",
            report.billed_count(),
            report.statements.len(),
            report.rejected_count()
        );

        println!("Writing report...");
        let output_path = self.pipeline.load(&report)?;
        println!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
