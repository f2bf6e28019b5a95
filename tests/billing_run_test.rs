use anyhow::Result;
use subscriber_billing::{
    BillingEngine, BillingPipeline, BillingReport, CliConfig, DemoRoster, Disposition, LocalSink,
    Statement,
};
use tempfile::TempDir;

fn demo_engine(
    output_path: String,
) -> BillingEngine<BillingPipeline<DemoRoster, LocalSink, CliConfig>> {
    let config = CliConfig {
        subscribers: None,
        output_path: output_path.clone(),
        verbose: false,
    };
    let sink = LocalSink::new(output_path);
    BillingEngine::new(BillingPipeline::new(DemoRoster, sink, config))
}

fn statement<'a>(report: &'a BillingReport, id: &str) -> &'a Statement {
    report
        .statements
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no statement for {}", id))
}

fn billed_total(statement: &Statement) -> f64 {
    match &statement.disposition {
        Disposition::Billed { total } => *total,
        Disposition::Rejected { reason } => {
            panic!("{} unexpectedly rejected: {}", statement.id, reason)
        }
    }
}

fn rejection_reason(statement: &Statement) -> &str {
    match &statement.disposition {
        Disposition::Rejected { reason } => reason,
        Disposition::Billed { total } => {
            panic!("{} unexpectedly billed {}", statement.id, total)
        }
    }
}

#[test]
fn test_end_to_end_demo_roster_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let engine = demo_engine(output_path.clone());

    let report_path = engine.run()?;
    assert!(report_path.contains("billing_report.json"));

    // The report must exist on disk and parse back into the same model.
    let full_path = std::path::Path::new(&output_path).join("billing_report.json");
    assert!(full_path.exists());

    let report: BillingReport = serde_json::from_str(&std::fs::read_to_string(&full_path)?)?;
    assert_eq!(report.statements.len(), 7);
    assert_eq!(report.billed_count(), 3);
    assert_eq!(report.rejected_count(), 4);

    assert_eq!(
        rejection_reason(statement(&report, "A-1")),
        "Trial must have zero base price"
    );
    assert!((billed_total(statement(&report, "B-2")) - 19.77467).abs() < 1e-9);
    assert!((billed_total(statement(&report, "C-3")) - 7.85895).abs() < 1e-9);
    assert!((billed_total(statement(&report, "D-4")) - 7.99).abs() < 1e-9);
    assert_eq!(
        rejection_reason(statement(&report, "E-5")),
        "Region 'XX' is not supported"
    );
    assert_eq!(
        rejection_reason(statement(&report, "F-6")),
        "Pro requires minimum 3 months tenure"
    );
    assert_eq!(
        rejection_reason(statement(&report, "G-7")),
        "Maximum 10 devices allowed"
    );

    Ok(())
}

#[test]
fn test_repeated_runs_produce_identical_reports() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let engine = demo_engine(output_path.clone());

    engine.run()?;
    let full_path = std::path::Path::new(&output_path).join("billing_report.json");
    let first = std::fs::read_to_string(&full_path)?;

    engine.run()?;
    let second = std::fs::read_to_string(&full_path)?;

    assert_eq!(first, second);
    Ok(())
}
