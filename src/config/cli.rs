use crate::core::{ReportSink, Subscriber, SubscriberSource};
use crate::domain::model::{Status, SubscriberInput};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalSink {
    base_path: String,
}

impl LocalSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportSink for LocalSink {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Reads a JSON array of subscriber rows; every row must pass record
/// construction or the whole fetch fails with the construction error.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl SubscriberSource for FileSource {
    fn subscribers(&self) -> Result<Vec<Subscriber>> {
        tracing::debug!("Reading subscriber roster from: {}", self.path);
        let raw = fs::read_to_string(&self.path)?;
        let inputs: Vec<SubscriberInput> = serde_json::from_str(&raw)?;
        tracing::debug!("Parsed {} roster entries", inputs.len());
        inputs.into_iter().map(Subscriber::try_from).collect()
    }
}

/// Built-in sample roster used when no subscriber file is configured.
#[derive(Debug, Clone, Default)]
pub struct DemoRoster;

impl SubscriberSource for DemoRoster {
    fn subscribers(&self) -> Result<Vec<Subscriber>> {
        Ok(vec![
            Subscriber::new("A-1", "US", Status::Trial, 0, 1, 9.99)?,
            Subscriber::new("B-2", "US", Status::Pro, 18, 4, 14.99)?,
            Subscriber::new("C-3", "EU", Status::Student, 6, 2, 12.99)?,
            Subscriber::new("D-4", "CA", Status::Basic, 8, 2, 7.99)?,
            Subscriber::new("E-5", "XX", Status::Basic, 1, 1, 5.99)?,
            Subscriber::new("F-6", "UK", Status::Pro, 2, 1, 9.99)?,
            Subscriber::new("G-7", "US", Status::Pro, 1, 15, 9.99)?,
        ])
    }
}
