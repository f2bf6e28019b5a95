use crate::utils::error::{BillingError, Result};
use crate::utils::validation::{require_amount, require_count, require_non_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Trial,
    Basic,
    Pro,
    Student,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Trial => "Trial",
            Status::Basic => "Basic",
            Status::Pro => "Pro",
            Status::Student => "Student",
        };
        write!(f, "{}", name)
    }
}

/// Immutable subscriber record. Field invariants are enforced by
/// [`Subscriber::new`]; once constructed the record only exposes read access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscriber {
    id: String,
    region: String,
    status: Status,
    tenure_months: u32,
    devices: u32,
    base_price: f64,
}

impl Subscriber {
    /// Builds a validated record. The id and region must be non-empty after
    /// trimming; the region is stored trimmed and upper-cased. Counts and the
    /// base price must be non-negative (the price also finite). Violations
    /// are reported with the offending field name.
    pub fn new(
        id: &str,
        region: &str,
        status: Status,
        tenure_months: i64,
        devices: i64,
        base_price: f64,
    ) -> Result<Self> {
        Ok(Self {
            id: require_non_empty("id", id)?,
            region: require_non_empty("region", region)?.to_uppercase(),
            status,
            tenure_months: require_count("tenure_months", tenure_months)?,
            devices: require_count("devices", devices)?,
            base_price: require_amount("base_price", base_price)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    pub fn devices(&self) -> u32 {
        self.devices
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn has_many_devices(&self) -> bool {
        self.devices > 3
    }

    pub fn is_long_term(&self) -> bool {
        self.tenure_months >= 12
    }

    pub fn is_loyal(&self) -> bool {
        self.tenure_months >= 24
    }
}

/// Raw subscriber row as read from a roster file. Converts into a
/// [`Subscriber`] through the checked constructor only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberInput {
    pub id: String,
    pub region: String,
    pub status: Status,
    pub tenure_months: i64,
    pub devices: i64,
    pub base_price: f64,
}

impl TryFrom<SubscriberInput> for Subscriber {
    type Error = BillingError;

    fn try_from(input: SubscriberInput) -> Result<Self> {
        Subscriber::new(
            &input.id,
            &input.region,
            input.status,
            input.tenure_months,
            input.devices,
            input.base_price,
        )
    }
}

/// Outcome of the eligibility rule chain. Not an error: rejection is an
/// expected result and carries the first violated rule's reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: String,
}

impl Eligibility {
    pub fn pass() -> Self {
        Self {
            eligible: true,
            reason: String::new(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Disposition {
    Billed { total: f64 },
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: String,
    pub status: Status,
    pub region: String,
    pub disposition: Disposition,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.disposition {
            // Totals are rounded for display only; the stored value is exact.
            Disposition::Billed { total } => {
                write!(f, "{} [{}/{}] billed {:.2}", self.id, self.status, self.region, total)
            }
            Disposition::Rejected { reason } => {
                write!(f, "{} [{}/{}] rejected: {}", self.id, self.status, self.region, reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingReport {
    pub statements: Vec<Statement>,
}

impl BillingReport {
    pub fn billed_count(&self) -> usize {
        self.statements
            .iter()
            .filter(|s| matches!(s.disposition, Disposition::Billed { .. }))
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.statements.len() - self.billed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_trims_and_normalizes() {
        let sub = Subscriber::new("  A-1 ", " eu ", Status::Basic, 5, 2, 9.99).unwrap();
        assert_eq!(sub.id(), "A-1");
        assert_eq!(sub.region(), "EU");
    }

    #[test]
    fn test_construction_rejects_empty_identity_fields() {
        assert!(matches!(
            Subscriber::new("", "US", Status::Basic, 1, 1, 1.0),
            Err(BillingError::MissingField { field }) if field == "id"
        ));
        assert!(matches!(
            Subscriber::new("A-1", "  ", Status::Basic, 1, 1, 1.0),
            Err(BillingError::MissingField { field }) if field == "region"
        ));
    }

    #[test]
    fn test_construction_rejects_negative_numerics() {
        assert!(matches!(
            Subscriber::new("A-1", "US", Status::Basic, -1, 1, 1.0),
            Err(BillingError::OutOfRange { field, .. }) if field == "tenure_months"
        ));
        assert!(matches!(
            Subscriber::new("A-1", "US", Status::Basic, 1, -2, 1.0),
            Err(BillingError::OutOfRange { field, .. }) if field == "devices"
        ));
        assert!(matches!(
            Subscriber::new("A-1", "US", Status::Basic, 1, 1, -0.01),
            Err(BillingError::OutOfRange { field, .. }) if field == "base_price"
        ));
    }

    #[test]
    fn test_device_predicate_boundary() {
        let three = Subscriber::new("A-1", "US", Status::Basic, 1, 3, 1.0).unwrap();
        let four = Subscriber::new("A-2", "US", Status::Basic, 1, 4, 1.0).unwrap();
        assert!(!three.has_many_devices());
        assert!(four.has_many_devices());
    }

    #[test]
    fn test_tenure_predicate_boundaries() {
        let cases = [
            (11, false, false),
            (12, true, false),
            (23, true, false),
            (24, true, true),
        ];
        for (tenure, long_term, loyal) in cases {
            let sub = Subscriber::new("A-1", "US", Status::Pro, tenure, 1, 1.0).unwrap();
            assert_eq!(sub.is_long_term(), long_term, "tenure {}", tenure);
            assert_eq!(sub.is_loyal(), loyal, "tenure {}", tenure);
        }
    }

    #[test]
    fn test_input_conversion_goes_through_constructor() {
        let input = SubscriberInput {
            id: "F-6".to_string(),
            region: "uk".to_string(),
            status: Status::Pro,
            tenure_months: 6,
            devices: 1,
            base_price: 20.0,
        };
        let sub = Subscriber::try_from(input).unwrap();
        assert_eq!(sub.region(), "UK");

        let bad = SubscriberInput {
            id: "F-6".to_string(),
            region: "uk".to_string(),
            status: Status::Pro,
            tenure_months: 6,
            devices: -5,
            base_price: 20.0,
        };
        assert!(Subscriber::try_from(bad).is_err());
    }

    #[test]
    fn test_statement_display_rounds_totals() {
        let billed = Statement {
            id: "B-2".to_string(),
            status: Status::Pro,
            region: "US".to_string(),
            disposition: Disposition::Billed { total: 19.77467 },
        };
        assert_eq!(billed.to_string(), "B-2 [Pro/US] billed 19.77");

        let rejected = Statement {
            id: "E-5".to_string(),
            status: Status::Basic,
            region: "XX".to_string(),
            disposition: Disposition::Rejected {
                reason: "Region 'XX' is not supported".to_string(),
            },
        };
        assert_eq!(
            rejected.to_string(),
            "E-5 [Basic/XX] rejected: Region 'XX' is not supported"
        );
    }
}
