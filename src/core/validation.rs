use crate::domain::model::{Eligibility, Status, Subscriber};

pub const SUPPORTED_REGIONS: [&str; 6] = ["EU", "US", "CA", "UK", "AU", "FR"];
pub const TAXABLE_REGIONS: [&str; 2] = ["EU", "US"];

pub const MAX_DEVICES: u32 = 10;
pub const HIGH_VALUE_LIMIT: f64 = 1000.0;
pub const MAX_TRIAL_MONTHS: u32 = 1;
pub const MAX_STUDENT_MONTHS: u32 = 48;
pub const MIN_PRO_MONTHS: u32 = 3;

type Rule = fn(&Subscriber) -> Option<String>;

// Evaluation order is part of the contract: when several rules are violated,
// the earliest one in this list supplies the reason.
const RULES: &[Rule] = &[
    supported_region,
    device_limit,
    device_minimum,
    paid_tier_price,
    high_value_approval,
    status_terms,
];

/// Decides whether a subscriber is billable. Short-circuits on the first
/// violated rule; an absent reference is itself the first rule.
pub fn validate(subscriber: Option<&Subscriber>) -> Eligibility {
    let Some(sub) = subscriber else {
        return Eligibility::fail("Subscriber is null/missing");
    };

    for rule in RULES {
        if let Some(reason) = rule(sub) {
            return Eligibility::fail(reason);
        }
    }

    Eligibility::pass()
}

fn supported_region(sub: &Subscriber) -> Option<String> {
    if SUPPORTED_REGIONS.contains(&sub.region()) {
        None
    } else {
        Some(format!("Region '{}' is not supported", sub.region()))
    }
}

fn device_limit(sub: &Subscriber) -> Option<String> {
    if sub.devices() > MAX_DEVICES {
        Some(format!("Maximum {} devices allowed", MAX_DEVICES))
    } else {
        None
    }
}

fn device_minimum(sub: &Subscriber) -> Option<String> {
    if sub.devices() == 0 {
        Some("At least one device required".to_string())
    } else {
        None
    }
}

fn paid_tier_price(sub: &Subscriber) -> Option<String> {
    if sub.status() != Status::Trial && sub.base_price() <= 0.0 {
        Some("Non-trial subscriptions must have positive base price".to_string())
    } else {
        None
    }
}

fn high_value_approval(sub: &Subscriber) -> Option<String> {
    if TAXABLE_REGIONS.contains(&sub.region()) && sub.base_price() > HIGH_VALUE_LIMIT {
        Some("High-value subscriptions in taxable regions require special approval".to_string())
    } else {
        None
    }
}

fn status_terms(sub: &Subscriber) -> Option<String> {
    match sub.status() {
        Status::Trial if sub.tenure_months() > MAX_TRIAL_MONTHS => {
            Some(format!("Trial cannot exceed {} month", MAX_TRIAL_MONTHS))
        }
        Status::Trial if sub.base_price() > 0.0 => {
            Some("Trial must have zero base price".to_string())
        }
        Status::Student if sub.tenure_months() > MAX_STUDENT_MONTHS => {
            Some(format!("Student cannot exceed {} months", MAX_STUDENT_MONTHS))
        }
        Status::Pro if sub.tenure_months() < MIN_PRO_MONTHS => {
            Some(format!("Pro requires minimum {} months tenure", MIN_PRO_MONTHS))
        }
        _ => None,
    }
}
