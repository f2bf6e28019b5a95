use crate::domain::model::{Status, Subscriber};
use crate::utils::error::{BillingError, Result};

pub const STUDENT_RATE: f64 = 0.5;
pub const LOYAL_PRO_RATE: f64 = 0.85;
pub const LONG_TERM_PRO_RATE: f64 = 0.90;
pub const DEVICE_SURCHARGE: f64 = 4.99;

// Priority order matters: the loyal rate must be checked before the
// long-term rate, since every loyal subscriber is also long-term.
const PRO_TENURE_RATES: &[(fn(&Subscriber) -> bool, f64)] = &[
    (Subscriber::is_loyal, LOYAL_PRO_RATE),
    (Subscriber::is_long_term, LONG_TERM_PRO_RATE),
];

const REGION_TAX_RATES: &[(&str, f64)] = &[("EU", 0.21), ("US", 0.07)];

/// Computes the final charge for an already-validated subscriber:
/// status discount, then device surcharge, then regional tax. Callers are
/// expected to run the eligibility rules first; this function does not.
pub fn calc_total(subscriber: Option<&Subscriber>) -> Result<f64> {
    let sub = subscriber.ok_or(BillingError::AbsentSubscriber)?;

    let discounted = status_discount(sub);
    let with_surcharge = discounted + device_surcharge(sub);
    Ok(with_surcharge + regional_tax(sub.region(), with_surcharge))
}

/// Stage 1: the discount replaces the base price, it is not additive.
fn status_discount(sub: &Subscriber) -> f64 {
    match sub.status() {
        Status::Trial => 0.0,
        Status::Student => sub.base_price() * STUDENT_RATE,
        Status::Pro => {
            let rate = PRO_TENURE_RATES
                .iter()
                .find(|(applies, _)| applies(sub))
                .map(|(_, rate)| *rate)
                .unwrap_or(1.0);
            sub.base_price() * rate
        }
        Status::Basic => sub.base_price(),
    }
}

/// Stage 2: flat fee added on top of the discounted price.
fn device_surcharge(sub: &Subscriber) -> f64 {
    if sub.has_many_devices() {
        DEVICE_SURCHARGE
    } else {
        0.0
    }
}

/// Stage 3: percentage of the running price, by region. Regions outside the
/// table are untaxed.
fn regional_tax(region: &str, price: f64) -> f64 {
    REGION_TAX_RATES
        .iter()
        .find(|(taxed, _)| *taxed == region)
        .map(|(_, rate)| price * rate)
        .unwrap_or(0.0)
}
