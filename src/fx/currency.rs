use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::DEFAULT_MINOR_UNITS;

static MINOR_UNIT_RULES: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();

fn get_rules() -> &'static HashMap<&'static str, u32> {
    MINOR_UNIT_RULES.get_or_init(|| {
        let mut map = HashMap::new();

        // Zero-decimal currencies
        map.insert("JPY", 0);
        map.insert("KRW", 0);
        map.insert("VND", 0);
        map.insert("CLP", 0);
        map.insert("ISK", 0);

        // Three-decimal currencies
        map.insert("BHD", 3);
        map.insert("KWD", 3);
        map.insert("OMR", 3);
        map.insert("JOD", 3);
        map.insert("TND", 3);

        map
    })
}

/// Returns the minor-unit precision for a currency code (2 unless a rule says otherwise).
pub fn minor_units(currency: &str) -> u32 {
    get_rules()
        .get(currency)
        .copied()
        .unwrap_or(DEFAULT_MINOR_UNITS)
}

/// Rounds an amount to the minor-unit precision of the given currency.
///
/// Uses round-half-to-even so repeated conversions do not drift upwards.
/// Rounded values are what gets stored in the ledger, so the strategy must
/// never change once data exists.
pub fn round_to_minor_units(amount: Decimal, currency: &str) -> Decimal {
    amount.round_dp_with_strategy(
        minor_units(currency),
        RoundingStrategy::MidpointNearestEven,
    )
}

/// Checks that a currency code is three ASCII letters.
pub fn is_valid_code(currency: &str) -> bool {
    currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic())
}
