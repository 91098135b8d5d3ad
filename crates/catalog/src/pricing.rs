//! Price change policy and price display notation.

/// Capability asked to approve a price decrease.
///
/// The caller supplies one per `set_price` call. An interactive context wraps
/// a human prompt; tests and batch flows inject a deterministic stub.
pub trait ConfirmationProvider {
    /// Whether lowering the price from `current` to `proposed` is approved.
    fn approve_decrease(&self, current: f64, proposed: f64) -> bool;
}

/// Approves every decrease.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproveAll;

impl ConfirmationProvider for ApproveAll {
    fn approve_decrease(&self, _current: f64, _proposed: f64) -> bool {
        true
    }
}

/// Denies every decrease.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl ConfirmationProvider for DenyAll {
    fn approve_decrease(&self, _current: f64, _proposed: f64) -> bool {
        false
    }
}

impl<F> ConfirmationProvider for F
where
    F: Fn(f64, f64) -> bool,
{
    fn approve_decrease(&self, current: f64, proposed: f64) -> bool {
        self(current, proposed)
    }
}

/// Formats a price the way the catalog renders expect: shortest float
/// notation with the trailing `.0` kept for whole values (`120` -> `"120.0"`,
/// `49.5` -> `"49.5"`).
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        format!("{price}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_keep_the_fraction_digit() {
        assert_eq!(format_price(120.0), "120.0");
        assert_eq!(format_price(15000.0), "15000.0");
    }

    #[test]
    fn fractional_prices_use_shortest_notation() {
        assert_eq!(format_price(99.99), "99.99");
        assert_eq!(format_price(49.50), "49.5");
    }

    #[test]
    fn stubs_answer_unconditionally() {
        assert!(ApproveAll.approve_decrease(100.0, 50.0));
        assert!(!DenyAll.approve_decrease(100.0, 50.0));
    }

    #[test]
    fn closures_are_providers() {
        let threshold = |current: f64, proposed: f64| proposed >= current / 2.0;
        assert!(threshold.approve_decrease(100.0, 60.0));
        assert!(!threshold.approve_decrease(100.0, 10.0));
    }
}
