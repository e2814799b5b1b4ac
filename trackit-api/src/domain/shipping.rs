//! Weight-based shipping rates.
//!
//! A shipment's cost comes from a fixed five-tier schedule. Weights up to
//! 10 kg fall into one of four flat tiers; anything heavier pays the top flat
//! rate plus a surcharge for every started 5 kg above 10 kg.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const fn whole(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

/// Upper bound of the last flat tier, in kilograms.
pub const FLAT_RATE_LIMIT_KG: Decimal = whole(10);

/// Price of the last flat tier, also the base of the freight formula.
pub const FREIGHT_BASE_COST: Decimal = whole(250);

/// Size of one billable overage increment, in kilograms.
pub const OVERAGE_INCREMENT_KG: Decimal = whole(5);

/// Price of one overage increment.
pub const OVERAGE_INCREMENT_COST: Decimal = whole(100);

/// One flat band of the rate schedule. The upper bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTier {
    pub upper_bound_kg: Decimal,
    pub cost: Decimal,
    pub category: WeightCategory,
}

/// Flat tiers in ascending order of upper bound.
pub const RATE_TIERS: [RateTier; 4] = [
    RateTier {
        upper_bound_kg: whole(1),
        cost: whole(50),
        category: WeightCategory::Standard,
    },
    RateTier {
        upper_bound_kg: whole(3),
        cost: whole(90),
        category: WeightCategory::Medium,
    },
    RateTier {
        upper_bound_kg: whole(5),
        cost: whole(150),
        category: WeightCategory::Heavy,
    },
    RateTier {
        upper_bound_kg: FLAT_RATE_LIMIT_KG,
        cost: FREIGHT_BASE_COST,
        category: WeightCategory::Bulk,
    },
];

/// Shipment weight in kilograms.
///
/// Any real value is accepted. Zero and negative weights both mean
/// "nothing to price yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentWeight(Decimal);

impl ShipmentWeight {
    pub const ZERO: ShipmentWeight = ShipmentWeight(Decimal::ZERO);

    pub fn new(kilograms: Decimal) -> Self {
        Self(kilograms)
    }

    /// Smallest weight the decimal type can hold above zero.
    pub const SMALLEST_POSITIVE: ShipmentWeight = ShipmentWeight(Decimal::from_parts(1, 0, 0, false, 28));

    /// Converts a float weight. NaN becomes zero and values outside the
    /// decimal range saturate towards the matching end of it. Positive
    /// values too small to represent stay positive.
    pub fn from_f64(kilograms: f64) -> Self {
        if kilograms.is_nan() {
            return Self::ZERO;
        }
        match Decimal::from_f64(kilograms) {
            Some(value) => Self(value).keep_positive(kilograms > 0.0),
            None if kilograms > 0.0 && kilograms.abs() < 1.0 => Self::SMALLEST_POSITIVE,
            None if kilograms > 0.0 => Self(Decimal::MAX),
            None if kilograms.abs() < 1.0 => Self::ZERO,
            None => Self(Decimal::MIN),
        }
    }

    /// Normalizes free-form field input. Text that is not a number reads
    /// as zero.
    pub fn parse_input(input: &str) -> Self {
        let trimmed = input.trim();
        let positive = denotes_positive(trimmed);
        if let Ok(value) = Decimal::from_str(trimmed) {
            return Self(value).keep_positive(positive);
        }
        if let Ok(value) = Decimal::from_scientific(trimmed) {
            return Self(value).keep_positive(positive);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::from_f64(value).keep_positive(positive && !value.is_nan()),
            Err(_) => Self::ZERO,
        }
    }

    fn keep_positive(self, source_positive: bool) -> Self {
        if source_positive && self.0 <= Decimal::ZERO {
            Self::SMALLEST_POSITIVE
        } else {
            self
        }
    }

    pub fn kilograms(&self) -> Decimal {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

/// True when numeric text has no minus sign and a non-zero mantissa digit.
fn denotes_positive(text: &str) -> bool {
    let mantissa = text.split(['e', 'E']).next().unwrap_or_default();
    !mantissa.starts_with('-') && mantissa.chars().any(|c| ('1'..='9').contains(&c))
}

impl From<Decimal> for ShipmentWeight {
    fn from(kilograms: Decimal) -> Self {
        Self(kilograms)
    }
}

/// Shipping cost in the shop currency. Kept exact; rounding only happens
/// when it is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingCost(Decimal);

impl ShippingCost {
    pub const ZERO: ShippingCost = ShippingCost(Decimal::ZERO);

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for ShippingCost {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "₹{rounded:.2}")
    }
}

/// Which band of the schedule a weight fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightCategory {
    Unset,
    Standard,
    Medium,
    Heavy,
    Bulk,
    Freight,
}

impl WeightCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WeightCategory::Unset => "Enter weight to calculate",
            WeightCategory::Standard => "Standard (0-1 kg)",
            WeightCategory::Medium => "Medium (1-3 kg)",
            WeightCategory::Heavy => "Heavy (3-5 kg)",
            WeightCategory::Bulk => "Bulk (5-10 kg)",
            WeightCategory::Freight => "Freight (10+ kg custom)",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: ShippingCost,
    pub category: WeightCategory,
}

impl ShippingQuote {
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

/// Prices a shipment. Total over every input: weights at or below zero
/// cost nothing, and costs beyond the decimal range saturate.
pub fn compute_shipping_cost(weight: ShipmentWeight) -> ShippingQuote {
    let kilograms = weight.kilograms();
    if kilograms <= Decimal::ZERO {
        return ShippingQuote {
            cost: ShippingCost::ZERO,
            category: WeightCategory::Unset,
        };
    }

    if let Some(tier) = RATE_TIERS.iter().find(|tier| kilograms <= tier.upper_bound_kg) {
        return ShippingQuote {
            cost: ShippingCost(tier.cost),
            category: tier.category,
        };
    }

    let increments = ceil_div(kilograms - FLAT_RATE_LIMIT_KG, OVERAGE_INCREMENT_KG);
    let cost = increments
        .checked_mul(OVERAGE_INCREMENT_COST)
        .and_then(|overage| overage.checked_add(FREIGHT_BASE_COST))
        .unwrap_or(Decimal::MAX);

    ShippingQuote {
        cost: ShippingCost(cost),
        category: WeightCategory::Freight,
    }
}

/// Ceiling of `numerator / step` for a positive numerator.
///
/// Division can round away digits past the 28th decimal place, so the
/// quotient is bumped when it falls short of the numerator.
fn ceil_div(numerator: Decimal, step: Decimal) -> Decimal {
    let mut quotient = (numerator / step).ceil();
    if let Some(covered) = quotient.checked_mul(step) {
        if covered < numerator {
            quotient += Decimal::ONE;
        }
    }
    quotient
}

/// Observer notified with a freshly computed cost.
pub type CostObserver = Box<dyn FnMut(ShippingCost) + Send>;

/// Holds the weight a user is editing and keeps its quote current.
///
/// The quote is recomputed on every weight change. A registered observer
/// hears the initial cost once and then every cost that differs from the
/// previous one.
pub struct ShippingCalculator {
    weight: ShipmentWeight,
    quote: ShippingQuote,
    observer: Option<CostObserver>,
}

impl ShippingCalculator {
    pub fn new(initial_weight: ShipmentWeight) -> Self {
        Self {
            weight: initial_weight,
            quote: compute_shipping_cost(initial_weight),
            observer: None,
        }
    }

    pub fn with_observer(initial_weight: ShipmentWeight, mut observer: CostObserver) -> Self {
        let quote = compute_shipping_cost(initial_weight);
        observer(quote.cost);
        Self {
            weight: initial_weight,
            quote,
            observer: Some(observer),
        }
    }

    pub fn set_weight(&mut self, weight: ShipmentWeight) -> ShippingQuote {
        let previous = self.quote.cost;
        self.weight = weight;
        self.quote = compute_shipping_cost(weight);
        if self.quote.cost != previous {
            if let Some(observer) = self.observer.as_mut() {
                observer(self.quote.cost);
            }
        }
        self.quote
    }

    /// Same as [`set_weight`](Self::set_weight) for raw field text.
    pub fn set_weight_input(&mut self, input: &str) -> ShippingQuote {
        self.set_weight(ShipmentWeight::parse_input(input))
    }

    pub fn weight(&self) -> ShipmentWeight {
        self.weight
    }

    pub fn quote(&self) -> ShippingQuote {
        self.quote
    }
}

impl fmt::Debug for ShippingCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShippingCalculator")
            .field("weight", &self.weight)
            .field("quote", &self.quote)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn kg(input: &str) -> ShipmentWeight {
        ShipmentWeight::new(Decimal::from_str(input).unwrap())
    }

    fn cost(input: &str) -> Decimal {
        compute_shipping_cost(kg(input)).cost.amount()
    }

    fn label(input: &str) -> &'static str {
        compute_shipping_cost(kg(input)).category_label()
    }

    #[test]
    fn test_zero_and_negative_weights_cost_nothing() {
        for input in ["0", "-0.5", "-1", "-10", "-1000000"] {
            assert_eq!(cost(input), Decimal::ZERO, "weight {input}");
            assert_eq!(label(input), "Enter weight to calculate", "weight {input}");
        }
    }

    #[test]
    fn test_tier_boundaries_take_lower_price() {
        assert_eq!(cost("1"), Decimal::from(50));
        assert_eq!(cost("1.0001"), Decimal::from(90));
        assert_eq!(cost("3"), Decimal::from(90));
        assert_eq!(cost("3.0001"), Decimal::from(150));
        assert_eq!(cost("5"), Decimal::from(150));
        assert_eq!(cost("5.0001"), Decimal::from(250));
        assert_eq!(cost("10"), Decimal::from(250));
        assert_eq!(cost("10.0001"), Decimal::from(350));
    }

    #[test]
    fn test_overage_rounds_up_to_next_increment() {
        assert_eq!(cost("11"), Decimal::from(350));
        assert_eq!(cost("15"), Decimal::from(350));
        assert_eq!(cost("15.01"), Decimal::from(450));
        assert_eq!(cost("20"), Decimal::from(450));
        assert_eq!(cost("20.01"), Decimal::from(550));
        assert_eq!(cost("23"), Decimal::from(550));
    }

    #[test]
    fn test_overage_just_above_flat_limit() {
        let weight = FLAT_RATE_LIMIT_KG + Decimal::new(1, 27);
        let quote = compute_shipping_cost(ShipmentWeight::new(weight));
        assert_eq!(quote.cost.amount(), Decimal::from(350));
        assert_eq!(quote.category, WeightCategory::Freight);
    }

    #[test]
    fn test_huge_weight_saturates() {
        let quote = compute_shipping_cost(ShipmentWeight::new(Decimal::MAX));
        assert_eq!(quote.cost.amount(), Decimal::MAX);
        assert_eq!(quote.category, WeightCategory::Freight);
    }

    #[test]
    fn test_labels_per_range() {
        assert_eq!(label("0.5"), "Standard (0-1 kg)");
        assert_eq!(label("2.5"), "Medium (1-3 kg)");
        assert_eq!(label("4"), "Heavy (3-5 kg)");
        assert_eq!(label("10"), "Bulk (5-10 kg)");
        assert_eq!(label("23"), "Freight (10+ kg custom)");
    }

    #[test]
    fn test_scenarios() {
        assert_eq!((cost("0"), label("0")), (Decimal::ZERO, "Enter weight to calculate"));
        assert_eq!((cost("2.5"), label("2.5")), (Decimal::from(90), "Medium (1-3 kg)"));
        assert_eq!((cost("10"), label("10")), (Decimal::from(250), "Bulk (5-10 kg)"));
        assert_eq!((cost("23"), label("23")), (Decimal::from(550), "Freight (10+ kg custom)"));
    }

    #[test]
    fn test_cost_is_monotonic() {
        let mut previous = Decimal::ZERO;
        for hundredths in 0..=5000u32 {
            let weight = ShipmentWeight::new(Decimal::new(hundredths as i64, 2));
            let current = compute_shipping_cost(weight).cost.amount();
            assert!(current >= previous, "cost dropped at {}", weight.kilograms());
            previous = current;
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        for input in ["0", "0.3", "2.5", "7", "15.01", "99.99"] {
            assert_eq!(compute_shipping_cost(kg(input)), compute_shipping_cost(kg(input)));
        }
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(compute_shipping_cost(ShipmentWeight::from_f64(2.5)).cost.amount(), Decimal::from(90));
        assert_eq!(compute_shipping_cost(ShipmentWeight::from_f64(15.01)).cost.amount(), Decimal::from(450));
        assert_eq!(ShipmentWeight::from_f64(f64::NAN), ShipmentWeight::ZERO);
        assert_eq!(ShipmentWeight::from_f64(f64::INFINITY).kilograms(), Decimal::MAX);
        assert_eq!(
            compute_shipping_cost(ShipmentWeight::from_f64(f64::NEG_INFINITY)).cost,
            ShippingCost::ZERO
        );
    }

    #[test]
    fn test_tiny_positive_weights_stay_standard() {
        let weights = [
            ShipmentWeight::from_f64(1e-30),
            ShipmentWeight::from_f64(5e-324),
            ShipmentWeight::parse_input("1e-30"),
            ShipmentWeight::parse_input("0.00000000000000000000000000001"),
        ];
        for weight in weights {
            assert_eq!(weight, ShipmentWeight::SMALLEST_POSITIVE);
            let quote = compute_shipping_cost(weight);
            assert_eq!(quote.cost.amount(), Decimal::from(50));
            assert_eq!(quote.category_label(), "Standard (0-1 kg)");
        }

        assert_eq!(ShipmentWeight::from_f64(-1e-30).kilograms(), Decimal::ZERO);
        assert_eq!(ShipmentWeight::parse_input("-1e-30").kilograms(), Decimal::ZERO);
        assert_eq!(ShipmentWeight::parse_input("0.000"), ShipmentWeight::ZERO);
    }

    #[test]
    fn test_parse_input_falls_back_to_zero() {
        assert_eq!(ShipmentWeight::parse_input(" 2.5 "), kg("2.5"));
        assert_eq!(ShipmentWeight::parse_input("1e1"), kg("10"));
        assert_eq!(ShipmentWeight::parse_input(""), ShipmentWeight::ZERO);
        assert_eq!(ShipmentWeight::parse_input("heavy"), ShipmentWeight::ZERO);
    }

    #[test]
    fn test_cost_display_uses_two_decimals() {
        assert_eq!(compute_shipping_cost(kg("2")).cost.to_string(), "₹90.00");
        assert_eq!(ShippingCost::ZERO.to_string(), "₹0.00");
        assert_eq!(ShippingCost::from(Decimal::new(85714, 3)).to_string(), "₹85.71");
    }

    #[test]
    fn test_calculator_notifies_on_mount_and_on_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut calculator = ShippingCalculator::with_observer(
            kg("2"),
            Box::new(move |cost| sink.lock().unwrap().push(cost.amount())),
        );

        calculator.set_weight(kg("2.5"));
        calculator.set_weight(kg("4"));
        calculator.set_weight_input("not a number");
        calculator.set_weight(kg("-3"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Decimal::from(90), Decimal::from(150), Decimal::ZERO]
        );
        assert_eq!(calculator.weight(), kg("-3"));
        assert_eq!(calculator.quote().category, WeightCategory::Unset);
    }

    #[test]
    fn test_calculator_without_observer() {
        let mut calculator = ShippingCalculator::new(ShipmentWeight::ZERO);
        assert_eq!(calculator.quote().cost, ShippingCost::ZERO);

        let quote = calculator.set_weight_input("12");
        assert_eq!(quote.cost.amount(), Decimal::from(350));
        assert_eq!(quote.category_label(), "Freight (10+ kg custom)");
    }
}
