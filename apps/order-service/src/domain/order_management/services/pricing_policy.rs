//! Pricing policy: pure computation of net prices and subtotals.

use rust_decimal::Decimal;

use crate::domain::shared::{Money, Quantity};

/// Result of pricing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLine {
    /// Unit price net of the discount in effect at pricing time.
    pub net_unit_price: Money,
    /// `net_unit_price * quantity`.
    pub subtotal: Money,
}

/// Pure pricing computations.
///
/// `net_unit_price = unit_price - unit_price * discount_percent / 100`.
/// No rounding is applied; totals are exact sums of the computed subtotals.
pub struct PricingPolicy;

impl PricingPolicy {
    /// Compute the unit price net of a percentage discount.
    #[must_use]
    pub fn net_unit_price(unit_price: Money, discount_percent: Decimal) -> Money {
        unit_price - unit_price * (discount_percent / Decimal::ONE_HUNDRED)
    }

    /// Price a line from its snapshot values.
    #[must_use]
    pub fn price_line(
        unit_price: Money,
        discount_percent: Decimal,
        quantity: Quantity,
    ) -> PricedLine {
        let net_unit_price = Self::net_unit_price(unit_price, discount_percent);
        PricedLine {
            net_unit_price,
            subtotal: net_unit_price * quantity.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn net_unit_price_no_discount() {
        let net = PricingPolicy::net_unit_price(Money::new(dec!(10.00)), dec!(0));
        assert_eq!(net, Money::new(dec!(10.00)));
    }

    #[test]
    fn net_unit_price_twenty_percent() {
        let net = PricingPolicy::net_unit_price(Money::new(dec!(5.00)), dec!(20));
        assert_eq!(net, Money::new(dec!(4.00)));
    }

    #[test]
    fn net_unit_price_full_discount() {
        let net = PricingPolicy::net_unit_price(Money::new(dec!(12.50)), dec!(100));
        assert!(net.is_zero());
    }

    #[test]
    fn price_line_multiplies_by_quantity() {
        let priced = PricingPolicy::price_line(Money::new(dec!(10.00)), dec!(0), Quantity::new(2));
        assert_eq!(priced.net_unit_price, Money::new(dec!(10.00)));
        assert_eq!(priced.subtotal, Money::new(dec!(20.00)));
    }

    #[test]
    fn price_line_discounted() {
        let priced = PricingPolicy::price_line(Money::new(dec!(5.00)), dec!(20), Quantity::new(1));
        assert_eq!(priced.net_unit_price, Money::new(dec!(4.00)));
        assert_eq!(priced.subtotal, Money::new(dec!(4.00)));
    }

    #[test]
    fn price_line_fractional_discount() {
        // 19.99 at 15% -> 16.9915 net; no rounding applied
        let priced = PricingPolicy::price_line(Money::new(dec!(19.99)), dec!(15), Quantity::new(3));
        assert_eq!(priced.net_unit_price, Money::new(dec!(16.9915)));
        assert_eq!(priced.subtotal, Money::new(dec!(50.9745)));
    }
}
