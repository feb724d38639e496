//! Line-item prices and the random source they are drawn from.

/// A line-item price on the fixed ladder `75, 80, ..., 150`.
///
/// # Examples
/// ```
/// use dishmatch_core::Price;
///
/// assert_eq!(Price::from_step(0).value(), 75);
/// assert_eq!(Price::from_step(15).value(), 150);
/// // Steps past the top of the ladder clamp.
/// assert_eq!(Price::from_step(200), Price::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Price(u32);

impl Price {
    /// Lowest price on the ladder.
    pub const MIN: Self = Self(75);
    /// Highest price on the ladder.
    pub const MAX: Self = Self(150);
    /// Distance between adjacent prices.
    pub const STEP: u32 = 5;
    /// Number of prices on the ladder.
    pub const STEPS: u8 = 16;

    /// Return the price `step` rungs above [`Price::MIN`], clamped to the
    /// ladder.
    #[must_use]
    pub fn from_step(step: u8) -> Self {
        let rung = u32::from(step.min(Self::STEPS - 1));
        Self(Self::MIN.0 + rung * Self::STEP)
    }

    /// Return the price as an integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Report whether `value` lies on the ladder.
    #[must_use]
    pub const fn is_on_ladder(value: u32) -> bool {
        value >= Self::MIN.0 && value <= Self::MAX.0 && (value - Self::MIN.0) % Self::STEP == 0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Supply price ladder steps.
///
/// Production code draws uniformly at random; tests supply a fixed
/// sequence so cache contents can be asserted exactly. Returned steps should
/// lie in `0..Price::STEPS`; larger values clamp to the top of the ladder.
///
/// # Examples
///
/// ```rust
/// use dishmatch_core::{Price, PriceSource};
///
/// struct Cheapest;
///
/// impl PriceSource for Cheapest {
///     fn next_step(&mut self) -> u8 {
///         0
///     }
/// }
///
/// let mut source = Cheapest;
/// assert_eq!(Price::from_step(source.next_step()), Price::MIN);
/// ```
pub trait PriceSource {
    /// Return the next ladder step.
    fn next_step(&mut self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ladder_has_sixteen_distinct_prices() {
        let prices: std::collections::BTreeSet<u32> =
            (0..Price::STEPS).map(|s| Price::from_step(s).value()).collect();
        assert_eq!(prices.len(), 16);
        assert!(prices.iter().all(|&p| Price::is_on_ladder(p)));
    }

    #[rstest]
    #[case(70, false)]
    #[case(75, true)]
    #[case(112, false)]
    #[case(115, true)]
    #[case(150, true)]
    #[case(155, false)]
    fn ladder_membership(#[case] value: u32, #[case] expected: bool) {
        assert_eq!(Price::is_on_ladder(value), expected);
    }
}
