//! Numeric amounts for damage and healing.
//!
//! An [`ActionAmount`] is a base value followed by an ordered list of
//! adjustments. Adjustments apply left to right, so `[Flat(5), Percent(50)]`
//! and `[Percent(50), Flat(5)]` resolve differently.

/// A single adjustment applied to a running amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// Adds a signed constant.
    Flat(i32),

    /// Scales by a signed percentage (`50` = ×1.5, `-50` = ×0.5).
    ///
    /// Fractions truncate toward zero.
    Percent(i32),
}

impl Modifier {
    fn apply(self, value: i64) -> i64 {
        match self {
            Self::Flat(delta) => value + i64::from(delta),
            Self::Percent(percent) => value * (100 + i64::from(percent)) / 100,
        }
    }
}

/// Base value plus ordered modifiers, resolving to a single integer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionAmount {
    pub base: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Vec<Modifier>,
}

impl ActionAmount {
    pub fn new(base: i32) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Signed total after every modifier, saturated to the `i32` range.
    pub fn total(&self) -> i32 {
        let total = self
            .modifiers
            .iter()
            .fold(i64::from(self.base), |value, modifier| {
                modifier.apply(value).clamp(i64::from(i32::MIN), i64::from(i32::MAX))
            });
        i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
    }

    /// Amount ready to apply as damage or healing. Negative totals clamp to zero.
    pub fn resolve(&self) -> u32 {
        u32::try_from(self.total()).unwrap_or(0)
    }
}

impl From<i32> for ActionAmount {
    fn from(base: i32) -> Self {
        Self::new(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_only_resolves_to_base() {
        assert_eq!(ActionAmount::new(40).resolve(), 40);
        assert_eq!(ActionAmount::from(0).resolve(), 0);
    }

    #[test]
    fn modifiers_apply_in_order() {
        let flat_first = ActionAmount::new(10)
            .with_modifier(Modifier::Flat(10))
            .with_modifier(Modifier::Percent(50));
        let percent_first = ActionAmount::new(10)
            .with_modifier(Modifier::Percent(50))
            .with_modifier(Modifier::Flat(10));

        assert_eq!(flat_first.total(), 30);
        assert_eq!(percent_first.total(), 25);
    }

    #[test]
    fn negative_totals_clamp_to_zero() {
        let amount = ActionAmount::new(5).with_modifier(Modifier::Flat(-20));
        assert_eq!(amount.total(), -15);
        assert_eq!(amount.resolve(), 0);

        let halved = ActionAmount::new(-7).with_modifier(Modifier::Percent(-50));
        assert_eq!(halved.total(), -3);
        assert_eq!(halved.resolve(), 0);
    }

    #[test]
    fn overflow_saturates() {
        let huge = ActionAmount::new(i32::MAX)
            .with_modifier(Modifier::Percent(100))
            .with_modifier(Modifier::Flat(1));
        assert_eq!(huge.total(), i32::MAX);
    }
}
