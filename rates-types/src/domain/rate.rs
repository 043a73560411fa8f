//! Exchange-rate quotes and the rate table they form.

use serde::{Deserialize, Serialize};

/// ISO 4217 numeric currency code (e.g. 840 = USD, 980 = UAH).
pub type CurrencyCode = u32;

/// Pricing mode of a quote.
///
/// A record carries either a single symmetric cross rate (neither side of
/// the pair is the provider's reference currency) or a buy/sell spread
/// (one side is the reference currency). Modelled as a sum type so the
/// two-branch conversion arithmetic is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pricing {
    /// Single symmetric rate.
    Cross { rate: f64 },
    /// Bank spread: the bank buys at `buy` and sells at `sell`.
    BuySell { buy: f64, sell: f64 },
}

/// One currency-pair quote from the provider at a point in time.
///
/// The A/B ordering of the codes inside a record is provider-determined
/// and carries meaning: `currency_code_a` is the priced side of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub currency_code_a: CurrencyCode,
    pub currency_code_b: CurrencyCode,
    /// Unix seconds when the provider quoted the pair. Informational only.
    pub date: i64,
    pub pricing: Pricing,
}

impl ExchangeRate {
    /// Whether this record quotes the given pair, in either orientation.
    pub fn quotes_pair(&self, source: CurrencyCode, target: CurrencyCode) -> bool {
        (self.currency_code_a == source && self.currency_code_b == target)
            || (self.currency_code_a == target && self.currency_code_b == source)
    }

    /// Converts `amount` of the `source` currency into the other side of
    /// the pair.
    ///
    /// Converting FROM the A side divides by the sell (or cross) rate;
    /// converting FROM the B side multiplies by the buy (or cross) rate.
    /// The direction check is against `currency_code_a`, not against a
    /// fixed reference currency - getting this wrong silently inverts the
    /// result. No rounding is applied.
    pub fn convert_from(&self, source: CurrencyCode, amount: f64) -> f64 {
        let from_a = source == self.currency_code_a;
        match self.pricing {
            Pricing::Cross { rate } => {
                if from_a {
                    amount / rate
                } else {
                    amount * rate
                }
            }
            Pricing::BuySell { buy, sell } => {
                if from_a {
                    amount / sell
                } else {
                    amount * buy
                }
            }
        }
    }
}

/// Full rate table from one provider fetch cycle.
///
/// Ordered as returned by the provider and never mutated after creation.
/// No uniqueness constraint is enforced: lookups take the first structural
/// match in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable(Vec<ExchangeRate>);

impl RateTable {
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self(rates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First record quoting the unordered pair, or `None`.
    pub fn find_pair(
        &self,
        source: CurrencyCode,
        target: CurrencyCode,
    ) -> Option<&ExchangeRate> {
        self.0.iter().find(|rate| rate.quotes_pair(source, target))
    }
}

impl From<Vec<ExchangeRate>> for RateTable {
    fn from(rates: Vec<ExchangeRate>) -> Self {
        Self(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_uah() -> ExchangeRate {
        ExchangeRate {
            currency_code_a: 840,
            currency_code_b: 980,
            date: 1_700_000_000,
            pricing: Pricing::BuySell {
                buy: 37.9,
                sell: 38.2995,
            },
        }
    }

    fn gbp_uah() -> ExchangeRate {
        ExchangeRate {
            currency_code_a: 826,
            currency_code_b: 980,
            date: 1_700_000_000,
            pricing: Pricing::Cross { rate: 48.258 },
        }
    }

    #[test]
    fn test_convert_from_a_side_uses_sell_rate() {
        let rate = usd_uah();
        assert_eq!(rate.convert_from(840, 100.0), 100.0 / 38.2995);
    }

    #[test]
    fn test_convert_from_b_side_uses_buy_rate() {
        let rate = usd_uah();
        assert_eq!(rate.convert_from(980, 100.0), 3790.0);
    }

    #[test]
    fn test_convert_cross_from_a_side_divides() {
        let rate = gbp_uah();
        assert_eq!(rate.convert_from(826, 100.0), 100.0 / 48.258);
    }

    #[test]
    fn test_convert_cross_from_b_side_multiplies() {
        let rate = gbp_uah();
        assert_eq!(rate.convert_from(980, 100.0), 4825.8);
    }

    #[test]
    fn test_quotes_pair_is_direction_agnostic() {
        let rate = usd_uah();
        assert!(rate.quotes_pair(840, 980));
        assert!(rate.quotes_pair(980, 840));
        assert!(!rate.quotes_pair(840, 978));
    }

    #[test]
    fn test_find_pair_either_orientation_returns_same_record() {
        let table = RateTable::new(vec![usd_uah(), gbp_uah()]);

        let forward = table.find_pair(826, 980).unwrap();
        let reverse = table.find_pair(980, 826).unwrap();

        assert_eq!(forward, reverse);
        assert_eq!(forward.currency_code_a, 826);
    }

    #[test]
    fn test_find_pair_first_match_wins_among_duplicates() {
        let mut duplicate = usd_uah();
        duplicate.pricing = Pricing::Cross { rate: 99.0 };
        let table = RateTable::new(vec![usd_uah(), duplicate]);

        let found = table.find_pair(840, 980).unwrap();
        assert_eq!(found.pricing, usd_uah().pricing);
    }

    #[test]
    fn test_find_pair_missing_returns_none() {
        let table = RateTable::new(vec![usd_uah()]);
        assert!(table.find_pair(840, 978).is_none());
    }
}
