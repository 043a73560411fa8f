//! Data Transfer Objects (DTOs) for requests and the provider wire format.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CurrencyCode, ExchangeRate, Pricing};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// ISO 4217 numeric code of the source currency
    #[schema(example = 840)]
    pub source: CurrencyCode,
    /// ISO 4217 numeric code of the target currency
    #[schema(example = 980)]
    pub target: CurrencyCode,
    /// Amount in the source currency
    #[schema(example = 100.0)]
    pub amount: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider wire format
// ─────────────────────────────────────────────────────────────────────────────

/// One rate record as the provider serializes it.
///
/// The provider flattens the pricing mode into three optional fields;
/// [`ExchangeRate`] re-tags them. A valid record has either `rateCross`
/// set, or both `rateBuy` and `rateSell` set - never a mix, never all
/// three, never none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecordDto {
    pub currency_code_a: CurrencyCode,
    pub currency_code_b: CurrencyCode,
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_buy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_sell: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_cross: Option<f64>,
}

/// A wire record whose pricing fields violate the cross-XOR-spread shape.
///
/// `Display`/`Error` are implemented by hand: thiserror's derive treats any
/// field named `source` as the error source, and `CurrencyCode` is not an
/// `Error`.
#[derive(Debug)]
pub struct MalformedRecord {
    pub source: CurrencyCode,
    pub target: CurrencyCode,
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rate record for pair {}/{} has no usable pricing",
            self.source, self.target
        )
    }
}

impl std::error::Error for MalformedRecord {}

fn positive(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

impl TryFrom<RateRecordDto> for ExchangeRate {
    type Error = MalformedRecord;

    fn try_from(dto: RateRecordDto) -> Result<Self, Self::Error> {
        let pricing = match (dto.rate_cross, dto.rate_buy, dto.rate_sell) {
            (Some(rate), None, None) if positive(rate) => Pricing::Cross { rate },
            (None, Some(buy), Some(sell)) if positive(buy) && positive(sell) => {
                Pricing::BuySell { buy, sell }
            }
            _ => {
                return Err(MalformedRecord {
                    source: dto.currency_code_a,
                    target: dto.currency_code_b,
                });
            }
        };

        Ok(ExchangeRate {
            currency_code_a: dto.currency_code_a,
            currency_code_b: dto.currency_code_b,
            date: dto.date,
            pricing,
        })
    }
}

impl From<ExchangeRate> for RateRecordDto {
    fn from(rate: ExchangeRate) -> Self {
        let (rate_buy, rate_sell, rate_cross) = match rate.pricing {
            Pricing::Cross { rate } => (None, None, Some(rate)),
            Pricing::BuySell { buy, sell } => (Some(buy), Some(sell), None),
        };
        Self {
            currency_code_a: rate.currency_code_a,
            currency_code_b: rate.currency_code_b,
            date: rate.date,
            rate_buy,
            rate_sell,
            rate_cross,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(buy: Option<f64>, sell: Option<f64>, cross: Option<f64>) -> RateRecordDto {
        RateRecordDto {
            currency_code_a: 840,
            currency_code_b: 980,
            date: 1_700_000_000,
            rate_buy: buy,
            rate_sell: sell,
            rate_cross: cross,
        }
    }

    #[test]
    fn test_buy_sell_record_tags_as_spread() {
        let rate = ExchangeRate::try_from(dto(Some(37.9), Some(38.2995), None)).unwrap();
        assert_eq!(
            rate.pricing,
            Pricing::BuySell {
                buy: 37.9,
                sell: 38.2995
            }
        );
    }

    #[test]
    fn test_cross_record_tags_as_cross() {
        let rate = ExchangeRate::try_from(dto(None, None, Some(48.258))).unwrap();
        assert_eq!(rate.pricing, Pricing::Cross { rate: 48.258 });
    }

    #[test]
    fn test_record_with_no_rates_is_malformed() {
        assert!(ExchangeRate::try_from(dto(None, None, None)).is_err());
    }

    #[test]
    fn test_record_with_all_rates_is_malformed() {
        assert!(ExchangeRate::try_from(dto(Some(37.9), Some(38.3), Some(48.0))).is_err());
    }

    #[test]
    fn test_record_with_buy_but_no_sell_is_malformed() {
        assert!(ExchangeRate::try_from(dto(Some(37.9), None, None)).is_err());
    }

    #[test]
    fn test_record_with_nonpositive_rate_is_malformed() {
        assert!(ExchangeRate::try_from(dto(None, None, Some(0.0))).is_err());
        assert!(ExchangeRate::try_from(dto(None, None, Some(-1.0))).is_err());
    }

    #[test]
    fn test_wire_decoding_uses_camel_case() {
        let json = r#"{"currencyCodeA":840,"currencyCodeB":980,"date":1700000000,"rateBuy":37.9,"rateSell":38.2995}"#;
        let dto: RateRecordDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.currency_code_a, 840);
        assert_eq!(dto.rate_buy, Some(37.9));
        assert_eq!(dto.rate_cross, None);
    }
}
