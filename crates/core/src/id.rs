//! Account identifiers.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{PurchaseError, PurchaseResult};

/// Identifier of a purchasing account.
///
/// Only positive ids are valid. Every valid account is assumed to be able to
/// pay for any purchase; no balance is tracked here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(raw: i64) -> PurchaseResult<Self> {
        if raw <= 0 {
            return Err(PurchaseError::InvalidAccountId);
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Read an account number out of untyped input.
    ///
    /// Only checks that the value is an integer; positivity is left to
    /// [`AccountId::new`] so the two faults are reported at different stages.
    pub fn number_from_json(value: &JsonValue) -> PurchaseResult<i64> {
        integer_from_json(value).ok_or(PurchaseError::InvalidAccountIdType)
    }
}

/// Integral JSON numbers, including floats with no fractional part (`3.0`).
///
/// Integers outside the `i64` range saturate to `i64::MIN`/`i64::MAX`, so
/// later range checks still see which side they fell on.
pub fn integer_from_json(value: &JsonValue) -> Option<i64> {
    let JsonValue::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }
    let f = number.as_f64()?;
    // `as` saturates for out-of-range floats.
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_positive_ids_are_accounts() {
        assert_eq!(AccountId::new(1).map(AccountId::get), Ok(1));
        assert_eq!(AccountId::new(0), Err(PurchaseError::InvalidAccountId));
        assert_eq!(AccountId::new(-1), Err(PurchaseError::InvalidAccountId));
    }

    #[test]
    fn json_account_numbers_must_be_integers() {
        assert_eq!(AccountId::number_from_json(&json!(7)), Ok(7));
        assert_eq!(AccountId::number_from_json(&json!(-1)), Ok(-1));
        assert_eq!(AccountId::number_from_json(&json!(2.0)), Ok(2));
        assert_eq!(
            AccountId::number_from_json(&json!("one")),
            Err(PurchaseError::InvalidAccountIdType)
        );
        assert_eq!(
            AccountId::number_from_json(&json!(1.5)),
            Err(PurchaseError::InvalidAccountIdType)
        );
        assert_eq!(
            AccountId::number_from_json(&JsonValue::Null),
            Err(PurchaseError::InvalidAccountIdType)
        );
    }

    #[test]
    fn integers_beyond_i64_saturate() {
        let huge: JsonValue = serde_json::from_str("10000000000000000000").unwrap();
        assert_eq!(integer_from_json(&huge), Some(i64::MAX));
        assert_eq!(integer_from_json(&json!(1e19)), Some(i64::MAX));
        assert_eq!(integer_from_json(&json!(-1e19)), Some(i64::MIN));
        assert_eq!(integer_from_json(&json!(0.5)), None);
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let id = AccountId::new(5).unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), json!(5));
    }
}
