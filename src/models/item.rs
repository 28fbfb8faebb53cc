use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::{IntoParams, ToSchema};

/// Optional query string accepted by the item endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Free-form query value, echoed back unchanged. The last one wins when repeated.
    pub q: Option<String>,
}

impl ItemQuery {
    /// Collapse raw query pairs, keeping the last `q`
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            q: pairs.into_iter().filter(|(k, _)| k == "q").map(|(_, v)| v).last(),
        }
    }
}

/// Echo of the item request. `q` serializes as `null` when absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemEcho {
    /// Unbounded integer, emitted as a JSON number
    #[schema(value_type = i64, example = 42)]
    pub item_id: Number,
    pub q: Option<String>,
}

/// Parse a signed decimal integer of any length into an exact JSON number.
///
/// Accepts an optional sign and leading zeros; `-0` becomes `0`.
pub fn parse_item_id(raw: &str) -> Option<Number> {
    let (negative, digits) = match raw.as_bytes().first()? {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    let canonical = match (digits.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{digits}"),
        (false, false) => digits.to_string(),
    };
    canonical.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn last_q_wins() {
        let query = ItemQuery::from_pairs(pairs(&[("q", "a"), ("other", "x"), ("q", "b")]));
        assert_eq!(query.q.as_deref(), Some("b"));
        assert!(ItemQuery::from_pairs(pairs(&[("other", "x")])).q.is_none());
    }

    #[test]
    fn parses_canonical_integers() {
        assert_eq!(parse_item_id("42").unwrap().to_string(), "42");
        assert_eq!(parse_item_id("+5").unwrap().to_string(), "5");
        assert_eq!(parse_item_id("007").unwrap().to_string(), "7");
        assert_eq!(parse_item_id("-0").unwrap().to_string(), "0");
        assert_eq!(parse_item_id("-12").unwrap().to_string(), "-12");
    }

    #[test]
    fn keeps_values_beyond_64_bits_exact() {
        let big = "123456789012345678901234567890";
        assert_eq!(parse_item_id(big).unwrap().to_string(), big);
        assert_eq!(
            parse_item_id("-99999999999999999999").unwrap().to_string(),
            "-99999999999999999999"
        );
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "-", "+", "abc", "4.2", "12abc", " 1", "1e3", "--1"] {
            assert!(parse_item_id(raw).is_none(), "{raw:?}");
        }
    }
}
