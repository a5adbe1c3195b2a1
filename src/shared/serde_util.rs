//! Custom serde helpers for endpoint wire formats.

/// Deserializes a decimal quote into its string form.
///
/// The history endpoint sends prices as decimal strings, but some upstream
/// sources emit bare JSON numbers for the same fields. Both are kept as
/// strings so parsing happens in one place (`shared::parse_decimal`).
pub mod decimal_string {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalStringVisitor;

        impl<'de> Visitor<'de> for DecimalStringVisitor {
            type Value = String;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(DecimalStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Quote {
        #[serde(with = "super::decimal_string")]
        close: String,
    }

    #[test]
    fn test_decimal_string_accepts_string() {
        let q: Quote = serde_json::from_str(r#"{"close":"110.25"}"#).unwrap();
        assert_eq!(q.close, "110.25");
    }

    #[test]
    fn test_decimal_string_accepts_numbers() {
        let q: Quote = serde_json::from_str(r#"{"close":110}"#).unwrap();
        assert_eq!(q.close, "110");
        let q: Quote = serde_json::from_str(r#"{"close":0.5}"#).unwrap();
        assert_eq!(q.close, "0.5");
    }

    #[test]
    fn test_decimal_string_rejects_null() {
        assert!(serde_json::from_str::<Quote>(r#"{"close":null}"#).is_err());
    }
}
