//! Serde support (feature-gated)
//!
//! [`Reason`] serializes as a plain string and is re-validated on the way
//! back in, so an empty reason can't be smuggled in through deserialization.
//! [`ValidationResult`](crate::ValidationResult) is adjacently tagged:
//!
//! ```text
//! {"status":"valid"}
//! {"status":"invalid","reason":"Name is empty."}
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::result::Reason;

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Reason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Reason::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::user::User;
    use crate::ValidationResult;

    #[test]
    fn valid_serializes_with_status_only() {
        let json = serde_json::to_string(&ValidationResult::valid()).unwrap();
        assert_eq!(json, r#"{"status":"valid"}"#);
    }

    #[test]
    fn invalid_serializes_with_reason() {
        let json = serde_json::to_string(&ValidationResult::invalid("Name is empty.")).unwrap();
        assert_eq!(json, r#"{"status":"invalid","reason":"Name is empty."}"#);
    }

    #[test]
    fn results_deserialize() {
        let valid: ValidationResult = serde_json::from_str(r#"{"status":"valid"}"#).unwrap();
        assert_eq!(valid, ValidationResult::valid());

        let invalid: ValidationResult =
            serde_json::from_str(r#"{"status":"invalid","reason":"a\nb"}"#).unwrap();
        assert_eq!(invalid, ValidationResult::invalid("a\nb"));
    }

    #[test]
    fn empty_reason_is_rejected() {
        let result: Result<ValidationResult, _> =
            serde_json::from_str(r#"{"status":"invalid","reason":""}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn user_round_trips() {
        let user = User::new("Gregor", 30, "mail@mailinator.com");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Gregor","age":30,"email":"mail@mailinator.com"}"#
        );
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
