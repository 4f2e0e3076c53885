//! Release signing credentials
//!
//! The password fields are secrets: `Debug` and `Serialize` both redact
//! them. Anything that reaches a log line or a JSON report goes through
//! those impls, so the raw values only exist in memory for the packaging
//! step itself.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

const REDACTED: &str = "********";

/// Complete credentials for signing a release artifact
///
/// Either all four fields are present and non-blank, or no
/// `SigningCredentials` value exists at all — the resolver never
/// constructs a partial one.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SigningCredentials {
    /// Path to the keystore file, verified to exist at resolution time
    pub store_file: PathBuf,
    /// Keystore password
    #[serde(serialize_with = "redact")]
    pub store_password: String,
    /// Alias of the signing key inside the keystore
    pub key_alias: String,
    /// Password for the key alias
    #[serde(serialize_with = "redact")]
    pub key_password: String,
}

fn redact<S: Serializer>(_secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("store_file", &self.store_file)
            .field("store_password", &REDACTED)
            .field("key_alias", &self.key_alias)
            .field("key_password", &REDACTED)
            .finish()
    }
}

/// Whether a properties value should be treated as absent
pub(crate) fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> SigningCredentials {
        SigningCredentials {
            store_file: PathBuf::from("/keys/app.jks"),
            store_password: "store-secret".to_string(),
            key_alias: "upload".to_string(),
            key_password: "key-secret".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let debug = format!("{:?}", credentials());
        assert!(!debug.contains("store-secret"));
        assert!(!debug.contains("key-secret"));
        assert!(debug.contains("upload"));
        assert!(debug.contains("app.jks"));
    }

    #[test]
    fn test_serialization_redacts_passwords() {
        let json = serde_json::to_string(&credentials()).unwrap();
        assert!(!json.contains("store-secret"));
        assert!(!json.contains("key-secret"));
        assert!(json.contains("********"));
        assert!(json.contains("upload"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&"   ".to_string())));
        assert!(!is_blank(Some(&"upload".to_string())));
    }
}
