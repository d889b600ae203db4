//! Update signature type.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Ed25519 signature over an update archive.
///
/// Serializes with the attribute names update feeds use (`edSignature`, `length`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSignature {
    /// Ed25519 signature over the raw archive bytes (base64, 64 bytes decoded).
    pub ed_signature: String,
    /// Length of the signed archive in bytes.
    pub length: u64,
}

/// Renders the enclosure attributes for an update feed entry.
impl fmt::Display for UpdateSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sparkle:edSignature=\"{}\" length=\"{}\"", self.ed_signature, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_feed_attributes() {
        let sig = UpdateSignature {
            ed_signature: "c2ln".into(),
            length: 1024,
        };
        assert_eq!(sig.to_string(), r#"sparkle:edSignature="c2ln" length="1024""#);
    }

    #[test]
    fn json_uses_feed_attribute_names() {
        let sig = UpdateSignature {
            ed_signature: "c2ln".into(),
            length: 7,
        };
        let json = serde_json::to_value(&sig).unwrap();
        assert_eq!(json, serde_json::json!({ "edSignature": "c2ln", "length": 7 }));
    }
}
