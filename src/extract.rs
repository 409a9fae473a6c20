//! Declarative extraction of fields from heterogeneous API responses.
//!
//! The minting API has returned its payloads in a few different shapes over
//! time: nested under a `data` envelope, or at the top level under one of
//! several field names. Rather than scattering fallback chains through the
//! handlers, each operation declares an ordered list of dot-paths; the first
//! path that resolves to a value wins.

use serde_json::Value;

/// Sentinel returned when none of a probe's paths match.
pub const UNKNOWN: &str = "Unknown";

/// An ordered list of dot-path extraction rules applied to a JSON response.
#[derive(Debug, Clone, Copy)]
pub struct FieldProbe {
    paths: &'static [&'static str],
}

/// Transaction hash locations in a mint response.
pub const TX_HASH: FieldProbe = FieldProbe {
    paths: &["data.transactionHash", "transactionHash", "hash"],
};

/// Owner address locations in an owner-lookup response.
pub const OWNER: FieldProbe = FieldProbe {
    paths: &["data.owner", "owner"],
};

/// Metadata URI locations in a token-URI response.
pub const TOKEN_URI: FieldProbe = FieldProbe {
    paths: &["data.tokenURI", "tokenURI", "uri"],
};

impl FieldProbe {
    /// Extract the first matching field as a string, or [`UNKNOWN`] if no
    /// path resolves. Non-string scalars (a numeric token id, say) are
    /// rendered with their JSON representation.
    pub fn extract(&self, response: &Value) -> String {
        self.paths
            .iter()
            .find_map(|path| lookup_path(response, path))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Resolve a dot-separated path ("data.owner") against a JSON value.
fn lookup_path(value: &Value, path: &str) -> Option<String> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    match current {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Objects and arrays are never a usable display value.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// The nested `data` envelope takes precedence over top-level fields.
    fn envelope_shape_wins() {
        let response = json!({
            "data": { "transactionHash": "0xabc" },
            "transactionHash": "0xshadowed",
        });
        assert_eq!(TX_HASH.extract(&response), "0xabc");
    }

    #[test]
    /// Top-level fields are probed in declaration order.
    fn top_level_fallbacks() {
        let response = json!({ "transactionHash": "0xabc" });
        assert_eq!(TX_HASH.extract(&response), "0xabc");

        let response = json!({ "hash": "0xdef" });
        assert_eq!(TX_HASH.extract(&response), "0xdef");
    }

    #[test]
    /// A response lacking every probed field yields the sentinel.
    fn missing_fields_yield_unknown() {
        let response = json!({ "status": "success" });
        assert_eq!(TX_HASH.extract(&response), UNKNOWN);
        assert_eq!(OWNER.extract(&response), UNKNOWN);
        assert_eq!(TOKEN_URI.extract(&response), UNKNOWN);
    }

    #[test]
    fn owner_shapes() {
        let nested = json!({ "data": { "owner": "0x1111" } });
        assert_eq!(OWNER.extract(&nested), "0x1111");

        // The live backend returns { tokenId, owner } at the top level.
        let flat = json!({ "tokenId": 7, "owner": "0x2222" });
        assert_eq!(OWNER.extract(&flat), "0x2222");
    }

    #[test]
    fn token_uri_shapes() {
        let flat = json!({ "tokenId": 7, "tokenURI": "ipfs://QmExample" });
        assert_eq!(TOKEN_URI.extract(&flat), "ipfs://QmExample");

        let alt = json!({ "uri": "ipfs://QmAlt" });
        assert_eq!(TOKEN_URI.extract(&alt), "ipfs://QmAlt");
    }

    #[test]
    /// Null fields are treated as absent, not rendered as "null".
    fn null_is_absent() {
        let response = json!({ "data": { "owner": null }, "owner": "0x3333" });
        assert_eq!(OWNER.extract(&response), "0x3333");
    }
}
