//! Helpers for reading scopes out of decoded token claims.

use serde_json::Value;

/// Claim carrying the granted scopes.
pub const SCOPE_CLAIM: &str = "scope";

/// Alternative claim name used by some issuers.
pub const SCP_CLAIM: &str = "scp";

/// Extract the scope set from decoded token claims.
///
/// Reads [`SCOPE_CLAIM`], falling back to [`SCP_CLAIM`]. An array yields its
/// string elements in order; a string is treated as a space-delimited list.
/// Returns `None` when the token carries no usable scope claim.
#[must_use]
pub fn token_scopes(claims: &Value) -> Option<Vec<String>> {
    let claim = claims.get(SCOPE_CLAIM).or_else(|| claims.get(SCP_CLAIM))?;

    match claim {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
        ),
        Value::String(s) => Some(s.split_ascii_whitespace().map(str::to_owned).collect()),
        _ => None,
    }
}
