//! Registry of well-known HTTP header names and default token parameters.
//!
//! Every literal an authentication layer needs (header keys, the bearer prefix,
//! default JWT claims and the default token lifetime) is reachable through the
//! closed [`HeaderKeyName`] enum. Call sites name the entry, never the string.
//!
//! ```
//! use header_key_names::{get, HeaderKeyName};
//!
//! let header = format!("{}abc.def.ghi", get(HeaderKeyName::BearerPrefix));
//! assert_eq!(header, "Bearer abc.def.ghi");
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::error_handling::RegistryError;

/// Default token lifetime in milliseconds (5 days).
///
/// Numeric form of [`HeaderKeyName::DefaultDurabilityMillis`].
pub const DEFAULT_DURABILITY_MILLIS: u64 = 5 * 24 * 60 * 60 * 1000;

/// Symbolic identifiers of the registry entries.
///
/// The set is closed: an identifier that is not a variant here cannot be
/// referenced from typed code. Declaration order is the registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum HeaderKeyName {
    /// Name of the header carrying credentials (`Authorization`).
    AuthorizationHeaderKey,
    /// Prefix of a bearer credential (`Bearer `, with the trailing space).
    BearerPrefix,
    /// Default token type claim (`JWT`).
    DefaultTokenType,
    /// Default token issuer claim (`user-auth-api`).
    DefaultTokenIssuer,
    /// Default token audience claim (`user-auth-app`).
    DefaultTokenAudience,
    /// Name of the header announcing the token type (`token-type`).
    TokenTypeHeaderKey,
    /// Name of the header carrying role claims (`u-roles`).
    RolesHeaderKey,
    /// Default token lifetime in milliseconds, in string form (`432000000`).
    DefaultDurabilityMillis,
}

impl HeaderKeyName {
    /// Returns the literal this entry resolves to.
    pub const fn value(self) -> &'static str {
        match self {
            HeaderKeyName::AuthorizationHeaderKey => "Authorization",
            HeaderKeyName::BearerPrefix => "Bearer ",
            HeaderKeyName::DefaultTokenType => "JWT",
            HeaderKeyName::DefaultTokenIssuer => "user-auth-api",
            HeaderKeyName::DefaultTokenAudience => "user-auth-app",
            HeaderKeyName::TokenTypeHeaderKey => "token-type",
            HeaderKeyName::RolesHeaderKey => "u-roles",
            HeaderKeyName::DefaultDurabilityMillis => "432000000",
        }
    }

    /// Returns the symbolic name of this entry.
    pub const fn identifier(self) -> &'static str {
        match self {
            HeaderKeyName::AuthorizationHeaderKey => "AuthorizationHeaderKey",
            HeaderKeyName::BearerPrefix => "BearerPrefix",
            HeaderKeyName::DefaultTokenType => "DefaultTokenType",
            HeaderKeyName::DefaultTokenIssuer => "DefaultTokenIssuer",
            HeaderKeyName::DefaultTokenAudience => "DefaultTokenAudience",
            HeaderKeyName::TokenTypeHeaderKey => "TokenTypeHeaderKey",
            HeaderKeyName::RolesHeaderKey => "RolesHeaderKey",
            HeaderKeyName::DefaultDurabilityMillis => "DefaultDurabilityMillis",
        }
    }

    /// Returns the `(identifier, value)` pair of this entry.
    pub const fn entry(self) -> Entry {
        Entry {
            identifier: self.identifier(),
            value: self.value(),
        }
    }

    /// Resolves an identifier known only at runtime (CLI argument, config key).
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownIdentifier`] if `identifier` names no entry.
    pub fn from_identifier(identifier: &str) -> Result<Self, RegistryError> {
        let found = HeaderKeyName::iter().find(|key| key.identifier() == identifier);
        match found {
            Some(key) => Ok(key),
            None => {
                log::debug!("No registry entry named {:?}", identifier);
                Err(RegistryError::UnknownIdentifier(identifier.to_string()))
            }
        }
    }
}

impl fmt::Display for HeaderKeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl AsRef<str> for HeaderKeyName {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl FromStr for HeaderKeyName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderKeyName::from_identifier(s)
    }
}

/// A single registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Symbolic name used by code
    pub identifier: &'static str,
    /// Literal the identifier resolves to
    pub value: &'static str,
}

/// Returns the literal for `key`.
///
/// Total over the identifier set; there is no failure path.
pub const fn get(key: HeaderKeyName) -> &'static str {
    key.value()
}

/// Returns every entry in registry order.
pub fn entries() -> Vec<Entry> {
    HeaderKeyName::iter().map(HeaderKeyName::entry).collect()
}

/// Default token lifetime as a [`Duration`].
pub const fn default_durability() -> Duration {
    Duration::from_millis(DEFAULT_DURABILITY_MILLIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_values() {
        assert_eq!(get(HeaderKeyName::AuthorizationHeaderKey), "Authorization");
        assert_eq!(get(HeaderKeyName::BearerPrefix), "Bearer ");
        assert_eq!(get(HeaderKeyName::DefaultTokenType), "JWT");
        assert_eq!(get(HeaderKeyName::DefaultTokenIssuer), "user-auth-api");
        assert_eq!(get(HeaderKeyName::DefaultTokenAudience), "user-auth-app");
        assert_eq!(get(HeaderKeyName::TokenTypeHeaderKey), "token-type");
        assert_eq!(get(HeaderKeyName::RolesHeaderKey), "u-roles");
        assert_eq!(get(HeaderKeyName::DefaultDurabilityMillis), "432000000");
    }

    #[test]
    fn test_bearer_prefix_keeps_trailing_space() {
        let header = format!("{}abc.def.ghi", get(HeaderKeyName::BearerPrefix));
        assert_eq!(header, "Bearer abc.def.ghi");
        assert_eq!(HeaderKeyName::BearerPrefix.value().len(), 7);
    }

    #[test]
    fn test_durability_string_matches_numeric_constant() {
        let parsed: u64 = get(HeaderKeyName::DefaultDurabilityMillis)
            .parse()
            .expect("durability should be numeric");
        assert_eq!(parsed, DEFAULT_DURABILITY_MILLIS);
        assert_eq!(parsed, 432_000_000);
        assert_eq!(default_durability(), Duration::from_secs(5 * 24 * 60 * 60));
    }

    #[test]
    fn test_token_type_header_distinct_from_default_type() {
        assert_eq!(get(HeaderKeyName::TokenTypeHeaderKey), "token-type");
        assert_eq!(get(HeaderKeyName::DefaultTokenType), "JWT");
        assert_ne!(
            get(HeaderKeyName::TokenTypeHeaderKey),
            get(HeaderKeyName::DefaultTokenType)
        );
    }

    #[test]
    fn test_identifiers_are_unique() {
        let identifiers: HashSet<&str> = HeaderKeyName::iter().map(|k| k.identifier()).collect();
        assert_eq!(identifiers.len(), HeaderKeyName::iter().count());
    }

    #[test]
    fn test_identifier_matches_debug_name() {
        for key in HeaderKeyName::iter() {
            assert_eq!(key.identifier(), format!("{:?}", key));
        }
    }

    #[test]
    fn test_from_identifier_round_trip() {
        for key in HeaderKeyName::iter() {
            assert_eq!(HeaderKeyName::from_identifier(key.identifier()).ok(), Some(key));
        }
    }

    #[test]
    fn test_from_identifier_unknown() {
        let err = HeaderKeyName::from_identifier("authorizationheaderkey").unwrap_err();
        assert!(
            matches!(err, RegistryError::UnknownIdentifier(ref name) if name == "authorizationheaderkey")
        );

        let err = "".parse::<HeaderKeyName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown registry identifier: \"\"");
    }

    #[test]
    fn test_display_and_as_ref_yield_value() {
        assert_eq!(HeaderKeyName::RolesHeaderKey.to_string(), "u-roles");
        assert_eq!(HeaderKeyName::AuthorizationHeaderKey.as_ref(), "Authorization");
    }

    #[test]
    fn test_entries_in_declaration_order() {
        let all = entries();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].identifier, "AuthorizationHeaderKey");
        assert_eq!(all[7].identifier, "DefaultDurabilityMillis");
        assert_eq!(all[7].value, "432000000");
    }

    #[test]
    fn test_lookup_is_idempotent() {
        for key in HeaderKeyName::iter() {
            assert_eq!(get(key), get(key));
        }
    }
}
