//! Network identity of the container: IP address and FQDN.

use std::net::IpAddr;

use crate::params::validator::ValidationError;

/// Full-match rule for an FQDN: one or more lowercase letters, digits,
/// hyphens or dots, and nothing else.
pub const FQDN_PATTERN: &str = "^[a-z0-9.-]+$";

fn is_fqdn_char(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.'
}

/// IP address and fully-qualified domain name identifying this instance.
///
/// Checked by dedicated rules rather than a registry pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub ip: String,
    pub fqdn: String,
}

impl NetworkIdentity {
    pub fn new(ip: impl Into<String>, fqdn: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            fqdn: fqdn.into(),
        }
    }

    /// Validate the FQDN and then the IP, stopping at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fqdn(&self.fqdn)?;
        validate_ip(&self.ip)?;
        Ok(())
    }
}

/// Every character must be a lowercase letter, digit, hyphen or dot.
pub fn validate_fqdn(fqdn: &str) -> Result<(), ValidationError> {
    if !fqdn.is_empty() && fqdn.bytes().all(is_fqdn_char) {
        Ok(())
    } else {
        Err(ValidationError::Fqdn {
            value: fqdn.to_string(),
            pattern: FQDN_PATTERN,
        })
    }
}

/// Accepts dotted-quad IPv4 and standard IPv6 literals.
pub fn validate_ip(ip: &str) -> Result<IpAddr, ValidationError> {
    ip.parse::<IpAddr>().map_err(|_| ValidationError::Ip {
        value: ip.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fqdn_accepts_restricted_charset() {
        let valid = ["mongo-0.default.svc", "a", "10.0.0.5", "mdb-0.svc.cluster.local"];
        for fqdn in valid {
            assert!(validate_fqdn(fqdn).is_ok(), "{fqdn}");
        }
    }

    #[test]
    fn test_fqdn_rejects_outside_charset() {
        for fqdn in ["", "Mongo-0.svc", "mongo 0", "mongo_0", "mongo-0.svc!", "mongo-0.svc\n"] {
            assert!(validate_fqdn(fqdn).is_err(), "{fqdn:?}");
        }
    }

    #[test]
    fn test_fqdn_check_agrees_with_pattern() {
        let pattern = regex::Regex::new(FQDN_PATTERN).unwrap();
        let samples = [
            "mongo-0.default.svc",
            "-.",
            "",
            "Mongo",
            "mongo 0",
            "mongo_0",
            "rs0.svc\n",
            "x.y.",
        ];
        for fqdn in samples {
            assert_eq!(pattern.is_match(fqdn), validate_fqdn(fqdn).is_ok(), "{fqdn:?}");
        }
    }

    #[test]
    fn test_fqdn_error_states_full_match_rule() {
        let err = validate_fqdn("Mongo-0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'Mongo-0' for FQDN: must match '^[a-z0-9.-]+$'"
        );
    }

    #[test]
    fn test_ip_accepts_v4_and_v6() {
        let valid = [
            "10.0.0.5",
            "0.0.0.0",
            "255.255.255.255",
            "::1",
            "fe80::1",
            "2001:db8::8a2e:370:7334",
        ];
        for ip in valid {
            assert!(validate_ip(ip).is_ok(), "{ip}");
        }
    }

    #[test]
    fn test_ip_rejects_malformed() {
        let invalid = [
            "999.1.1.1",
            "999.999.999.999",
            "abc",
            "",
            "10.0.0",
            "10.0.0.5 ",
            "10.0.0.5/24",
        ];
        for ip in invalid {
            assert!(validate_ip(ip).is_err(), "{ip:?}");
        }
    }

    #[test]
    fn test_identity_reports_fqdn_before_ip() {
        let identity = NetworkIdentity::new("abc", "BAD");
        assert!(matches!(identity.validate(), Err(ValidationError::Fqdn { .. })));
    }
}
