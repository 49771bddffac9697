//! Parsing of `ldap:///` and `ldaps:///` base-DN URLs.

use std::{fmt, str::FromStr};

/// Well-known port for plain LDAP.
pub const LDAP_PORT: u16 = 389;

/// Well-known port for LDAP over TLS.
pub const LDAPS_PORT: u16 = 636;

const LDAPS_PREFIX: &str = "ldaps:///";
const LDAP_PREFIX: &str = "ldap:///";
const DOMAIN_COMPONENT_PREFIX: &str = "dc=";

/// Errors encountered while parsing a directory URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The URL does not start with `ldap:///` or `ldaps:///`.
    #[error("unknown protocol in URL {url}")]
    InvalidProtocol {
        /// The rejected URL.
        url: String,
    },
    /// A base DN segment is not of the form `dc=<label>`.
    #[error("invalid domain component: {component} expecting dc=")]
    InvalidDomainComponent {
        /// The offending segment.
        component: String,
    },
}

/// Directory access protocol named by a URL's scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// `ldap`
    Ldap,
    /// `ldaps`
    Ldaps,
}

impl Protocol {
    /// The URL scheme for this protocol.
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Ldap => "ldap",
            Protocol::Ldaps => "ldaps",
        }
    }

    /// The well-known port servers listen on for this protocol.
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Ldap => LDAP_PORT,
            Protocol::Ldaps => LDAPS_PORT,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// A parsed `ldap(s):///dc=...` URL together with an optional Active
/// Directory site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    protocol: Protocol,
    base_dn: String,
    domain_components: Vec<String>,
    domain_name: String,
    site: Option<String>,
}

impl ParsedTarget {
    /// Parses `url` and attaches `site`. An empty site is treated as absent.
    ///
    /// Every comma-separated segment of the base DN must start with the
    /// literal, case-sensitive `dc=`. Empty labels (`dc=`) are accepted and
    /// produce an empty label in the domain name.
    pub fn parse(url: &str, site: Option<&str>) -> Result<Self, ParseError> {
        let (protocol, base_dn) = split_protocol(url)?;

        let domain_components = base_dn
            .split(',')
            .map(|segment| {
                segment
                    .strip_prefix(DOMAIN_COMPONENT_PREFIX)
                    .map(str::to_owned)
                    .ok_or_else(|| ParseError::InvalidDomainComponent {
                        component: segment.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let domain_name = domain_components.join(".");

        Ok(Self {
            protocol,
            base_dn: base_dn.to_owned(),
            domain_components,
            domain_name,
            site: site.filter(|s| !s.is_empty()).map(str::to_owned),
        })
    }

    /// Gets the protocol named by the URL.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Gets the base DN exactly as it appeared in the URL.
    pub fn base_dn(&self) -> &str {
        &self.base_dn
    }

    /// Gets the domain components, `dc=` stripped, in URL order.
    pub fn domain_components(&self) -> &[String] {
        &self.domain_components
    }

    /// Gets the domain components joined with `.`.
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Gets the Active Directory site, if any.
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Builds an endpoint URL for `host:port` carrying this target's scheme
    /// and base DN.
    pub fn endpoint_url(&self, host: &str, port: u16) -> String {
        format!("{}://{}:{}/{}", self.protocol, host, port, self.base_dn)
    }
}

impl FromStr for ParsedTarget {
    type Err = ParseError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        Self::parse(url, None)
    }
}

fn split_protocol(url: &str) -> Result<(Protocol, &str), ParseError> {
    if let Some(rest) = url.strip_prefix(LDAPS_PREFIX) {
        Ok((Protocol::Ldaps, rest))
    } else if let Some(rest) = url.strip_prefix(LDAP_PREFIX) {
        Ok((Protocol::Ldap, rest))
    } else {
        Err(ParseError::InvalidProtocol {
            url: url.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ldaps() {
        let target = ParsedTarget::parse("ldaps:///dc=example,dc=com", None).unwrap();
        assert_eq!(target.protocol(), Protocol::Ldaps);
        assert_eq!(target.base_dn(), "dc=example,dc=com");
        assert_eq!(target.domain_components(), ["example", "com"]);
        assert_eq!(target.domain_name(), "example.com");
        assert_eq!(target.site(), None);
    }

    #[test]
    fn parses_ldap_with_site() {
        let target =
            ParsedTarget::parse("ldap:///dc=corp,dc=example,dc=org", Some("site-name")).unwrap();
        assert_eq!(target.protocol(), Protocol::Ldap);
        assert_eq!(target.domain_name(), "corp.example.org");
        assert_eq!(target.site(), Some("site-name"));
    }

    #[test]
    fn empty_site_is_absent() {
        let target = ParsedTarget::parse("ldap:///dc=example", Some("")).unwrap();
        assert_eq!(target.site(), None);
        assert_eq!(target.domain_name(), "example");
    }

    #[test]
    fn rejects_unknown_protocol() {
        for url in [
            "http:///dc=example,dc=com",
            "ldap://dc=example,dc=com",
            "ldaps://host/dc=example,dc=com",
            "LDAP:///dc=example",
            "",
        ] {
            assert_eq!(
                ParsedTarget::parse(url, None),
                Err(ParseError::InvalidProtocol {
                    url: url.to_owned()
                }),
                "{url}"
            );
        }
    }

    #[test]
    fn rejects_non_domain_component() {
        assert_eq!(
            "ldaps:///cn=example,dc=com".parse::<ParsedTarget>(),
            Err(ParseError::InvalidDomainComponent {
                component: "cn=example".to_owned()
            })
        );
        assert_eq!(
            "ldap:///dc=example,DC=com".parse::<ParsedTarget>(),
            Err(ParseError::InvalidDomainComponent {
                component: "DC=com".to_owned()
            })
        );
        assert_eq!(
            "ldap:///dc=example, dc=com".parse::<ParsedTarget>(),
            Err(ParseError::InvalidDomainComponent {
                component: " dc=com".to_owned()
            })
        );
    }

    #[test]
    fn empty_base_dn_is_rejected() {
        assert_eq!(
            "ldap:///".parse::<ParsedTarget>(),
            Err(ParseError::InvalidDomainComponent {
                component: String::new()
            })
        );
    }

    #[test]
    fn empty_label_is_kept() {
        let target: ParsedTarget = "ldap:///dc=,dc=com".parse().unwrap();
        assert_eq!(target.domain_name(), ".com");
    }

    #[test]
    fn endpoint_url_keeps_base_dn_verbatim() {
        let target: ParsedTarget = "ldaps:///dc=example,dc=com".parse().unwrap();
        assert_eq!(
            target.endpoint_url("node1.example.com", 636),
            "ldaps://node1.example.com:636/dc=example,dc=com"
        );
    }

    #[test]
    fn default_ports() {
        assert_eq!(Protocol::Ldap.default_port(), 389);
        assert_eq!(Protocol::Ldaps.default_port(), 636);
    }
}
