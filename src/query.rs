//! DNS SRV query names for locating directory servers.

use crate::target::ParsedTarget;
use std::borrow::Cow;

/// Service and protocol labels queried for LDAP servers.
pub const LDAP_SERVICE: &str = "_ldap._tcp";

/// Labels following the site name in an Active Directory site-specific query.
pub const AD_SITE_SUFFIX: &str = "_sites.dc._msdcs";

/// Builds SRV query names of the form `_ldap._tcp.example.com`, or
/// `_ldap._tcp.<site>._sites.dc._msdcs.example.com` when a site is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName {
    service: Cow<'static, str>,
    site_suffix: Cow<'static, str>,
}

impl Default for ServiceName {
    fn default() -> Self {
        Self {
            service: Cow::Borrowed(LDAP_SERVICE),
            site_suffix: Cow::Borrowed(AD_SITE_SUFFIX),
        }
    }
}

impl ServiceName {
    /// Sets the leading `_service._proto` labels.
    pub fn service(self, service: impl Into<Cow<'static, str>>) -> Self {
        Self {
            service: service.into(),
            ..self
        }
    }

    /// Sets the labels inserted after the site name.
    pub fn site_suffix(self, site_suffix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            site_suffix: site_suffix.into(),
            ..self
        }
    }

    /// Builds the SRV query name for `target`.
    pub fn query_name(&self, target: &ParsedTarget) -> String {
        let mut name = String::from(&*self.service);
        if let Some(site) = target.site() {
            name.push('.');
            name.push_str(site);
            name.push('.');
            name.push_str(&self.site_suffix);
        }
        for component in target.domain_components() {
            name.push('.');
            name.push_str(component);
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_site() {
        let target = ParsedTarget::parse("ldaps:///dc=example,dc=com", None).unwrap();
        assert_eq!(
            ServiceName::default().query_name(&target),
            "_ldap._tcp.example.com"
        );
    }

    #[test]
    fn with_site() {
        let target = ParsedTarget::parse("ldap:///dc=example,dc=com", Some("site-name")).unwrap();
        assert_eq!(
            ServiceName::default().query_name(&target),
            "_ldap._tcp.site-name._sites.dc._msdcs.example.com"
        );
    }

    #[test]
    fn custom_labels() {
        let target = ParsedTarget::parse("ldap:///dc=example,dc=com", Some("hq")).unwrap();
        let name = ServiceName::default()
            .service("_gc._tcp")
            .site_suffix("_sites");
        assert_eq!(name.query_name(&target), "_gc._tcp.hq._sites.example.com");
    }
}
