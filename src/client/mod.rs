//! Resolution of directory URLs into server endpoints.

use crate::{
    query::ServiceName,
    record::DecodeError,
    resolver::SrvLookup,
    target::{ParseError, ParsedTarget},
    SrvRecord,
};
use std::{collections::HashMap, fmt::Debug};

/// SRV record selection policies.
pub mod policy;

/// Environment key holding the Active Directory site to prefer.
pub const SITE_PROPERTY: &str = "com.github.marschall.siteawareldapsprovider.site";

/// Errors encountered by a [`LdapDnsProvider`].
#[derive(Debug, thiserror::Error)]
pub enum Error<Lookup: Debug> {
    /// Directory URL parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// SRV answer decoding errors
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// SRV lookup errors
    #[error("SRV lookup error")]
    Lookup(Lookup),
}

/// Where the port of an endpoint URL comes from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PortSource {
    /// The well-known port of the URL's protocol (389 or 636).
    #[default]
    ProtocolDefault,
    /// The port advertised by the SRV record.
    Record,
}

/// Outcome of resolving a directory URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    domain_name: String,
    endpoints: Vec<String>,
}

impl ResolutionResult {
    /// Gets the domain the lookup was made for, e.g. `example.com`.
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Gets the endpoint URLs, most preferred first. Empty if DNS had no
    /// SRV records for the domain.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Splits the result into its domain name and endpoints.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.domain_name, self.endpoints)
    }
}

/// Resolves `ldap:///` and `ldaps:///` base-DN URLs into concrete server
/// URLs using (optionally site-aware) DNS SRV records.
///
/// # Usage
///
/// After being created by [`LdapDnsProvider::new`] or
/// [`LdapDnsProvider::new_with_lookup`], URLs are resolved with
/// [`resolve`] or [`lookup_endpoints`].
///
/// ## DNS Lookups
///
/// SRV records are fetched by the provider's [`SrvLookup`], which can be set
/// with [`LdapDnsProvider::lookup`].
///
/// ## Selection Policies
///
/// Which records become endpoints is determined by a provider's [`Policy`],
/// and can be set with [`LdapDnsProvider::policy`].
///
/// [`resolve`]: LdapDnsProvider::resolve()
/// [`lookup_endpoints`]: LdapDnsProvider::lookup_endpoints()
/// [`Policy`]: policy::Policy
#[derive(Debug)]
pub struct LdapDnsProvider<Lookup, Policy: policy::Policy = policy::LowestPriority> {
    lookup: Lookup,
    service_name: ServiceName,
    site: Option<String>,
    port_source: PortSource,
    policy: Policy,
}

impl<Lookup: Default, Policy: policy::Policy + Default> LdapDnsProvider<Lookup, Policy> {
    /// Creates a new provider using a default-constructed lookup.
    pub fn new() -> Self {
        Self::new_with_lookup(Lookup::default())
    }
}

impl<Lookup: Default, Policy: policy::Policy + Default> Default
    for LdapDnsProvider<Lookup, Policy>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Lookup, Policy: policy::Policy + Default> LdapDnsProvider<Lookup, Policy> {
    /// Creates a new provider that queries SRV records through `lookup`.
    pub fn new_with_lookup(lookup: Lookup) -> Self {
        Self {
            lookup,
            service_name: ServiceName::default(),
            site: None,
            port_source: PortSource::default(),
            policy: Default::default(),
        }
    }
}

impl<Lookup: SrvLookup, Policy: policy::Policy> LdapDnsProvider<Lookup, Policy> {
    /// Resolves `url` into endpoint URLs.
    ///
    /// A non-empty `site` overrides the provider's configured site for this
    /// call; when both are absent the domain-wide SRV name is queried.
    pub async fn resolve(
        &self,
        url: &str,
        site: Option<&str>,
    ) -> Result<ResolutionResult, Error<Lookup::Error>> {
        let site = site.filter(|s| !s.is_empty()).or(self.site.as_deref());
        let target = ParsedTarget::parse(url, site)?;
        let query_name = self.service_name.query_name(&target);

        #[cfg(feature = "log")]
        tracing::trace!(url, %query_name, "looking up SRV records");

        let answers = self
            .lookup
            .lookup_srv(&query_name)
            .await
            .map_err(Error::Lookup)?;
        let records = answers
            .iter()
            .map(|raw| SrvRecord::decode(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let endpoints = self.select(&target, &records);

        #[cfg(feature = "log")]
        tracing::debug!(
            %query_name,
            records = records.len(),
            endpoints = endpoints.len(),
            "resolved directory endpoints"
        );

        Ok(ResolutionResult {
            domain_name: target.domain_name().to_owned(),
            endpoints,
        })
    }

    /// Resolves `url`, reading the site from `env` under [`SITE_PROPERTY`].
    pub async fn lookup_endpoints(
        &self,
        url: &str,
        env: &HashMap<String, String>,
    ) -> Result<ResolutionResult, Error<Lookup::Error>> {
        self.resolve(url, env.get(SITE_PROPERTY).map(String::as_str))
            .await
    }
}

impl<Lookup, Policy: policy::Policy> LdapDnsProvider<Lookup, Policy> {
    /// Converts the records chosen by the provider's policy into endpoint
    /// URLs for `target`.
    pub fn select(&self, target: &ParsedTarget, records: &[SrvRecord]) -> Vec<String> {
        self.policy
            .select(records)
            .into_iter()
            .map(|record| {
                let port = match self.port_source {
                    PortSource::ProtocolDefault => target.protocol().default_port(),
                    PortSource::Record => record.port(),
                };
                target.endpoint_url(record.host(), port)
            })
            .collect()
    }

    /// Sets the SRV naming scheme of the provider.
    pub fn service_name(self, service_name: ServiceName) -> Self {
        Self {
            service_name,
            ..self
        }
    }

    /// Sets the default Active Directory site of the provider.
    pub fn site(self, site: impl ToString) -> Self {
        Self {
            site: Some(site.to_string()),
            ..self
        }
    }

    /// Sets where endpoint ports come from.
    pub fn port_source(self, port_source: PortSource) -> Self {
        Self {
            port_source,
            ..self
        }
    }

    /// Sets the lookup of the provider.
    pub fn lookup<L>(self, lookup: L) -> LdapDnsProvider<L, Policy> {
        LdapDnsProvider {
            lookup,
            service_name: self.service_name,
            site: self.site,
            port_source: self.port_source,
            policy: self.policy,
        }
    }

    /// Sets the policy of the provider.
    pub fn policy<P: policy::Policy>(self, policy: P) -> LdapDnsProvider<Lookup, P> {
        LdapDnsProvider {
            policy,
            lookup: self.lookup,
            service_name: self.service_name,
            site: self.site,
            port_source: self.port_source,
        }
    }
}

/// Resolves `url` with the default naming scheme, ports, and policy.
pub async fn resolve<L: SrvLookup>(
    url: &str,
    site: Option<&str>,
    lookup: L,
) -> Result<ResolutionResult, Error<L::Error>> {
    LdapDnsProvider::<L>::new_with_lookup(lookup)
        .resolve(url, site)
        .await
}
