#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

/*!
Locate LDAP and Active Directory servers through DNS SRV records.

# Introduction

Directory clients are often configured with a bare base DN rather than a
server, as in `ldaps:///dc=example,dc=com`. The servers for such a URL are
advertised by SRV records, as defined in
[RFC 2782](https://tools.ietf.org/html/rfc2782), under the domain spelled by
the base DN's `dc=` components:

```text
_ldap._tcp.example.com. 600 IN SRV 10 1 389 node1.example.com.
_ldap._tcp.example.com. 600 IN SRV 10 2 389 node2.example.com.
_ldap._tcp.example.com. 600 IN SRV 20 1 389 node3.example.com.
```

Active Directory additionally publishes per-site records so that clients can
prefer domain controllers close to them, e.g.
`_ldap._tcp.site-name._sites.dc._msdcs.example.com`.

[`LdapDnsProvider::resolve`] parses the URL, builds the (site-aware) SRV
name, looks it up through a [`SrvLookup`], keeps the records of the lowest
priority, and rebuilds them into URLs such as
`ldaps://node1.example.com:636/dc=example,dc=com`.

# Alternative Lookups and Selection Policies

The DNS backend and the record selection strategy can be changed by
implementing the [`SrvLookup`] and [`Policy`] traits, respectively. By
default all records of the lowest priority are returned in DNS order and
endpoints use the protocol's well-known port; see [`PortSource`] to use the
advertised port instead.

The provided lookup backends are enabled by the following features:

- `hickory` (via [`hickory_resolver::Resolver`])

[`SrvLookup`]: resolver::SrvLookup
[`Policy`]: policy::Policy
*/

mod client;
pub use client::{
    policy, resolve, Error, LdapDnsProvider, PortSource, ResolutionResult, SITE_PROPERTY,
};

mod record;
pub use record::{DecodeError, SrvRecord};

mod target;
pub use target::{ParseError, ParsedTarget, Protocol, LDAPS_PORT, LDAP_PORT};

mod query;
pub use query::{ServiceName, AD_SITE_SUFFIX, LDAP_SERVICE};

pub mod resolver;
