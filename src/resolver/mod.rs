//! SRV resolvers.

use async_trait::async_trait;

#[cfg(feature = "hickory")]
pub mod hickory;

/// Represents the ability to look up SRV records by name.
///
/// Answers are returned in the textual form
/// `"<priority> <weight> <port> <target>"`, in the order the DNS produced
/// them. A name that exists but has no SRV records (NODATA) yields an empty
/// list; a name that does not exist (NXDOMAIN) is an error.
#[async_trait]
pub trait SrvLookup: Send + Sync {
    /// Errors encountered during SRV lookup.
    type Error: std::error::Error + 'static;

    /// Gets the raw SRV answers for `query_name`.
    async fn lookup_srv(&self, query_name: &str) -> Result<Vec<String>, Self::Error>;
}

#[async_trait]
impl<L: SrvLookup + ?Sized> SrvLookup for &L {
    type Error = L::Error;

    async fn lookup_srv(&self, query_name: &str) -> Result<Vec<String>, Self::Error> {
        (**self).lookup_srv(query_name).await
    }
}
