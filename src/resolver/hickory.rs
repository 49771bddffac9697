//! SRV lookup backed by [`hickory_resolver`].

use super::SrvLookup;
use async_trait::async_trait;
use hickory_resolver::{name_server::ConnectionProvider, ResolveError, Resolver};

#[async_trait]
impl<P> SrvLookup for Resolver<P>
where
    P: ConnectionProvider,
{
    type Error = ResolveError;

    async fn lookup_srv(&self, query_name: &str) -> Result<Vec<String>, Self::Error> {
        let lookup = match self.srv_lookup(query_name).await {
            Ok(lookup) => lookup,
            Err(e) if is_empty_answer(&e) => {
                #[cfg(feature = "log")]
                tracing::debug!(query_name, "no SRV records found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        Ok(lookup
            .iter()
            .map(|srv| {
                format!(
                    "{} {} {} {}",
                    srv.priority(),
                    srv.weight(),
                    srv.port(),
                    srv.target()
                )
            })
            .collect())
    }
}

/// Whether `e` reports a name that exists but has no SRV records (NODATA).
/// NXDOMAIN is a lookup failure, not an empty answer.
fn is_empty_answer(e: &ResolveError) -> bool {
    e.is_no_records_found() && !e.is_nx_domain()
}
