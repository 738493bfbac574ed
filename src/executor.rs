use crate::error::Result;
use crate::types::{QueryResult, Request};

/// Performs the round trip against the server's XML/URL endpoint.
///
/// `Request::query_string` is already encoded; implementations append it to
/// the endpoint URL without touching it, then parse the response. Faults are
/// returned as-is to the facade caller.
pub trait QueryExecutor {
  fn execute(&mut self, request: &Request) -> Result<QueryResult>;
}

impl<F> QueryExecutor for F
where
  F: FnMut(&Request) -> Result<QueryResult>,
{
  fn execute(&mut self, request: &Request) -> Result<QueryResult> {
    (*self)(request)
  }
}
