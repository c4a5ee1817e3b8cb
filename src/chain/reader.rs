//! The contract-read primitive seam.

use async_trait::async_trait;

use crate::chain::Value;
use crate::domain::Address;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Generic read-only contract call: a function on a contract at an
/// address with positional arguments, settling to a positional tuple.
///
/// Implementations are supplied externally (a wallet/provider bridge in
/// the real application, [`FixtureReader`](crate::chain::FixtureReader)
/// for the CLI and tests). Reads carry no timeout at this layer; that is
/// left to the implementation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Call a read-only function and return its raw result tuple.
    async fn read(
        &self,
        contract: &Address,
        function: &str,
        args: Vec<Value>,
    ) -> AppResult<Vec<Value>>;
}
