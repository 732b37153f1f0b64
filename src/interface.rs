//! Database interface contract.
//!
//! The factory does not talk to a database itself. It drives any driver that
//! can execute a statement with positional binds, iterate result rows and
//! commit. Implementations typically wrap a connection in a mutex, since the
//! interface is shared by every table binding derived from the same root.

use crate::cursor::Statement;
use crate::error::Result;
use crate::types::Bind;
use std::future::Future;

/// Database access used by table bindings and records.
///
/// # Example
///
/// ```ignore
/// struct OracleInterface {
///     conn: tokio::sync::Mutex<Connection>,
/// }
///
/// impl DbInterface for OracleInterface {
///     type Statement = OracleStatement;
///
///     async fn execute(&self, sql: &str, binds: &[Bind]) -> Result<OracleStatement> {
///         let mut conn = self.conn.lock().await;
///         // bind and execute via the driver ...
///     }
///
///     async fn commit(&self) -> Result<()> {
///         self.conn.lock().await.commit().await.map_err(|e| Error::database(e.to_string()))
///     }
/// }
/// ```
pub trait DbInterface: Send + Sync {
    /// Result handle returned by `execute`.
    type Statement: Statement;

    /// Execute a statement with positional binds.
    ///
    /// Used both for dictionary queries, whose rows are read from the
    /// returned handle, and for parameterized inserts. Typed NULL binds
    /// must be bound as NULLs of the given host type.
    fn execute(
        &self,
        sql: &str,
        binds: &[Bind],
    ) -> impl Future<Output = Result<Self::Statement>> + Send;

    /// Commit the current transaction.
    fn commit(&self) -> impl Future<Output = Result<()>> + Send;
}
