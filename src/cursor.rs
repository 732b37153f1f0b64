//! Statement handles and row iteration.
//!
//! A `Statement` is the result handle returned by `DbInterface::execute`.
//! Metadata queries iterate its rows; inserts only close it.

use crate::error::Result;
use crate::types::Row;
use futures::Stream;
use std::future::Future;

/// Result handle of an executed statement.
///
/// The handle must be closed once the caller is done with it so the driver
/// can release the server-side cursor.
///
/// # Example
///
/// ```ignore
/// let mut stmt = db.execute("select column_name from user_tab_columns", &[]).await?;
/// while let Some(row) = stmt.next_row().await? {
///     println!("{:?}", row);
/// }
/// stmt.close().await?;
/// ```
pub trait Statement: Send {
    /// Get the next row, `Ok(None)` when exhausted.
    ///
    /// Statements that return no rows (inserts, DDL) yield `Ok(None)`
    /// immediately.
    fn next_row(&mut self) -> impl Future<Output = Result<Option<Row>>> + Send;

    /// Close the statement and release driver resources.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// Extension trait for reading a statement's rows as a `Stream`.
///
/// # Example
///
/// ```ignore
/// use futures::TryStreamExt;
///
/// let rows: Vec<Row> = stmt.rows().try_collect().await?;
/// stmt.close().await?;
/// ```
pub trait StatementStreamExt: Statement + Sized {
    /// Borrow the statement as a stream of rows.
    ///
    /// The stream ends after the last row or after the first error.
    fn rows(&mut self) -> impl Stream<Item = Result<Row>> + Send + '_;
}

impl<S: Statement> StatementStreamExt for S {
    fn rows(&mut self) -> impl Stream<Item = Result<Row>> + Send + '_ {
        use futures::stream;

        stream::unfold(Some(self), |opt_stmt| async move {
            let stmt = opt_stmt?;
            match stmt.next_row().await {
                Ok(Some(row)) => Some((Ok(row), Some(stmt))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Value;
    use futures::TryStreamExt;
    use std::collections::VecDeque;

    struct VecStatement {
        rows: VecDeque<Result<Row>>,
        closed: bool,
    }

    impl Statement for VecStatement {
        async fn next_row(&mut self) -> Result<Option<Row>> {
            self.rows.pop_front().transpose()
        }

        async fn close(&mut self) -> Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_rows_stream_collects_all() {
        let mut stmt = VecStatement {
            rows: (1..=3)
                .map(|i| Ok(Row::new(vec![Value::Integer(i)])))
                .collect(),
            closed: false,
        };

        let rows: Vec<Row> = stmt.rows().try_collect().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].get(0), Some(&Value::Integer(3)));

        stmt.close().await.unwrap();
        assert!(stmt.closed);
    }

    #[tokio::test]
    async fn test_rows_stream_stops_on_error() {
        let mut stmt = VecStatement {
            rows: VecDeque::from(vec![
                Ok(Row::new(vec![Value::Integer(1)])),
                Err(Error::database("fetch failed")),
                Ok(Row::new(vec![Value::Integer(2)])),
            ]),
            closed: false,
        };

        let result: Result<Vec<Row>> = stmt.rows().try_collect().await;
        assert!(matches!(result, Err(Error::Database { .. })));
    }
}
