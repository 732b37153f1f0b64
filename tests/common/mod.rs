//! In-memory database interface for integration tests.
#![allow(dead_code)]

use data_factory_rs::{Bind, DbInterface, Error, Result, Row, Statement, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A metadata row: name, type, length, precision, scale, position, nullable.
pub fn column_row(
    name: &str,
    data_type: &str,
    length: i64,
    precision: Option<i64>,
    scale: Option<i64>,
    position: i64,
    nullable: &str,
) -> Row {
    Row::new(vec![
        Value::from(name),
        Value::from(data_type),
        Value::from(length),
        Value::from(precision),
        Value::from(scale),
        Value::from(position),
        Value::from(nullable),
    ])
}

/// The FOOBAR fixture table.
pub fn fixture_rows() -> Vec<Row> {
    vec![
        column_row("col1", "varchar2", 20, None, None, 1, "Y"),
        column_row("col2", "number", 20, Some(9), Some(2), 2, "Y"),
        column_row("col3", "DATE", 20, None, None, 3, "N"),
        column_row("col4", "varchar2", 20, None, None, 4, "N"),
        column_row("col5", "integer", 20, Some(38), Some(0), 5, "N"),
        column_row("col6", "number", 20, Some(20), Some(5), 6, "N"),
    ]
}

#[derive(Default)]
struct MockState {
    opened: usize,
    executed: Vec<(String, Vec<Bind>)>,
    closed: usize,
    commits: usize,
}

/// Records every statement and commit; answers dictionary queries with a
/// fixed set of metadata rows.
pub struct MockInterface {
    metadata_rows: Vec<Row>,
    fail_inserts: bool,
    state: Arc<Mutex<MockState>>,
}

impl MockInterface {
    pub fn new(metadata_rows: Vec<Row>) -> Self {
        Self {
            metadata_rows,
            fail_inserts: false,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    pub fn fixture() -> Self {
        Self::new(fixture_rows())
    }

    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn executed(&self) -> Vec<(String, Vec<Bind>)> {
        self.state.lock().unwrap().executed.clone()
    }

    pub fn metadata_queries(&self) -> usize {
        self.executed()
            .iter()
            .filter(|(sql, _)| sql.contains("user_tab_columns"))
            .count()
    }

    pub fn inserts(&self) -> Vec<(String, Vec<Bind>)> {
        self.executed()
            .into_iter()
            .filter(|(sql, _)| sql.starts_with("insert"))
            .collect()
    }

    /// Number of statements closed so far.
    pub fn closed(&self) -> usize {
        self.state.lock().unwrap().closed
    }

    /// Check that every statement handed out has been closed.
    pub fn all_statements_closed(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.closed == state.opened
    }

    pub fn commits(&self) -> usize {
        self.state.lock().unwrap().commits
    }
}

impl DbInterface for MockInterface {
    type Statement = MockStatement;

    async fn execute(&self, sql: &str, binds: &[Bind]) -> Result<MockStatement> {
        self.state
            .lock()
            .unwrap()
            .executed
            .push((sql.to_string(), binds.to_vec()));

        if !sql.contains("user_tab_columns") && self.fail_inserts {
            return Err(Error::database("ORA-00001: unique constraint violated"));
        }

        let rows = if sql.contains("user_tab_columns") {
            self.metadata_rows.iter().cloned().collect()
        } else {
            VecDeque::new()
        };
        self.state.lock().unwrap().opened += 1;
        Ok(MockStatement {
            rows,
            state: self.state.clone(),
        })
    }

    async fn commit(&self) -> Result<()> {
        self.state.lock().unwrap().commits += 1;
        Ok(())
    }
}

pub struct MockStatement {
    rows: VecDeque<Row>,
    state: Arc<Mutex<MockState>>,
}

impl Statement for MockStatement {
    async fn next_row(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.pop_front())
    }

    async fn close(&mut self) -> Result<()> {
        self.state.lock().unwrap().closed += 1;
        Ok(())
    }
}

/// Install a test log subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
