//! Deterministic collaborators used by unit and behaviour tests.

use std::collections::VecDeque;

use crate::{
    CatalogRecord, CatalogStore, CatalogStoreError, InterpretError, PriceSource, QueryAttributes,
    QueryInterpreter,
};

/// In-memory `CatalogStore` implementation used in tests.
///
/// Records are returned in insertion order. A failing store reports
/// [`CatalogStoreError::Unavailable`] on every read.
#[derive(Default, Debug)]
pub struct MemoryCatalog {
    records: Vec<CatalogRecord>,
    failure: Option<String>,
}

impl MemoryCatalog {
    /// Create a store from a collection of records.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        Self {
            records: records.into_iter().collect(),
            failure: None,
        }
    }

    /// Create a store whose reads always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl CatalogStore for MemoryCatalog {
    fn all_records(&self) -> Result<Vec<CatalogRecord>, CatalogStoreError> {
        match &self.failure {
            Some(message) => Err(CatalogStoreError::unavailable(message.clone())),
            None => Ok(self.records.clone()),
        }
    }
}

/// Stub `QueryInterpreter` returning a pre-configured response for any text.
#[derive(Debug, Clone)]
pub struct StubInterpreter {
    response: Result<QueryAttributes, InterpretError>,
}

impl StubInterpreter {
    /// Create an interpreter that always returns `attributes`.
    #[must_use]
    pub const fn with_attributes(attributes: QueryAttributes) -> Self {
        Self {
            response: Ok(attributes),
        }
    }

    /// Create an interpreter that always fails with `error`.
    #[must_use]
    pub const fn with_error(error: InterpretError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl QueryInterpreter for StubInterpreter {
    fn interpret(&self, _text: &str) -> Result<QueryAttributes, InterpretError> {
        self.response.clone()
    }
}

/// `PriceSource` replaying a fixed sequence of ladder steps.
///
/// Once the sequence is exhausted it keeps returning step `0`.
#[derive(Debug, Clone, Default)]
pub struct SequencePriceSource {
    steps: VecDeque<u8>,
    draws: usize,
}

impl SequencePriceSource {
    /// Create a source replaying `steps` in order.
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        Self {
            steps: steps.into_iter().collect(),
            draws: 0,
        }
    }

    /// Return how many steps have been drawn.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl PriceSource for SequencePriceSource {
    fn next_step(&mut self) -> u8 {
        self.draws += 1;
        self.steps.pop_front().unwrap_or(0)
    }
}
