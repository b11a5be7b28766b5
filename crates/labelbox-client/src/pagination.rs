// crates/labelbox-client/src/pagination.rs
// ============================================================================
// Module: Labelbox Pagination Engine
// Description: Generic paginated fetch over GraphQL relationships.
// Purpose: Walk cursor- and offset-paged relationships as a node iterator.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`PaginatedCollection`] iterates every node of a paginated GraphQL
//! relationship, fetching pages lazily through an [`Execute`] implementation.
//! Two paging modes exist, matching the API's two relationship shapes:
//! - cursor mode: the document declares `($from: ID, $first: PageSize)` and
//!   each response carries a `nextCursor`; a null cursor ends iteration;
//! - offset mode: the stored document carries `skip: %d first: %d`
//!   placeholders substituted per page; a short page ends iteration.
//!
//! Invariants:
//! - Nodes are yielded in server order; a fetch error ends the iterator after
//!   yielding that error once.
//! - `deref_path` must address an array in every page response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::VecDeque;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::client::Execute;
use crate::error::ClientError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Nodes requested per page unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 100;

// ============================================================================
// SECTION: Node Conversion
// ============================================================================

/// Converts a GraphQL node into a typed value.
pub trait FromNode: Sized {
    /// Builds `Self` from one node of a paginated response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::JsonParse`] when the node does not match the
    /// expected shape.
    fn from_node(node: Value) -> Result<Self, ClientError>;
}

impl<T> FromNode for T
where
    T: DeserializeOwned,
{
    fn from_node(node: Value) -> Result<Self, ClientError> {
        serde_json::from_value(node).map_err(|err| ClientError::JsonParse(err.to_string()))
    }
}

// ============================================================================
// SECTION: Paginated Collection
// ============================================================================

/// Lazy iterator over all nodes of a paginated GraphQL relationship.
///
/// # Invariants
/// - Exactly one of the two paging modes is active: cursor mode when a
///   cursor path was supplied, offset mode otherwise.
/// - Once a fetch fails or the final page is seen, no further requests are
///   issued.
pub struct PaginatedCollection<'a, T> {
    /// Transport the pages are fetched through.
    client: &'a dyn Execute,
    /// GraphQL document, or document template in offset mode.
    query: String,
    /// Base variables merged into every page request.
    variables: Map<String, Value>,
    /// Path from the response root to the node array.
    deref_path: Vec<String>,
    /// Path from the response root to the next cursor (cursor mode only).
    cursor_path: Option<Vec<String>>,
    /// Whether pages are fetched through the experimental transport.
    experimental: bool,
    /// Nodes requested per page.
    page_size: usize,
    /// Nodes skipped so far (offset mode).
    skip: usize,
    /// Cursor returned by the previous page (cursor mode).
    cursor: Option<String>,
    /// Nodes fetched but not yet yielded.
    buffer: VecDeque<Value>,
    /// Whether the final page has been consumed.
    done: bool,
    /// Node type marker.
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> PaginatedCollection<'a, T> {
    /// Creates a cursor-paged collection.
    ///
    /// The document must declare `($from: ID, $first: PageSize)`; the engine
    /// feeds `nextCursor` values back as `$from`.
    pub fn cursor(
        client: &'a dyn Execute,
        query: impl Into<String>,
        variables: Map<String, Value>,
        deref_path: &[&str],
        cursor_path: &[&str],
    ) -> Self {
        Self {
            client,
            query: query.into(),
            variables,
            deref_path: deref_path.iter().map(ToString::to_string).collect(),
            cursor_path: Some(cursor_path.iter().map(ToString::to_string).collect()),
            experimental: false,
            page_size: DEFAULT_PAGE_SIZE,
            skip: 0,
            cursor: None,
            buffer: VecDeque::new(),
            done: false,
            _marker: PhantomData,
        }
    }

    /// Creates an offset-paged collection.
    ///
    /// The document template must carry `skip: %d first: %d` placeholders.
    pub fn offset(
        client: &'a dyn Execute,
        query: impl Into<String>,
        variables: Map<String, Value>,
        deref_path: &[&str],
    ) -> Self {
        Self {
            client,
            query: query.into(),
            variables,
            deref_path: deref_path.iter().map(ToString::to_string).collect(),
            cursor_path: None,
            experimental: false,
            page_size: DEFAULT_PAGE_SIZE,
            skip: 0,
            cursor: None,
            buffer: VecDeque::new(),
            done: false,
            _marker: PhantomData,
        }
    }

    /// Routes page fetches through the experimental transport.
    #[must_use]
    pub const fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }

    /// Overrides the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builds the document and variables for the next page request.
    fn prepare_request(&self) -> (String, Map<String, Value>) {
        if self.cursor_path.is_some() {
            let mut variables = self.variables.clone();
            variables.insert("first".to_string(), json!(self.page_size));
            if let Some(cursor) = &self.cursor {
                variables.insert("from".to_string(), json!(cursor));
            }
            (self.query.clone(), variables)
        } else {
            let query = substitute_page_bounds(&self.query, self.skip, self.page_size);
            (query, self.variables.clone())
        }
    }

    /// Fetches the next page into the buffer and updates paging state.
    fn fetch_page(&mut self) -> Result<(), ClientError> {
        let (query, variables) = self.prepare_request();
        let data = if self.experimental {
            self.client.execute_experimental(&query, Value::Object(variables))?
        } else {
            self.client.execute(&query, Value::Object(variables))?
        };

        let nodes = walk_path(&data, &self.deref_path)?
            .as_array()
            .cloned()
            .ok_or_else(|| {
                ClientError::JsonParse("paginated relationship is not an array".to_string())
            })?;

        if let Some(cursor_path) = &self.cursor_path {
            match walk_path(&data, cursor_path)? {
                Value::Null => self.done = true,
                Value::String(cursor) => self.cursor = Some(cursor.clone()),
                _ => {
                    return Err(ClientError::JsonParse(
                        "next cursor is neither a string nor null".to_string(),
                    ));
                }
            }
        } else {
            if nodes.len() < self.page_size {
                self.done = true;
            }
            self.skip += self.page_size;
        }

        if nodes.is_empty() {
            self.done = true;
        }
        self.buffer.extend(nodes);
        Ok(())
    }
}

impl<T> Iterator for PaginatedCollection<'_, T>
where
    T: FromNode,
{
    type Item = Result<T, ClientError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.buffer.pop_front() {
                return Some(T::from_node(node));
            }
            if self.done {
                return None;
            }
            if let Err(err) = self.fetch_page() {
                self.done = true;
                return Some(Err(err));
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Substitutes the `skip: %d first: %d` placeholders of an offset template.
pub(crate) fn substitute_page_bounds(template: &str, skip: usize, first: usize) -> String {
    template
        .replacen("%d", &skip.to_string(), 1)
        .replacen("%d", &first.to_string(), 1)
}

/// Resolves a dotted path inside a response value.
pub(crate) fn walk_path<'v>(value: &'v Value, path: &[String]) -> Result<&'v Value, ClientError> {
    let mut current = value;
    for segment in path {
        current = current.get(segment).ok_or_else(|| {
            ClientError::JsonParse(format!("missing field `{segment}` in paginated response"))
        })?;
    }
    Ok(current)
}
