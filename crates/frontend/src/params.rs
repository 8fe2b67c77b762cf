//! Inputs handed to pages and layouts on every request.
//!
//! Route and query parameters are produced asynchronously by the framework and
//! must be awaited before use. Resolution can fail (e.g. a path segment that is
//! not valid UTF-8 once percent-decoded); pages propagate that with `?` and the
//! framework turns it into an error response.

use core::future::{Future, IntoFuture};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use anyhow::Error;
use futures::future::{self, BoxFuture, FutureExt as _};
use html::DOM;
use url::form_urlencoded;

/// A value that becomes available later and may fail to resolve.
pub struct Deferred<T> {
    inner: BoxFuture<'static, Result<T, Error>>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Wrap a value that is already known.
    pub fn ready(value: T) -> Self {
        Self {
            inner: future::ready(Ok(value)).boxed(),
        }
    }

    /// Wrap a resolution that already failed.
    pub fn failed(error: Error) -> Self {
        Self {
            inner: future::ready(Err(error)).boxed(),
        }
    }

    /// Wrap an outcome that is already known.
    pub fn from_result(result: Result<T, Error>) -> Self {
        Self {
            inner: future::ready(result).boxed(),
        }
    }

    pub fn from_future<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, Error>> + Send + 'static,
    {
        Self { inner: fut.boxed() }
    }

    /// Await the value.
    ///
    /// # Errors
    /// Returns the resolution error produced by the framework.
    pub async fn resolve(self) -> Result<T, Error> {
        self.inner.await
    }
}

impl<T: 'static> IntoFuture for Deferred<T> {
    type Output = Result<T, Error>;
    type IntoFuture = BoxFuture<'static, Result<T, Error>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

/// Matched dynamic path segments, keyed by segment name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Value of a query parameter that is present: one value, or every value of a
/// repeated key in order of appearance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The first value.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Every value, in order.
    pub fn all(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = core::mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

/// Query string parameters. A name that was not sent is absent from the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string (without the
    /// leading `?`). Repeated names collect into [`QueryValue::Multiple`].
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            params.append(name.into_owned(), value.into_owned());
        }
        params
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(name.into()) {
            Entry::Occupied(mut slot) => slot.get_mut().push(value),
            Entry::Vacant(slot) => {
                slot.insert(QueryValue::Single(value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a routed page receives from the framework.
pub struct PageInputs {
    pub route_params: Deferred<RouteParams>,
    pub query_params: Deferred<QueryParams>,
}

impl PageInputs {
    pub fn new(route_params: Deferred<RouteParams>, query_params: Deferred<QueryParams>) -> Self {
        Self {
            route_params,
            query_params,
        }
    }

    /// Inputs with both maps already resolved to empty.
    pub fn empty() -> Self {
        Self::new(
            Deferred::ready(RouteParams::new()),
            Deferred::ready(QueryParams::new()),
        )
    }
}

/// What a layout receives: the rendered content to wrap, plus route params.
pub struct LayoutInputs {
    /// Rendered page content. Layouts place it in the shell as-is.
    pub children: DOM,
    pub route_params: Deferred<RouteParams>,
}

impl LayoutInputs {
    pub fn new(children: DOM, route_params: Deferred<RouteParams>) -> Self {
        Self {
            children,
            route_params,
        }
    }
}
