//! Request-time composition of pages and the layout.
//!
//! The `App` owns the route table and the root layout. For each request it
//! matches the path, hands the page its deferred inputs, wraps the result in
//! the layout and fills in the document head.

use core::fmt;
use std::error::Error as StdError;

use anyhow::{Error, Result};
use html::DOM;
use log::{debug, info, warn};

use crate::layout::{Layout, RootLayout};
use crate::metadata::Metadata;
use crate::page::{HomePage, Page};
use crate::params::{Deferred, LayoutInputs, PageInputs, QueryParams, RouteParams};
use crate::routing::{RoutePattern, decode_params};
use crate::styling;

/// Why a request could not be rendered.
#[derive(Debug)]
pub enum RouteError {
    /// No registered route matches the path.
    NotFound { path: String },
    /// The page failed while resolving its inputs.
    BadRequest(Error),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "no route matches {path}"),
            Self::BadRequest(err) => write!(f, "bad request: {err}"),
        }
    }
}

impl StdError for RouteError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::BadRequest(err) => Some(&**err),
        }
    }
}

struct Route {
    pattern: RoutePattern,
    page: Box<dyn Page>,
}

pub struct App {
    layout: Box<dyn Layout>,
    metadata: Metadata,
    routes: Vec<Route>,
}

impl App {
    /// Create an app around `layout`, reading its metadata once.
    pub fn new<L: Layout + 'static>(layout: L) -> Self {
        let metadata = layout.metadata();
        info!(
            "registered layout: title {:?}, description {:?}",
            metadata.title, metadata.description
        );
        Self {
            layout: Box::new(layout),
            metadata,
            routes: Vec::new(),
        }
    }

    /// Register `page` under `pattern`. Earlier routes win on overlap.
    ///
    /// # Errors
    /// Fails if the pattern is malformed.
    pub fn route<P: Page + 'static>(mut self, pattern: &str, page: P) -> Result<Self> {
        let pattern = RoutePattern::parse(pattern)?;
        info!("registered route {}", pattern.as_str());
        self.routes.push(Route {
            pattern,
            page: Box::new(page),
        });
        Ok(self)
    }

    pub const fn metadata(&self) -> Metadata {
        self.metadata
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    /// Render the full document for `path` and an optional raw query string.
    ///
    /// # Errors
    /// `NotFound` when no route matches, `BadRequest` when the page cannot
    /// resolve its inputs.
    pub async fn render(&self, path: &str, query: Option<&str>) -> Result<DOM, RouteError> {
        let (route, captures) = self
            .routes
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|captures| (route, captures)))
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_owned(),
            })?;
        debug!("{path} matched {}", route.pattern.as_str());

        let (page_params, layout_params) = deferred_params(captures);
        let raw_query = query.unwrap_or_default().to_owned();
        let query_params = Deferred::from_future(async move { Ok(QueryParams::parse(&raw_query)) });

        let children = route
            .page
            .render(PageInputs::new(page_params, query_params))
            .await
            .map_err(|err| {
                warn!("{path}: page failed to resolve its inputs: {err}");
                RouteError::BadRequest(err)
            })?;

        let shell = self.layout.render(LayoutInputs::new(children, layout_params));
        Ok(self.finish_document(&shell))
    }

    /// Prefix the doctype and fill `<head>` with charset, viewport, metadata
    /// and the generated stylesheet.
    fn finish_document(&self, shell: &DOM) -> DOM {
        let mut doc = DOM::document();
        let root = doc.root();
        doc.append_doctype(root, "html");
        doc.graft(root, shell);

        let head = match (doc.first_element_by_tag("head"), doc.first_element_by_tag("html")) {
            (Some(head), _) => head,
            (None, Some(html)) => doc.prepend_element(html, "head"),
            (None, None) => doc.append_element(root, "head"),
        };

        let charset = doc.append_element(head, "meta");
        doc.set_attr(charset, "charset", "utf-8");
        let viewport = doc.append_element(head, "meta");
        doc.set_attr(viewport, "name", "viewport");
        doc.set_attr(viewport, "content", "width=device-width, initial-scale=1");
        self.metadata.write_head(&mut doc, head);

        let css = styling::stylesheet(&doc.class_names());
        let style = doc.append_element(head, "style");
        doc.append_text(style, css);

        doc
    }
}

/// Route params for the page and for the layout.
///
/// Both sides decode the same captures, so a failure carries the full error
/// chain on each.
fn deferred_params(
    captures: Vec<(String, String)>,
) -> (Deferred<RouteParams>, Deferred<RouteParams>) {
    let for_layout = decode_params(captures.clone());
    (
        Deferred::from_result(decode_params(captures)),
        Deferred::from_result(for_layout),
    )
}

/// The application: the root layout with the home page at `/`.
///
/// # Errors
/// Fails only if a built-in route pattern is malformed.
pub fn default_app() -> Result<App> {
    App::new(RootLayout).route("/", HomePage)
}
