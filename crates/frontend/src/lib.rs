//! A minimal server-rendered site: a home page wrapped in a root layout,
//! styled with generated utility CSS and served over HTTP.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod app;
pub mod config;
pub mod layout;
pub mod metadata;
pub mod page;
pub mod params;
pub mod routing;
pub mod server;
pub mod styling;

pub use app::{App, RouteError, default_app};
pub use config::ServerConfig;
pub use layout::{Layout, RootLayout};
pub use metadata::{Metadata, SITE_METADATA};
pub use page::{HomePage, Page, home_page};
pub use params::{Deferred, LayoutInputs, PageInputs, QueryParams, QueryValue, RouteParams};
pub use server::{router, serve, serve_on};
