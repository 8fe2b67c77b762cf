//! Routed views.

use anyhow::Result;
use futures::future::{self, BoxFuture, FutureExt as _};
use html::DOM;

use crate::params::PageInputs;

/// A view rendered for a matched route.
///
/// Pages return a fragment; the framework hands it to the layout as children.
/// An error here means the page could not resolve its inputs.
pub trait Page: Send + Sync {
    fn render(&self, inputs: PageInputs) -> BoxFuture<'_, Result<DOM>>;
}

/// The application's default view at `/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomePage;

/// Render the home page: a centered, full-height column with a heading and a
/// muted subheading.
pub fn home_page() -> DOM {
    let mut dom = DOM::fragment();
    let root = dom.root();

    let main = dom.append_element(root, "main");
    dom.set_attr(
        main,
        "class",
        "flex min-h-screen flex-col items-center justify-center p-24",
    );

    let heading = dom.append_element(main, "h1");
    dom.set_attr(heading, "class", "text-4xl font-bold");
    dom.append_text(heading, "Frontend Template");

    let subheading = dom.append_element(main, "p");
    dom.set_attr(subheading, "class", "mt-4 text-xl text-gray-600");
    dom.append_text(subheading, "Next.js + React + Tailwind CSS");

    dom
}

impl Page for HomePage {
    fn render(&self, _inputs: PageInputs) -> BoxFuture<'_, Result<DOM>> {
        future::ready(Ok(home_page())).boxed()
    }
}
