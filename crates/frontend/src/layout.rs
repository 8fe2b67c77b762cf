//! Document shells wrapping rendered pages.

use html::DOM;

use crate::metadata::{Metadata, SITE_METADATA};
use crate::params::LayoutInputs;

/// A wrapper that supplies the document shell around page content.
///
/// Rendering cannot fail: a layout only places `children` inside its markup.
pub trait Layout: Send + Sync {
    /// Static metadata, read once when the layout is registered.
    fn metadata(&self) -> Metadata;

    fn render(&self, inputs: LayoutInputs) -> DOM;
}

/// Top-level shell shared by every page.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootLayout;

impl Layout for RootLayout {
    fn metadata(&self) -> Metadata {
        SITE_METADATA
    }

    fn render(&self, inputs: LayoutInputs) -> DOM {
        let mut dom = DOM::document();
        let root = dom.root();

        let html = dom.append_element(root, "html");
        dom.set_attr(html, "lang", "en");
        dom.append_element(html, "head");

        let body = dom.append_element(html, "body");
        dom.set_attr(body, "class", "antialiased");
        dom.graft(body, &inputs.children);

        dom
    }
}
