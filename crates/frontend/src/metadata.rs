//! Document metadata surfaced in `<head>`.

use html::{DOM, NodeId};

/// Title and description for rendered documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// Metadata declared by the root layout.
pub const SITE_METADATA: Metadata = Metadata {
    title: "Frontend Template",
    description: "Next.js frontend template with Tailwind CSS",
};

impl Metadata {
    /// Append `<title>` and `<meta name="description">` to `head`.
    pub fn write_head(&self, dom: &mut DOM, head: NodeId) {
        let title = dom.append_element(head, "title");
        dom.append_text(title, self.title);
        let description = dom.append_element(head, "meta");
        dom.set_attr(description, "name", "description");
        dom.set_attr(description, "content", self.description);
    }
}
