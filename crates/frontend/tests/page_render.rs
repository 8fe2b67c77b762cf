//! Rendering tests for the home page.

use frontend_template::{
    Deferred, HomePage, Page as _, PageInputs, QueryParams, RouteParams, home_page,
};
use html::{DOM, parse_fragment};

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_with(query: &str) -> Option<DOM> {
        let inputs = PageInputs::new(
            Deferred::ready(RouteParams::new()),
            Deferred::ready(QueryParams::parse(query)),
        );
        HomePage.render(inputs).await.ok()
    }

    /// Tests that the page has one heading and one subheading inside `main`.
    ///
    /// # Panics
    /// Panics if the structure or text differs.
    #[test]
    fn home_page_structure() {
        let dom = home_page();
        assert!(dom.is_fragment());

        let mains = dom.elements_by_tag("main");
        assert_eq!(mains.len(), 1);
        let headings = dom.elements_by_tag("h1");
        assert_eq!(headings.len(), 1);
        let paragraphs = dom.elements_by_tag("p");
        assert_eq!(paragraphs.len(), 1);

        if let (Some(heading), Some(paragraph)) = (headings.first(), paragraphs.first()) {
            assert_eq!(dom.text_content(*heading), "Frontend Template");
            assert_eq!(dom.text_content(*paragraph), "Next.js + React + Tailwind CSS");
            assert_eq!(dom.attr(*heading, "class"), Some("text-4xl font-bold"));
            assert_eq!(dom.attr(*paragraph, "class"), Some("mt-4 text-xl text-gray-600"));
        }
    }

    /// Tests that the page output is the same for every input it receives.
    ///
    /// # Panics
    /// Panics if two renders differ.
    #[tokio::test]
    async fn render_ignores_inputs() {
        let plain = render_with("").await.map(|dom| dom.to_json_string());
        let with_query = render_with("q=rust&tag=a&tag=b").await.map(|dom| dom.to_json_string());
        assert!(plain.is_some());
        assert_eq!(plain, with_query);
        assert_eq!(plain, Some(home_page().to_json_string()));

        let empty = HomePage.render(PageInputs::empty()).await.ok().map(|dom| dom.to_html());
        assert_eq!(empty, Some(home_page().to_html()));
    }

    /// Tests that the serialized page parses back to the same tree.
    ///
    /// # Panics
    /// Panics if reparsing changes the markup.
    #[test]
    fn markup_reparses() {
        let markup = home_page().to_html();
        let reparsed = parse_fragment(&markup).ok().map(|dom| dom.to_html());
        assert_eq!(reparsed, Some(markup));
    }
}
