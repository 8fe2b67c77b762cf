//! End-to-end rendering through the app: routing, inputs, layout and head.

use anyhow::Result;
use frontend_template::{
    App, HomePage, Page, PageInputs, QueryValue, RootLayout, RouteError, SITE_METADATA,
    default_app, home_page,
};
use futures::future::{BoxFuture, FutureExt as _};
use html::DOM;

/// A page echoing its decoded slug and `tag` query values.
struct PostPage;

impl Page for PostPage {
    fn render(&self, inputs: PageInputs) -> BoxFuture<'_, Result<DOM>> {
        async move {
            let route = inputs.route_params.await?;
            let query = inputs.query_params.await?;

            let mut dom = DOM::fragment();
            let root = dom.root();
            let article = dom.append_element(root, "article");
            dom.set_attr(article, "class", "p-4");
            let heading = dom.append_element(article, "h1");
            dom.append_text(heading, route.get("slug").unwrap_or_default());
            let tags = dom.append_element(article, "p");
            let joined = query
                .get("tag")
                .map(QueryValue::all)
                .unwrap_or_default()
                .join(",");
            dom.append_text(tags, joined);
            Ok(dom)
        }
        .boxed()
    }
}

fn blog_app() -> Result<App> {
    App::new(RootLayout)
        .route("/", HomePage)?
        .route("/posts/:slug", PostPage)
}

fn head_title(doc: &DOM) -> Option<String> {
    doc.first_element_by_tag("title").map(|title| doc.text_content(title))
}

fn meta_content(doc: &DOM, name: &str) -> Option<String> {
    doc.elements_by_tag("meta")
        .into_iter()
        .find(|meta| doc.attr(*meta, "name") == Some(name))
        .and_then(|meta| doc.attr(meta, "content").map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the full document served at `/`.
    ///
    /// # Panics
    /// Panics if the document shell, head or body is wrong.
    #[tokio::test]
    async fn renders_home_document() {
        let app = default_app();
        assert!(app.is_ok(), "default app should build");
        let Ok(app) = app else {
            return;
        };
        assert_eq!(app.routes().collect::<Vec<_>>(), vec!["/"]);

        let rendered = app.render("/", None).await;
        assert!(rendered.is_ok());
        let Ok(doc) = rendered else {
            return;
        };

        let markup = doc.to_html();
        assert!(markup.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert_eq!(doc.elements_by_tag("head").len(), 1);
        assert_eq!(doc.elements_by_tag("body").len(), 1);
        assert_eq!(head_title(&doc).as_deref(), Some(SITE_METADATA.title));
        assert_eq!(
            meta_content(&doc, "description").as_deref(),
            Some(SITE_METADATA.description)
        );
        assert!(meta_content(&doc, "viewport").is_some());

        let body = doc.first_element_by_tag("body");
        assert_eq!(body.map(|node| doc.inner_html(node)), Some(home_page().to_html()));

        let css = doc
            .first_element_by_tag("style")
            .map(|style| doc.text_content(style))
            .unwrap_or_default();
        assert!(css.contains(".p-24 { padding: 6rem; }"));
        assert!(css.contains(".antialiased {"));
        assert!(css.contains(".text-gray-600 { color: #4b5563; }"));
    }

    /// Tests that metadata is identical for every route and query.
    ///
    /// # Panics
    /// Panics if any response has a different title or description.
    #[tokio::test]
    async fn metadata_on_every_route() {
        let app = blog_app();
        assert!(app.is_ok(), "blog app should build");
        let Ok(app) = app else {
            return;
        };
        let requests = [
            ("/", None),
            ("/", Some("q=1")),
            ("/", Some("tag=a&tag=b")),
            ("/posts/first", None),
            ("/posts/second/", Some("tag=x")),
        ];
        for (path, query) in requests {
            let rendered = app.render(path, query).await;
            assert!(rendered.is_ok(), "{path} should render");
            let Ok(doc) = rendered else {
                continue;
            };
            assert_eq!(head_title(&doc).as_deref(), Some("Frontend Template"), "{path}");
            assert_eq!(
                meta_content(&doc, "description").as_deref(),
                Some("Next.js frontend template with Tailwind CSS"),
                "{path}"
            );
            assert_eq!(doc.elements_by_tag("title").len(), 1);
        }
    }

    /// Tests that the home page output does not depend on the query.
    ///
    /// # Panics
    /// Panics if two renders of `/` differ.
    #[tokio::test]
    async fn home_ignores_query() {
        let app = default_app();
        assert!(app.is_ok(), "default app should build");
        let Ok(app) = app else {
            return;
        };
        let plain = app.render("/", None).await.ok().map(|doc| doc.to_html());
        let queried = app
            .render("/", Some("a=1&a=2&b="))
            .await
            .ok()
            .map(|doc| doc.to_html());
        assert!(plain.is_some());
        assert_eq!(plain, queried);
    }

    /// Tests that route and query params reach the page decoded.
    ///
    /// # Panics
    /// Panics if the page sees raw or missing values.
    #[tokio::test]
    async fn params_reach_page() {
        let app = blog_app();
        assert!(app.is_ok(), "blog app should build");
        let Ok(app) = app else {
            return;
        };
        let rendered = app
            .render("/posts/hello%20world", Some("tag=rust&tag=web+dev"))
            .await;
        assert!(rendered.is_ok(), "post should render");
        let Ok(doc) = rendered else {
            return;
        };
        let heading = doc.first_element_by_tag("h1");
        assert_eq!(
            heading.map(|node| doc.text_content(node)).as_deref(),
            Some("hello world")
        );
        let tags = doc.first_element_by_tag("p");
        assert_eq!(
            tags.map(|node| doc.text_content(node)).as_deref(),
            Some("rust,web dev")
        );
    }

    /// Tests that unknown paths are reported as not found.
    ///
    /// # Panics
    /// Panics if an unknown path renders.
    #[tokio::test]
    async fn unknown_path_not_found() {
        let app = blog_app();
        assert!(app.is_ok(), "blog app should build");
        let Ok(app) = app else {
            return;
        };
        for path in ["/about", "/posts", "/posts/a/b"] {
            let result = app.render(path, None).await;
            assert!(
                matches!(result, Err(RouteError::NotFound { .. })),
                "{path} should not match"
            );
        }
    }

    /// Tests that a slug that is not UTF-8 fails as a bad request.
    ///
    /// # Panics
    /// Panics if the page renders or the error kind is wrong.
    #[tokio::test]
    async fn invalid_slug_bad_request() {
        let app = blog_app();
        assert!(app.is_ok(), "blog app should build");
        let Ok(app) = app else {
            return;
        };
        let result = app.render("/posts/%FF", None).await;
        assert!(matches!(result, Err(RouteError::BadRequest(_))));
        if let Err(err) = result {
            assert!(err.to_string().starts_with("bad request"));
        }
    }

    /// Tests that malformed route patterns are rejected at registration.
    ///
    /// # Panics
    /// Panics if a malformed pattern is accepted.
    #[test]
    fn rejects_malformed_routes() {
        assert!(App::new(RootLayout).route("posts", PostPage).is_err());
        assert!(App::new(RootLayout).route("/posts/:", PostPage).is_err());
    }
}
