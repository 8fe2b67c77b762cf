use indextree::{Arena, Node, NodeId};
use smallvec::SmallVec;

mod printing;

/// Attribute list in insertion order; most elements carry only a handful.
pub type Attrs = SmallVec<(String, String), 4>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Document,
    /// Root of a detached piece of markup (a rendered page, layout children).
    Fragment,
    Doctype { name: String },
    Element { tag: String },
    Text { text: String },
}

#[derive(Debug, Clone, Default)]
pub struct DOMNode {
    pub kind: NodeKind,
    pub attrs: Attrs,
}

impl DOMNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Attrs::new(),
        }
    }

    /// Lowercased tag name when this node is an element.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            _ => None,
        }
    }
}

/// Arena-backed DOM tree rooted at either a document or a fragment node.
#[derive(Clone)]
pub struct DOM {
    dom: Arena<DOMNode>,
    root: NodeId,
}

impl Default for DOM {
    fn default() -> Self {
        Self::document()
    }
}

impl DOM {
    fn with_root(kind: NodeKind) -> Self {
        let mut dom = Arena::new();
        Self {
            root: dom.new_node(DOMNode::new(kind)),
            dom,
        }
    }

    /// An empty document.
    pub fn document() -> Self {
        Self::with_root(NodeKind::Document)
    }

    /// An empty fragment.
    pub fn fragment() -> Self {
        Self::with_root(NodeKind::Fragment)
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&DOMNode> {
        self.dom.get(id).map(Node::get)
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.node(self.root).map(|node| &node.kind), Some(NodeKind::Fragment))
    }

    fn append(&mut self, parent: NodeId, node: DOMNode) -> NodeId {
        let id = self.dom.new_node(node);
        parent.append(id, &mut self.dom);
        id
    }

    /// Append a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let tag = tag.into().to_ascii_lowercase();
        self.append(parent, DOMNode::new(NodeKind::Element { tag }))
    }

    /// Insert a new element as the first child of `parent`.
    pub fn prepend_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let tag = tag.into().to_ascii_lowercase();
        let id = self.dom.new_node(DOMNode::new(NodeKind::Element { tag }));
        parent.prepend(id, &mut self.dom);
        id
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let text = text.into();
        self.append(parent, DOMNode::new(NodeKind::Text { text }))
    }

    pub fn append_doctype(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let name = name.into();
        self.append(parent, DOMNode::new(NodeKind::Doctype { name }))
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set_attr(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        let Some(entry) = self.dom.get_mut(node) else {
            return;
        };
        let name = name.into();
        let value = value.into();
        let attrs = &mut entry.get_mut().attrs;
        if let Some(slot) = attrs.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            attrs.push((name, value));
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.dom)
    }

    /// Deep-copy the content of `other` under `parent`.
    ///
    /// A document or fragment root contributes its children; any other root is
    /// copied as-is.
    pub fn graft(&mut self, parent: NodeId, other: &Self) {
        let is_container = matches!(
            other.node(other.root).map(|node| &node.kind),
            Some(NodeKind::Document | NodeKind::Fragment)
        );
        if is_container {
            for child in other.children(other.root) {
                self.copy_subtree(parent, other, child);
            }
        } else {
            self.copy_subtree(parent, other, other.root);
        }
    }

    fn copy_subtree(&mut self, parent: NodeId, other: &Self, source: NodeId) {
        let Some(node) = other.node(source) else {
            return;
        };
        let copied = self.append(parent, node.clone());
        for child in other.children(source) {
            self.copy_subtree(copied, other, child);
        }
    }

    /// All elements with the given tag, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.root
            .descendants(&self.dom)
            .filter(|id| {
                self.node(*id)
                    .and_then(DOMNode::tag)
                    .is_some_and(|found| found.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    pub fn first_element_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.elements_by_tag(tag).into_iter().next()
    }

    /// Concatenated text of every text node below `node`.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in node.descendants(&self.dom) {
            if let Some(DOMNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(id)
            {
                out.push_str(text);
            }
        }
        out
    }

    /// Every distinct class token used in the tree, in order of first use.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for id in self.root.descendants(&self.dom) {
            let Some(classes) = self.attr(id, "class") else {
                continue;
            };
            for class in classes.split_ascii_whitespace() {
                if !names.iter().any(|seen| seen == class) {
                    names.push(class.to_owned());
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fragment() -> DOM {
        let mut frag = DOM::fragment();
        let root = frag.root();
        let main = frag.append_element(root, "MAIN");
        frag.set_attr(main, "class", "flex p-24");
        let heading = frag.append_element(main, "h1");
        frag.append_text(heading, "Hello");
        frag
    }

    /// Tests that element tags are normalized to lowercase.
    ///
    /// # Panics
    /// Panics if the tag is not lowercased.
    #[test]
    fn tags_are_lowercased() {
        let frag = sample_fragment();
        let main = frag.first_element_by_tag("main");
        assert!(main.is_some());
        let tag = main.and_then(|id| frag.node(id)).and_then(DOMNode::tag);
        assert_eq!(tag, Some("main"));
    }

    /// Tests that setting an existing attribute replaces its value in place.
    ///
    /// # Panics
    /// Panics if the attribute is duplicated or not replaced.
    #[test]
    fn set_attr_replaces_value() {
        let mut dom = DOM::document();
        let root = dom.root();
        let html = dom.append_element(root, "html");
        dom.set_attr(html, "lang", "fr");
        dom.set_attr(html, "lang", "en");
        assert_eq!(dom.attr(html, "lang"), Some("en"));
        assert_eq!(dom.node(html).map(|node| node.attrs.len()), Some(1));
    }

    /// Tests that grafting a fragment copies its children, not the fragment root.
    ///
    /// # Panics
    /// Panics if the grafted structure differs from the source.
    #[test]
    fn graft_copies_fragment_children() {
        let frag = sample_fragment();
        let mut dom = DOM::document();
        let root = dom.root();
        let body = dom.append_element(root, "body");
        dom.graft(body, &frag);

        let children: Vec<NodeId> = dom.children(body).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.elements_by_tag("h1").len(), 1);
        assert_eq!(dom.text_content(body), "Hello");
        assert_eq!(dom.inner_html(body), frag.to_html());
    }

    /// Tests that class tokens are collected once each in order of first use.
    ///
    /// # Panics
    /// Panics if class names are missing, duplicated or reordered.
    #[test]
    fn class_names_are_deduplicated() {
        let mut frag = sample_fragment();
        let root = frag.root();
        let para = frag.append_element(root, "p");
        frag.set_attr(para, "class", "p-24  mt-4");
        assert_eq!(frag.class_names(), vec!["flex", "p-24", "mt-4"]);
    }
}
