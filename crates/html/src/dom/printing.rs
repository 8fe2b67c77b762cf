use core::fmt;

use super::{DOM, DOMNode, NodeKind};
use indextree::NodeId;

use serde_json::{Map, Value, json};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text children are emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

// -----------------------
// Module-scope helpers
// -----------------------

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

fn write_markup(dom: &DOM, id: NodeId, raw_text: bool, out: &mut String) {
    let Some(DOMNode { kind, attrs }) = dom.node(id) else {
        return;
    };
    match kind {
        NodeKind::Document | NodeKind::Fragment => {
            for child in dom.children(id) {
                write_markup(dom, child, false, out);
            }
        }
        NodeKind::Doctype { name } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        NodeKind::Element { tag } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attrs.iter() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            let raw = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
            for child in dom.children(id) {
                write_markup(dom, child, raw, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        NodeKind::Text { text } => {
            if raw_text {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
    }
}

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn coalesce_children(dom: &DOM, id: NodeId) -> Vec<Value> {
    let mut children: Vec<Value> = Vec::new();
    let mut text_buf = String::new();
    for child in dom.children(id) {
        if let Some(DOMNode {
            kind: NodeKind::Text { text },
            ..
        }) = dom.node(child)
        {
            text_buf.push_str(text);
            continue;
        }
        flush_text(&mut children, &mut text_buf);
        let value = node_to_json(dom, child);
        if !value.is_null() {
            children.push(value);
        }
    }
    flush_text(&mut children, &mut text_buf);
    children
}

fn node_to_json(dom: &DOM, id: NodeId) -> Value {
    let Some(DOMNode { kind, attrs }) = dom.node(id) else {
        return Value::Null;
    };
    match kind {
        NodeKind::Document => json!({ "type": "document", "children": coalesce_children(dom, id) }),
        NodeKind::Fragment => json!({ "type": "fragment", "children": coalesce_children(dom, id) }),
        NodeKind::Doctype { name } => json!({ "type": "doctype", "name": name }),
        NodeKind::Element { tag } => {
            // Sorted by key for determinism
            let mut pairs: Vec<&(String, String)> = attrs.iter().collect();
            pairs.sort_by(|left, right| left.0.cmp(&right.0));
            let mut attrs_obj = Map::new();
            for (key, value) in pairs {
                attrs_obj.insert(key.clone(), Value::String(value.clone()));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": coalesce_children(dom, id),
            })
        }
        NodeKind::Text { text } => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                json!({ "type": "text", "text": text })
            }
        }
    }
}

impl fmt::Debug for DOM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        fn fmt_node(dom: &DOM, id: NodeId, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            let Some(DOMNode { kind, attrs }) = dom.node(id) else {
                return Ok(());
            };
            write_indent(f, depth)?;
            match kind {
                NodeKind::Document => writeln!(f, "#document")?,
                NodeKind::Fragment => writeln!(f, "#fragment")?,
                NodeKind::Doctype { name } => writeln!(f, "<!DOCTYPE {name}>")?,
                NodeKind::Element { tag } => {
                    write!(f, "<{tag}")?;
                    for (name, value) in attrs.iter() {
                        write!(f, " {name}={value:?}")?;
                    }
                    writeln!(f, ">")?;
                }
                NodeKind::Text { text } => writeln!(f, "{text:?}")?,
            }
            for child in dom.children(id) {
                fmt_node(dom, child, f, depth + 1)?;
            }
            Ok(())
        }

        writeln!(f, "DOM")?;
        fmt_node(self, self.root, f, 0)
    }
}

impl DOM {
    /// Serialize the whole tree to HTML markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_markup(self, self.root, false, &mut out);
        out
    }

    /// Serialize the children of `node` (its content, without its own tags).
    pub fn inner_html(&self, node: NodeId) -> String {
        let raw = self
            .node(node)
            .and_then(DOMNode::tag)
            .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
        let mut out = String::new();
        for child in self.children(node) {
            write_markup(self, child, raw, &mut out);
        }
        out
    }

    /// Build a deterministic JSON representation of the DOM.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Fragment: { "type":"fragment", "children":[ ... ] }
    /// - Doctype: { "type":"doctype", "name":"html" }
    /// - Element: { "type":"element", "tag": "div", "attrs": {..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    pub fn to_json_value(&self) -> Value {
        node_to_json(self, self.root)
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_else(|_| String::from("{}"))
    }
}
