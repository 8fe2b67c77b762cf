//! Markup parsing on top of html5ever.
//!
//! The parser builds an `RcDom` first and then walks it into our arena `DOM`,
//! dropping comments, processing instructions and whitespace-only text.

use crate::dom::DOM;
use anyhow::Result;
use html5ever::tendril::TendrilSink as _;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document as html5ever_parse_document};
use indextree::NodeId;
use log::trace;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

fn parse_rc(markup: &str) -> Result<RcDom> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            exact_errors: false,
            scripting_enabled: false,
            ..TreeBuilderOpts::default()
        },
        ..ParseOpts::default()
    };
    let rc_dom = html5ever_parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut markup.as_bytes())?;
    Ok(rc_dom)
}

fn walk_tree(handle: &Handle, parent: NodeId, dom: &mut DOM) {
    match &handle.data {
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                walk_tree(child, parent, dom);
            }
        }
        NodeData::Doctype { name, .. } => {
            dom.append_doctype(parent, name.to_string());
        }
        NodeData::Element { name, attrs, .. } => {
            let node = dom.append_element(parent, name.local.to_string());
            for attr in attrs.borrow().iter() {
                dom.set_attr(node, attr.name.local.to_string(), attr.value.to_string());
            }
            for child in handle.children.borrow().iter() {
                walk_tree(child, node, dom);
            }
        }
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                dom.append_text(parent, text);
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data
        && &*name.local == tag
    {
        return Some(Handle::clone(handle));
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

/// Parse a complete HTML document.
///
/// html5ever is error-tolerant, so malformed markup still yields a tree; the
/// implied `html`, `head` and `body` elements are always present.
///
/// # Errors
/// Returns an error if the input cannot be read by the parser.
pub fn parse_document(markup: &str) -> Result<DOM> {
    let rc_dom = parse_rc(markup)?;
    let mut dom = DOM::document();
    let root = dom.root();
    walk_tree(&rc_dom.document, root, &mut dom);
    trace!("parsed document: {} bytes of markup", markup.len());
    Ok(dom)
}

/// Parse a piece of body content into a fragment.
///
/// # Errors
/// Returns an error if the input cannot be read by the parser.
pub fn parse_fragment(markup: &str) -> Result<DOM> {
    let rc_dom = parse_rc(markup)?;
    let mut dom = DOM::fragment();
    let root = dom.root();
    if let Some(body) = find_element(&rc_dom.document, "body") {
        for child in body.children.borrow().iter() {
            walk_tree(child, root, &mut dom);
        }
    }
    Ok(dom)
}
