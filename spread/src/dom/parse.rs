//! Build a [`Tree`] with [`html5ever`].
use html5ever::{ParseOpts, parse_fragment, tendril::TendrilSink};
use markup5ever::{LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcData, RcDom};

use super::{Attribute, NodeData, NodeId, Tree};

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Parse `source` as the content of an implicit `<template>` wrapper.
///
/// A template context accepts any content at top level, table rows and head elements
/// included.
pub(super) fn parse(source: &str) -> Tree {
    let context = QualName::new(None, Namespace::from(HTML_NS), LocalName::from("template"));
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![]).one(source);

    let mut tree = Tree::new();
    let root = tree.root();

    // fragment parsing put the content inside a synthetic `<html>` element
    let document = dom.document.children.borrow();
    for html in document.iter() {
        for child in html.children.borrow().iter() {
            convert(&mut tree, root, child);
        }
    }

    tree
}

fn convert(tree: &mut Tree, parent: NodeId, handle: &Handle) {
    let data = match &handle.data {
        RcData::Element { name, attrs, .. } => NodeData::Element {
            name: (&*name.local).into(),
            attrs: attrs
                .borrow()
                .iter()
                .map(|attr|Attribute {
                    name: match &attr.name.prefix {
                        Some(prefix) => format!("{}:{}", prefix, attr.name.local).into(),
                        None => (&*attr.name.local).into(),
                    },
                    value: attr.value.to_string(),
                })
                .collect(),
        },
        RcData::Text { contents } => NodeData::Text(contents.borrow().to_string()),
        RcData::Comment { contents } => NodeData::Comment((&**contents).into()),
        RcData::Doctype { name, .. } => NodeData::Doctype((&**name).into()),
        RcData::Document | RcData::ProcessingInstruction { .. } => return,
    };

    let id = tree.push(data);
    tree.append(parent, id);

    for child in handle.children.borrow().iter() {
        convert(tree, id, child);
    }

    if let RcData::Element { template_contents, .. } = &handle.data {
        if let Some(contents) = template_contents.borrow().as_ref() {
            for child in contents.children.borrow().iter() {
                convert(tree, id, child);
            }
        }
    }
}
