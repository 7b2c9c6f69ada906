//! HTML serialization.
use super::{NodeData, NodeId, Tree};
use crate::{Escape, Result, Writer};

/// elements without end tag
const VOID: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// elements which text content is written as is
const RAW_TEXT: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

pub(super) fn children(tree: &Tree, node: NodeId, writer: &mut impl Writer) -> Result<()> {
    for child in tree.get(node).children() {
        self::node(tree, *child, writer)?;
    }
    Ok(())
}

pub(super) fn node(tree: &Tree, node: NodeId, writer: &mut impl Writer) -> Result<()> {
    match tree.get(node).data() {
        NodeData::Root => children(tree, node, writer),
        NodeData::Element { name, attrs } => {
            writer.write_str("<")?;
            writer.write_str(name)?;
            for attr in attrs {
                writer.write_str(" ")?;
                writer.write_str(&attr.name)?;
                writer.write_str("=\"")?;
                Escape::attr(&mut *writer).write_str(&attr.value)?;
                writer.write_str("\"")?;
            }
            writer.write_str(">")?;

            if VOID.contains(&&**name) {
                return Ok(());
            }

            children(tree, node, writer)?;

            writer.write_str("</")?;
            writer.write_str(name)?;
            writer.write_str(">")
        }
        NodeData::Text(text) => {
            let raw = tree
                .get(node)
                .parent()
                .and_then(|parent|tree.name(parent))
                .is_some_and(|name|RAW_TEXT.contains(&name));

            if raw {
                writer.write_str(text)
            } else {
                Escape::text(&mut *writer).write_str(text)
            }
        }
        NodeData::Comment(comment) => {
            writer.write_str("<!--")?;
            writer.write_str(comment)?;
            writer.write_str("-->")
        }
        NodeData::Doctype(name) => {
            writer.write_str("<!DOCTYPE ")?;
            writer.write_str(name)?;
            writer.write_str(">")
        }
    }
}
