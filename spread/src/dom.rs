//! The markup tree.
//!
//! [`Tree`] is an arena of [`Node`] records addressed by [`NodeId`]. Editing a tree is editing
//! children lists, cloning a tree is cloning the arena, so clones never alias each other.
//!
//! Detached nodes stay in the arena but are unreachable from [`Tree::root`].
use spread_core::Selector;

use crate::{Result, Writer};

mod parse;
mod serialize;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A node record.
#[derive(Debug, Clone)]
pub struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }
}

/// Node content.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// The implicit wrapper of top level nodes.
    Root,
    Element {
        name: Box<str>,
        attrs: Vec<Attribute>,
    },
    Text(String),
    Comment(Box<str>),
    Doctype(Box<str>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: Box<str>,
    pub value: String,
}

/// A [`Tree::select`] result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// element and attribute name
    Attr(NodeId, Box<str>),
    Text(NodeId),
}

/// An arena markup tree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree containing only the root.
    pub fn new() -> Tree {
        Tree {
            nodes: vec![Node { parent: None, children: vec![], data: NodeData::Root }],
        }
    }

    /// Parse markup as the children of the root.
    ///
    /// Parsing never fails, malformed markup is recovered the way browsers do.
    pub fn parse(source: &str) -> Tree {
        parse::parse(source)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent: None, children: vec![], data });
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Element { name: name.into(), attrs: vec![] })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `node` right before `reference`, does nothing if `reference` has no parent.
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) {
        self.detach(node);
        let Some(parent) = self.nodes[reference.0].parent else {
            return;
        };
        let children = &mut self.nodes[parent.0].children;
        let Some(at) = children.iter().position(|e|*e == reference) else {
            return;
        };
        children.insert(at, node);
        self.nodes[node.0].parent = Some(parent);
    }

    /// Remove `node` from its parent.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes[node.0].parent.take() else {
            return;
        };
        self.nodes[parent.0].children.retain(|e|*e != node);
    }

    /// Replace `node` with one fresh text node per item, in order.
    pub fn replace_with_texts<I, S>(&mut self, node: NodeId, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for text in texts {
            let text = self.create_text(text);
            self.insert_before(node, text);
        }
        self.detach(node);
    }

    /// Copy top level nodes of `other` right before `reference`.
    pub fn graft_before(&mut self, reference: NodeId, other: &Tree) {
        for child in other.get(other.root()).children() {
            let copy = self.copy_from(other, *child);
            self.insert_before(reference, copy);
        }
    }

    fn copy_from(&mut self, other: &Tree, node: NodeId) -> NodeId {
        let copy = self.push(other.get(node).data.clone());
        for child in other.get(node).children() {
            let child = self.copy_from(other, *child);
            self.append(copy, child);
        }
        copy
    }

    // ===== Content =====

    /// Returns text content if `node` is a text node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Set text content, does nothing if `node` is not a text node.
    pub fn set_text(&mut self, node: NodeId, value: impl Into<String>) {
        if let NodeData::Text(text) = &mut self.nodes[node.0].data {
            *text = value.into();
        }
    }

    /// Returns the element name if `node` is an element.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|e|&*e.name == name)
                .map(|e|e.value.as_str()),
            _ => None,
        }
    }

    /// Set or add an attribute, does nothing if `node` is not an element.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let NodeData::Element { attrs, .. } = &mut self.nodes[node.0].data else {
            return;
        };
        match attrs.iter_mut().find(|e|&*e.name == name) {
            Some(attr) => attr.value = value.into(),
            None => attrs.push(Attribute { name: name.into(), value: value.into() }),
        }
    }

    /// Remove an attribute, returns its value if it was present.
    pub fn remove_attr(&mut self, node: NodeId, name: &str) -> Option<String> {
        let NodeData::Element { attrs, .. } = &mut self.nodes[node.0].data else {
            return None;
        };
        let at = attrs.iter().position(|e|&*e.name == name)?;
        Some(attrs.remove(at).value)
    }

    // ===== Query =====

    /// Iterate `node` and its descendants in document order.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        Descendants { tree: self, stack: vec![node] }
    }

    /// Find attribute values or text nodes matching `selector`, in document order.
    ///
    /// Attributes of an element are yielded before its children.
    pub fn select(&self, selector: &Selector) -> Vec<Hit> {
        let mut hits = vec![];

        for id in self.descendants(self.root()) {
            match (&self.nodes[id.0].data, selector) {
                (NodeData::Element { attrs, .. }, Selector::Attr(_)) => {
                    hits.extend(
                        attrs
                            .iter()
                            .filter(|e|selector.matches(&e.value))
                            .map(|e|Hit::Attr(id, e.name.clone())),
                    );
                }
                (NodeData::Text(text), Selector::Text(_)) if selector.matches(text) => {
                    hits.push(Hit::Text(id));
                }
                _ => {}
            }
        }

        hits
    }

    /// Remove whitespace only text nodes that are inside an element.
    ///
    /// Top level whitespace is kept.
    pub fn normalize(&mut self) {
        let root = self.root();
        let blanks = self
            .descendants(root)
            .filter(|id|{
                let node = &self.nodes[id.0];
                node.parent != Some(root) && matches!(&node.data, NodeData::Text(text) if is_blank(text))
            })
            .collect::<Vec<_>>();

        for blank in blanks {
            self.detach(blank);
        }
    }

    // ===== Output =====

    /// Serialize the top level nodes into `writer`.
    pub fn write_html(&self, writer: &mut impl Writer) -> Result<()> {
        serialize::children(self, self.root(), writer)
    }

    /// Serialize a single node and its descendants into `writer`.
    pub fn write_node(&self, node: NodeId, writer: &mut impl Writer) -> Result<()> {
        serialize::node(self, node, writer)
    }

    /// Serialize the top level nodes.
    pub fn to_html(&self) -> String {
        let mut buffer = String::with_capacity(128);
        // writing into a string cannot fail
        let _ = self.write_html(&mut buffer);
        buffer
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// whitespace as in xpath `normalize-space`
fn is_blank(text: &str) -> bool {
    text.chars().all(|e|matches!(e, ' ' | '\t' | '\n' | '\r'))
}

/// Document order iterator, see [`Tree::descendants`].
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.get(id).children.iter().rev());
        Some(id)
    }
}

#[cfg(test)]
mod test {
    use spread_core::Selector;
    use super::{Hit, NodeData, Tree};

    #[test]
    fn edit() {
        let mut tree = Tree::new();
        let p = tree.create_element("p");
        let a = tree.create_text("a");
        let c = tree.create_text("c");
        tree.append(tree.root(), p);
        tree.append(p, a);
        tree.append(p, c);
        let b = tree.create_text("b");
        tree.insert_before(c, b);
        assert_eq!(tree.to_html(),"<p>abc</p>");

        tree.detach(a);
        assert_eq!(tree.to_html(),"<p>bc</p>");
        assert_eq!(tree.get(a).parent(),None);

        tree.replace_with_texts(b, ["x","y"]);
        assert_eq!(tree.get(p).children().len(),3);
        assert_eq!(tree.to_html(),"<p>xyc</p>");
    }

    #[test]
    fn attrs() {
        let mut tree = Tree::parse(r#"<a href="x" class="y"></a>"#);
        let a = tree.get(tree.root()).children()[0];
        assert_eq!(tree.name(a),Some("a"));
        assert_eq!(tree.attr(a, "href"),Some("x"));
        tree.set_attr(a, "href", "z");
        tree.set_attr(a, "id", "w");
        assert_eq!(tree.remove_attr(a, "class").as_deref(),Some("y"));
        assert_eq!(tree.remove_attr(a, "class"),None);
        assert_eq!(tree.to_html(),r#"<a href="z" id="w"></a>"#);
    }

    #[test]
    fn select_order() {
        let tree = Tree::parse(r#"{a}<p title="{a}">x{a}<b data-a="{a}">{a}</b></p>"#);
        let texts = tree.select(&Selector::Text("{a}"));
        let attrs = tree.select(&Selector::Attr("{a}"));
        assert_eq!(texts.len(),3);
        assert_eq!(attrs.len(),2);
        assert!(matches!(&attrs[0], Hit::Attr(_, name) if &**name == "title"));
        assert!(matches!(&attrs[1], Hit::Attr(_, name) if &**name == "data-a"));
        let Hit::Text(first) = texts[0] else { panic!("expected text") };
        assert_eq!(tree.get(first).parent(),Some(tree.root()));
    }

    #[test]
    fn graft() {
        let mut tree = Tree::parse("<ul><li>x</li></ul>");
        let other = Tree::parse("<li>a</li><li>b</li>");
        let ul = tree.get(tree.root()).children()[0];
        let x = tree.get(ul).children()[0];
        tree.graft_before(x, &other);
        tree.detach(x);
        assert_eq!(tree.to_html(),"<ul><li>a</li><li>b</li></ul>");
        assert_eq!(other.to_html(),"<li>a</li><li>b</li>");
    }

    #[test]
    fn normalize() {
        let mut tree = Tree::parse("\n<ul>\n  <li> a </li>\n  <li></li>\n</ul>\n");
        tree.normalize();
        assert_eq!(tree.to_html(),"\n<ul><li> a </li><li></li></ul>\n");
    }

    #[test]
    fn clone_is_independent() {
        let tree = Tree::parse("<p>a</p>");
        let mut clone = tree.clone();
        let p = clone.get(clone.root()).children()[0];
        let text = clone.get(p).children()[0];
        clone.set_text(text, "b");
        assert_eq!(tree.to_html(),"<p>a</p>");
        assert_eq!(clone.to_html(),"<p>b</p>");
        assert!(matches!(clone.get(text).data(), NodeData::Text(t) if t == "b"));
    }
}
