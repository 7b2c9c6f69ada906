//! The [`Fragment`] type.
use std::sync::Arc;

use spread_core::Marker;

use crate::{Data, Error, Result, Value, dom::Tree};

mod rewrite;
mod render;

/// A parsed template.
///
/// A fragment is parsed once per source and then used as an immutable prototype,
/// [`Fragment::bind`] and [`Fragment::render`] always return a new fragment.
///
/// ```
/// use spread::Fragment;
///
/// let link = Fragment::parse(r#"<a href="{?href}">{label}</a>"#);
/// let html = link.bind([("label", "Click")]).serialize(None).unwrap();
/// assert_eq!(html, "<a>Click</a>");
/// ```
///
/// Bound data cannot be mutated in place, use [`Fragment::bind`] instead.
///
/// ```compile_fail
/// use spread::{Fragment, Value};
///
/// let fragment = Fragment::parse("<p>{name}</p>");
/// *fragment.get("name").unwrap() = Value::from("Jane");
/// ```
#[derive(Clone)]
pub struct Fragment {
    source: Arc<str>,
    markers: Arc<[Marker]>,
    keys: Arc<[Box<str>]>,
    tree: Tree,
    data: Data,
}

impl Fragment {
    /// Parse a template source.
    ///
    /// Every marker token inside a text node is isolated into its own text node, and every
    /// marker path is declared in the data with a [`Value::Null`] leaf.
    pub fn parse(source: &str) -> Fragment {
        let markers = Marker::parse(source);
        let mut tree = Tree::parse(source);
        rewrite::rewrite(&mut tree, &markers);

        let mut data = Data::new();
        let mut keys = Vec::<Box<str>>::new();

        for marker in &markers {
            declare(&mut data, marker.segments());
            if !keys.iter().any(|e|&**e == marker.head()) {
                keys.push(marker.head().into());
            }
        }

        log::debug!("parsed fragment with {} markers, {} keys", markers.len(), keys.len());

        Fragment {
            source: source.into(),
            markers: markers.into(),
            keys: keys.into(),
            tree,
            data,
        }
    }

    /// Returns a copy with the given top level values.
    ///
    /// A supplied key replaces the whole value, nested segments included. Keys not declared by
    /// any marker are ignored.
    pub fn bind(&self, data: impl Into<Data>) -> Fragment {
        let data: Data = data.into();
        let mut clone = self.clone();

        for (key,value) in data {
            match clone.data.get_mut(&key) {
                Some(slot) => *slot = value,
                None => log::debug!("ignored unknown binding key `{key}`"),
            }
        }

        clone
    }

    /// Bind each item, in order.
    pub fn map<I>(&self, items: I) -> Vec<Fragment>
    where
        I: IntoIterator,
        I::Item: Into<Data>,
    {
        items.into_iter().map(|data|self.bind(data)).collect()
    }

    /// Bind each item with the data computed by `f(item, index, items)`, in order.
    pub fn map_with<'a, T, D, F>(&self, items: &'a [T], mut f: F) -> Vec<Fragment>
    where
        F: FnMut(&'a T, usize, &'a [T]) -> D,
        D: Into<Data>,
    {
        items
            .iter()
            .enumerate()
            .map(|(index,item)|self.bind(f(item, index, items)))
            .collect()
    }

    /// Render then serialize the tree.
    ///
    /// See [`Fragment::render`] for `prefix`.
    pub fn serialize(&self, prefix: Option<&str>) -> Result<String> {
        Ok(self.render(prefix)?.tree.to_html())
    }

    /// Render then serialize the tree into `writer`.
    pub fn serialize_into(&self, prefix: Option<&str>, writer: &mut impl crate::Writer) -> Result<()> {
        self.render(prefix)?.tree.write_html(writer)
    }

    // ===== Inspection =====

    /// Returns the value of a declared top level key.
    ///
    /// Declared but unbound key returns [`Value::Null`], an undeclared key returns
    /// [`Error::UnknownKey`].
    pub fn get(&self, key: &str) -> Result<&Value> {
        match self.data.get(key) {
            Some(value) => Ok(value),
            None => {
                log::warn!("unknown key `{key}` in {}", self.source);
                Err(Error::UnknownKey(key.into()))
            }
        }
    }

    /// Iterate top level entries in marker first occurrence order.
    ///
    /// Each call starts a new iteration.
    pub fn entries(&self) -> Entries<'_> {
        Entries { fragment: self, position: 0 }
    }

    /// Top level keys in marker first occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|e|&**e)
    }

    /// Number of top level keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The bound data.
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Markers in first occurrence order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The original, unrendered source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The markup tree, unrendered unless returned by [`Fragment::render`].
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Take the markup tree, e.g. to assemble a page from rendered fragments.
    pub fn into_tree(self) -> Tree {
        self.tree
    }
}

/// declare a marker path, an existing nested map is never replaced by a leaf
fn declare(data: &mut Data, segments: &[Box<str>]) {
    let [head, rest @ ..] = segments else {
        return;
    };

    let slot = data.entry(head);

    if rest.is_empty() {
        return;
    }

    if !matches!(slot, Value::Map(_)) {
        *slot = Value::Map(Data::new());
    }

    if let Value::Map(nested) = slot {
        declare(nested, rest);
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("source", &self.source)
            .field("data", &self.data)
            .finish()
    }
}

/// Fragments are equal when they share the source, the bound data, and the markup.
impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.data == other.data && self.tree.to_html() == other.tree.to_html()
    }
}

impl<'a> IntoIterator for &'a Fragment {
    type Item = (&'a str, &'a Value);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

// ===== Entries =====

/// Top level entries iterator, see [`Fragment::entries`].
pub struct Entries<'a> {
    fragment: &'a Fragment,
    position: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let fragment = self.fragment;
        loop {
            let key = fragment.keys.get(self.position)?;
            self.position += 1;
            if let Some(value) = fragment.data.get(key) {
                return Some((&**key, value));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.fragment.keys.len() - self.position))
    }
}
