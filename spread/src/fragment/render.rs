//! Substitute bound values into the tree.
use std::borrow::Cow;

use spread_core::Marker;

use super::Fragment;
use crate::{Data, Error, Position, Result, Value, dom::Hit};

impl Fragment {
    /// Returns a copy with bound values substituted into the tree.
    ///
    /// With `prefix`, only markers whose first segment equals `prefix` are substituted, the
    /// others are left in place for a later render.
    ///
    /// In attribute position, an absent value removes an attribute that holds exactly the
    /// token, otherwise the token is replaced with the value text form. In text position, a
    /// list expands into one sibling per item and a fragment is rendered and spliced in.
    ///
    /// # Errors
    ///
    /// [`Error::Missing`] if a required marker has no value, [`Error::Unsupported`] if a value
    /// cannot be written at its position.
    pub fn render(&self, prefix: Option<&str>) -> Result<Fragment> {
        let mut clone = self.clone();
        let Fragment { tree, data, .. } = &mut clone;

        let jobs = self
            .markers
            .iter()
            .filter(|marker|prefix.is_none_or(|prefix|marker.head() == prefix))
            .map(|marker|(
                marker,
                tree.select(&marker.attr_selector()),
                tree.select(&marker.text_selector()),
            ))
            .collect::<Vec<_>>();

        for (marker,attrs,texts) in jobs {
            let value = match resolve(data, marker) {
                Some(value) => Some(value.clone()),
                None if marker.is_optional() => None,
                None => return Err(Error::Missing {
                    name: marker.name().into(),
                    template: self.source.clone(),
                }),
            };

            for hit in attrs {
                let Hit::Attr(id,name) = hit else {
                    continue;
                };
                let Some(current) = tree.attr(id, &name) else {
                    continue;
                };

                if value.is_none() && current == marker.token() {
                    tree.remove_attr(id, &name);
                    continue;
                }

                let text = text_of(marker, value.as_ref(), Position::Attribute)?;
                let replaced = current.replace(marker.token(), &text);
                tree.set_attr(id, &name, replaced);
            }

            for hit in texts {
                let Hit::Text(id) = hit else {
                    continue;
                };

                let items = match &value {
                    Some(item @ Value::Fragment(_)) => std::slice::from_ref(item),
                    Some(Value::List(items)) => items.as_slice(),
                    Some(Value::Map(_)) => return Err(unsupported(marker, "map", Position::Text)),
                    other => {
                        let text = text_of(marker, other.as_ref(), Position::Text)?;
                        tree.set_text(id, text);
                        continue;
                    }
                };

                for item in items {
                    match item {
                        Value::Fragment(fragment) => {
                            let rendered = fragment.render(None)?;
                            tree.graft_before(id, rendered.tree());
                        }
                        item => {
                            let Some(text) = item.as_text() else {
                                return Err(unsupported(marker, item.kind(), Position::Text));
                            };
                            let node = tree.create_text(text);
                            tree.insert_before(id, node);
                        }
                    }
                }

                tree.detach(id);
            }
        }

        tree.normalize();
        log::trace!("rendered {} with prefix {prefix:?}", self.source);

        Ok(clone)
    }
}

/// walk the data through marker segments, `Null` is absent
fn resolve<'a>(data: &'a Data, marker: &Marker) -> Option<&'a Value> {
    let [head, rest @ ..] = marker.segments() else {
        return None;
    };

    let mut value = data.get(head)?;
    for segment in rest {
        value = value.get(segment)?;
    }

    match value {
        Value::Null => None,
        value => Some(value),
    }
}

fn text_of<'a>(marker: &Marker, value: Option<&'a Value>, position: Position) -> Result<Cow<'a, str>> {
    match value {
        None => Ok(Cow::Borrowed("")),
        Some(value) => value
            .as_text()
            .ok_or_else(||unsupported(marker, value.kind(), position)),
    }
}

fn unsupported(marker: &Marker, kind: &'static str, position: Position) -> Error {
    Error::Unsupported {
        name: marker.name().into(),
        kind,
        position,
    }
}

#[cfg(test)]
mod test {
    use crate::{Data, Error, Fragment, Position, Value};

    #[test]
    fn attribute() {
        let fragment = Fragment::parse(r#"<a class="btn {kind}" href="{?href}" title="{?title} x">{label}</a>"#);
        let html = fragment.bind([("kind", "primary"), ("label", "Go")]).serialize(None).unwrap();
        assert_eq!(html,r#"<a class="btn primary" title=" x">Go</a>"#);
    }

    #[test]
    fn scalars() {
        let fragment = Fragment::parse("<p>{a}, {b}, {c}, {d}</p>");
        let data = Data::from([
            ("a", Value::from(1)),
            ("b", Value::from(1.5)),
            ("c", Value::from(true)),
            ("d", Value::from("<x>")),
        ]);
        assert_eq!(fragment.bind(data).serialize(None).unwrap(),"<p>1, 1.5, true, &lt;x&gt;</p>");
    }

    #[test]
    fn missing_nested() {
        let fragment = Fragment::parse("<p>{user.name}</p>");
        let err = fragment.bind([("user", Data::new())]).render(None).unwrap_err();
        assert!(matches!(err, Error::Missing { name, .. } if &*name == "user.name"));
    }

    #[test]
    fn unsupported_positions() {
        let fragment = Fragment::parse(r#"<p title="{a}">x</p>"#);
        let err = fragment.bind([("a", vec!["x"])]).render(None).unwrap_err();
        assert!(matches!(err, Error::Unsupported { kind: "list", position: Position::Attribute, .. }));

        let fragment = Fragment::parse("<p>{a}</p>");
        let err = fragment.bind([("a", Data::new())]).render(None).unwrap_err();
        assert!(matches!(err, Error::Unsupported { kind: "map", position: Position::Text, .. }));

        let err = fragment.bind([("a", vec![vec![1]])]).render(None).unwrap_err();
        assert!(matches!(err, Error::Unsupported { kind: "list", .. }));
    }

    #[test]
    fn receiver_untouched() {
        let fragment = Fragment::parse("<p>{a}</p>").bind([("a", "x")]);
        let rendered = fragment.render(None).unwrap();
        assert_eq!(rendered.tree().to_html(),"<p>x</p>");
        assert_eq!(fragment.tree().to_html(),"<p>{a}</p>");
    }
}
