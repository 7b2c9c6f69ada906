//! Isolate marker tokens into dedicated text nodes.
//!
//! `<p>Hi {name}, {greet}</p>` = `<p>["Hi ", "{name}", ", ", "{greet}"]</p>`
use std::collections::HashMap;

use spread_core::{Marker, Tokenizer};

use crate::dom::{Hit, NodeId, Tree};

pub(super) fn rewrite(tree: &mut Tree, markers: &[Marker]) {
    let mut order = Vec::<NodeId>::new();
    let mut tokens = HashMap::<NodeId, Vec<&str>>::new();

    for marker in markers {
        for hit in tree.select(&marker.text_selector()) {
            let Hit::Text(id) = hit else {
                continue;
            };
            let matched = tokens.entry(id).or_insert_with(||{
                order.push(id);
                vec![]
            });
            if !matched.contains(&marker.token()) {
                matched.push(marker.token());
            }
        }
    }

    for id in order {
        let Some(text) = tree.text(id) else {
            continue;
        };
        let matched = &tokens[&id];

        // a node holding exactly one token is already isolated
        if matched.len() == 1 && text == matched[0] {
            continue;
        }

        let parts = Tokenizer::new(text, matched)
            .map(|token|token.as_str().to_owned())
            .collect::<Vec<_>>();

        log::trace!("isolated {} tokens into {} nodes", matched.len(), parts.len());
        tree.replace_with_texts(id, parts);
    }
}
