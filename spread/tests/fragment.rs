use spread::{Data, Error, Fragment, IoWriter, Value};

#[test]
fn scalar_everywhere() {
    let fragment = Fragment::parse(r#"<p title="{name}" data-x="{name}!">{name}, {name}</p>"#);
    let html = fragment.bind([("name", "Jane")]).serialize(None).unwrap();
    assert_eq!(html,r#"<p title="Jane" data-x="Jane!">Jane, Jane</p>"#);
}

#[test]
fn shared_slot() {
    let fragment = Fragment::parse(r#"<b>{a}</b><i title="{a}">{a}</i>"#);
    assert_eq!(fragment.len(),1);
    assert_eq!(fragment.bind([("a", 7)]).serialize(None).unwrap(),r#"<b>7</b><i title="7">7</i>"#);
}

#[test]
fn first_occurrence_governs() {
    let fragment = Fragment::parse("<b>{?a}</b><i>{a}</i>");
    assert_eq!(fragment.len(),1);
    assert!(fragment.markers()[0].is_optional());
    assert_eq!(fragment.serialize(None).unwrap(),"<b></b><i>{a}</i>");
}

#[test]
fn optional_text_absent() {
    let fragment = Fragment::parse("<p>{?a}</p>");
    assert_eq!(fragment.serialize(None).unwrap(),"<p></p>");
    assert_eq!(fragment.bind([("a", Value::Null)]).serialize(None).unwrap(),"<p></p>");
    assert_eq!(Fragment::parse("<p>x {?a}</p>").serialize(None).unwrap(),"<p>x </p>");
}

#[test]
fn optional_attribute() {
    let fragment = Fragment::parse(r#"<a href="{?href}">{label}</a>"#);
    let html = fragment.bind([("label", "Click")]).serialize(None).unwrap();
    assert_eq!(html,"<a>Click</a>");

    let html = fragment.bind([("label", "Click"), ("href", "/home")]).serialize(None).unwrap();
    assert_eq!(html,r#"<a href="/home">Click</a>"#);
}

#[test]
fn missing_required() {
    let fragment = Fragment::parse("<p>{name}</p>");
    let err = fragment.bind(Data::new()).serialize(None).unwrap_err();
    assert_eq!(err.to_string(),"missing `name` in <p>{name}</p>");
    assert!(matches!(err, Error::Missing { name, template } if &*name == "name" && &*template == "<p>{name}</p>"));
}

#[test]
fn list_expansion() {
    let fragment = Fragment::parse("<li>{item}</li>");
    let html = fragment.bind([("item", vec!["a", "b", "c"])]).serialize(None).unwrap();
    assert_eq!(html,"<li>abc</li>");

    let html = fragment.bind([("item", Vec::<Value>::new())]).serialize(None).unwrap();
    assert_eq!(html,"<li></li>");
}

#[test]
fn nested_fragment() {
    let name = Fragment::parse("<b>{name}</b>");
    let card = Fragment::parse(r#"<div title="{content.name}">{content}</div>"#);
    let page = Fragment::parse("<main>{card}</main>");

    let card = card.bind([("content", name.bind([("name", "x")]))]);
    let html = page.bind([("card", card)]).serialize(None).unwrap();
    assert_eq!(html,r#"<main><div title="x"><b>x</b></div></main>"#);
}

#[test]
fn nested_missing() {
    let name = Fragment::parse("<b>{name}</b>");
    let page = Fragment::parse("<main>{content}</main>");
    let err = page.bind([("content", name)]).serialize(None).unwrap_err();
    assert!(matches!(err, Error::Missing { name, template } if &*name == "name" && &*template == "<b>{name}</b>"));
}

#[test]
fn fragment_list() {
    let item = Fragment::parse("<li>{label}</li>");
    let list = Fragment::parse("<ul>\n  {items}\n</ul>");

    let items = item.map(["one", "two"].map(|label|[("label", label)]));
    let html = list.bind([("items", items)]).serialize(None).unwrap();
    assert_eq!(html,"<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn map_with_index() {
    let item = Fragment::parse(r#"<li id="item-{index}">{label}</li>"#);
    let labels = ["a", "b"];
    let items = item.map_with(&labels, |label,index,all|Data::from([
        ("index", Value::from(index)),
        ("label", Value::from(format!("{label}/{}", all.len()))),
    ]));

    let html = items.iter().map(|e|e.serialize(None).unwrap()).collect::<String>();
    assert_eq!(html,r#"<li id="item-0">a/2</li><li id="item-1">b/2</li>"#);
}

#[test]
fn prefix_render() {
    let fragment = Fragment::parse("<p>{user.name} @ {site}</p>");
    let bound = fragment.bind([("user", Data::from([("name", "Jane")]))]);

    assert_eq!(bound.serialize(Some("user")).unwrap(),"<p>Jane @ {site}</p>");
    assert!(matches!(bound.serialize(None), Err(Error::Missing { name, .. }) if &*name == "site"));

    let partial = bound.render(Some("user")).unwrap();
    let html = partial.bind([("site", "home")]).serialize(Some("site")).unwrap();
    assert_eq!(html,"<p>Jane @ home</p>");
}

#[test]
fn independent_binds() {
    let fragment = Fragment::parse("<p>{name}</p>");
    let a = fragment.bind([("name", "a")]);
    let b = fragment.bind([("name", "b")]);

    assert_eq!(a.serialize(None).unwrap(),"<p>a</p>");
    assert_eq!(b.serialize(None).unwrap(),"<p>b</p>");
    assert_eq!(fragment.get("name").unwrap(),&Value::Null);
    assert_eq!(a.get("name").unwrap(),&Value::from("a"));
}

#[test]
fn entries_order() {
    let fragment = Fragment::parse("{b}{a}{c}");
    let bound = fragment.bind([("c", 3), ("a", 1)]);

    let entries = bound.entries().collect::<Vec<_>>();
    assert_eq!(entries,[
        ("b", &Value::Null),
        ("a", &Value::Int(1)),
        ("c", &Value::Int(3)),
    ]);
}

#[test]
fn rewrite_isolates() {
    let fragment = Fragment::parse("<p>Hi {name}!</p>");
    let tree = fragment.tree();
    let p = tree.get(tree.root()).children()[0];
    let texts = tree
        .get(p)
        .children()
        .iter()
        .filter_map(|e|tree.text(*e))
        .collect::<Vec<_>>();
    assert_eq!(texts,["Hi ","{name}","!"]);
}

#[test]
fn escaping() {
    let fragment = Fragment::parse(r#"<p title="{v}">{v}</p>"#);
    let html = fragment.bind([("v", "<\"a\" & b>")]).serialize(None).unwrap();
    assert_eq!(html,r#"<p title="<&quot;a&quot; &amp; b>">&lt;"a" &amp; b&gt;</p>"#);
}

#[test]
fn writers() {
    let fragment = Fragment::parse("<p>{v}</p>").bind([("v", 1)]);

    let mut vec = Vec::new();
    fragment.serialize_into(None, &mut vec).unwrap();
    assert_eq!(vec,b"<p>1</p>");

    let mut bytes = bytes::BytesMut::new();
    fragment.serialize_into(None, &mut bytes).unwrap();
    assert_eq!(&bytes[..],b"<p>1</p>");

    let mut io = IoWriter(Vec::new());
    fragment.serialize_into(None, &mut io).unwrap();
    assert_eq!(io.0,b"<p>1</p>");
}

#[test]
fn unsupported_message() {
    let fragment = Fragment::parse(r#"<p class="{c}"></p>"#);
    let err = fragment.bind([("c", Data::new())]).serialize(None).unwrap_err();
    assert_eq!(err.to_string(),"cannot substitute map into attribute for `c`");
}
