use spread::{Data, Fragment, Value};

#[test]
fn derive_data() {
    #[derive(Data)]
    struct User {
        name: String,
        age: u32,
        #[data(rename = "mail")]
        email: Option<String>,
        #[data(skip)]
        #[allow(dead_code)]
        password: String,
    }

    let user = User {
        name: "Jane".into(),
        age: 30,
        email: None,
        password: "secret".into(),
    };

    let data = Data::from(user);
    assert_eq!(data.len(),3);
    assert_eq!(data.get("name"),Some(&Value::from("Jane")));
    assert_eq!(data.get("age"),Some(&Value::Int(30)));
    assert_eq!(data.get("mail"),Some(&Value::Null));
    assert!(!data.contains_key("password"));
}

#[test]
fn derive_bind() {
    #[derive(Data)]
    struct Link<'a> {
        href: Option<&'a str>,
        label: &'a str,
    }

    let fragment = Fragment::parse(r#"<a href="{?href}">{label}</a>"#);
    let html = fragment.bind(Link { href: None, label: "Click" }).serialize(None).unwrap();
    assert_eq!(html,"<a>Click</a>");
}

#[test]
fn derive_nested() {
    #[derive(Data)]
    struct Author {
        name: String,
    }

    #[derive(Data)]
    struct Post<T> {
        title: T,
        author: Author,
    }

    let post = Post { title: 1.5, author: Author { name: "Jane".into() } };
    let fragment = Fragment::parse("<h1>{title}</h1><p>{author.name}</p>");
    let html = fragment.bind(post).serialize(None).unwrap();
    assert_eq!(html,"<h1>1.5</h1><p>Jane</p>");
}
