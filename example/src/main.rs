use std::io::{BufRead, stdin};
use spread::{Config, Data, Loader, Reload};

#[derive(Data)]
struct Item {
    id: u32,
    name: String,
    #[data(rename = "note")]
    description: Option<String>,
}

fn items() -> Vec<Item> {
    vec![
        Item { id: 1, name: "<script>alert('foo')</script>".into(), description: None },
        Item { id: 2, name: "Bread".into(), description: Some("fresh".into()) },
        Item { id: 3, name: "Milk".into(), description: None },
    ]
}

fn main() -> spread::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let loader = Loader::new(
        Config::default()
            .with_templ_dir("example/templates")
            .with_reload(Reload::Always),
    );

    loop {
        let items = items()
            .into_iter()
            .map(|item|loader.fragment("item.html", item))
            .collect::<spread::Result<Vec<_>>>()?;

        let page = loader.fragment("page.html", [
            ("title", spread::Value::from("Groceries")),
            ("items", spread::Value::from(items)),
        ])?;

        println!("{}", page.serialize(None)?);
        log::info!("rendered {} keys", page.len());
        println!("[Press ENTER to re render]");

        let mut buf = String::new();
        stdin().lock().read_line(&mut buf)?;

        if buf.trim() == "q" {
            break Ok(())
        }
    }
}
