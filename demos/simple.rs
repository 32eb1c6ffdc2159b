use miette::Report;
use strict_json::{analyze, ParserOptions};

fn main() {
    let json_data = r#"
        {
            "user": {
                "name": "John Doe",
                "email": "john.doe@example.com",
                "roles": ["admin", "dev"]
            }
        }
    "#;

    let options = ParserOptions::default().with_source_name("example.json");
    match analyze(json_data, &options) {
        Ok(result) => {
            println!("Parsed a {} with {} values", result.kind, result.counts.total());
            match result.value.to_json_pretty() {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Failed to encode: {e}"),
            }
        }
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
        }
    }

    // A rejected document renders as a graphical diagnostic.
    if let Err(e) = analyze("{\n  \"a\": 1,\n  \"a\": 2\n}", &options) {
        eprintln!("{:?}", Report::new(e));
    }
}
