use jstruct_core::{ExtractOptions, OutputScope, extract_unit};
use jstruct_java::JavaParser;
use serde_json::Value;
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn run(source: &str, options: ExtractOptions) -> Value {
    init_tracing();
    let parser = JavaParser::new().unwrap();
    let unit = parser.parse_unit(source).unwrap();
    extract_unit(&unit, &options).unwrap()
}

/// Root descriptor document with every key present.
#[allow(dead_code)]
pub fn extract(source: &str) -> Value {
    run(source, ExtractOptions::default())
}

/// Root descriptor document with falsy values pruned.
#[allow(dead_code)]
pub fn extract_strict(source: &str) -> Value {
    run(
        source,
        ExtractOptions {
            strict: true,
            ..Default::default()
        },
    )
}

#[allow(dead_code)]
pub fn extract_all(source: &str) -> Value {
    run(
        source,
        ExtractOptions {
            strict: true,
            scope: OutputScope::All,
        },
    )
}

/// Entry of `doc[section]` whose `name` is `name`.
#[allow(dead_code)]
pub fn named<'a>(doc: &'a Value, section: &str, name: &str) -> &'a Value {
    doc[section]
        .as_array()
        .and_then(|items| items.iter().find(|item| item["name"] == name))
        .unwrap_or_else(|| panic!("no {section} entry named {name} in {doc}"))
}

#[allow(dead_code)]
pub fn names(doc: &Value, section: &str) -> Vec<String> {
    doc[section]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
