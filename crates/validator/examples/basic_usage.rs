//! Basic usage example for sieve-validator
//!
//! Run with `RUST_LOG=sieve_validator=debug` to see field bindings and
//! catalog lookups.

use serde::Deserialize;
use sieve_validator::json::{IngestError, ingest_str};
use sieve_validator::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Deserialize)]
struct Signup {
    name: String,
    email: Option<String>,
    tags: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let signup = record(|s: &mut FieldBinder<'_, Signup>| {
        s.add("name", |r: &Signup| &r.name, join![length(3, 16), pattern_str("^[a-z0-9_]+$")]);
        s.add("email", |r: &Signup| &r.email, optional(pattern_str("^[^@ ]+@[^@ ]+$")));
        s.add("tags", |r: &Signup| &r.tags, each(max_length(12)));
    });

    let english = Context::new();
    let japanese =
        Context::new().with_printer(CatalogPrinter::new(Catalog::builtin(), Language::JAPANESE));

    for json in [
        r#"{"name": "alice", "email": "alice@example.com", "tags": ["admin"]}"#,
        r#"{"name": "Al", "email": "nope", "tags": ["a-very-long-tag-name"]}"#,
        r#"{"name": 42, "tags": []}"#,
    ] {
        println!("input: {json}");
        for (label, ctx) in [("en", &english), ("ja", &japanese)] {
            match ingest_str::<Signup, _>(&signup, ctx, json) {
                Ok(value) => println!("  [{label}] ok: {value:?}"),
                Err(IngestError::Invalid(err)) => {
                    for leaf in err.flatten() {
                        println!("  [{label}] {leaf}");
                    }
                }
                Err(err) => println!("  [{label}] {err}"),
            }
        }
    }
}
