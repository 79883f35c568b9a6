//! Shows the events `Required` emits with the `tracing` feature
//!
//! Run with: cargo run --example tracing_demo --features tracing

use required_rule::{OptionSet, Required, Value};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Validating a signup form");

    let mut rule = Required::new();
    let fields = [
        ("name", Value::from("alice")),
        ("nickname", Value::from("   ")),
        ("tags", Value::from(Vec::<String>::new())),
        ("age", Value::from(None::<u32>)),
    ];

    for (name, value) in &fields {
        match rule.validate(value) {
            Ok(()) => tracing::info!(field = name, "present"),
            Err(err) => tracing::warn!(field = name, %err, "missing"),
        }
    }

    tracing::info!("Relaxing string and slice checks");
    rule.set_options(
        OptionSet::new()
            .allow_empty_string(true)
            .allow_empty_slice(true),
    );

    let outcome: required_rule::Outcome = fields.iter().map(|(_, v)| rule.is_valid(v)).collect();
    tracing::info!(
        valid = outcome.is_valid(),
        errors = outcome.errors().len(),
        "Form re-checked"
    );
}
