//! Runs the sample profiles (or `key=value` arguments) through the engine and
//! prints each report as JSON.
//!
//! ```text
//! cargo run --bin assess_demo
//! cargo run --bin assess_demo -- glucose=150 bmi=31 age=52 pregnancies=2 \
//!     diabetesPedigree=0.4 bloodPressure=70 skinThickness=20 insulin=90
//! ```

use std::collections::HashMap;

use anyhow::Context;
use diabetes_care::{report, samples::SampleProfile};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let inputs: Vec<(String, HashMap<String, String>)> = if args.is_empty() {
        SampleProfile::ALL
            .into_iter()
            .map(|p| (p.name().to_string(), p.raw_fields()))
            .collect()
    } else {
        let raw = args
            .iter()
            .map(|a| {
                a.split_once('=')
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .with_context(|| format!("expected key=value, got {a:?}"))
            })
            .collect::<anyhow::Result<HashMap<_, _>>>()?;
        vec![("args".to_string(), raw)]
    };

    for (name, raw) in inputs {
        match report(&raw) {
            Ok(r) => println!("{name}: {}", serde_json::to_string_pretty(&r)?),
            Err(e) => println!("{name}: rejected: {e}"),
        }
    }

    Ok(())
}
