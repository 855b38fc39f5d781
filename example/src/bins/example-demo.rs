// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Demo program for the template: exercises the arithmetic helpers and
//! prints a fixed report to stdout. Always exits 0.

use anyhow::Result;
use example::{add, get_greeting, is_even, multiply};
use log::info;

/// Log level for the demo, overridable via `EXAMPLE_LOG_LEVEL`.
fn log_level() -> log::Level {
    std::env::var("EXAMPLE_LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::Level::Info)
}

fn main() -> Result<()> {
    simple_logger::init_with_level(log_level())?;
    info!(
        "example-demo starting (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let (a, b) = (5, 3);

    println!("C Project Template Example");
    println!("=========================");
    println!("{}", get_greeting());
    println!("a = {a}, b = {b}");
    println!("add({a}, {b}) = {}", add(a, b));
    println!("multiply({a}, {b}) = {}", multiply(a, b));
    println!("is_even({a}) = {}", is_even(a));
    println!("is_even({b}) = {}", is_even(b));

    info!("example-demo done");
    Ok(())
}
