// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Arithmetic helpers for the project template. Every function is pure and
//! total: no state, no side effects, no panics.

const GREETING: &str = "Hello from C project template!";

/// Sum of `a` and `b`. Overflow wraps (two's complement) instead of panicking.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Product of `a` and `b`. Same wrapping behavior as [`add`].
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Whether `n` is divisible by two. Zero is even; the sign does not matter.
pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

/// The template's fixed greeting. Static data, valid for the life of the
/// process.
pub fn get_greeting() -> &'static str {
    GREETING
}
