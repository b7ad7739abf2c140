// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Formstory demos.
//!
//! Run a demo with, for example:
//! - `cargo run -p formstory_demos --example price_filter`
//! - `RUST_LOG=trace cargo run -p formstory_demos --example price_filter`

use formstory_range::RangeState;

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset. Returns `false` if the
/// host already installed a global subscriber.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// Draws a state as a one-line text track, `width` cells wide.
///
/// Handles are drawn as `|`, the selected span as `=`.
pub fn render_track(state: &RangeState, fractions: impl Fn(f64) -> f64, width: usize) -> String {
    let cells = width.max(2);
    let cell_of = |value: f64| -> usize {
        let last = (cells - 1) as f64;
        // `fractions` yields 0..=1, so this stays inside the track.
        (fractions(value) * last).round() as usize
    };

    let mut track = vec!['-'; cells];
    let marks: Vec<usize> = state.handles().map(|(_, value)| cell_of(value)).collect();
    if let [lower, upper] = marks[..] {
        for cell in &mut track[lower..=upper] {
            *cell = '=';
        }
    }
    for mark in marks {
        track[mark] = '|';
    }
    track.into_iter().collect()
}
