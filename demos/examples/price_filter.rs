// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual-handle price filter.
//!
//! Drives a `RangeSlider` the way a presentation adapter would: pointer
//! positions become raw values, input names are decoded back into handles,
//! and the owner pushes controlled values with `sync_external`.
//!
//! Run:
//! - `cargo run -p formstory_demos --example price_filter`
//! - `RUST_LOG=trace cargo run -p formstory_demos --example price_filter`

use formstory_demos::{init_tracing, render_track};
use formstory_range::{HandleId, RangeConfig, RangeDomain, RangeSlider};

const NAME: &str = "price";

fn main() {
    init_tracing();

    let domain = RangeDomain::new(0.0, 500.0, 10.0);
    let mut slider = match RangeSlider::new(
        RangeConfig::new(domain)
            .separation_limit(50.0)
            .initial_values((100.0, 400.0)),
    ) {
        Ok(slider) => slider,
        Err(err) => {
            eprintln!("bad price filter config: {err}");
            return;
        }
    };
    slider.set_on_value_changed(|value, handle| {
        println!("  -> {} = {value}", handle.input_name(NAME));
    });

    let show = |slider: &RangeSlider, what: &str| {
        let state = slider.state();
        println!(
            "{what:<28} [{}] {:?}",
            render_track(&state, |v| domain.fraction_of(v), 41),
            state
        );
    };
    show(&slider, "initial");

    // Pointer drags, expressed as fractions of the track width.
    let drags = [
        ("price-lower", 0.33),
        ("price-upper", 0.30),
        ("price-upper", 1.20),
        ("price-lower", 0.99),
        ("price-bogus", 0.50),
    ];
    for (input, fraction) in drags {
        let Some(handle) = HandleId::from_input_name(NAME, input, slider.mode()) else {
            println!("ignoring unknown input {input:?}");
            continue;
        };
        slider.input(handle, domain.value_at_fraction(fraction));
        show(&slider, &format!("drag {input} to {fraction}"));
    }

    // Keyboard arrows.
    slider.nudge(HandleId::Lower, -3);
    show(&slider, "lower: 3 steps left");

    // The owner resets the filter; no change notifications fire.
    if slider.sync_external((0.0, 500.0)) {
        show(&slider, "reset by owner");
    }
    println!("revision {}", slider.revision());
}
