// Copyright 2026 the Formstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group basics.
//!
//! Render a shipping-speed picker as text and feed it clicks, focus changes
//! and a controlled update from its owner.
//!
//! Run:
//! - `cargo run -p formstory_demos --example radio_group`

use formstory_demos::init_tracing;
use formstory_radio::{RadioGroup, RadioOption};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shipping {
    Standard,
    Express,
    Overnight,
}

fn render(group: &RadioGroup<Shipping>) {
    let marker = if group.has_error() { " (!)" } else { "" };
    println!("{}{marker}", group.name());
    for (index, option) in group.options().iter().enumerate() {
        let dot = if group.is_checked(&option.value) { "(*)" } else { "( )" };
        let state = if group.is_option_disabled(index) {
            " [disabled]"
        } else {
            ""
        };
        let id = group.option_id(index).unwrap_or_default();
        println!("  {dot} {:<10} #{id}{state}", option.label);
    }
}

fn main() {
    init_tracing();

    let mut group = RadioGroup::new("shipping")
        .with_options([
            RadioOption::new("Standard", Shipping::Standard),
            RadioOption::new("Express", Shipping::Express),
            RadioOption::new("Overnight", Shipping::Overnight).disabled(true),
        ])
        .with_checked(Some(Shipping::Standard))
        .with_on_checked_value_changed(|value| println!("  -> checked {value:?}"))
        .with_on_focus_lost(|value| println!("  -> focus left {value:?}"));
    render(&group);

    // A click on an enabled option.
    group.select(Shipping::Express);
    group.lose_focus(&Shipping::Express);
    render(&group);

    // The owner validates, flags an error and picks a value itself.
    group.set_error(true);
    group.sync_external(Some(Shipping::Standard));
    render(&group);

    // Checkout in progress.
    group.set_error(false);
    group.set_all_disabled(true);
    render(&group);
    println!("revision {}", group.revision());
}
