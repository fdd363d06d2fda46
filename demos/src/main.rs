// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A keyboard select-and-sort session over a toy group, end to end.
//!
//! Builds a [`SortController`] over five named blocks with numeric heights,
//! drives it through focus, selection, a keyboard grab, and a few sorts, and
//! prints the surface-effect stream a host toolkit would consume at each
//! step.
//!
//! Run:
//! - `cargo run -p grapnel_demos`

use std::cell::RefCell;
use std::rc::Rc;

use grapnel_grab::{Effects, GrabConfig, Key, KeyInput};
use grapnel_sort::{SortConfig, SortController, SortRange};
use kurbo::Rect;

const NAMES: [&str; 5] = ["ash", "birch", "cedar", "dogwood", "elm"];

fn print_effects(label: &str, effects: &Effects) {
    println!("== {label} ==");
    if effects.is_empty() {
        println!("  (no effects)");
    }
    for effect in effects {
        println!("  {effect:?}");
    }
}

fn main() {
    let heights = Rc::new(RefCell::new(vec![3.0_f64, 7.0, 5.0, 9.0, 2.0]));
    let read = heights.clone();
    let write = heights.clone();
    let count = NAMES.len();

    let sort = SortConfig::<usize>::new(
        move |&i| read.borrow()[i],
        move |&i, height| {
            println!("  -> {} now has height {height}", NAMES[i]);
            write.borrow_mut()[i] = height;
        },
        move |delta, &i| {
            if delta < 0.0 {
                i.checked_sub(1)
            } else {
                (i + 1 < count).then_some(i + 1)
            }
        },
        || Some(0),
    )
    .on_sort(|&i, old| println!("  -> sorted {} (was {old})", NAMES[i]));

    let grab = GrabConfig::new("Block group", "Block group, sorting")
        .with_keyboard_help("Press space to sort the selected block");

    let mut sorter = SortController::new(grab, sort, SortRange::new(0.0, 10.0));

    print_effects("mount", &sorter.mount());
    let _ = sorter.grab_mut().set_bounds(Rect::new(0.0, 0.0, 200.0, 120.0));

    print_effects("focus in", &sorter.focus_in());
    println!("selected: {:?}", sorter.selected().map(|&i| NAMES[i]));

    // Selecting: arrows move the selection, values are untouched.
    let _ = sorter.key_down(KeyInput::plain(Key::ArrowRight));
    let _ = sorter.key_down(KeyInput::plain(Key::ArrowRight));
    println!("selected: {:?}", sorter.selected().map(|&i| NAMES[i]));

    // Grab the selected block and sort it.
    print_effects("space (grab)", &sorter.key_down(KeyInput::plain(Key::Space)));
    sorter.key_up(KeyInput::plain(Key::Space));

    print_effects(
        "arrow-right (sort +1)",
        &sorter.key_down(KeyInput::plain(Key::ArrowRight)),
    );
    print_effects(
        "shift+arrow-up (sort +2)",
        &sorter.key_down(KeyInput::shifted(Key::ArrowUp)),
    );
    print_effects("end (sort to max)", &sorter.key_down(KeyInput::plain(Key::End)));

    print_effects("space (release)", &sorter.key_down(KeyInput::plain(Key::Space)));
    sorter.key_up(KeyInput::plain(Key::Space));

    println!("final heights: {:?}", heights.borrow());
    assert_eq!(heights.borrow()[2], 10.0);

    print_effects("dispose", &sorter.dispose());
}
