//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod fixtures;

use bondgrid_rs::{Instrument, StateBridge};

/// Names of the records on the bridge's current page
pub fn page_names(bridge: &StateBridge<Instrument>) -> Vec<String> {
    bridge.page_rows().map(|r| r.core.name.clone()).collect()
}

/// Names of every record across all pages, walking from page 0
pub fn all_page_names(bridge: &mut StateBridge<Instrument>) -> Vec<String> {
    let mut names = Vec::new();
    bridge.set_page_index(0);
    loop {
        names.extend(page_names(bridge));
        if !bridge.view().can_next {
            break;
        }
        bridge.next_page();
    }
    names
}

/// Assert the invariants every derived view must hold
pub fn assert_view_invariants(bridge: &StateBridge<Instrument>) {
    let view = bridge.view();
    assert!(view.page_count >= 1, "page_count must be at least 1");
    assert!(
        view.page_index < view.page_count,
        "page_index {} out of range for {} pages",
        view.page_index,
        view.page_count
    );
    assert!(view.page_rows.len() <= view.page_size);
    assert_eq!(view.can_prev, view.page_index > 0);
    assert_eq!(view.can_next, view.page_index + 1 < view.page_count);
    assert_eq!(
        bridge.view_state().pagination.page_index,
        view.page_index,
        "stored page index must match the clamped one"
    );
}
