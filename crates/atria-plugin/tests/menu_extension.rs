// SPDX-FileCopyrightText: 2026 Atria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration test driving the registry the way a component family does:
//! several producer modules contribute menu items during setup, then the
//! menu component enumerates the slot once to build its final item list.

use atria_plugin::{AtriaError, PluginOptions, PluginRegistry, SlotState};

/// Contribution shape the menu component expects from its producers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuItemPlugin {
    id: &'static str,
    label: &'static str,
}

/// A clipboard module contributing standard edit actions.
fn contribute_clipboard(registry: &mut PluginRegistry<MenuItemPlugin>) -> Result<(), AtriaError> {
    registry.register_with(
        "menu",
        MenuItemPlugin {
            id: "cut",
            label: "Cut",
        },
        PluginOptions::new().with_key("cut"),
    )?;
    registry.register_with(
        "menu",
        MenuItemPlugin {
            id: "copy",
            label: "Copy",
        },
        PluginOptions::new().with_key("copy"),
    )?;
    Ok(())
}

/// A grading module pinning its action to the top of the menu.
fn contribute_grading(registry: &mut PluginRegistry<MenuItemPlugin>) -> Result<(), AtriaError> {
    registry.register_with(
        "menu",
        MenuItemPlugin {
            id: "grade",
            label: "Grade selection",
        },
        PluginOptions::new().with_key("grade").with_sort(-100),
    )
}

#[test]
fn producers_contribute_then_component_consumes_once() {
    let mut registry = PluginRegistry::new();

    contribute_clipboard(&mut registry).unwrap();
    contribute_grading(&mut registry).unwrap();

    // The component may look items up by key while setup is still running.
    assert_eq!(
        registry.plugin_by_key("menu", "grade").map(|p| p.label),
        Some("Grade selection")
    );
    assert_eq!(registry.slot_state("menu"), SlotState::Open);

    // First enumeration: grading's pinned entry leads, the rest keep
    // contribution order.
    let items: Vec<&str> = registry.plugins("menu").iter().map(|p| p.id).collect();
    assert_eq!(items, ["grade", "cut", "copy"]);

    // A module loaded after the menu rendered gets a hard error instead of
    // a silently missing item.
    let late = registry.register(
        "menu",
        MenuItemPlugin {
            id: "late",
            label: "Too late",
        },
    );
    assert!(matches!(late, Err(AtriaError::AlreadyConsumed { .. })));

    // Unrelated slots of the same family are unaffected by the menu lock.
    registry
        .register(
            "toolbar",
            MenuItemPlugin {
                id: "bold",
                label: "Bold",
            },
        )
        .unwrap();
    assert_eq!(registry.plugins("toolbar").len(), 1);
}

#[test]
fn duplicate_contribution_keys_fail_the_second_producer() {
    let mut registry = PluginRegistry::new();
    contribute_clipboard(&mut registry).unwrap();

    // A second clipboard-like module colliding on "copy" fails fast.
    let err = registry
        .register_with(
            "menu",
            MenuItemPlugin {
                id: "copy2",
                label: "Copy (alt)",
            },
            PluginOptions::new().with_key("copy"),
        )
        .unwrap_err();
    assert!(matches!(err, AtriaError::DuplicateKey { slot, key } if slot == "menu" && key == "copy"));

    // The surviving entry is the first one.
    assert_eq!(
        registry.plugin_by_key("menu", "copy").map(|p| p.id),
        Some("copy")
    );
}
