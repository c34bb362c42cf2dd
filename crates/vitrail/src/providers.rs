// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vitrail providers` command implementation.
//!
//! Prints the provider table the registry holds for this platform, in
//! priority order, so a user can see exactly what selection will try
//! and in which order.

use vitrail_core::types::Category;
use vitrail_registry::Registry;

/// Run the `vitrail providers` command.
///
/// With `--category`, lists one category and fails loudly on an unknown
/// key; otherwise lists every category.
pub fn run(registry: &Registry, category_key: Option<&str>) -> Result<(), String> {
    match category_key {
        Some(key) => {
            let category = registry
                .category_by_key(key)
                .map_err(|err| err.to_string())?;
            print_category(registry, category);
        }
        None => {
            println!("provider registry for platform `{}`:", registry.platform());
            println!();
            for &category in registry.categories() {
                print_category(registry, category);
            }
        }
    }
    Ok(())
}

fn print_category(registry: &Registry, category: Category) {
    println!("  {category}:");
    for entry in registry.entries(category) {
        println!("    {:<16} {}", entry.name, entry.module_id);
    }
}
