//! File tree example.
//!
//! Builds a single-selection project tree, drives it with the keyboard the
//! way a host would forward key presses, and prints the tree after each step.
//!
//! Run with: cargo run -p arbor --example file_tree
//! Set `RUST_LOG=arbor=trace` to see every handled key.

use arbor::arbor_core::TreeFormatOptions;
use arbor::model::{ItemDefinition, SelectionMode, TreeDefinition};
use arbor::widget::events::{Key, KeyPressEvent};
use arbor::widget::tree_view::TreeViewRoot;
use tracing_subscriber::EnvFilter;

fn press(tree: &TreeViewRoot, key: Key) -> Result<(), arbor::TreeViewError> {
    let Some(active) = tree.active_value() else {
        return Ok(());
    };
    let mut event = KeyPressEvent::key(key);
    tree.item(&active)?.content().handle_key_press(&mut event);
    println!("{key:?} -> focus on {:?}", tree.active_value().unwrap_or_default());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arbor=debug")))
        .init();

    let definition = TreeDefinition::new()
        .with_item(
            ItemDefinition::new("src")
                .with_child(
                    ItemDefinition::new("components")
                        .with_child(ItemDefinition::new("Button.tsx"))
                        .with_child(ItemDefinition::new("TreeView.tsx")),
                )
                .with_child(ItemDefinition::new("index.ts")),
        )
        .with_item(ItemDefinition::new("public").with_child(ItemDefinition::new("favicon.ico")))
        .with_item(ItemDefinition::new("package.json"));

    let tree = TreeViewRoot::builder(definition)
        .selection_mode(SelectionMode::Single)
        .aria_label("Project files")
        .build()?;

    tree.expanded_changed.connect(|(expanded, details)| {
        println!("expanded ({}): {expanded:?}", details.reason());
    });
    tree.selected_changed.connect(|(selected, details)| {
        println!("selected ({}): {selected}", details.reason());
    });

    tree.set_active_value(Some("src"), arbor::arbor_core::InteractionReason::Pointer);
    for key in [Key::ArrowRight, Key::ArrowRight, Key::ArrowRight, Key::ArrowDown, Key::Enter] {
        press(&tree, key)?;
    }
    print!("{}", tree.format_tree(&TreeFormatOptions::default()));

    for key in [Key::ArrowLeft, Key::ArrowLeft, Key::End, Key::Home] {
        press(&tree, key)?;
    }

    let mut asterisk = KeyPressEvent::from_dom_key("*");
    tree.item("src")?.content().handle_key_press(&mut asterisk);
    print!("{}", tree.format_tree(&TreeFormatOptions::default()));
    Ok(())
}
