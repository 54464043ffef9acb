//! Drag and drop example.
//!
//! Reparents files between folders through [`TreeDragDrop`], the way a host
//! drag library would report drag start, hover and drop.
//!
//! Run with: cargo run -p arbor --example drag_and_drop

use arbor::arbor_core::TreeFormatOptions;
use arbor::model::{ItemDefinition, TreeDefinition};
use arbor::widget::tree_view::{TreeDragDrop, TreeViewRoot};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arbor=debug")))
        .init();

    let definition = TreeDefinition::new().with_item(
        ItemDefinition::new("project")
            .with_child(
                ItemDefinition::new("src")
                    .with_child(ItemDefinition::new("index.ts"))
                    .with_child(ItemDefinition::new("App.tsx")),
            )
            .with_child(ItemDefinition::new("docs").with_child(ItemDefinition::new("README.md"))),
    );

    let tree = TreeViewRoot::builder(definition)
        .default_expanded(["project", "src", "docs"])
        .build()?;
    print!("{}", tree.format_tree(&TreeFormatOptions::default()));

    let mut dnd = TreeDragDrop::new(&tree);
    if let Some(payload) = dnd.start_drag(&tree.item("README.md")?) {
        for target in ["docs", "index.ts", "src"] {
            println!("hover {target}: accepted={}", dnd.drag_enter(target));
        }
        dnd.drop(&payload, "src")?;
    }
    print!("{}", tree.format_tree(&TreeFormatOptions::default()));

    if let Some(payload) = dnd.start_drag(&tree.item("project")?) {
        if let Err(err) = dnd.drop(&payload, "src") {
            println!("rejected: {err}");
        }
    }
    Ok(())
}
