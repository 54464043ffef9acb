//! Virtualized tree example.
//!
//! Binds a [`FixedSizeVirtualizer`] to a large tree. The row count follows
//! expansion, and keyboard focus scrolls the focused row into view.
//!
//! Run with: cargo run -p arbor --example virtualized

use std::sync::Arc;

use arbor::model::{ItemDefinition, TreeDefinition};
use arbor::widget::events::{Key, KeyPressEvent};
use arbor::widget::tree_view::{FixedSizeVirtualizer, TreeViewRoot, Virtualizer, bind_virtualizer};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arbor::virtualization=trace")),
        )
        .init();

    let folders = (0..50).map(|folder| {
        let base = folder * 21;
        let mut item = ItemDefinition::new(format!("folder-{folder}")).with_index(base);
        for file in 0..20 {
            item = item.with_child(ItemDefinition::new(format!("file-{folder}-{file}")).with_index(base + 1 + file));
        }
        item
    });
    let definition = TreeDefinition::new().with_items(folders);

    let tree = TreeViewRoot::builder(definition).virtualized(true).build()?;
    let virtualizer = Arc::new(Mutex::new(FixedSizeVirtualizer::new(0, 400.0).with_overscan(5)));
    let binding = bind_virtualizer(&tree, virtualizer.clone());
    println!("rows: {}, window: {:?}", virtualizer.lock().count(), virtualizer.lock().visible_range());

    tree.toggle_expansion("folder-0", true);
    tree.toggle_expansion("folder-1", true);
    println!("rows: {}", virtualizer.lock().count());

    let mut end = KeyPressEvent::key(Key::End);
    tree.item("folder-0")?.content().handle_key_press(&mut end);
    let v = virtualizer.lock();
    println!(
        "focus {:?} at offset {}, window: {:?}",
        tree.active_value(),
        v.scroll_offset(),
        v.visible_range()
    );
    drop(v);

    binding.unbind(&tree);
    Ok(())
}
