//! Multiple selection example.
//!
//! Shows hierarchical checkbox selection: checking a folder checks its whole
//! subtree, checking part of a subtree puts the folder in the mixed state.
//!
//! Run with: cargo run -p arbor --example multiple_selection

use arbor::arbor_core::{TreeFormatOptions, TreeStyle};
use arbor::model::{ItemDefinition, SelectionMode, TreeDefinition};
use arbor::widget::events::ClickEvent;
use arbor::widget::tree_view::TreeViewRoot;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arbor=info")))
        .init();

    let definition = TreeDefinition::new()
        .with_item(
            ItemDefinition::new("fruits")
                .with_child(ItemDefinition::new("apple"))
                .with_child(ItemDefinition::new("banana"))
                .with_child(ItemDefinition::new("cherry")),
        )
        .with_item(
            ItemDefinition::new("vegetables")
                .with_child(ItemDefinition::new("carrot"))
                .with_child(ItemDefinition::new("potato").disabled(true)),
        );

    let tree = TreeViewRoot::builder(definition)
        .selection_mode(SelectionMode::Multiple)
        .default_expanded(["fruits", "vegetables"])
        .build()?;

    tree.selected_changed.connect(|(selected, _)| println!("selected: {selected}"));

    let options = TreeFormatOptions {
        style: TreeStyle::Unicode,
        ..TreeFormatOptions::default()
    };

    let click = |value: &str| -> Result<(), arbor::TreeViewError> {
        let checkbox = tree.item(value)?.checkbox();
        let changed = checkbox.handle_click(&mut ClickEvent::pointer());
        println!("click {value}: changed={changed} aria-checked={:?}", checkbox.attributes().get("aria-checked"));
        Ok(())
    };

    click("banana")?;
    click("fruits")?;
    click("fruits")?;
    click("potato")?;
    click("carrot")?;

    print!("{}", tree.format_tree(&options));
    Ok(())
}
