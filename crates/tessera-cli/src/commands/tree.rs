//! Hierarchy printing

use super::{open, Context};
use anyhow::Result;
use tessera_scene::SceneObjectNode;

pub fn run(scene_path: &str, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    let document = session.document();

    if document.objects().is_empty() {
        println!("(no objects)");
    }
    for node in document.objects() {
        print_node(node, 0);
    }

    if !document.static_components().is_empty() {
        println!();
        println!("Static components:");
        for component in document.static_components() {
            println!("  {} [{}]", component.id, component.uuid().unwrap_or("-"));
        }
    }

    Ok(())
}

fn print_node(node: &SceneObjectNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = match (node.children.is_empty(), node.expanded) {
        (true, _) => " ",
        (false, true) => "-",
        (false, false) => "+",
    };
    let name = if node.name.is_empty() { "(unnamed)" } else { node.name.as_str() };
    println!("{}{} {} #{}", indent, marker, name, node.id);

    for component in &node.components {
        println!("{}    * {} [{}]", indent, component.id, component.uuid().unwrap_or("-"));
    }
    for (index, collider) in node.colliders.iter().enumerate() {
        println!("{}    ~ {} {}", indent, index, collider.shape_name().unwrap_or("?"));
    }

    if node.expanded {
        for child in &node.children {
            print_node(child, depth + 1);
        }
    }
}
