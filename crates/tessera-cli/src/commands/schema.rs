//! Schema introspection command

use super::{open, Context};
use anyhow::Result;
use tessera_schema::ComponentScope;

pub fn run(scene_path: &str, statics: bool, format: &str, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    let scope = if statics {
        ComponentScope::Static
    } else {
        ComponentScope::Attachable
    };
    let table = session.schemas().table(scope);

    match format {
        "json" => {
            let schemas: Vec<_> = table.iter().collect();
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
        "text" => {
            println!("{} components ({}):", scope, table.len());
            for schema in table.iter() {
                println!();
                println!("{}", schema.name);
                if schema.properties.is_empty() {
                    println!("  (no properties)");
                }
                for property in &schema.properties {
                    println!("  {} : {}", property.name, property.property_type);
                }
            }
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }

    Ok(())
}
