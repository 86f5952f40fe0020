//! PlantUML text projection.
//!
//! A pure projection of the class records into PlantUML class-diagram
//! syntax. No geometry is involved; the output reflects exactly what the
//! renderer receives, including connections whose targets do not resolve.

use crate::model::{ClassSpec, Relationship};
use std::fmt::Write;

fn relationship_symbol(relationship: Relationship) -> &'static str {
    match relationship {
        Relationship::Inheritance => "<|--",
        Relationship::Association => "--",
        Relationship::Aggregation => "o--",
        Relationship::Composition => "*--",
        Relationship::Dependency => "..>",
        Relationship::Realization => "<|..",
    }
}

/// Renders the class list as PlantUML source.
pub fn to_plantuml(classes: &[ClassSpec]) -> String {
    let mut uml = String::from("@startuml\n\n");

    for class in classes {
        let _ = writeln!(uml, "class {} {{", class.name);

        for note in &class.notes {
            if !note.text.trim().is_empty() {
                let _ = writeln!(uml, "  note [{:?}]: {}", note.kind, note.text);
            }
        }
        if !class.notes.is_empty() && (!class.attributes.is_empty() || !class.operations.is_empty())
        {
            uml.push_str("  --\n");
        }

        for attribute in &class.attributes {
            let _ = writeln!(uml, "  {}", attribute.to_line());
        }
        if !class.attributes.is_empty() && !class.operations.is_empty() {
            uml.push_str("  --\n");
        }

        for operation in &class.operations {
            let _ = writeln!(uml, "  {}", operation.to_line());
        }

        uml.push_str("}\n\n");
    }

    for class in classes {
        for connection in &class.connections {
            if !connection.target_class.is_empty() {
                let _ = writeln!(
                    uml,
                    "{} {} {}",
                    class.name,
                    relationship_symbol(connection.relationship),
                    connection.target_class
                );
            }
        }
    }

    uml.push_str("\n@enduml");
    uml
}
