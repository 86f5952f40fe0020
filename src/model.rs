//! Typed class-diagram input records.
//!
//! Every record is an explicit struct with stated defaults; validation
//! happens once at the boundary ([`validate`]) rather than being sprinkled
//! through the layout code.

use crate::{error::RenderError, geometry::Side};
use serde::Deserialize;
use std::str::FromStr;

/// UML member visibility with its conventional symbol prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// Returns the UML shorthand prefix: `+` public, `-` private, `#` protected.
    pub fn symbol(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
        }
    }
}

fn default_private() -> Visibility {
    Visibility::Private
}

fn default_public() -> Visibility {
    Visibility::Public
}

fn default_void() -> String {
    "void".to_string()
}

/// The kind of relationship a connector expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Association,
    Aggregation,
    Composition,
    Inheritance,
    Realization,
    Dependency,
}

impl FromStr for Relationship {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "association" => Ok(Self::Association),
            "aggregation" => Ok(Self::Aggregation),
            "composition" => Ok(Self::Composition),
            "inheritance" => Ok(Self::Inheritance),
            "realization" => Ok(Self::Realization),
            "dependency" => Ok(Self::Dependency),
            _ => Err("Invalid relationship"),
        }
    }
}

impl Relationship {
    /// Relationships drawn with a dashed line instead of a solid one.
    pub fn is_dashed(self) -> bool {
        matches!(self, Relationship::Realization | Relationship::Dependency)
    }
}

/// A class attribute. Rendered as `{symbol}{name}: {type}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeSpec {
    pub name: String,

    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(default = "default_private")]
    pub visibility: Visibility,
}

impl AttributeSpec {
    /// Formats this attribute as its compartment line.
    pub fn to_line(&self) -> String {
        format!("{}{}: {}", self.visibility.symbol(), self.name, self.type_name)
    }
}

/// A single operation parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSpec {
    pub name: String,

    #[serde(rename = "type", default)]
    pub type_name: String,
}

/// A class operation. Rendered as `{symbol}{name}({params}): {returnType}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationSpec {
    pub name: String,

    #[serde(rename = "returnType", default = "default_void")]
    pub return_type: String,

    #[serde(default = "default_public")]
    pub visibility: Visibility,

    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl OperationSpec {
    /// Formats this operation as its compartment line.
    pub fn to_line(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.type_name))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}{}({}): {}",
            self.visibility.symbol(),
            self.name,
            params,
            self.return_type
        )
    }
}

/// Category of an annotation note, mapped to a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum NoteKind {
    #[default]
    Standard,
    Information,
    Warning,
    Success,
    Confirmation,
    Decorative,
}

impl NoteKind {
    /// Returns the CSS background color used when drawing this note.
    pub fn background_color(self) -> &'static str {
        match self {
            NoteKind::Standard => "yellow",
            NoteKind::Information => "lightblue",
            NoteKind::Warning => "orange",
            NoteKind::Success => "lightgreen",
            NoteKind::Confirmation => "lightcyan",
            NoteKind::Decorative => "lavender",
        }
    }
}

/// An annotation attached to a class.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteSpec {
    pub text: String,

    #[serde(default)]
    pub kind: NoteKind,

    /// Which side of the class box to try first when placing the note.
    #[serde(rename = "preferredSide", default)]
    pub preferred_side: Option<Side>,
}

/// A relationship from the owning class to `target_class`.
///
/// The target is referenced by class *name*, not id; a name that does not
/// resolve to any class in the diagram is skipped during routing.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionSpec {
    #[serde(rename = "targetClass")]
    pub target_class: String,

    pub relationship: Relationship,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(rename = "sourceMultiplicity", default)]
    pub source_multiplicity: Option<String>,

    #[serde(rename = "targetMultiplicity", default)]
    pub target_multiplicity: Option<String>,
}

/// A single class in the diagram.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassSpec {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,

    #[serde(default)]
    pub operations: Vec<OperationSpec>,

    #[serde(default)]
    pub notes: Vec<NoteSpec>,

    #[serde(default)]
    pub connections: Vec<ConnectionSpec>,
}

impl ClassSpec {
    /// Creates an empty class with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Vec::new(),
            operations: Vec::new(),
            notes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Formats all attributes as compartment lines, in declaration order.
    pub fn attribute_lines(&self) -> Vec<String> {
        self.attributes.iter().map(AttributeSpec::to_line).collect()
    }

    /// Formats all operations as compartment lines, in declaration order.
    pub fn operation_lines(&self) -> Vec<String> {
        self.operations.iter().map(OperationSpec::to_line).collect()
    }
}

/// Validates structural requirements on the class records.
///
/// Only hard requirements are checked here: every class needs a non-empty
/// `id` and `name`. Dangling connection targets are deliberately *not* an
/// error; they are dropped during routing.
pub fn validate(classes: &[ClassSpec]) -> Result<(), RenderError> {
    for (class_index, class) in classes.iter().enumerate() {
        if class.name.trim().is_empty() {
            return Err(RenderError::InvalidSpec {
                class_index,
                field: "name",
            });
        }
        if class.id.trim().is_empty() {
            return Err(RenderError::InvalidSpec {
                class_index,
                field: "id",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_symbols() {
        assert_eq!(Visibility::Public.symbol(), '+');
        assert_eq!(Visibility::Private.symbol(), '-');
        assert_eq!(Visibility::Protected.symbol(), '#');
    }

    #[test]
    fn test_attribute_line_format() {
        let attr = AttributeSpec {
            name: "age".to_string(),
            type_name: "int".to_string(),
            visibility: Visibility::Private,
        };
        assert_eq!(attr.to_line(), "-age: int");
    }

    #[test]
    fn test_operation_line_without_parameters() {
        let op = OperationSpec {
            name: "getName".to_string(),
            return_type: "string".to_string(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
        };
        assert_eq!(op.to_line(), "+getName(): string");
    }

    #[test]
    fn test_operation_line_with_parameters() {
        let op = OperationSpec {
            name: "setAge".to_string(),
            return_type: "void".to_string(),
            visibility: Visibility::Protected,
            parameters: vec![
                ParameterSpec {
                    name: "years".to_string(),
                    type_name: "int".to_string(),
                },
                ParameterSpec {
                    name: "force".to_string(),
                    type_name: "bool".to_string(),
                },
            ],
        };
        assert_eq!(op.to_line(), "#setAge(years: int, force: bool): void");
    }

    #[test]
    fn test_relationship_from_str() {
        assert_eq!(
            "inheritance".parse::<Relationship>(),
            Ok(Relationship::Inheritance)
        );
        assert!("friendship".parse::<Relationship>().is_err());
    }

    #[test]
    fn test_dashed_relationships() {
        assert!(Relationship::Realization.is_dashed());
        assert!(Relationship::Dependency.is_dashed());
        assert!(!Relationship::Association.is_dashed());
        assert!(!Relationship::Inheritance.is_dashed());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "id": "c1",
            "name": "Person",
            "attributes": [{"name": "age", "type": "int"}],
            "operations": [{"name": "getAge"}]
        }"#;

        let class: ClassSpec = serde_json::from_str(json).unwrap();
        assert_eq!(class.attributes[0].visibility, Visibility::Private);
        assert_eq!(class.operations[0].visibility, Visibility::Public);
        assert_eq!(class.operations[0].return_type, "void");
    }

    #[test]
    fn test_validate_accepts_well_formed_classes() {
        let classes = vec![ClassSpec::new("c1", "Person")];
        assert!(validate(&classes).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let classes = vec![ClassSpec::new("c1", "")];
        let err = validate(&classes).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidSpec {
                class_index: 0,
                field: "name"
            }
        ));
    }

    #[test]
    fn test_validate_rejects_missing_id() {
        let classes = vec![ClassSpec::new("ok", "First"), ClassSpec::new("", "Second")];
        let err = validate(&classes).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidSpec {
                class_index: 1,
                field: "id"
            }
        ));
    }

    #[test]
    fn test_note_kind_colors() {
        assert_eq!(NoteKind::Standard.background_color(), "yellow");
        assert_eq!(NoteKind::Warning.background_color(), "orange");
    }
}
