//! The full diagram render pass.
//!
//! One deterministic, synchronous pass: size and place every class box,
//! resolve connections by class name, merge shared-parent inheritance
//! edges into trees, route the rest, then place notes. The result is a
//! [`Scene`] — a structured draw list plus the computed box geometry —
//! which projects to an SVG document without further decisions.
//!
//! All per-render state (box geometry, placed notes) lives in the call
//! frame, so concurrent renders share nothing.

use crate::{
    color::Color,
    config::RenderOptions,
    draw::{
        ClassBox, ClassBoxDefinition, Connector, ConnectorDefinition, Drawable,
        GeneralizationTree, Note, NoteDefinition,
    },
    error::RenderError,
    geometry::{Bounds, Point, Size},
    layout::{self, ResolvedConnection},
    model::{self, ClassSpec},
};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::{collections::HashMap, rc::Rc};
use svg::{
    Document,
    node::element::{Group, Path, Rectangle},
};

/// A class box together with its computed position.
#[derive(Debug, Clone)]
pub struct PlacedBox {
    id: String,
    class_box: ClassBox,
    bounds: Bounds,
}

impl PlacedBox {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class_box(&self) -> &ClassBox {
        &self.class_box
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A placed note together with its dashed anchor segment.
#[derive(Debug, Clone)]
pub struct PlacedNote {
    note: Note,
    bounds: Bounds,
    anchor: (Point, Point),
}

impl PlacedNote {
    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn anchor(&self) -> (Point, Point) {
        self.anchor
    }
}

/// The structured result of a diagram render.
///
/// Everything needed to paint the diagram — or to hit-test it — without
/// re-running any layout logic.
#[derive(Debug)]
pub struct Scene {
    canvas: Size,
    boxes: Vec<PlacedBox>,
    connectors: Vec<Connector>,
    generalizations: Vec<GeneralizationTree>,
    notes: Vec<PlacedNote>,
    geometry: IndexMap<String, Bounds>,
}

impl Scene {
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn boxes(&self) -> &[PlacedBox] {
        &self.boxes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn generalizations(&self) -> &[GeneralizationTree] {
        &self.generalizations
    }

    pub fn notes(&self) -> &[PlacedNote] {
        &self.notes
    }

    /// The computed box geometry, keyed by class id in input order.
    pub fn geometry(&self) -> &IndexMap<String, Bounds> {
        &self.geometry
    }

    /// Projects the scene onto an SVG document.
    pub fn to_svg_document(&self) -> Document {
        let mut doc = Document::new()
            .set("width", self.canvas.width())
            .set("height", self.canvas.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", self.canvas.width(), self.canvas.height()),
            );

        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", self.canvas.width())
            .set("height", self.canvas.height())
            .set("fill", "white");
        doc = doc.add(background);

        let mut main_group = Group::new();

        for placed in &self.boxes {
            main_group = main_group.add(placed.class_box.render_to_svg(placed.bounds.center()));
        }

        for tree in &self.generalizations {
            main_group = main_group.add(tree.render());
        }

        for connector in &self.connectors {
            main_group = main_group.add(connector.render());
        }

        for placed in &self.notes {
            let (from, to) = placed.anchor;
            let anchor = Path::new()
                .set(
                    "d",
                    format!("M {} {} L {} {}", from.x(), from.y(), to.x(), to.y()),
                )
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 1)
                .set("stroke-dasharray", "5,3");
            main_group = main_group.add(anchor);
            main_group = main_group.add(placed.note.render_to_svg(placed.bounds.center()));
        }

        doc.add(main_group)
    }
}

/// Renders a class diagram into a [`Scene`].
///
/// Fails fast on an empty class list or a structurally malformed class
/// record; everything else degrades instead of failing (dangling
/// connection targets are dropped, oversized boxes are clamped, and
/// degenerate connectors are skipped).
pub fn render(classes: &[ClassSpec], options: &RenderOptions) -> Result<Scene, RenderError> {
    if classes.is_empty() {
        return Err(RenderError::EmptyInput);
    }
    model::validate(classes)?;

    let outline_color =
        Color::new(&options.outline_color).map_err(|_| RenderError::InvalidColor {
            value: options.outline_color.clone(),
        })?;

    // Size all boxes first; placement needs every size up front.
    let box_definition = {
        let mut definition = ClassBoxDefinition::new();
        definition.set_outline_color(outline_color);
        definition.set_outline_width(options.outline_width);
        definition.set_font_size(options.font_size);
        Rc::new(definition)
    };

    let class_boxes: Vec<ClassBox> = classes
        .iter()
        .map(|class| {
            ClassBox::new(
                Rc::clone(&box_definition),
                class.name.clone(),
                class.attribute_lines(),
                class.operation_lines(),
            )
        })
        .collect();

    let sizes: Vec<Size> = class_boxes.iter().map(Drawable::size).collect();
    let canvas = Size::new(options.canvas_width as f32, options.canvas_height as f32);
    let placements = layout::place(options.layout, &sizes, canvas);
    debug!(boxes_len = placements.len(); "Placed class boxes");

    let mut geometry = IndexMap::new();
    for (class, bounds) in classes.iter().zip(&placements) {
        geometry.insert(class.id.clone(), *bounds);
    }

    // Connections reference classes by name; later duplicates win, which
    // matches plain name lookup.
    let mut name_to_id: HashMap<&str, &str> = HashMap::new();
    for class in classes {
        name_to_id.insert(class.name.as_str(), class.id.as_str());
    }

    let mut resolved = Vec::new();
    for class in classes {
        for connection in &class.connections {
            match name_to_id.get(connection.target_class.as_str()) {
                Some(target_id) => resolved.push(ResolvedConnection {
                    source_id: class.id.clone(),
                    target_id: (*target_id).to_string(),
                    relationship: connection.relationship,
                    label: connection.label.clone(),
                    source_multiplicity: connection.source_multiplicity.clone(),
                    target_multiplicity: connection.target_multiplicity.clone(),
                }),
                None => {
                    warn!(
                        source = class.name.as_str(),
                        target = connection.target_class.as_str();
                        "Dropping connection to unknown class",
                    );
                }
            }
        }
    }

    let (groups, residual) = layout::group(resolved);
    debug!(groups_len = groups.len(), residual_len = residual.len(); "Grouped connections");

    let connector_definition = Rc::new(ConnectorDefinition::new());

    let mut generalizations = Vec::new();
    for group in groups {
        let parent_bounds = geometry[group.parent_id.as_str()];
        let child_bounds: Vec<Bounds> = group
            .child_ids
            .iter()
            .map(|id| geometry[id.as_str()])
            .collect();

        if let Some(tree) = GeneralizationTree::plan(
            Rc::clone(&connector_definition),
            parent_bounds,
            &child_bounds,
        ) {
            generalizations.push(tree);
        }
    }

    let mut connectors = Vec::new();
    for connection in residual {
        let source_bounds = geometry[connection.source_id.as_str()];
        let target_bounds = geometry[connection.target_id.as_str()];
        let (start, end) = layout::route(source_bounds, target_bounds);
        trace!(
            source = connection.source_id.as_str(),
            target = connection.target_id.as_str(),
            start_side:? = start.side(),
            end_side:? = end.side();
            "Routed connection",
        );

        let connector = Connector::new(
            Rc::clone(&connector_definition),
            start.point(),
            end.point(),
            connection.relationship,
        )
        .with_label(connection.label)
        .with_multiplicities(
            connection.source_multiplicity,
            connection.target_multiplicity,
        );

        if connector.is_degenerate() {
            debug!(source = connection.source_id.as_str(); "Skipping zero-length connector");
            continue;
        }
        connectors.push(connector);
    }

    // Notes come last so they can collide against final box positions.
    // Placement state is scoped to this render only.
    let mut note_state = layout::RenderState::new();
    let mut notes = Vec::new();
    for class in classes {
        let class_bounds = geometry[class.id.as_str()];
        for note_spec in &class.notes {
            if note_spec.text.trim().is_empty() {
                continue;
            }

            let note = Note::new(
                Rc::new(NoteDefinition::for_kind(note_spec.kind)),
                note_spec.text.clone(),
            );
            let (bounds, side) = layout::place_note(
                note.size(),
                class_bounds,
                canvas,
                note_spec.preferred_side,
                &mut note_state,
            );
            let anchor = layout::anchor_segment(class_bounds, bounds, side);
            notes.push(PlacedNote {
                note,
                bounds,
                anchor,
            });
        }
    }

    let boxes = classes
        .iter()
        .zip(class_boxes)
        .zip(placements)
        .map(|((class, class_box), bounds)| PlacedBox {
            id: class.id.clone(),
            class_box,
            bounds,
        })
        .collect();

    Ok(Scene {
        canvas,
        boxes,
        connectors,
        generalizations,
        notes,
        geometry,
    })
}
