//! Visual node tree produced by the layout engine

use std::f64::consts::PI;

/// View box of the pie chart's SVG surface, unit circle centred on the origin
pub const PIE_VIEW_BOX: ViewBox = ViewBox {
    x: -1.0,
    y: -1.0,
    width: 2.0,
    height: 2.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the unit circle at `angle` radians
    pub fn on_unit_circle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }
}

/// One pie slice, angles in radians measured clockwise on screen from +x
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub fill: String,
}

impl Wedge {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Fraction of a full turn covered by this slice
    pub fn fraction(&self) -> f64 {
        self.sweep_angle / (2.0 * PI)
    }

    /// SVG path data for the slice on the unit circle
    pub fn path_data(&self) -> String {
        let start = Point::on_unit_circle(self.start_angle);

        // A single arc from a point back to itself draws nothing
        if self.sweep_angle >= 2.0 * PI - 1e-9 {
            let opposite = Point::on_unit_circle(self.start_angle + PI);
            return format!(
                "M 0 0 L {} {} A 1 1 0 0 1 {} {} A 1 1 0 0 1 {} {} Z",
                start.x, start.y, opposite.x, opposite.y, start.x, start.y
            );
        }

        let end = Point::on_unit_circle(self.end_angle());
        let large_arc = if self.sweep_angle > PI { 1 } else { 0 };
        format!(
            "M 0 0 L {} {} A 1 1 0 {} 1 {} {} Z",
            start.x, start.y, large_arc, end.x, end.y
        )
    }
}

/// What a node draws
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Block container
    Block,
    /// Inline text run
    Inline,
    /// Bulleted list
    List,
    ListItem,
    /// Fixed decorative glyph such as an arrow or check mark
    Glyph(&'static str),
    /// Placeholder for the external icon renderer, keyed by the full reference
    Icon(String),
    /// Vector drawing surface
    Chart(ViewBox),
    Wedge(Wedge),
}

/// Typed style property value
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Percent(f64),
    Color(String),
    Index(usize),
}

impl StyleValue {
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            StyleValue::Percent(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            StyleValue::Index(i) => Some(*i),
            _ => None,
        }
    }
}

/// A style property. Names starting with `--` are custom properties.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProperty {
    pub name: String,
    pub value: StyleValue,
}

impl StyleProperty {
    pub fn is_custom(&self) -> bool {
        self.name.starts_with("--")
    }
}

/// A node in the visual tree
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub kind: NodeKind,
    /// Bare class names; the serialiser applies any configured prefix
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub styles: Vec<StyleProperty>,
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            classes: vec![],
            text: None,
            styles: vec![],
            children: vec![],
        }
    }

    /// Block container with one class
    pub fn block(class: &str) -> Self {
        Self::new(NodeKind::Block).with_class(class)
    }

    /// Block holding a line of text
    pub fn text_block(class: &str, text: impl Into<String>) -> Self {
        Self::block(class).with_text(text)
    }

    pub fn inline(class: &str, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Inline).with_class(class).with_text(text)
    }

    pub fn glyph(class: &str, glyph: &'static str) -> Self {
        Self::new(NodeKind::Glyph(glyph)).with_class(class)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_style(mut self, name: impl Into<String>, value: StyleValue) -> Self {
        self.styles.push(StyleProperty {
            name: name.into(),
            value,
        });
        self
    }

    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: VisualNode) {
        self.children.push(child);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style(&self, name: &str) -> Option<&StyleValue> {
        self.styles.iter().find(|s| s.name == name).map(|s| &s.value)
    }

    /// Direct children carrying `class`
    pub fn children_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a VisualNode> {
        self.children.iter().filter(move |c| c.has_class(class))
    }

    /// All descendants (depth first, self included) carrying `class`
    pub fn find_all<'a>(&'a self, class: &str) -> Vec<&'a VisualNode> {
        let mut found = vec![];
        self.collect(class, &mut found);
        found
    }

    /// First descendant (depth first, self included) carrying `class`
    pub fn find(&self, class: &str) -> Option<&VisualNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class))
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a VisualNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(class, found);
        }
    }
}
