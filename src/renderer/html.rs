//! HTML generation from the visual node tree

use base64::prelude::*;

use crate::layout::{NodeKind, StyleProperty, StyleValue, VisualNode};

use super::HtmlConfig;

/// Base styles for standalone documents; `{p}` is replaced by the class prefix
const BASE_CSS: &str = r#"
.{p}wrapper { font-family: system-ui, sans-serif; background: var(--{p}bg); color: var(--{p}text); padding: 24px; border-radius: 12px; }
.{p}title { font-size: 1.5em; font-weight: 600; margin-bottom: 16px; }
.{p}item-desc, .{p}card-desc, .{p}done-desc, .{p}step-desc, .{p}timeline-desc, .{p}snake-desc, .{p}ascending-desc, .{p}zigzag-desc, .{p}tree-desc, .{p}compare-desc, .{p}quadrant-desc, .{p}swot-content { color: var(--{p}text-muted); font-size: 0.9em; }
.{p}horizontal-arrow-list { display: flex; align-items: center; gap: 8px; }
.{p}arrow-item { display: flex; align-items: center; gap: 8px; }
.{p}step-number, .{p}step-num, .{p}snake-num, .{p}ascending-num, .{p}zigzag-num { background: var(--{p}accent); color: var(--{p}bg); border-radius: 50%; min-width: 28px; text-align: center; }
.{p}arrow { color: var(--{p}accent); }
.{p}grid-list { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 12px; }
.{p}badge-card, .{p}compact-card { background: var(--{p}surface); border: 1px solid var(--{p}border); border-radius: 8px; padding: 12px; }
.{p}compact-card { padding: 6px; }
.{p}card-value { display: inline-block; background: var(--{p}accent-light); border-radius: 4px; padding: 0 6px; }
.{p}done-item { display: flex; gap: 8px; }
.{p}check { color: var(--{p}success); }
.{p}step { display: flex; gap: 8px; }
.{p}step-line { border-left: 2px solid var(--{p}border); min-height: 16px; }
.{p}timeline-entry, .{p}snake-step, .{p}zigzag-step { display: flex; gap: 8px; width: 50%; }
.{p}right { margin-left: 50%; }
.{p}timeline-dot { width: 12px; height: 12px; border-radius: 50%; background: var(--{p}accent); }
.{p}ascending-step { margin-left: calc(var(--{p}step-index) * 24px); }
.{p}underline { border-bottom: 2px solid var(--{p}accent); }
.{p}tree-node-wrapper { margin-left: calc(var(--{p}level) * 16px); }
.{p}tree-node { background: var(--{p}surface); border: 1px solid var(--{p}border); border-radius: 8px; padding: 6px 10px; margin: 4px 0; }
.{p}pie-chart { display: flex; gap: 16px; align-items: center; }
.{p}pie-svg { width: 200px; height: 200px; }
.{p}legend-item { display: flex; gap: 6px; align-items: center; }
.{p}legend-color { width: 12px; height: 12px; border-radius: 2px; }
.{p}bar-row { display: flex; gap: 8px; align-items: center; }
.{p}bar-wrapper { flex: 1; display: flex; gap: 6px; align-items: center; }
.{p}bar { background: var(--{p}accent); height: 18px; border-radius: 4px; }
.{p}columns { display: flex; gap: 12px; align-items: flex-end; height: 200px; }
.{p}column-wrapper { display: flex; flex-direction: column; justify-content: flex-end; height: 100%; flex: 1; }
.{p}column { background: var(--{p}accent); border-radius: 4px 4px 0 0; }
.{p}swot, .{p}quadrant { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.{p}swot-quadrant, .{p}quadrant-cell, .{p}compare-side { background: var(--{p}surface); border: 1px solid var(--{p}border); border-radius: 8px; padding: 12px; }
.{p}swot-s { border-color: var(--{p}success); }
.{p}swot-w { border-color: var(--{p}warning); }
.{p}swot-o { border-color: var(--{p}info); }
.{p}swot-t { border-color: var(--{p}error); }
.{p}binary-compare { display: flex; gap: 12px; }
.{p}compare-side { flex: 1; }
.{p}icon-fallback { color: var(--{p}text-muted); }
"#;

/// Build HTML elements incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    elements: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        let indent = if config.standalone { 1 } else { 0 };
        Self {
            config,
            elements: vec![],
            indent,
        }
    }

    fn prefix(&self) -> &str {
        self.config.prefix()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn class_attr(&self, classes: &[String]) -> String {
        if classes.is_empty() {
            return String::new();
        }
        let prefix = self.prefix();
        let list = classes
            .iter()
            .map(|c| format!("{}{}", prefix, c))
            .collect::<Vec<_>>()
            .join(" ");
        format!(r#" class="{}""#, escape_html(&list))
    }

    fn style_attr(&self, styles: &[StyleProperty]) -> String {
        if styles.is_empty() {
            return String::new();
        }
        let declarations = styles
            .iter()
            .map(|s| {
                let name = if s.is_custom() {
                    format!("--{}{}", self.prefix(), &s.name[2..])
                } else {
                    s.name.clone()
                };
                format!("{}: {}", name, style_value(&s.value))
            })
            .collect::<Vec<_>>()
            .join("; ");
        format!(r#" style="{}""#, escape_html(&declarations))
    }

    /// Add a node and its subtree
    pub fn add_node(&mut self, node: &VisualNode) {
        let attrs = format!("{}{}", self.class_attr(&node.classes), self.style_attr(&node.styles));
        let text = node.text.as_deref().map(escape_html).unwrap_or_default();

        let tag = match &node.kind {
            NodeKind::Block => "div",
            NodeKind::Inline => "span",
            NodeKind::List => "ul",
            NodeKind::ListItem => "li",
            NodeKind::Glyph(glyph) => {
                self.push_line(format!("<span{}>{}</span>", attrs, glyph));
                return;
            }
            NodeKind::Icon(reference) => {
                self.push_line(format!(
                    r#"<span class="iconify" data-icon="{}"></span>"#,
                    escape_html(reference)
                ));
                return;
            }
            NodeKind::Wedge(wedge) => {
                self.push_line(format!(
                    r#"<path{} d="{}" fill="{}"/>"#,
                    attrs,
                    wedge.path_data(),
                    escape_html(&wedge.fill)
                ));
                return;
            }
            NodeKind::Chart(view_box) => {
                self.open(format!(
                    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}"{}>"#,
                    view_box.x, view_box.y, view_box.width, view_box.height, attrs
                ));
                self.add_children(node);
                self.close("</svg>");
                return;
            }
        };

        if node.children.is_empty() {
            self.push_line(format!("<{tag}{attrs}>{text}</{tag}>"));
        } else {
            self.open(format!("<{tag}{attrs}>{text}"));
            self.add_children(node);
            self.close(&format!("</{tag}>"));
        }
    }

    fn add_children(&mut self, node: &VisualNode) {
        for child in &node.children {
            self.add_node(child);
        }
    }

    fn push_line(&mut self, element: String) {
        self.elements.push(format!("{}{}", self.indent_str(), element));
    }

    fn open(&mut self, element: String) {
        self.push_line(element);
        self.indent += 1;
    }

    fn close(&mut self, element: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push_line(element.to_string());
    }

    /// Build the final HTML string
    pub fn build(self) -> String {
        let nl = self.newline();
        let body = self.elements.join(nl);

        if !self.config.standalone {
            return body;
        }

        let css = BASE_CSS.trim().replace("{p}", self.prefix());
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>");
        html.push_str(nl);
        html.push_str(r#"<html><head><meta charset="utf-8"><style>"#);
        html.push_str(nl);
        html.push_str(&css);
        html.push_str(nl);
        html.push_str("</style></head><body>");
        html.push_str(nl);
        html.push_str(&body);
        html.push_str(nl);
        html.push_str("</body></html>");
        html.push_str(nl);
        html
    }
}

fn style_value(value: &StyleValue) -> String {
    match value {
        StyleValue::Percent(p) => format!("{}%", p),
        StyleValue::Color(c) => c.clone(),
        StyleValue::Index(i) => i.to_string(),
    }
}

/// Render a visual tree to HTML
pub fn render_html(root: &VisualNode, config: &HtmlConfig) -> String {
    let mut builder = HtmlBuilder::new(config.clone());
    builder.add_node(root);
    builder.build()
}

/// Encode markup as a base64 `data:` URL
pub fn to_data_url(markup: &str, mime: &str) -> String {
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(markup.as_bytes()))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Wedge, PIE_VIEW_BOX};

    fn fragment() -> HtmlConfig {
        HtmlConfig::new().with_standalone(false).with_pretty_print(false)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""q""#), "&quot;q&quot;");
    }

    #[test]
    fn test_classes_and_styles_are_prefixed() {
        let node = VisualNode::block("bar")
            .with_style("width", StyleValue::Percent(50.0))
            .with_style("--level", StyleValue::Index(2));
        assert_eq!(
            render_html(&node, &fragment()),
            r#"<div class="ig-bar" style="width: 50%; --ig-level: 2"></div>"#
        );
    }

    #[test]
    fn test_without_prefix() {
        let node = VisualNode::text_block("label", "Hi");
        let html = render_html(&node, &fragment().without_class_prefix());
        assert_eq!(html, r#"<div class="label">Hi</div>"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let node = VisualNode::text_block("label", "<script>");
        assert!(render_html(&node, &fragment()).contains("&lt;script&gt;"));
    }

    #[test]
    fn test_icon_placeholder() {
        let node = VisualNode::new(NodeKind::Icon("mdi:rocket".into()));
        assert_eq!(
            render_html(&node, &fragment()),
            r#"<span class="iconify" data-icon="mdi:rocket"></span>"#
        );
    }

    #[test]
    fn test_pie_surface() {
        let chart = VisualNode::new(NodeKind::Chart(PIE_VIEW_BOX))
            .with_class("pie-svg")
            .with_child(
                VisualNode::new(NodeKind::Wedge(Wedge {
                    start_angle: 0.0,
                    sweep_angle: 1.0,
                    fill: "#ff0000".into(),
                }))
                .with_class("pie-slice"),
            );
        let html = render_html(&chart, &fragment());
        assert!(html.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-1 -1 2 2" class="ig-pie-svg">"#));
        assert!(html.contains(r##"fill="#ff0000""##));
        assert!(html.ends_with("</svg>"));
    }

    #[test]
    fn test_pretty_print_nesting() {
        let node = VisualNode::block("outer").with_child(VisualNode::text_block("inner", "x"));
        let html = render_html(&node, &HtmlConfig::new().with_standalone(false));
        assert_eq!(
            html,
            "<div class=\"ig-outer\">\n  <div class=\"ig-inner\">x</div>\n</div>"
        );
    }

    #[test]
    fn test_standalone_document() {
        let html = render_html(&VisualNode::block("wrapper"), &HtmlConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(".ig-wrapper {"));
        assert!(!html.contains("{p}"));
        assert!(html.trim_end().ends_with("</body></html>"));
    }

    #[test]
    fn test_data_url() {
        insta::assert_snapshot!(to_data_url("<b>hi</b>", "text/html"), @"data:text/html;base64,PGI+aGk8L2I+");
    }
}
