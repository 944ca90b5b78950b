//! Wrapper construction and template dispatch

use tracing::debug;

use crate::parser::Document;
use crate::stylesheet::Stylesheet;
use crate::template::{resolve_layout, template_category, Layout};

use super::config::RenderOptions;
use super::types::{StyleValue, VisualNode};
use super::{chart, compare, hierarchy, list, quadrant, sequence};

/// Build the visual tree for a document
///
/// The result is a single `wrapper` node carrying the theme classes and the
/// palette as custom properties, an optional `title`, and a `content` node
/// holding the layout chosen for the document's template.
pub fn render(doc: &Document, options: &RenderOptions, stylesheet: &Stylesheet) -> VisualNode {
    let scheme = scheme_name(doc, options, stylesheet);
    let palette = stylesheet.palette(scheme, options.theme);

    let mut wrapper = VisualNode::block("wrapper")
        .with_class(options.theme.as_str())
        .with_class(format!("scheme-{}", scheme));
    if options.enable_animations {
        wrapper = wrapper.with_class("animated");
    }
    for (role, color) in palette.roles() {
        wrapper = wrapper.with_style(format!("--{}", role), StyleValue::Color(color.to_string()));
    }

    if let Some(title) = &doc.title {
        wrapper.push(VisualNode::text_block("title", title));
    }

    let category = template_category(&doc.template);
    let layout = resolve_layout(&doc.template);
    debug!(
        template = %doc.template,
        %category,
        ?layout,
        scheme,
        items = doc.items.len(),
        "dispatching template"
    );

    let content = VisualNode::block("content")
        .with_class(format!("category-{}", category))
        .with_class(format!("template-{}", doc.template))
        .with_child(layout_node(doc, layout, options, stylesheet));
    wrapper.push(content);

    wrapper
}

/// Append the rendered document to a caller-owned container
pub fn render_into(
    container: &mut VisualNode,
    doc: &Document,
    options: &RenderOptions,
    stylesheet: &Stylesheet,
) {
    container.push(render(doc, options, stylesheet));
}

/// A document `theme` naming a scheme the stylesheet defines wins over the option
fn scheme_name<'a>(doc: &'a Document, options: &RenderOptions, stylesheet: &Stylesheet) -> &'a str {
    match doc.theme.as_deref() {
        Some(theme) if stylesheet.has_scheme(theme) => theme,
        _ => options.color_scheme.as_str(),
    }
}

fn layout_node(doc: &Document, layout: Layout, options: &RenderOptions, stylesheet: &Stylesheet) -> VisualNode {
    let items = &doc.items;
    match layout {
        Layout::List(layout) => list::render(items, layout),
        Layout::Sequence(layout) => sequence::render(items, layout),
        Layout::Hierarchy(layout) => hierarchy::render(items, layout),
        Layout::Chart(layout) => chart::render(items, layout, stylesheet, options.theme),
        Layout::Compare(layout) => compare::render(items, layout),
        Layout::Quadrant => quadrant::render(items),
    }
}
