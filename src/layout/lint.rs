//! Lint checks for documents that render, but not the way the author likely meant.
//!
//! Rendering never fails on body content: surplus items are dropped, bad
//! numbers become 0, broken icons become a fallback glyph. These checks report
//! each of those silent degradations so the CLI can surface them.

use std::fmt;

use crate::parser::{Document, Item, ItemValue};
use crate::template::{
    is_valid_template, resolve_layout, template_category, CompareLayout, Layout, TemplateCategory,
};

use super::icon::split_reference;
use super::quadrant::QUADRANT_CELLS;

/// A lint warning about a document
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Template,
    Cardinality,
    Value,
    Chart,
    Icon,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Template => write!(f, "template"),
            LintCategory::Cardinality => write!(f, "cardinality"),
            LintCategory::Value => write!(f, "value"),
            LintCategory::Chart => write!(f, "chart"),
            LintCategory::Icon => write!(f, "icon"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a parsed document.
pub fn check(doc: &Document) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_template(doc, &mut warnings);
    check_cardinality(doc, &mut warnings);
    check_chart_values(doc, &mut warnings);
    check_icons(&doc.items, &mut warnings);
    warnings
}

fn warn(warnings: &mut Vec<LintWarning>, category: LintCategory, message: String) {
    warnings.push(LintWarning { category, message });
}

fn check_template(doc: &Document, warnings: &mut Vec<LintWarning>) {
    if is_valid_template(&doc.template) {
        return;
    }
    let category = template_category(&doc.template);
    let fallback = if category == TemplateCategory::Unknown {
        "the list card grid".to_string()
    } else {
        format!("the generic {} layout", category)
    };
    warn(
        warnings,
        LintCategory::Template,
        format!("unknown template \"{}\", rendering with {}", doc.template, fallback),
    );
}

fn check_cardinality(doc: &Document, warnings: &mut Vec<LintWarning>) {
    let (limit, what) = match resolve_layout(&doc.template) {
        Layout::Compare(CompareLayout::Swot) => (4, "SWOT quadrants"),
        Layout::Compare(CompareLayout::Binary) => (2, "comparison panels"),
        Layout::Quadrant => (QUADRANT_CELLS, "quadrant cells"),
        _ => return,
    };
    if doc.items.len() > limit {
        warn(
            warnings,
            LintCategory::Cardinality,
            format!(
                "{} items given but only {} {} are drawn; items after \"{}\" are ignored",
                doc.items.len(),
                limit,
                what,
                doc.items[limit - 1].label
            ),
        );
    }
}

fn check_chart_values(doc: &Document, warnings: &mut Vec<LintWarning>) {
    if !matches!(resolve_layout(&doc.template), Layout::Chart(_)) || doc.items.is_empty() {
        return;
    }

    for item in &doc.items {
        let problem = match &item.value {
            None => Some("has no value".to_string()),
            Some(ItemValue::Text(text)) => Some(format!("has non-numeric value \"{}\"", text)),
            Some(ItemValue::Number(n)) if !n.is_finite() || *n < 0.0 => {
                Some(format!("has value {} which cannot be charted", n))
            }
            Some(ItemValue::Number(_)) => None,
        };
        if let Some(problem) = problem {
            warn(
                warnings,
                LintCategory::Value,
                format!("item \"{}\" {}; drawn as 0", item.label, problem),
            );
        }
    }

    if doc.items.iter().all(|item| item.magnitude() == 0.0) {
        warn(
            warnings,
            LintCategory::Chart,
            "every chart value is 0; all slices and bars are empty".to_string(),
        );
    }
}

fn check_icons(items: &[Item], warnings: &mut Vec<LintWarning>) {
    for item in items {
        if let Some(icon) = &item.icon {
            if split_reference(icon).is_none() {
                warn(
                    warnings,
                    LintCategory::Icon,
                    format!(
                        "item \"{}\" has icon \"{}\", expected prefix:name; showing fallback glyph",
                        item.label, icon
                    ),
                );
            }
        }
        check_icons(item.children(), warnings);
    }
}
