//! Indentation-driven block parser
//!
//! The parser walks the classified lines with a single cursor held in
//! [`ParserState`]. Nested blocks (`data`, `items`, an item's properties,
//! `children`) advance the same cursor and stop at the first line that falls
//! below the indentation baseline recorded before they were entered.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::parser::ast::{Document, Item, ItemValue};
use crate::parser::lexer::{self, split_head, Keyword, Line};

/// Indentation added to a block keyword's own indent to get its entries' baseline
const NESTED_INDENT: usize = 2;

/// Parse infographic DSL source into a [`Document`]
///
/// The only failure is a missing `infographic <template>` header on the first
/// non-empty line. Anything unrecognised in the body is skipped.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let lines = lexer::lines(source);

    let header_index = lines.iter().position(|l| !l.is_blank());
    let header = match header_index {
        Some(i) => &lines[i],
        None => return Err(ParseError::missing_header(0..0)),
    };
    let template = header
        .keyword_argument(Keyword::Infographic)
        .ok_or_else(|| ParseError::missing_header(header.span.clone()))?;

    let mut doc = Document::new(template);
    let mut state = ParserState::new(&lines[header.number + 1..]);
    state.parse_root(&mut doc);

    debug!(
        template = %doc.template,
        items = doc.items.len(),
        title = doc.title.is_some(),
        theme = doc.theme.is_some(),
        "parsed infographic"
    );
    Ok(doc)
}

/// Cursor over the body lines
struct ParserState<'s, 'a> {
    lines: &'s [Line<'a>],
    cursor: usize,
}

impl<'s, 'a> ParserState<'s, 'a> {
    fn new(lines: &'s [Line<'a>]) -> Self {
        Self { lines, cursor: 0 }
    }

    /// Next non-blank line, advancing the cursor past blank ones
    fn peek(&mut self) -> Option<&'s Line<'a>> {
        while let Some(line) = self.lines.get(self.cursor) {
            if !line.is_blank() {
                return Some(line);
            }
            self.cursor += 1;
        }
        None
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn skip(&mut self, line: &Line<'_>, context: &str) {
        trace!(line = line.number + 1, text = line.text, context, "skipping line");
        self.advance();
    }

    /// Root level: `data` blocks and `theme <name>` directives
    fn parse_root(&mut self, doc: &mut Document) {
        while let Some(line) = self.peek() {
            if line.is_bare(Keyword::Data) {
                self.advance();
                let (title, items) = self.parse_data_block(line.indent);
                doc.title = title;
                doc.items = items;
            } else if let Some(theme) = line.keyword_argument(Keyword::Theme) {
                doc.theme = Some(theme.to_string());
                self.advance();
            } else {
                self.skip(line, "root");
            }
        }
    }

    /// Body of a `data` block. Ends at the first line indented less than the
    /// `data` keyword itself. `theme` is not recognised here.
    fn parse_data_block(&mut self, data_indent: usize) -> (Option<String>, Vec<Item>) {
        let mut title = None;
        let mut items = Vec::new();

        while let Some(line) = self.peek() {
            if line.indent < data_indent {
                break;
            }

            if let Some(text) = line.keyword_argument(Keyword::Title) {
                title = Some(text.to_string());
                self.advance();
            } else if line.is_bare(Keyword::Items) {
                self.advance();
                items = self.parse_items(line.indent + NESTED_INDENT);
            } else {
                self.skip(line, "data");
            }
        }

        (title, items)
    }

    /// Sequence of `- ` entries. Ends at the first line indented less than
    /// `base_indent`.
    fn parse_items(&mut self, base_indent: usize) -> Vec<Item> {
        let mut items = Vec::new();

        while let Some(line) = self.peek() {
            if line.indent < base_indent {
                break;
            }

            match line.keyword_argument(Keyword::Dash) {
                Some(header) => items.push(self.parse_item(header, line.indent)),
                None => self.skip(line, "items"),
            }
        }

        items
    }

    /// One entry: the header line, then property lines indented deeper than it
    fn parse_item(&mut self, header: &str, item_indent: usize) -> Item {
        let label = match split_head(header) {
            (Some(Keyword::Label), Some(label)) => label,
            _ => header,
        };
        let mut item = Item::new(label);
        self.advance();

        while let Some(line) = self.peek() {
            if line.indent <= item_indent {
                break;
            }

            match (line.head, line.argument()) {
                (Some(Keyword::Label), Some(text)) => item.label = text.to_string(),
                (Some(Keyword::Value), Some(text)) => item.value = Some(ItemValue::coerce(text)),
                (Some(Keyword::Desc), Some(text)) => item.desc = Some(text.to_string()),
                (Some(Keyword::Icon), Some(text)) => item.icon = Some(text.to_string()),
                _ if line.is_bare(Keyword::Children) => {
                    self.advance();
                    item.children = Some(self.parse_items(line.indent + NESTED_INDENT));
                    continue;
                }
                _ => {
                    self.skip(line, "item");
                    continue;
                }
            }
            self.advance();
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_only() {
        let doc = parse("infographic foo").unwrap();
        assert_eq!(doc, Document::new("foo"));
    }

    #[test]
    fn test_header_after_blank_lines() {
        let doc = parse("\n   \ninfographic chart-pie-plain-text\n").unwrap();
        assert_eq!(doc.template, "chart-pie-plain-text");
    }

    #[test]
    fn test_missing_header() {
        assert!(parse("").is_err());
        assert!(parse("infographic").is_err());
        assert!(parse("Infographic list-grid-badge-card").is_err());
        assert!(parse("data\n  title x").is_err());
    }

    #[test]
    fn test_header_error_span_covers_first_line() {
        let err = parse("\nchart x\n").unwrap_err();
        assert_eq!(err.span(), &(1..8));
    }

    #[test]
    fn test_label_forms_are_equivalent() {
        let src = "infographic x\ndata\n  items\n    - label A\n    - B\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.items, vec![Item::new("A"), Item::new("B")]);
    }

    #[test]
    fn test_bare_label_keyword_is_a_label() {
        let doc = parse("infographic x\ndata\n  items\n    - label\n").unwrap();
        assert_eq!(doc.items[0].label, "label");
    }

    #[test]
    fn test_properties() {
        let src = "\
infographic list-grid-badge-card
data
  title Features
  items
    - label Speed
      value 3.5
      desc Very fast
      icon mdi:rocket
    - Cost
      value cheap
";
        let doc = parse(src).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Features"));
        assert_eq!(
            doc.items,
            vec![
                Item::new("Speed")
                    .with_value(ItemValue::Number(3.5))
                    .with_desc("Very fast")
                    .with_icon("mdi:rocket"),
                Item::new("Cost").with_value(ItemValue::Text("cheap".into())),
            ]
        );
    }

    #[test]
    fn test_label_property_overrides_header() {
        let src = "infographic x\ndata\n  items\n    - first\n      label second\n";
        assert_eq!(parse(src).unwrap().items[0].label, "second");
    }

    #[test]
    fn test_empty_value_is_absent() {
        let src = "infographic x\ndata\n  items\n    - A\n      value   \n";
        assert_eq!(parse(src).unwrap().items[0].value, None);
    }

    #[test]
    fn test_theme_at_root() {
        let src = "infographic x\ntheme dark-blue\ndata\n  title T\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.theme.as_deref(), Some("dark-blue"));
        assert_eq!(doc.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_theme_inside_data_is_ignored() {
        let src = "infographic x\ndata\n  theme dark\n  title T\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.theme, None);
        assert_eq!(doc.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_data_without_items() {
        let src = "infographic x\ndata\n  title Only a title\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Only a title"));
        assert!(doc.items.is_empty());
    }

    #[test]
    fn test_data_block_ends_below_keyword_indent() {
        let src = "\
infographic x
  data
    title Inner
theme ocean
";
        let doc = parse(src).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Inner"));
        assert_eq!(doc.theme.as_deref(), Some("ocean"));
    }

    #[test]
    fn test_unknown_lines_are_skipped() {
        let src = "\
infographic x
author someone
data
  subtitle nope
  items
    - A
      colour red
    garbage
    - B
";
        let doc = parse(src).unwrap();
        assert_eq!(doc.items, vec![Item::new("A"), Item::new("B")]);
    }

    #[test]
    fn test_nested_children() {
        let src = "\
infographic hierarchy-tree-curved-line-rounded-rect-node
data
  items
    - Root
      children
        - Child
          children
            - Grandchild
              children
                - Leaf
    - Sibling
";
        let doc = parse(src).unwrap();
        let leaf = Item::new("Leaf");
        let grandchild = Item::new("Grandchild").with_children(vec![leaf]);
        let child = Item::new("Child").with_children(vec![grandchild]);
        assert_eq!(
            doc.items,
            vec![Item::new("Root").with_children(vec![child]), Item::new("Sibling")]
        );
    }

    #[test]
    fn test_children_baseline_tolerates_deeper_indent() {
        let src = "\
infographic x
data
  items
    - Root
      children
             - Deep
             - Deeper
    - Next
";
        let doc = parse(src).unwrap();
        assert_eq!(doc.items[0].children().len(), 2);
        assert_eq!(doc.items[1].label, "Next");
    }

    #[test]
    fn test_empty_children_block() {
        let src = "infographic x\ndata\n  items\n    - A\n      children\n    - B\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.items[0].children, Some(vec![]));
        assert_eq!(doc.items[1].children, None);
    }

    #[test]
    fn test_later_data_block_replaces_earlier() {
        let src = "\
infographic x
  data
    title First
    items
      - A
data
  items
    - B
";
        let doc = parse(src).unwrap();
        assert_eq!(doc.title, None);
        assert_eq!(doc.items, vec![Item::new("B")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let src = "infographic x\r\ndata\r\n  items\r\n    - A\r\n      value 2\r\n";
        let doc = parse(src).unwrap();
        assert_eq!(doc.items[0].value, Some(ItemValue::Number(2.0)));
    }
}
