//! Document tree produced by the infographic parser

use std::fmt;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Root of a parsed infographic
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Template identifier from the `infographic <template>` header
    pub template: String,
    pub title: Option<String>,
    /// Named color-scheme override from a root-level `theme` line
    pub theme: Option<String>,
    /// Top-level items in source order
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }
}

/// One labeled node of the data tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub label: String,
    pub value: Option<ItemValue>,
    pub desc: Option<String>,
    /// Icon reference in `prefix:name` form
    pub icon: Option<String>,
    /// `None` when the item had no `children` block at all
    pub children: Option<Vec<Item>>,
}

impl Item {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: ItemValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = Some(children);
        self
    }

    /// Children as a slice, empty when the item has none
    pub fn children(&self) -> &[Item] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Value used by charts: finite, non-negative numbers pass through,
    /// anything else (absent, text, negative, NaN, infinite) counts as 0.
    pub fn magnitude(&self) -> f64 {
        self.value
            .as_ref()
            .and_then(ItemValue::as_number)
            .filter(|n| n.is_finite() && *n > 0.0)
            .unwrap_or(0.0)
    }
}

/// Item value: numeric when the source text starts with a number, text otherwise
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Number(f64),
    Text(String),
}

impl ItemValue {
    /// Numeric-first coercion of a raw `value` argument
    ///
    /// The longest numeric prefix wins, so `45%` and `12 apples` are numbers.
    /// Only `Infinity` is accepted as a non-finite spelling.
    pub fn coerce(raw: &str) -> Self {
        let raw = raw.trim();
        match numeric_prefix(raw) {
            Some(n) => ItemValue::Number(n),
            None => ItemValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ItemValue::Number(n) => Some(*n),
            ItemValue::Text(_) => None,
        }
    }
}

/// Leading `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` or `[+-]?Infinity`
fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Number(n) => write!(f, "{}", n),
            ItemValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(ItemValue::coerce("3.5"), ItemValue::Number(3.5));
        assert_eq!(ItemValue::coerce(" 42 "), ItemValue::Number(42.0));
        assert_eq!(ItemValue::coerce("-7"), ItemValue::Number(-7.0));
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(ItemValue::coerce("abc"), ItemValue::Text("abc".to_string()));
        assert_eq!(ItemValue::coerce("NaN"), ItemValue::Text("NaN".to_string()));
        assert_eq!(ItemValue::coerce("inf"), ItemValue::Text("inf".to_string()));
        assert_eq!(ItemValue::coerce("-"), ItemValue::Text("-".to_string()));
        assert_eq!(ItemValue::coerce(".e5"), ItemValue::Text(".e5".to_string()));
    }

    #[test]
    fn test_coerce_numeric_prefix() {
        assert_eq!(ItemValue::coerce("45%"), ItemValue::Number(45.0));
        assert_eq!(ItemValue::coerce("12 apples"), ItemValue::Number(12.0));
        assert_eq!(ItemValue::coerce("3.5k"), ItemValue::Number(3.5));
        assert_eq!(ItemValue::coerce(".5x"), ItemValue::Number(0.5));
        assert_eq!(ItemValue::coerce("5."), ItemValue::Number(5.0));
        assert_eq!(ItemValue::coerce("2e3px"), ItemValue::Number(2000.0));
        assert_eq!(ItemValue::coerce("2e"), ItemValue::Number(2.0));
        assert_eq!(ItemValue::coerce("1.5e-1"), ItemValue::Number(0.15));
        assert_eq!(ItemValue::coerce("0x10"), ItemValue::Number(0.0));
    }

    #[test]
    fn test_coerce_infinity() {
        assert_eq!(ItemValue::coerce("Infinity"), ItemValue::Number(f64::INFINITY));
        assert_eq!(ItemValue::coerce("-Infinity"), ItemValue::Number(f64::NEG_INFINITY));
    }

    #[test]
    fn test_magnitude_uses_numbers_only() {
        assert_eq!(Item::new("a").with_value(ItemValue::coerce("45%")).magnitude(), 45.0);
        assert_eq!(Item::new("b").with_value(ItemValue::coerce("Infinity")).magnitude(), 0.0);
        assert_eq!(Item::new("c").with_value(ItemValue::coerce("n/a")).magnitude(), 0.0);
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(ItemValue::Number(10.0).to_string(), "10");
        assert_eq!(ItemValue::Number(3.5).to_string(), "3.5");
        assert_eq!(ItemValue::Text("n/a".into()).to_string(), "n/a");
    }

    #[test]
    fn test_magnitude_degrades_to_zero() {
        assert_eq!(Item::new("a").magnitude(), 0.0);
        assert_eq!(Item::new("a").with_value(ItemValue::Number(-3.0)).magnitude(), 0.0);
        assert_eq!(
            Item::new("a")
                .with_value(ItemValue::Number(f64::INFINITY))
                .magnitude(),
            0.0
        );
        assert_eq!(
            Item::new("a").with_value(ItemValue::Text("x".into())).magnitude(),
            0.0
        );
        assert_eq!(Item::new("a").with_value(ItemValue::Number(2.5)).magnitude(), 2.5);
    }
}
