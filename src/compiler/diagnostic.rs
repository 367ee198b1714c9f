//! Compiler diagnostic records.
//!
//! These mirror the shape of the diagnostics a TypeScript compiler service
//! reports, so snapshots can be produced by serializing them directly.

use serde::{Deserialize, Serialize};

/// Category of a compiler diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "CategoryRepr")]
pub enum DiagnosticCategory {
    Warning,
    #[default]
    Error,
    Suggestion,
    Message,
}

/// Categories arrive either by name or as the compiler's numeric enum value.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Code(u8),
    Name(String),
}

impl TryFrom<CategoryRepr> for DiagnosticCategory {
    type Error = String;

    fn try_from(repr: CategoryRepr) -> Result<Self, String> {
        match repr {
            CategoryRepr::Code(0) => Ok(Self::Warning),
            CategoryRepr::Code(1) => Ok(Self::Error),
            CategoryRepr::Code(2) => Ok(Self::Suggestion),
            CategoryRepr::Code(3) => Ok(Self::Message),
            CategoryRepr::Code(n) => Err(format!("unknown diagnostic category {}", n)),
            CategoryRepr::Name(name) => match name.to_lowercase().as_str() {
                "warning" => Ok(Self::Warning),
                "error" => Ok(Self::Error),
                "suggestion" => Ok(Self::Suggestion),
                "message" => Ok(Self::Message),
                _ => Err(format!("unknown diagnostic category '{}'", name)),
            },
        }
    }
}

/// A node in a diagnostic message chain.
///
/// The head carries the primary message; `next` holds elaborations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageChain {
    pub message_text: String,
    #[serde(default)]
    pub category: DiagnosticCategory,
    #[serde(default)]
    pub code: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Vec<MessageChain>>,
}

impl MessageChain {
    /// Create a chain head without elaborations.
    pub fn new(message_text: impl Into<String>, code: u32) -> Self {
        Self {
            message_text: message_text.into(),
            category: DiagnosticCategory::Error,
            code,
            next: None,
        }
    }

    /// Append an elaboration below this node.
    pub fn with_next(mut self, next: MessageChain) -> Self {
        self.next.get_or_insert_with(Vec::new).push(next);
        self
    }
}

/// A diagnostic message: plain text or a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageText {
    Text(String),
    Chain(Box<MessageChain>),
}

impl MessageText {
    /// The head message; nested chain entries are not included.
    pub fn head(&self) -> &str {
        match self {
            MessageText::Text(text) => text,
            MessageText::Chain(chain) => &chain.message_text,
        }
    }
}

impl From<&str> for MessageText {
    fn from(text: &str) -> Self {
        MessageText::Text(text.to_string())
    }
}

impl From<String> for MessageText {
    fn from(text: String) -> Self {
        MessageText::Text(text)
    }
}

impl From<MessageChain> for MessageText {
    fn from(chain: MessageChain) -> Self {
        MessageText::Chain(Box::new(chain))
    }
}

/// A semantic diagnostic computed by the compiler service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// File the diagnostic belongs to; absent for global diagnostics.
    #[serde(default)]
    pub file: Option<String>,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: MessageText,
    /// Start offset in UTF-16 code units.
    #[serde(default)]
    pub start: Option<usize>,
    /// Length in UTF-16 code units.
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_unnecessary: Option<bool>,
}

impl Diagnostic {
    /// Create a diagnostic without a range.
    pub fn new(
        file: Option<String>,
        category: DiagnosticCategory,
        code: u32,
        message_text: impl Into<MessageText>,
    ) -> Self {
        Self {
            file,
            category,
            code,
            message_text: message_text.into(),
            start: None,
            length: None,
            reports_unnecessary: None,
        }
    }

    /// Create an error diagnostic attributed to `file`.
    pub fn error(file: impl Into<String>, code: u32, message_text: impl Into<MessageText>) -> Self {
        Self::new(
            Some(file.into()),
            DiagnosticCategory::Error,
            code,
            message_text,
        )
    }

    /// Set the `[start, start + length)` range.
    pub fn at(mut self, start: usize, length: usize) -> Self {
        self.start = Some(start);
        self.length = Some(length);
        self
    }

    /// Change the category.
    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    /// Mark as an unused/unreachable code hint.
    pub fn unnecessary(mut self) -> Self {
        self.reports_unnecessary = Some(true);
        self
    }

    /// Whether this diagnostic only flags unnecessary code.
    pub fn is_unnecessary(&self) -> bool {
        self.reports_unnecessary.unwrap_or(false)
    }

    /// The `[start, end)` range, if the compiler supplied one.
    pub fn range(&self) -> Option<(usize, usize)> {
        let start = self.start?;
        let length = self.length?;
        Some((start, start.saturating_add(length)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_of_plain_text() {
        let text = MessageText::from("Cannot find name 'foo'.");
        assert_eq!(text.head(), "Cannot find name 'foo'.");
    }

    #[test]
    fn head_of_chain_ignores_elaborations() {
        let chain = MessageChain::new("A", 2322).with_next(MessageChain::new("B", 2326));
        let text = MessageText::from(chain);
        assert_eq!(text.head(), "A");
    }

    #[test]
    fn range_requires_start_and_length() {
        let diag = Diagnostic::error("a.ts", 2322, "msg");
        assert_eq!(diag.range(), None);

        let diag = diag.at(6, 1);
        assert_eq!(diag.range(), Some((6, 7)));

        let mut diag = Diagnostic::error("a.ts", 2322, "msg").at(3, 2);
        diag.length = None;
        assert_eq!(diag.range(), None);
    }

    #[test]
    fn unnecessary_flag_defaults_to_false() {
        let diag = Diagnostic::error("a.ts", 6133, "unused");
        assert!(!diag.is_unnecessary());
        assert!(diag.unnecessary().is_unnecessary());
    }

    #[test]
    fn category_deserializes_from_number_or_name() {
        let numeric: DiagnosticCategory = serde_json::from_str("1").unwrap();
        assert_eq!(numeric, DiagnosticCategory::Error);

        let named: DiagnosticCategory = serde_json::from_str("\"Suggestion\"").unwrap();
        assert_eq!(named, DiagnosticCategory::Suggestion);

        assert!(serde_json::from_str::<DiagnosticCategory>("7").is_err());
        assert!(serde_json::from_str::<DiagnosticCategory>("\"fatal\"").is_err());
    }

    #[test]
    fn unknown_category_reports_value() {
        let err = serde_json::from_str::<DiagnosticCategory>("9").unwrap_err();
        assert!(err.to_string().contains("unknown diagnostic category 9"));
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&DiagnosticCategory::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn deserializes_compiler_shaped_diagnostic() {
        let json = r#"{
            "file": "src/index.ts",
            "category": 1,
            "code": 2322,
            "messageText": {
                "messageText": "Type 'string' is not assignable to type 'number'.",
                "category": 1,
                "code": 2322,
                "next": [{ "messageText": "detail", "category": 3, "code": 1 }]
            },
            "start": 6,
            "length": 1
        }"#;

        let diag: Diagnostic = serde_json::from_str(json).unwrap();

        assert_eq!(diag.file.as_deref(), Some("src/index.ts"));
        assert_eq!(diag.category, DiagnosticCategory::Error);
        assert_eq!(
            diag.message_text.head(),
            "Type 'string' is not assignable to type 'number'."
        );
        assert_eq!(diag.range(), Some((6, 7)));
        assert!(!diag.is_unnecessary());
    }

    #[test]
    fn missing_file_deserializes_as_none() {
        let json = r#"{ "category": "error", "code": 2318, "messageText": "Cannot find global type 'Array'." }"#;
        let diag: Diagnostic = serde_json::from_str(json).unwrap();
        assert!(diag.file.is_none());
        assert!(diag.range().is_none());
    }
}
