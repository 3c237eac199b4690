//! The shared placeholder grammar.
//!
//! Every component that needs to know "what a placeholder looks like" reads it
//! from [`PATTERN_RULES`]: the scanner builds its detection regexes from it, the
//! template compiler builds its canonical-reference regex from the
//! [`PlaceholderPattern::DollarCurly`] row, and the content normalizer builds
//! its permissive strip regexes from the rows flagged `strip_for_comparison`.
//!
//! | Pattern | Delimiters | Name class | Default | Phase |
//! |---------|------------|------------|---------|-------|
//! | `double_bracket` | `[[` `]]` | identifier | yes | claiming |
//! | `double_curly` | `{{` `}}` | identifier | no | claiming |
//! | `dollar_curly` | `${` `}` | identifier | yes | claiming |
//! | `single_bracket` | `[` `]` | upper | no | residual |
//! | `single_curly` | `{` `}` | words | no | residual |
//! | `angle_bracket` | `<` `>` | upper | no | residual |
//! | `percent` | `%` `%` | words | no | residual |

use regex::Regex;
use std::sync::LazyLock;

use super::PlaceholderPattern;

/// Character class a placeholder name must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    /// Any case, letters/digits/underscore, embedded whitespace allowed.
    Identifier,
    /// Uppercase letters, digits, underscore and spaces only.
    ///
    /// Rejects prose brackets (`[see above]`) and HTML-like tags (`<div>`).
    Upper,
    /// Any-case words separated by single spaces.
    Words,
}

impl NameClass {
    /// Regex fragment for the name (without a capture group).
    #[must_use]
    pub const fn regex_fragment(self) -> &'static str {
        match self {
            Self::Identifier => r"[A-Za-z_][A-Za-z0-9_\s]*?",
            Self::Upper => r"[A-Z_][A-Z0-9_ ]*",
            Self::Words => r"[A-Za-z_][A-Za-z0-9_]*(?: [A-Za-z0-9_]+)*",
        }
    }
}

/// Scan phase a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Multi-character delimiter forms. Matched first; their spans are masked
    /// before residual rules run.
    Claiming,
    /// Single-character delimiter forms. Only matched outside claimed spans.
    Residual,
}

/// One row of the placeholder grammar.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    /// The pattern tag this row describes.
    pub pattern: PlaceholderPattern,
    /// Opening delimiter, literal.
    pub open: &'static str,
    /// Closing delimiter, literal.
    pub close: &'static str,
    /// Name character class.
    pub name_class: NameClass,
    /// Whether `name: default` is recognized inside the delimiters.
    pub accepts_default: bool,
    /// Whether whitespace is tolerated between the delimiters and the name.
    pub padded: bool,
    /// Scan phase.
    pub phase: ScanPhase,
    /// Whether the normalizer strips this delimiter shape before comparison.
    pub strip_for_comparison: bool,
}

/// Characters a default value may not contain: the delimiters of every
/// claiming form.
const DEFAULT_EXCLUDED: &str = r"\[\]{}";

impl PatternRule {
    /// First character of the closing delimiter, used to bound default values.
    fn close_head(&self) -> String {
        self.close
            .chars()
            .next()
            .map(|c| regex::escape(&c.to_string()))
            .unwrap_or_default()
    }

    /// Regex source used by the scanner.
    ///
    /// Group 1 is the name, group 2 (when `accepts_default`) the default.
    /// Defaults never contain a bracket or brace, so one claiming match cannot
    /// enclose another.
    #[must_use]
    pub fn detection_source(&self) -> String {
        let open = regex::escape(self.open);
        let close = regex::escape(self.close);
        let pad = if self.padded { r"\s*" } else { "" };
        let default = if self.accepts_default {
            format!(r"(?:\s*:\s*([^{DEFAULT_EXCLUDED}]*?))?")
        } else {
            String::new()
        };
        format!(
            "{open}{pad}({name}){default}{pad}{close}",
            name = self.name_class.regex_fragment()
        )
    }

    /// Permissive regex source used by the content normalizer: any non-empty
    /// run of characters up to the first closing delimiter, regardless of case.
    #[must_use]
    pub fn comparison_source(&self) -> String {
        format!(
            "{}[^{}]+{}",
            regex::escape(self.open),
            self.close_head(),
            regex::escape(self.close)
        )
    }

    /// Verbatim reference regex source used on canonical text.
    ///
    /// Group 1 is the name exactly as written, group 2 the default exactly as
    /// written.
    #[must_use]
    pub fn reference_source(&self) -> String {
        let head = self.close_head();
        format!(
            "{}([^{head}:]+)(?::([^{head}]*))?{}",
            regex::escape(self.open),
            regex::escape(self.close)
        )
    }
}

/// The grammar table, in scan order.
pub static PATTERN_RULES: [PatternRule; 7] = [
    PatternRule {
        pattern: PlaceholderPattern::DoubleBracket,
        open: "[[",
        close: "]]",
        name_class: NameClass::Identifier,
        accepts_default: true,
        padded: true,
        phase: ScanPhase::Claiming,
        strip_for_comparison: false,
    },
    PatternRule {
        pattern: PlaceholderPattern::DoubleCurly,
        open: "{{",
        close: "}}",
        name_class: NameClass::Identifier,
        accepts_default: false,
        padded: true,
        phase: ScanPhase::Claiming,
        strip_for_comparison: false,
    },
    PatternRule {
        pattern: PlaceholderPattern::DollarCurly,
        open: "${",
        close: "}",
        name_class: NameClass::Identifier,
        accepts_default: true,
        padded: true,
        phase: ScanPhase::Claiming,
        strip_for_comparison: true,
    },
    PatternRule {
        pattern: PlaceholderPattern::SingleBracket,
        open: "[",
        close: "]",
        name_class: NameClass::Upper,
        accepts_default: false,
        padded: false,
        phase: ScanPhase::Residual,
        strip_for_comparison: true,
    },
    PatternRule {
        pattern: PlaceholderPattern::SingleCurly,
        open: "{",
        close: "}",
        name_class: NameClass::Words,
        accepts_default: false,
        padded: false,
        phase: ScanPhase::Residual,
        strip_for_comparison: false,
    },
    PatternRule {
        pattern: PlaceholderPattern::AngleBracket,
        open: "<",
        close: ">",
        name_class: NameClass::Upper,
        accepts_default: false,
        padded: false,
        phase: ScanPhase::Residual,
        strip_for_comparison: true,
    },
    PatternRule {
        pattern: PlaceholderPattern::Percent,
        open: "%",
        close: "%",
        name_class: NameClass::Words,
        accepts_default: false,
        padded: false,
        phase: ScanPhase::Residual,
        strip_for_comparison: false,
    },
];

/// Returns the grammar row for a pattern.
#[must_use]
pub fn rule_for(pattern: PlaceholderPattern) -> &'static PatternRule {
    PATTERN_RULES
        .iter()
        .find(|rule| rule.pattern == pattern)
        .unwrap_or(&PATTERN_RULES[2])
}

/// Compiles a regex built from the grammar table.
///
/// The sources are assembled from constant rows and escaped delimiters, so
/// compilation cannot fail at runtime.
fn compile(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|_| unreachable!())
}

/// Detection regexes, one per rule, in scan order.
pub static DETECTION_REGEXES: LazyLock<Vec<(&'static PatternRule, Regex)>> = LazyLock::new(|| {
    PATTERN_RULES
        .iter()
        .map(|rule| (rule, compile(&rule.detection_source())))
        .collect()
});

/// Verbatim `${name}` / `${name:default}` reference regex for canonical text.
pub static CANONICAL_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| compile(&rule_for(PlaceholderPattern::DollarCurly).reference_source()));

/// Permissive strip regexes for comparison, applied in table order.
pub static COMPARISON_STRIPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERN_RULES
        .iter()
        .filter(|rule| rule.strip_for_comparison)
        .map(|rule| compile(&rule.comparison_source()))
        .collect()
});
