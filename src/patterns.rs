//! Single-line structural matchers
//!
//! Three stateless, line-at-a-time matchers built on lazily compiled regex
//! patterns with named capture groups. This is a heuristic line scanner, not
//! a parser: each matcher sees one trimmed line and either recognizes its
//! shape or reports no match. Attributes and declarations split across
//! multiple lines are never recognized.
//!
//! Recognized shapes:
//!
//! ```text
//! public partial class AdTheme                    class declaration
//! [Index("IX_AdThemes_date_enabled")]             index attribute
//! [Index("IX_AdThemes_date_enabled", Order = 2)]  index attribute with order
//! public DateTime? Modified { get; set; }         auto-property
//! ```
//!
//! The attribute and property matchers are anchored at the start of the
//! trimmed line; the class matcher fires on the keyword anywhere in the line
//! and only its first hit per file is ever used.

use once_cell::sync::Lazy;
use regex::Regex;

/// `class <Ident>`, e.g. `public partial class AdTheme : IEntity`.
static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass\s+(?P<name>\w+)").unwrap());

/// `[Index("<name>")]` or `[Index("<name>", Order = <int>)]`, anchored.
static INDEX_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\[Index\("(?P<name>\w+)"(?:\s*,\s*Order\s*=\s*(?P<order>\d+))?\s*\)\]"#)
        .unwrap()
});

/// `public <type> <Name> { get; set; }`, anchored. Types may carry
/// `?`, `<`, `>` and `.` (nullable, generic, qualified).
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^public\s+(?P<type>[\w?<>.]+)\s+(?P<name>\w+)\s*\{\s*get;\s*set;\s*\}").unwrap()
});

/// A recognized `[Index(...)]` attribute line.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMatch {
    pub index_name: String,
    /// Declared column position, `None` when the attribute carries no
    /// `Order` argument. Never defaulted to zero.
    pub order: Option<u32>,
}

/// A recognized single-line auto-property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMatch {
    /// The property's type text, kept for diagnostics only.
    pub type_text: String,
    pub name: String,
}

/// Extract the class name from a class-declaration line.
pub fn match_class_declaration(line: &str) -> Option<String> {
    CLASS_RE
        .captures(line)
        .map(|caps| caps["name"].to_string())
}

/// Recognize an `[Index(...)]` attribute at the start of the line.
pub fn match_index_annotation(line: &str) -> Option<AnnotationMatch> {
    let caps = INDEX_ATTR_RE.captures(line)?;
    Some(AnnotationMatch {
        index_name: caps["name"].to_string(),
        // the pattern guarantees digits; only an absurdly large literal fails
        order: caps.name("order").and_then(|m| m.as_str().parse().ok()),
    })
}

/// Recognize a `public <type> <Name> { get; set; }` line.
pub fn match_auto_property(line: &str) -> Option<PropertyMatch> {
    let caps = PROPERTY_RE.captures(line)?;
    Some(PropertyMatch {
        type_text: caps["type"].to_string(),
        name: caps["name"].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("public class AdTheme", Some("AdTheme"))]
    #[case("public partial class AdTheme : IEntity", Some("AdTheme"))]
    #[case("class AdTheme", Some("AdTheme"))]
    #[case("internal sealed class Settings2", Some("Settings2"))]
    #[case("namespace Hede.Entities", None)]
    #[case("subclass Foo", None)]
    #[case("", None)]
    fn class_declarations(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(match_class_declaration(line).as_deref(), expected);
    }

    #[rstest]
    #[case("[Index(\"IX_AdThemes_date_enabled\")]", "IX_AdThemes_date_enabled", None)]
    #[case("[Index(\"IX_AdThemes_date_enabled\", Order = 2)]", "IX_AdThemes_date_enabled", Some(2))]
    #[case("[Index(\"IX_A\",Order=10)]", "IX_A", Some(10))]
    #[case("[Index(\"IX_A\", Order = 0)]", "IX_A", Some(0))]
    fn index_attributes(
        #[case] line: &str,
        #[case] name: &str,
        #[case] order: Option<u32>,
    ) {
        let matched = match_index_annotation(line).expect("should match");
        assert_eq!(matched.index_name, name);
        assert_eq!(matched.order, order);
    }

    #[rstest]
    // must start at column 0 of the trimmed line
    #[case("x [Index(\"IX_A\")]")]
    // attributes are case-sensitive
    #[case("[index(\"IX_A\")]")]
    // index names are single identifiers
    #[case("[Index(\"IX A\")]")]
    #[case("[Required]")]
    #[case("[Index(\"IX_A\", Order = two)]")]
    fn index_attribute_rejections(#[case] line: &str) {
        assert_eq!(match_index_annotation(line), None);
    }

    #[rstest]
    #[case("public int Bar { get; set; }", "int", "Bar")]
    #[case("public DateTime? Modified { get; set; }", "DateTime?", "Modified")]
    #[case("public ICollection<AdTheme> Themes { get; set; }", "ICollection<AdTheme>", "Themes")]
    #[case("public System.Guid Id { get; set; }", "System.Guid", "Id")]
    #[case("public int Bar {get;set;}", "int", "Bar")]
    fn auto_properties(#[case] line: &str, #[case] type_text: &str, #[case] name: &str) {
        let matched = match_auto_property(line).expect("should match");
        assert_eq!(matched.type_text, type_text);
        assert_eq!(matched.name, name);
    }

    #[rstest]
    // only public auto-properties count
    #[case("private int Hidden { get; set; }")]
    // getter-only and bodied properties are not auto-properties
    #[case("public int Computed { get { return 1; } }")]
    #[case("public int Field;")]
    // anchored: leading text defeats the match
    #[case("// public int Bar { get; set; }")]
    fn auto_property_rejections(#[case] line: &str) {
        assert_eq!(match_auto_property(line), None);
    }

    #[test]
    fn order_without_explicit_value_is_absent_not_zero() {
        let matched = match_index_annotation("[Index(\"IX_A\")]").unwrap();
        assert_eq!(matched.order, None);
        assert_ne!(matched.order, Some(0));
    }
}
