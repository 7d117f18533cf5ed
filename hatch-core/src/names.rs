//! Naming variants derived from a user-supplied identifier.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};
use miette::Diagnostic;
use thiserror::Error;

/// Words that cannot be used as a TypeScript identifier.
///
/// The camelCase variant ends up as a variable name in generated code,
/// so a name whose camel form hits this list is rejected.
pub const TYPESCRIPT_RESERVED: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "await",
];

/// Error returned when a name cannot be turned into file and class names.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum NameError {
    #[error("name must not be empty")]
    #[diagnostic(
        code(hatch::empty_name),
        help("pass a name such as 'user-profile' or 'UserProfile'")
    )]
    Empty,

    #[error("invalid name '{name}'")]
    #[diagnostic(
        code(hatch::invalid_name),
        help("{reason}. Use letters, digits, '-', '_' or spaces, starting with a letter.")
    )]
    Invalid { name: String, reason: String },

    #[error("'{name}' derives the TypeScript reserved word '{word}'")]
    #[diagnostic(
        code(hatch::reserved_name),
        help("choose another name, e.g. '{word}-item'")
    )]
    Reserved { name: String, word: String },
}

/// The naming variants used across generated files, directories and classes.
///
/// # Example
///
/// ```
/// use hatchling_core::Names;
///
/// let names = Names::new("test-foo-bar").unwrap();
/// assert_eq!(names.kebab, "test-foo-bar");
/// assert_eq!(names.camel, "testFooBar");
/// assert_eq!(names.pascal, "TestFooBar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    /// Hyphen-separated lowercase form (`test-foo-bar`).
    pub kebab: String,
    /// Lower camel case form (`testFooBar`).
    pub camel: String,
    /// Upper-first camel case form (`TestFooBar`).
    pub pascal: String,
}

impl Names {
    /// Validate `input` and derive its variants.
    pub fn new(input: &str) -> Result<Self, NameError> {
        validate(input)?;

        let names = Self {
            kebab: input.to_kebab_case(),
            camel: input.to_lower_camel_case(),
            pascal: input.to_upper_camel_case(),
        };

        if TYPESCRIPT_RESERVED.contains(&names.camel.as_str()) {
            return Err(NameError::Reserved {
                name: input.to_string(),
                word: names.camel,
            });
        }

        // Generated files are named from `kebab` and export `pascal`.
        if names.pascal.to_kebab_case() != names.kebab
            || names.kebab.to_upper_camel_case() != names.pascal
        {
            return Err(NameError::Invalid {
                name: input.to_string(),
                reason: format!(
                    "'{}' and '{}' do not convert into each other",
                    names.kebab, names.pascal
                ),
            });
        }

        Ok(names)
    }
}

fn validate(input: &str) -> Result<(), NameError> {
    let Some(first) = input.chars().next() else {
        return Err(NameError::Empty);
    };

    if input.trim().is_empty() {
        return Err(NameError::Empty);
    }

    let invalid = |reason: &str| NameError::Invalid {
        name: input.to_string(),
        reason: reason.to_string(),
    };

    if !first.is_ascii_alphabetic() {
        return Err(invalid("names must start with a letter"));
    }

    if let Some(c) = input
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ')))
    {
        return Err(invalid(&format!("'{}' is not allowed in a name", c)));
    }

    // `item-2` would become `Item2`, whose kebab form is `item2`.
    let is_separator = |c: char| matches!(c, '-' | '_' | ' ');
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if is_separator(c)
            && let Some(next) = chars.peek()
            && next.is_ascii_digit()
        {
            return Err(invalid("words must not start with a digit"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kebab() {
        let names = Names::new("test-foo-bar").unwrap();
        assert_eq!(names.kebab, "test-foo-bar");
        assert_eq!(names.camel, "testFooBar");
        assert_eq!(names.pascal, "TestFooBar");
    }

    #[test]
    fn test_from_pascal() {
        let names = Names::new("TestFooBar").unwrap();
        assert_eq!(names.kebab, "test-foo-bar");
        assert_eq!(names.camel, "testFooBar");
        assert_eq!(names.pascal, "TestFooBar");
    }

    #[test]
    fn test_from_mixed_separators() {
        let names = Names::new("user_profile page").unwrap();
        assert_eq!(names.kebab, "user-profile-page");
        assert_eq!(names.camel, "userProfilePage");
        assert_eq!(names.pascal, "UserProfilePage");
    }

    #[test]
    fn test_single_word() {
        let names = Names::new("product").unwrap();
        assert_eq!(names.kebab, "product");
        assert_eq!(names.camel, "product");
        assert_eq!(names.pascal, "Product");
    }

    #[test]
    fn test_variants_are_consistent() {
        for input in ["test-foo-bar", "TestFooBar", "testFooBar", "api_key", "Order Item"] {
            let names = Names::new(input).unwrap();
            assert_eq!(names.pascal.to_kebab_case(), names.kebab, "input: {input}");
            assert_eq!(names.kebab.to_upper_camel_case(), names.pascal, "input: {input}");
            assert_eq!(names.kebab.to_lower_camel_case(), names.camel, "input: {input}");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Names::new(""), Err(NameError::Empty));
        assert_eq!(Names::new("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(matches!(Names::new("123"), Err(NameError::Invalid { .. })));
        assert!(matches!(Names::new("1st-item"), Err(NameError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_word_starting_with_digit() {
        for input in ["item-2", "v-2-api", "order_1", "page 3"] {
            assert_eq!(
                Names::new(input),
                Err(NameError::Invalid {
                    name: input.to_string(),
                    reason: "words must not start with a digit".to_string(),
                }),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_digits_inside_words_round_trip() {
        for input in ["item2", "v2-api", "Oauth2Client", "http2 server", "ApiV2"] {
            let names = Names::new(input).unwrap();
            assert_eq!(names.pascal.to_kebab_case(), names.kebab, "input: {input}");
            assert_eq!(names.kebab.to_upper_camel_case(), names.pascal, "input: {input}");
        }
    }

    #[test]
    fn test_rejects_symbols() {
        assert!(matches!(Names::new("foo/bar"), Err(NameError::Invalid { .. })));
        assert!(matches!(Names::new("-foo"), Err(NameError::Invalid { .. })));
        assert!(matches!(Names::new("foo.bar"), Err(NameError::Invalid { .. })));
        assert!(matches!(Names::new("@@"), Err(NameError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_reserved_camel_name() {
        assert_eq!(
            Names::new("delete"),
            Err(NameError::Reserved {
                name: "delete".to_string(),
                word: "delete".to_string(),
            })
        );
        assert!(matches!(Names::new("Class"), Err(NameError::Reserved { .. })));
    }

    #[test]
    fn test_reserved_word_inside_name_is_fine() {
        assert!(Names::new("delete-request").is_ok());
        assert!(Names::new("new-user").is_ok());
    }
}
