//! Field and container encoding directives.
//!
//! A field annotation is a kind name optionally followed by comma-separated
//! modifiers (`"StringBytes, omitempty"`), plus an optional constructor index
//! given as a separate text (`"1"`).

use std::fmt;

use plutus_data::map_constructor_index;
use tracing::warn;

use crate::error::DirectiveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectiveKind {
    Int,
    StringBytes,
    HexString,
    Address,
    NestedList,
    Ignore,
    /// Encode the value as a nested record and splice it in place.
    #[default]
    Default,
}

impl DirectiveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::StringBytes => "StringBytes",
            Self::HexString => "HexString",
            Self::Address => "Address",
            Self::NestedList => "NestedList",
            Self::Ignore => "Ignore",
            Self::Default => "Default",
        }
    }

    /// Exact-match lookup. `DefList` is accepted as an alias of `NestedList`
    /// and the empty text means `Default`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::Int),
            "StringBytes" => Some(Self::StringBytes),
            "HexString" => Some(Self::HexString),
            "Address" => Some(Self::Address),
            "NestedList" | "DefList" => Some(Self::NestedList),
            "Ignore" => Some(Self::Ignore),
            "Default" | "" => Some(Self::Default),
            _ => None,
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a single field is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldDirective {
    pub kind: DirectiveKind,
    /// Skip the field when its value is empty or zero.
    pub omit_empty: bool,
    /// Logical constructor index wrapping the encoded value.
    pub constr: Option<i64>,
}

impl FieldDirective {
    pub const fn new(kind: DirectiveKind) -> Self {
        Self {
            kind,
            omit_empty: false,
            constr: None,
        }
    }

    pub const fn int() -> Self {
        Self::new(DirectiveKind::Int)
    }

    pub const fn string_bytes() -> Self {
        Self::new(DirectiveKind::StringBytes)
    }

    pub const fn hex_string() -> Self {
        Self::new(DirectiveKind::HexString)
    }

    pub const fn address() -> Self {
        Self::new(DirectiveKind::Address)
    }

    pub const fn nested_list() -> Self {
        Self::new(DirectiveKind::NestedList)
    }

    pub const fn ignore() -> Self {
        Self::new(DirectiveKind::Ignore)
    }

    pub const fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    pub const fn with_constr(mut self, index: i64) -> Self {
        self.constr = Some(index);
        self
    }

    /// Strict parse: unknown kinds and modifiers are errors.
    pub fn parse(kind_text: &str, constr_text: Option<&str>) -> Result<Self, DirectiveError> {
        Self::parse_with(kind_text, constr_text, true)
    }

    /// Parses an annotation pair. With `strict == false`, an unknown kind
    /// falls back to [`DirectiveKind::Default`] and unknown modifiers are
    /// dropped.
    pub fn parse_with(
        kind_text: &str,
        constr_text: Option<&str>,
        strict: bool,
    ) -> Result<Self, DirectiveError> {
        let mut parts = kind_text.split(',');
        let kind_part = parts.next().unwrap_or_default().trim();
        let kind = match DirectiveKind::from_name(kind_part) {
            Some(kind) => kind,
            None if strict => return Err(DirectiveError::UnknownKind(kind_part.to_owned())),
            None => {
                warn!(directive = kind_part, "unknown directive kind, encoding as nested record");
                DirectiveKind::Default
            }
        };

        let mut omit_empty = false;
        for part in parts {
            let modifier = part.trim().to_ascii_lowercase();
            match modifier.as_str() {
                "omitempty" => omit_empty = true,
                "" => {}
                _ if strict => return Err(DirectiveError::UnknownModifier(modifier)),
                _ => warn!(modifier = %modifier, "ignoring unknown directive modifier"),
            }
        }

        Ok(Self {
            kind,
            omit_empty,
            constr: parse_constr(constr_text)?,
        })
    }
}

/// Record-level directive. Only the `DefList` container exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContainerDirective {
    pub constr: Option<i64>,
}

impl ContainerDirective {
    pub fn parse(kind_text: &str, constr_text: Option<&str>) -> Result<Self, DirectiveError> {
        let kind = kind_text.trim();
        if kind != "DefList" {
            return Err(DirectiveError::UnsupportedContainer(kind.to_owned()));
        }
        Ok(Self {
            constr: parse_constr(constr_text)?,
        })
    }
}

fn parse_constr(text: Option<&str>) -> Result<Option<i64>, DirectiveError> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let index: i64 = text
        .parse()
        .map_err(|_| DirectiveError::InvalidConstructor(text.to_owned()))?;
    map_constructor_index(index)?;
    Ok(Some(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plutus_data::ConstrError;

    #[test]
    fn parses_kind_and_modifiers() {
        let d = FieldDirective::parse("StringBytes, omitempty", None).unwrap();
        assert_eq!(d, FieldDirective::string_bytes().omit_empty());

        let d = FieldDirective::parse("Int ,  OmitEmpty ", Some(" 3 ")).unwrap();
        assert_eq!(d, FieldDirective::int().omit_empty().with_constr(3));
    }

    #[test]
    fn empty_kind_is_default() {
        assert_eq!(FieldDirective::parse("", None).unwrap(), FieldDirective::default());
        assert_eq!(
            FieldDirective::parse(", omitempty", None).unwrap(),
            FieldDirective::default().omit_empty()
        );
    }

    #[test]
    fn def_list_alias() {
        assert_eq!(
            FieldDirective::parse("DefList", None).unwrap().kind,
            DirectiveKind::NestedList
        );
    }

    #[test]
    fn kind_match_is_exact() {
        assert_eq!(
            FieldDirective::parse("int", None),
            Err(DirectiveError::UnknownKind("int".into()))
        );
    }

    #[test]
    fn strict_rejects_unknown_modifier() {
        assert_eq!(
            FieldDirective::parse("Int, squash", None),
            Err(DirectiveError::UnknownModifier("squash".into()))
        );
        let lenient = FieldDirective::parse_with("Int, squash", None, false).unwrap();
        assert_eq!(lenient, FieldDirective::int());
    }

    #[test]
    fn constructor_text_errors() {
        assert_eq!(
            FieldDirective::parse("Int", Some("one")),
            Err(DirectiveError::InvalidConstructor("one".into()))
        );
        assert_eq!(
            FieldDirective::parse("Int", Some("1401")),
            Err(DirectiveError::Range(
                ConstrError::UnsupportedConstructorRange { index: 1401 }
            ))
        );
        assert_eq!(FieldDirective::parse("Int", Some("")).unwrap().constr, None);
    }

    #[test]
    fn container_directive() {
        assert_eq!(
            ContainerDirective::parse("DefList", Some("1")).unwrap(),
            ContainerDirective { constr: Some(1) }
        );
        assert_eq!(
            ContainerDirective::parse("Map", None),
            Err(DirectiveError::UnsupportedContainer("Map".into()))
        );
    }
}
