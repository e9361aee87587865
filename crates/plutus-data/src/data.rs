//! The [`PlutusData`] datum value tree.

use std::fmt;

use crate::constr::{constructor_index_of, map_constructor_index, ConstrError, PLAIN_ARRAY_TAG};

/// A Plutus datum value.
///
/// Trees are built bottom-up by an encoder and handed to an external binary
/// serializer; nothing here performs wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlutusData {
    Int(i128),
    Bytes(Vec<u8>),
    Array(Vec<PlutusData>),
    Constr(Constr),
}

/// A tagged sequence of fields.
///
/// `tag` is either a constructor band tag (see [`crate::constr`]) or
/// [`PLAIN_ARRAY_TAG`], in which case the fields form an untagged list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constr {
    pub tag: u64,
    pub fields: Vec<PlutusData>,
}

impl Constr {
    pub fn new(tag: u64, fields: Vec<PlutusData>) -> Self {
        Self { tag, fields }
    }

    /// Builds a constructor from a logical index.
    pub fn with_index(index: i64, fields: Vec<PlutusData>) -> Result<Self, ConstrError> {
        Ok(Self::new(map_constructor_index(index)?, fields))
    }

    /// Logical constructor index, or `None` for the plain-array marker.
    pub fn index(&self) -> Option<u64> {
        constructor_index_of(self.tag)
    }

    pub fn is_plain(&self) -> bool {
        self.tag == PLAIN_ARRAY_TAG
    }
}

impl PlutusData {
    pub fn constr(tag: u64, fields: Vec<PlutusData>) -> Self {
        Self::Constr(Constr::new(tag, fields))
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Wraps `fields` under `tag`, or returns a bare list when `tag` is `None`.
    pub fn wrap(tag: Option<u64>, fields: Vec<PlutusData>) -> Self {
        match tag {
            Some(tag) => Self::constr(tag, fields),
            None => Self::Array(fields),
        }
    }

    /// Child values for the two sequence-like variants.
    pub fn children(&self) -> Option<&[PlutusData]> {
        match self {
            Self::Array(items) => Some(items),
            Self::Constr(c) => Some(&c.fields),
            Self::Int(_) | Self::Bytes(_) => None,
        }
    }

    pub fn as_constr(&self) -> Option<&Constr> {
        match self {
            Self::Constr(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Nesting depth of the tree; scalars have depth 1.
    pub fn depth(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
            None => 1,
        }
    }
}

impl From<i128> for PlutusData {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for PlutusData {
    fn from(value: i64) -> Self {
        Self::Int(value as i128)
    }
}

impl From<Vec<u8>> for PlutusData {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Constr> for PlutusData {
    fn from(value: Constr) -> Self {
        Self::Constr(value)
    }
}

/// Compact diagnostic form, e.g. `121([h'00ff', 42])`.
impl fmt::Display for PlutusData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Bytes(b) => write!(f, "h'{}'", hex::encode(b)),
            Self::Array(items) => write_list(f, items),
            Self::Constr(c) if c.is_plain() => write_list(f, &c.fields),
            Self::Constr(c) => {
                write!(f, "{}(", c.tag)?;
                write_list(f, &c.fields)?;
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[PlutusData]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
