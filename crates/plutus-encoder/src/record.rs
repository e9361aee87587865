//! Record descriptors and static per-type schema tables.
//!
//! A [`RecordDescriptor`] is the encoder's input: an ordered list of
//! `(name, directive, value)` triples plus an optional container constructor
//! index. Types usually produce one through a [`Schema`] table declared once
//! per type via [`PlutusSchema`].

use crate::address::Address;
use crate::config::EncoderConfig;
use crate::directive::{ContainerDirective, FieldDirective};
use crate::error::EncodeError;

/// The value held by a field, borrowed from the host record.
#[derive(Clone)]
pub enum FieldValue<'a> {
    Int(i128),
    /// Text for `StringBytes` and `HexString` fields.
    Str(&'a str),
    Address(&'a Address),
    Record(&'a dyn Record),
    List(Vec<&'a dyn Record>),
    /// A value the encoder never inspects; only valid for ignored fields.
    Opaque,
}

impl<'a> FieldValue<'a> {
    pub fn list<R: Record>(items: &'a [R]) -> Self {
        Self::List(items.iter().map(|item| item as &dyn Record).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "an integer",
            Self::Str(_) => "a string",
            Self::Address(_) => "an address",
            Self::Record(_) => "a record",
            Self::List(_) => "a list",
            Self::Opaque => "an opaque value",
        }
    }

    /// Zero, empty text and empty lists count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Int(i) => *i == 0,
            Self::Str(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Address(_) | Self::Record(_) | Self::Opaque => false,
        }
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Address(a) => f.debug_tuple("Address").field(a).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::List(items) => write!(f, "List(len = {})", items.len()),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue<'_> {
                fn from(value: $t) -> Self {
                    Self::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a Address> for FieldValue<'a> {
    fn from(value: &'a Address) -> Self {
        Self::Address(value)
    }
}

#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub name: &'a str,
    pub directive: FieldDirective,
    pub value: FieldValue<'a>,
}

/// Encoder input for one record. Field order is output order.
#[derive(Debug, Clone, Default)]
pub struct RecordDescriptor<'a> {
    /// Logical constructor index; `None` encodes as a plain list.
    pub constr: Option<i64>,
    pub fields: Vec<Field<'a>>,
}

impl<'a> RecordDescriptor<'a> {
    pub fn new(constr: Option<i64>) -> Self {
        Self {
            constr,
            fields: Vec::new(),
        }
    }

    /// Starts a descriptor from a container annotation such as
    /// `("DefList", Some("1"))`.
    pub fn from_annotation(
        kind_text: &str,
        constr_text: Option<&str>,
    ) -> Result<Self, EncodeError> {
        let container = ContainerDirective::parse(kind_text, constr_text)
            .map_err(|e| EncodeError::schema("<container>", e))?;
        Ok(Self::new(container.constr))
    }

    pub fn field(
        mut self,
        name: &'a str,
        directive: FieldDirective,
        value: impl Into<FieldValue<'a>>,
    ) -> Self {
        self.push(name, directive, value.into());
        self
    }

    /// Adds a field from its raw annotation texts, resolved under
    /// `config.strict_directives`. Pass [`Encoder::config`](crate::Encoder::config)
    /// to resolve with the same options the record will be encoded under.
    pub fn annotated(
        mut self,
        name: &'a str,
        kind_text: &str,
        constr_text: Option<&str>,
        config: &EncoderConfig,
        value: impl Into<FieldValue<'a>>,
    ) -> Result<Self, EncodeError> {
        let directive = config
            .parse_directive(kind_text, constr_text)
            .map_err(|e| EncodeError::schema(name, e))?;
        self.push(name, directive, value.into());
        Ok(self)
    }

    pub fn push(&mut self, name: &'a str, directive: FieldDirective, value: FieldValue<'a>) {
        self.fields.push(Field {
            name,
            directive,
            value,
        });
    }
}

/// Anything the encoder can walk.
pub trait Record {
    fn describe(&self) -> RecordDescriptor<'_>;
}

impl Record for RecordDescriptor<'_> {
    fn describe(&self) -> RecordDescriptor<'_> {
        self.clone()
    }
}

pub type Getter<T> = for<'a> fn(&'a T) -> FieldValue<'a>;

pub struct FieldSpec<T> {
    pub name: &'static str,
    pub directive: FieldDirective,
    getter: Option<Getter<T>>,
}

/// Encoding table for a type: container constructor plus one accessor per
/// field, in declaration order.
pub struct Schema<T> {
    constr: Option<i64>,
    fields: Vec<FieldSpec<T>>,
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schema<T> {
    pub fn new() -> Self {
        Self {
            constr: None,
            fields: Vec::new(),
        }
    }

    pub fn constr(mut self, index: i64) -> Self {
        self.constr = Some(index);
        self
    }

    pub fn field(mut self, name: &'static str, directive: FieldDirective, get: Getter<T>) -> Self {
        self.fields.push(FieldSpec {
            name,
            directive,
            getter: Some(get),
        });
        self
    }

    /// Declares a field that is never read.
    pub fn ignore(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec {
            name,
            directive: FieldDirective::ignore(),
            getter: None,
        });
        self
    }

    pub fn constr_index(&self) -> Option<i64> {
        self.constr
    }

    pub fn fields(&self) -> &[FieldSpec<T>] {
        &self.fields
    }

    pub fn describe<'a>(&self, value: &'a T) -> RecordDescriptor<'a> {
        RecordDescriptor {
            constr: self.constr,
            fields: self
                .fields
                .iter()
                .map(|spec| Field {
                    name: spec.name,
                    directive: spec.directive,
                    value: spec.getter.map_or(FieldValue::Opaque, |get| get(value)),
                })
                .collect(),
        }
    }
}

/// Types with a statically declared encoding table.
///
/// Implementations typically keep the table in a `OnceLock` so it is built
/// once per process.
pub trait PlutusSchema: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

impl<T: PlutusSchema> Record for T {
    fn describe(&self) -> RecordDescriptor<'_> {
        T::schema().describe(self)
    }
}
