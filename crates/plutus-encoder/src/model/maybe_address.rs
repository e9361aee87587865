use std::sync::OnceLock;

use crate::address::Address;
use crate::directive::FieldDirective;
use crate::record::{FieldValue, PlutusSchema, Record, RecordDescriptor, Schema};

/// Optional representative address: `Just` is constructor 0, `Nothing` is
/// constructor 1 with no fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaybeAddress {
    #[default]
    Nothing,
    WithAddress(WithAddress),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithAddress {
    pub address: Address,
}

impl PlutusSchema for WithAddress {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<WithAddress>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<WithAddress>::new()
                .constr(0)
                .field("Address", FieldDirective::address(), |w| {
                    FieldValue::Address(&w.address)
                })
        })
    }
}

impl MaybeAddress {
    pub fn some(address: Address) -> Self {
        Self::WithAddress(WithAddress { address })
    }
}

impl From<Option<Address>> for MaybeAddress {
    fn from(value: Option<Address>) -> Self {
        value.map_or(Self::Nothing, Self::some)
    }
}

impl Record for MaybeAddress {
    fn describe(&self) -> RecordDescriptor<'_> {
        match self {
            Self::Nothing => RecordDescriptor::new(Some(1)),
            Self::WithAddress(with) => with.describe(),
        }
    }
}
