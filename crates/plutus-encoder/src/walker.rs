//! Structural walker: turns a [`Record`] into a [`PlutusData`] tree.

use plutus_data::{map_constructor_index, PlutusData, PLAIN_ARRAY_TAG};
use tracing::{debug, trace};

use crate::address::encode_address;
use crate::config::EncoderConfig;
use crate::directive::DirectiveKind;
use crate::error::EncodeError;
use crate::record::{Field, FieldValue, Record};

/// Encodes records under a fixed [`EncoderConfig`].
///
/// An encoder holds no mutable state, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes `record` as `Constr(tag, children)`, one child per encoded
    /// field in declaration order. Records without a constructor index use
    /// [`PLAIN_ARRAY_TAG`].
    pub fn encode(&self, record: &dyn Record) -> Result<PlutusData, EncodeError> {
        self.encode_record(record, 1).inspect_err(|err| {
            debug!(error = %err, "record rejected");
        })
    }

    fn encode_record(&self, record: &dyn Record, depth: usize) -> Result<PlutusData, EncodeError> {
        if depth > self.config.max_depth {
            return Err(EncodeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        let descriptor = record.describe();
        let tag = match descriptor.constr {
            Some(index) => map_constructor_index(index)?,
            None => PLAIN_ARRAY_TAG,
        };

        let mut children = Vec::with_capacity(descriptor.fields.len());
        for field in &descriptor.fields {
            if let Some(child) = self.encode_field(field, depth)? {
                children.push(child);
            }
        }
        Ok(PlutusData::constr(tag, children))
    }

    fn encode_field(
        &self,
        field: &Field<'_>,
        depth: usize,
    ) -> Result<Option<PlutusData>, EncodeError> {
        let directive = field.directive;
        if directive.kind == DirectiveKind::Ignore {
            debug!(field = field.name, "skipping ignored field");
            return Ok(None);
        }
        if directive.omit_empty && field.value.is_empty() {
            debug!(field = field.name, "skipping empty field");
            return Ok(None);
        }
        trace!(field = field.name, kind = %directive.kind, depth, "encoding field");

        let tag = directive.constr.map(map_constructor_index).transpose()?;
        let encoded = match (directive.kind, &field.value) {
            (DirectiveKind::Int, FieldValue::Int(i)) => tagged(tag, PlutusData::Int(*i)),
            (DirectiveKind::StringBytes, FieldValue::Str(s)) => {
                tagged(tag, PlutusData::bytes(s.as_bytes()))
            }
            (DirectiveKind::HexString, FieldValue::Str(s)) => {
                let bytes = hex::decode(s).map_err(|_| EncodeError::InvalidHex {
                    field: field.name.to_owned(),
                    text: (*s).to_owned(),
                })?;
                tagged(tag, PlutusData::Bytes(bytes))
            }
            (DirectiveKind::Address, FieldValue::Address(address)) => encode_address(address)?,
            (DirectiveKind::NestedList, FieldValue::List(items)) => {
                let encoded = items
                    .iter()
                    .map(|item| self.encode_record(*item, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                PlutusData::wrap(tag, encoded)
            }
            (DirectiveKind::Default, FieldValue::Record(record)) => {
                self.encode_record(*record, depth + 1)?
            }
            (kind, value) => {
                return Err(EncodeError::TypeMismatch {
                    field: field.name.to_owned(),
                    expected: expected_type(kind),
                    found: value.type_name(),
                })
            }
        };
        Ok(Some(encoded))
    }
}

/// Wraps a scalar under its field's constructor tag, if one was declared.
fn tagged(tag: Option<u64>, value: PlutusData) -> PlutusData {
    match tag {
        Some(tag) => PlutusData::constr(tag, vec![value]),
        None => value,
    }
}

fn expected_type(kind: DirectiveKind) -> &'static str {
    match kind {
        DirectiveKind::Int => "Int (integer)",
        DirectiveKind::StringBytes => "StringBytes (string)",
        DirectiveKind::HexString => "HexString (string)",
        DirectiveKind::Address => "Address (address)",
        DirectiveKind::NestedList => "NestedList (list of records)",
        DirectiveKind::Default => "a nested record",
        DirectiveKind::Ignore => "Ignore",
    }
}

/// Encodes `record` with the default configuration.
pub fn encode(record: &dyn Record) -> Result<PlutusData, EncodeError> {
    Encoder::default().encode(record)
}
