//! Schema-driven encoder from annotated records to Plutus datum trees.
//!
//! Each record type declares a static [`Schema`] table mapping its fields to
//! [`FieldDirective`]s; the [`Encoder`] walks the resulting
//! [`RecordDescriptor`] and produces a [`PlutusData`] value for an external
//! serializer to embed as a transaction datum.
//!
//! ```
//! use plutus_encoder::{encode, FieldDirective, RecordDescriptor};
//! use plutus_data::PlutusData;
//!
//! let record = RecordDescriptor::new(Some(0))
//!     .field("amount", FieldDirective::int(), 42i64)
//!     .field("label", FieldDirective::string_bytes(), "hi");
//! let datum = encode(&record).unwrap();
//! assert_eq!(
//!     datum,
//!     PlutusData::constr(121, vec![PlutusData::Int(42), PlutusData::bytes(b"hi".to_vec())])
//! );
//! ```

pub mod address;
pub mod config;
pub mod directive;
mod error;
pub mod model;
pub mod record;
mod walker;

pub use address::{encode_address, Address, AddressKind};
pub use config::EncoderConfig;
pub use directive::{ContainerDirective, DirectiveKind, FieldDirective};
pub use error::{ConfigError, DirectiveError, EncodeError};
pub use plutus_data::PlutusData;
pub use record::{Field, FieldValue, PlutusSchema, Record, RecordDescriptor, Schema};
pub use walker::{encode, Encoder};
