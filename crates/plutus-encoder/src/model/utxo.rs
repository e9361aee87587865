use std::sync::OnceLock;

use crate::directive::FieldDirective;
use crate::record::{FieldValue, PlutusSchema, Schema};

/// Reference to a transaction output: hex transaction id plus output index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EUTxO {
    pub tx_id: String,
    pub tx_index: u32,
}

impl EUTxO {
    pub fn new(tx_id: impl Into<String>, tx_index: u32) -> Self {
        Self {
            tx_id: tx_id.into(),
            tx_index,
        }
    }
}

impl PlutusSchema for EUTxO {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<EUTxO>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<EUTxO>::new()
                .constr(0)
                .field("TxID", FieldDirective::hex_string(), |u| FieldValue::Str(&u.tx_id))
                .field("TxIDIndex", FieldDirective::int(), |u| u.tx_index.into())
        })
    }
}
