//! Plutus datum value model.
//!
//! [`PlutusData`] is the abstract tree a datum encoder produces. Constructor
//! tags follow the two-band convention implemented in [`constr`]; [`json`]
//! renders a tree in the ledger's detailed JSON schema.

pub mod constr;
mod data;
pub mod json;

pub use constr::{map_constructor_index, ConstrError, PLAIN_ARRAY_TAG};
pub use data::{Constr, PlutusData};
pub use json::to_json;
