//! Escrow order-book datum types.

mod maybe_address;
mod order;
mod utxo;

pub use maybe_address::{MaybeAddress, WithAddress};
pub use order::{BrokerageInfo, Order, OrderInfo, OrderTxInfo};
pub use utxo::EUTxO;
