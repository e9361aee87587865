use std::sync::OnceLock;

use crate::address::Address;
use crate::directive::FieldDirective;
use crate::model::{EUTxO, MaybeAddress};
use crate::record::{FieldValue, PlutusSchema, Schema};

/// Terms of an order as seen by the escrow validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInfo {
    pub trade_token_name: String,
    pub trade_token_policy_id: String,
    pub order_id: String,
    pub order_amount: i64,
    pub maker_address: Address,
    pub maker_rep_address: MaybeAddress,
    pub taker_address: Address,
    pub taker_rep_address: MaybeAddress,
    pub maker_deadline: i64,
    pub taker_deadline: i64,
}

impl PlutusSchema for OrderInfo {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<OrderInfo>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<OrderInfo>::new()
                .constr(1)
                .field("TradeTokenName", FieldDirective::string_bytes().omit_empty(), |o| {
                    FieldValue::Str(&o.trade_token_name)
                })
                .field("TradeTokenPolicyId", FieldDirective::hex_string().omit_empty(), |o| {
                    FieldValue::Str(&o.trade_token_policy_id)
                })
                .field("OrderId", FieldDirective::string_bytes(), |o| {
                    FieldValue::Str(&o.order_id)
                })
                .field("OrderAmount", FieldDirective::int(), |o| o.order_amount.into())
                .field("MakerAddress", FieldDirective::address(), |o| {
                    FieldValue::Address(&o.maker_address)
                })
                .field("MakerRepAddress", FieldDirective::default(), |o| {
                    FieldValue::Record(&o.maker_rep_address)
                })
                .field("TakerAddress", FieldDirective::address(), |o| {
                    FieldValue::Address(&o.taker_address)
                })
                .field("TakerRepAddress", FieldDirective::default(), |o| {
                    FieldValue::Record(&o.taker_rep_address)
                })
                .field("MakerDeadline", FieldDirective::int(), |o| o.maker_deadline.into())
                .field("TakerDeadline", FieldDirective::int(), |o| o.taker_deadline.into())
        })
    }
}

/// Fee schedule and collateral rules, in basis points of `precision`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrokerageInfo {
    pub precision: i64,
    pub collateral_pct: i64,
    pub maker_pct: i64,
    pub taker_pct: i64,
    pub cancel_pct: i64,
    pub min_collateral: i64,
    pub maker_min_fee: i64,
    pub taker_min_fee: i64,
    pub cancel_min_fee: i64,
    pub min_order_amount: i64,
    pub order_threshold: i64,
    pub cancel_penalty: i64,
    pub ada_collateral: i64,
}

impl PlutusSchema for BrokerageInfo {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<BrokerageInfo>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            let int = FieldDirective::int();
            Schema::<BrokerageInfo>::new()
                .constr(1)
                .field("Precision", int, |b| b.precision.into())
                .field("CollateralPct", int, |b| b.collateral_pct.into())
                .field("MakerPct", int, |b| b.maker_pct.into())
                .field("TakerPct", int, |b| b.taker_pct.into())
                .field("CancelPct", int, |b| b.cancel_pct.into())
                .field("MinCollateral", int, |b| b.min_collateral.into())
                .field("MakerMinFee", int, |b| b.maker_min_fee.into())
                .field("TakerMinFee", int, |b| b.taker_min_fee.into())
                .field("CancelMinFee", int, |b| b.cancel_min_fee.into())
                .field("MinOrderAmount", int, |b| b.min_order_amount.into())
                .field("OrderThreshold", int, |b| b.order_threshold.into())
                .field("CancelPenalty", int, |b| b.cancel_penalty.into())
                .field("AdaCollateral", int.omit_empty(), |b| b.ada_collateral.into())
        })
    }
}

/// Off-chain inputs used to build the order transaction. Never part of the
/// datum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTxInfo {
    pub escrow_contract_address: Address,
    pub escrow_contract_ref_utxo: EUTxO,
    pub state_token_policy_id: String,
    pub state_token_ref_utxo: EUTxO,
    pub maker_fee: i64,
    pub taker_fee: i64,
    pub dispute_fee: i64,
    pub cancel_fee: i64,
    pub collateral_amount: i64,
    pub change_address: Address,
    pub user_utxos: Vec<EUTxO>,
    pub collateral_utxo: EUTxO,
    pub order_utxo: EUTxO,
}

/// Escrow datum: order terms, brokerage terms and the trade state label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_info: OrderInfo,
    pub brokerage_info: BrokerageInfo,
    pub trade_state: String,
    pub order_tx_info: Option<OrderTxInfo>,
}

impl PlutusSchema for Order {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<Order>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<Order>::new()
                .constr(1)
                .field("OrderInfo", FieldDirective::default(), |o| {
                    FieldValue::Record(&o.order_info)
                })
                .field("BrokerageInfo", FieldDirective::default(), |o| {
                    FieldValue::Record(&o.brokerage_info)
                })
                .field("TradeState", FieldDirective::string_bytes(), |o| {
                    FieldValue::Str(&o.trade_state)
                })
                .ignore("OrderTxInfo")
        })
    }
}
