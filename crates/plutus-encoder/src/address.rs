//! Shelley addresses and their datum encoding.

use std::fmt;

use plutus_data::PlutusData;

use crate::error::EncodeError;

/// Length of a payment or staking credential hash.
pub const CREDENTIAL_LEN: usize = 28;

/// Address kind, as carried in the high nibble of the header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    KeyKey,
    ScriptKey,
    KeyScript,
    ScriptScript,
    KeyPointer,
    ScriptPointer,
    KeyNone,
    ScriptNone,
    RewardKey,
    RewardScript,
}

impl AddressKind {
    pub fn from_header(header: u8) -> Option<Self> {
        Some(match header >> 4 {
            0 => Self::KeyKey,
            1 => Self::ScriptKey,
            2 => Self::KeyScript,
            3 => Self::ScriptScript,
            4 => Self::KeyPointer,
            5 => Self::ScriptPointer,
            6 => Self::KeyNone,
            7 => Self::ScriptNone,
            14 => Self::RewardKey,
            15 => Self::RewardScript,
            _ => return None,
        })
    }

    pub fn header_nibble(self) -> u8 {
        match self {
            Self::KeyKey => 0,
            Self::ScriptKey => 1,
            Self::KeyScript => 2,
            Self::ScriptScript => 3,
            Self::KeyPointer => 4,
            Self::ScriptPointer => 5,
            Self::KeyNone => 6,
            Self::ScriptNone => 7,
            Self::RewardKey => 14,
            Self::RewardScript => 15,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::KeyKey => "key/key",
            Self::ScriptKey => "script/key",
            Self::KeyScript => "key/script",
            Self::ScriptScript => "script/script",
            Self::KeyPointer => "key/pointer",
            Self::ScriptPointer => "script/pointer",
            Self::KeyNone => "key/none",
            Self::ScriptNone => "script/none",
            Self::RewardKey => "reward/key",
            Self::RewardScript => "reward/script",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chain address split into its credential parts.
///
/// For pointer kinds `staking` holds the raw pointer bytes; for reward kinds
/// `payment` is empty and `staking` holds the stake credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub kind: AddressKind,
    pub network: u8,
    pub payment: Vec<u8>,
    pub staking: Option<Vec<u8>>,
}

impl Address {
    /// A key-payment/key-staking address on network 0.
    pub fn key_key(payment: impl Into<Vec<u8>>, staking: Option<Vec<u8>>) -> Self {
        Self {
            kind: AddressKind::KeyKey,
            network: 0,
            payment: payment.into(),
            staking,
        }
    }

    pub fn from_hex(text: &str) -> Result<Self, EncodeError> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| EncodeError::MalformedAddress(format!("bad hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Parses raw address bytes (header byte followed by credentials).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodeError> {
        let (&header, body) = bytes
            .split_first()
            .ok_or_else(|| EncodeError::MalformedAddress("empty address".into()))?;
        let kind = AddressKind::from_header(header).ok_or_else(|| {
            EncodeError::MalformedAddress(format!("unknown header type {}", header >> 4))
        })?;
        let network = header & 0x0f;
        let expect_len = |len: usize| {
            if body.len() == len {
                Ok(())
            } else {
                Err(EncodeError::MalformedAddress(format!(
                    "{kind} address body must be {len} bytes, got {}",
                    body.len()
                )))
            }
        };
        let (payment, staking) = match kind {
            AddressKind::KeyKey
            | AddressKind::ScriptKey
            | AddressKind::KeyScript
            | AddressKind::ScriptScript => {
                expect_len(2 * CREDENTIAL_LEN)?;
                let (payment, staking) = body.split_at(CREDENTIAL_LEN);
                (payment.to_vec(), Some(staking.to_vec()))
            }
            AddressKind::KeyPointer | AddressKind::ScriptPointer => {
                if body.len() <= CREDENTIAL_LEN {
                    return Err(EncodeError::MalformedAddress(
                        "pointer address is missing its pointer".into(),
                    ));
                }
                let (payment, pointer) = body.split_at(CREDENTIAL_LEN);
                (payment.to_vec(), Some(pointer.to_vec()))
            }
            AddressKind::KeyNone | AddressKind::ScriptNone => {
                expect_len(CREDENTIAL_LEN)?;
                (body.to_vec(), None)
            }
            AddressKind::RewardKey | AddressKind::RewardScript => {
                expect_len(CREDENTIAL_LEN)?;
                (Vec::new(), Some(body.to_vec()))
            }
        };
        Ok(Self {
            kind,
            network,
            payment,
            staking,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.payment.len() + CREDENTIAL_LEN);
        out.push((self.kind.header_nibble() << 4) | (self.network & 0x0f));
        out.extend_from_slice(&self.payment);
        if let Some(staking) = &self.staking {
            out.extend_from_slice(staking);
        }
        out
    }
}

/// Encodes a key/key address as the ledger's `Address` datum:
///
/// ```text
/// 121([121([0([payment])]), staking])
/// staking = 121([121([121([0([stake])])])])   when present
///         = 122([])                           otherwise
/// ```
pub fn encode_address(address: &Address) -> Result<PlutusData, EncodeError> {
    if address.kind != AddressKind::KeyKey {
        return Err(EncodeError::UnsupportedAddressKind { kind: address.kind });
    }
    let payment = PlutusData::constr(121, vec![credential(&address.payment)]);
    let staking = match &address.staking {
        Some(stake) => PlutusData::constr(
            121,
            vec![PlutusData::constr(
                121,
                vec![PlutusData::constr(121, vec![credential(stake)])],
            )],
        ),
        None => nothing(),
    };
    Ok(PlutusData::constr(121, vec![payment, staking]))
}

fn credential(hash: &[u8]) -> PlutusData {
    PlutusData::constr(
        plutus_data::PLAIN_ARRAY_TAG,
        vec![PlutusData::bytes(hash.to_vec())],
    )
}

/// The `Nothing` variant of an optional datum.
fn nothing() -> PlutusData {
    PlutusData::constr(122, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(header: u8, body_len: usize) -> Vec<u8> {
        let mut bytes = vec![header];
        bytes.extend((0..body_len).map(|i| i as u8));
        bytes
    }

    #[test]
    fn parses_base_address() {
        let addr = Address::from_bytes(&header_bytes(0x01, 56)).unwrap();
        assert_eq!(addr.kind, AddressKind::KeyKey);
        assert_eq!(addr.network, 1);
        assert_eq!(addr.payment.len(), 28);
        assert_eq!(addr.staking.as_deref().map(<[u8]>::len), Some(28));
        assert_eq!(addr.to_bytes(), header_bytes(0x01, 56));
    }

    #[test]
    fn parses_enterprise_and_pointer() {
        let addr = Address::from_bytes(&header_bytes(0x61, 28)).unwrap();
        assert_eq!(addr.kind, AddressKind::KeyNone);
        assert_eq!(addr.staking, None);

        let addr = Address::from_bytes(&header_bytes(0x40, 31)).unwrap();
        assert_eq!(addr.kind, AddressKind::KeyPointer);
        assert_eq!(addr.staking.as_deref().map(<[u8]>::len), Some(3));
    }

    #[test]
    fn rejects_bad_lengths_and_headers() {
        assert!(matches!(
            Address::from_bytes(&[]),
            Err(EncodeError::MalformedAddress(_))
        ));
        assert!(matches!(
            Address::from_bytes(&header_bytes(0x00, 40)),
            Err(EncodeError::MalformedAddress(_))
        ));
        assert!(matches!(
            Address::from_bytes(&header_bytes(0x80, 28)),
            Err(EncodeError::MalformedAddress(_))
        ));
        assert!(matches!(
            Address::from_hex("0g"),
            Err(EncodeError::MalformedAddress(_))
        ));
    }

    #[test]
    fn staking_part_is_wrapped_three_times() {
        let addr = Address::key_key(vec![1; 28], Some(vec![2; 28]));
        let encoded = encode_address(&addr).unwrap();
        let expected = PlutusData::constr(
            121,
            vec![
                PlutusData::constr(121, vec![credential(&[1; 28])]),
                PlutusData::constr(
                    121,
                    vec![PlutusData::constr(
                        121,
                        vec![PlutusData::constr(121, vec![credential(&[2; 28])])],
                    )],
                ),
            ],
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn only_key_key_is_encodable() {
        let mut addr = Address::key_key(vec![0; 28], None);
        addr.kind = AddressKind::ScriptKey;
        assert_eq!(
            encode_address(&addr),
            Err(EncodeError::UnsupportedAddressKind {
                kind: AddressKind::ScriptKey
            })
        );
    }
}
