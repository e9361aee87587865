use plutus_encoder::{
    encode, encode_address, Address, AddressKind, EncodeError, FieldDirective, PlutusData,
    RecordDescriptor,
};

fn cred(hash: &[u8]) -> PlutusData {
    PlutusData::constr(0, vec![PlutusData::bytes(hash.to_vec())])
}

#[test]
fn payment_only_key_key_address() {
    let addr = Address::key_key(vec![0u8; 28], None);
    assert_eq!(
        encode_address(&addr).unwrap(),
        PlutusData::constr(
            121,
            vec![
                PlutusData::constr(121, vec![cred(&[0u8; 28])]),
                PlutusData::constr(122, vec![]),
            ]
        )
    );
}

#[test]
fn base_address_from_hex() {
    let payment = "11".repeat(28);
    let staking = "22".repeat(28);
    let addr = Address::from_hex(&format!("01{payment}{staking}")).unwrap();
    assert_eq!(addr.kind, AddressKind::KeyKey);
    assert_eq!(addr.network, 1);

    let encoded = encode_address(&addr).unwrap();
    let staking_part = PlutusData::constr(
        121,
        vec![PlutusData::constr(121, vec![PlutusData::constr(121, vec![cred(&[0x22; 28])])])],
    );
    assert_eq!(
        encoded,
        PlutusData::constr(
            121,
            vec![PlutusData::constr(121, vec![cred(&[0x11; 28])]), staking_part]
        )
    );
}

#[test]
fn unsupported_address_kind_matrix() {
    let cases = [
        (0x10u8, 56usize, AddressKind::ScriptKey),
        (0x20, 56, AddressKind::KeyScript),
        (0x30, 56, AddressKind::ScriptScript),
        (0x40, 31, AddressKind::KeyPointer),
        (0x50, 31, AddressKind::ScriptPointer),
        (0x60, 28, AddressKind::KeyNone),
        (0x70, 28, AddressKind::ScriptNone),
        (0xe0, 28, AddressKind::RewardKey),
        (0xf0, 28, AddressKind::RewardScript),
    ];
    for (header, body_len, kind) in cases {
        let mut bytes = vec![header];
        bytes.resize(1 + body_len, 0xab);
        let addr = Address::from_bytes(&bytes).unwrap();
        assert_eq!(addr.kind, kind);
        assert_eq!(addr.to_bytes(), bytes);
        assert_eq!(
            encode_address(&addr),
            Err(EncodeError::UnsupportedAddressKind { kind })
        );
    }
}

#[test]
fn address_field_error_propagates_verbatim() {
    let mut pointer = Address::key_key(vec![1; 28], Some(vec![1, 2, 3]));
    pointer.kind = AddressKind::KeyPointer;
    let record = RecordDescriptor::new(Some(0))
        .field("amount", FieldDirective::int(), 1i64)
        .field("owner", FieldDirective::address(), &pointer);
    let err = encode(&record).unwrap_err();
    assert_eq!(
        err,
        EncodeError::UnsupportedAddressKind {
            kind: AddressKind::KeyPointer
        }
    );
    assert_eq!(err.to_string(), "unsupported address kind: key/pointer");
}

#[test]
fn address_directive_requires_address_value() {
    let record = RecordDescriptor::new(None).field("owner", FieldDirective::address(), "addr1");
    assert!(matches!(
        encode(&record),
        Err(EncodeError::TypeMismatch { ref field, found: "a string", .. }) if field == "owner"
    ));
}
