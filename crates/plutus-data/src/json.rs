//! Detailed-schema JSON rendering of a [`PlutusData`] tree.
//!
//! Shapes:
//! - `Int` → `{"int": n}`
//! - `Bytes` → `{"bytes": "<hex>"}`
//! - `Array` and plain-marker constructors → `{"list": [...]}`
//! - band constructors → `{"constructor": i, "fields": [...]}`
//!
//! Any other tag has no rendering and fails with [`ConstrError::UnknownTag`].

use serde_json::{json, Map, Value};

use crate::constr::{ConstrError, PLAIN_ARRAY_TAG};
use crate::PlutusData;

pub fn to_json(value: &PlutusData) -> Result<Value, ConstrError> {
    Ok(match value {
        PlutusData::Int(i) => json!({ "int": int_to_json(*i) }),
        PlutusData::Bytes(b) => json!({ "bytes": hex::encode(b) }),
        PlutusData::Array(items) => list_to_json(items)?,
        PlutusData::Constr(c) if c.tag == PLAIN_ARRAY_TAG => list_to_json(&c.fields)?,
        PlutusData::Constr(c) => {
            let index = c.index().ok_or(ConstrError::UnknownTag { tag: c.tag })?;
            let fields = c.fields.iter().map(to_json).collect::<Result<Vec<_>, _>>()?;
            let mut obj = Map::new();
            obj.insert("constructor".into(), Value::from(index));
            obj.insert("fields".into(), Value::Array(fields));
            Value::Object(obj)
        }
    })
}

fn list_to_json(items: &[PlutusData]) -> Result<Value, ConstrError> {
    let items = items.iter().map(to_json).collect::<Result<Vec<_>, _>>()?;
    Ok(json!({ "list": items }))
}

/// Integers beyond the 64-bit range are written as decimal strings.
fn int_to_json(i: i128) -> Value {
    if let Ok(v) = i64::try_from(i) {
        Value::from(v)
    } else if let Ok(v) = u64::try_from(i) {
        Value::from(v)
    } else {
        Value::String(i.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_ints_render_as_strings() {
        assert_eq!(
            to_json(&PlutusData::Int(u64::MAX as i128)).unwrap(),
            json!({"int": u64::MAX})
        );
        assert_eq!(
            to_json(&PlutusData::Int(i128::MAX)).unwrap(),
            json!({"int": "170141183460469231731687303715884105727"})
        );
        assert_eq!(
            to_json(&PlutusData::Int(i64::MIN as i128 - 1)).unwrap(),
            json!({"int": "-9223372036854775809"})
        );
    }

    #[test]
    fn constructor_keys_keep_order() {
        let v = to_json(&PlutusData::constr(1280, vec![PlutusData::Int(3)])).unwrap();
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"constructor":7,"fields":[{"int":3}]}"#
        );
    }

    #[test]
    fn tag_outside_bands_is_rejected() {
        assert_eq!(
            to_json(&PlutusData::constr(500, vec![PlutusData::Int(1)])),
            Err(ConstrError::UnknownTag { tag: 500 })
        );
        let nested = PlutusData::Array(vec![PlutusData::constr(128, vec![])]);
        assert_eq!(to_json(&nested), Err(ConstrError::UnknownTag { tag: 128 }));
    }
}
