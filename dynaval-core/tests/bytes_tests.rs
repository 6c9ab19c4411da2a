//! 字节数组测试

use dynaval_core::{Coercion, Tag, Value, ValueError, DEFAULT_BYTE_LIMIT};

#[test]
fn test_round_trip_through_buffer() {
    let payload = [0x00, 0x7f, 0x80, 0xff];
    let v = Value::from_bytes(&payload);
    assert!(v.get(0usize).is_uint(Coercion::Strict));

    let mut out = [0u8; DEFAULT_BYTE_LIMIT];
    let written = v.array_to_bytes(&mut out).unwrap();
    assert_eq!(&out[..written], &payload);
}

#[test]
fn test_never_writes_past_buffer() {
    let v = Value::from_bytes(&[1, 2, 3, 4, 5]);
    let mut buf = [0u8; 5];
    let written = v.array_to_bytes(&mut buf[..3]).unwrap();

    assert_eq!(written, 3);
    assert_eq!(buf, [1, 2, 3, 0, 0]);
}

#[test]
fn test_rejects_out_of_range_and_non_integers() {
    let mut out = [0u8; 8];
    let cases = [
        (
            Value::list([Value::uint(1), Value::uint(300)]),
            ValueError::ByteOutOfRange { index: 1, value: 300 },
        ),
        (
            Value::list([Value::long(-5)]),
            ValueError::ByteOutOfRange { index: 0, value: -5 },
        ),
        (
            Value::list([Value::string("1")]),
            ValueError::NotAByte { index: 0, found: Tag::String },
        ),
        (
            Value::list([Value::bool(true)]),
            ValueError::NotAByte { index: 0, found: Tag::Bool },
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(value.array_to_bytes(&mut out), Err(expected));
    }
    assert_eq!(out, [0; 8]);
}

#[test]
fn test_non_array_rejected() {
    let mut out = [0u8; 1];
    assert!(matches!(
        Value::object().array_to_bytes(&mut out),
        Err(ValueError::TypeMismatch { expected: Tag::Array, found: Tag::Object })
    ));
}

#[test]
fn test_hex_and_limit() {
    let v = Value::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(v.to_hex_string().unwrap(), "de:ad:be:ef");
    assert_eq!(v.to_byte_vec(2).unwrap(), [0xde, 0xad]);
}

#[test]
fn test_bytes_as_text() {
    let mut v = Value::null();
    v.fill_from_bytes(b"ok").unwrap();
    assert_eq!(v.as_string(true).unwrap(), "ok");
}
