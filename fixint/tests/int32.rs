use assert_matches::assert_matches;
use fixint::{Bitwise, ByteArrayError, Endian, Int32, Numeric};

#[test]
fn test_byte_constructor() {
    let dword = [0x83u8, 0x00, 0x0a, 0x1c];
    assert_eq!(Int32::try_from(&dword[..]).unwrap().int32_value(), -2097149412);
}

#[test]
fn test_constructors() {
    assert_eq!(Int32::from_i16(130).int32_value(), 130);
    assert_eq!(Int32::from_i32(-100).int32_value(), -100);
    assert_eq!(Int32::from_i64(100).int32_value(), 100);
    assert_eq!(Int32::from_i64(i64::MAX).int32_value(), -1);
    assert_eq!(Int32::from_i64(2147483647), Int32::MAX);
}

#[test]
fn test_constructor_errors() {
    assert_matches!(
        Int32::try_from(&[1u8, 2, 3][..]),
        Err(ByteArrayError::InvalidLength { expected: 4, found: 3 })
    );
    assert_matches!(Int32::try_from(None::<&[u8]>), Err(ByteArrayError::Absent));
    assert_matches!(
        Int32::from_bytes_with(&[0u8; 8], Endian::Little),
        Err(ByteArrayError::InvalidLength { expected: 4, found: 8 })
    );
}

#[test]
fn test_value_of() {
    let dword = [0xcau8, 0x93, 0x10, 0x11];

    assert_eq!(Int32::from_be_bytes(&dword).unwrap().int32_value(), -896331759);
    assert_eq!(Int32::from_le_bytes(&dword).unwrap().int32_value(), 286299082);
    assert_eq!(
        Int32::from_bytes_with(&dword, Endian::Big).unwrap(),
        Int32::from_be_bytes(&dword).unwrap()
    );
}

#[test]
fn test_values() {
    assert_eq!(Int32::new(1000).short_value(), 1000);
    assert_eq!(Int32::new(20000).int_value(), 20000);
    assert_eq!(Int32::new(20001).long_value(), 20001);
    assert_eq!(Int32::new(20002).float_value(), 20002.0);
    assert_eq!(Int32::new(1978).double_value(), 1978.0);
    assert_eq!(Int32::from_be_bytes(&[0xff, 0x0a, 0xca, 0x01]).unwrap().byte_value(), 1);
}

#[test]
fn test_compare_to() {
    assert_eq!(Int32::new(1).compare_to(&Int32::new(10)), -9);
    assert_eq!(Int32::new(10).compare_to(&Int32::new(1)), 9);
    assert_eq!(Int32::from_i8(1).compare_to(&Int32::from_i8(1)), 0);

    // far-apart values keep the correct sign
    assert!(Int32::MAX.compare_to(&Int32::MIN) > 0);
    assert!(Int32::MIN.compare_to(&Int32::new(1)) < 0);
    assert!(Int32::MIN < Int32::new(1));
}

#[test]
fn test_equals() {
    let v = Int32::from_i8(10);

    assert_eq!(v.hash_code(), v.int_value());
    assert_eq!(Int32::new(1), Int32::new(1));
    assert_eq!(Int32::new(65290).to_string(), "65290");
    assert_eq!(Int32::MIN.to_string(), "-2147483648");
}

#[test]
fn test_marshal() {
    let v = Int32::new(2453);

    assert_eq!(v.to_be_bytes(), [0x00, 0x00, 0x09, 0x95]);
    assert_eq!(v.to_le_bytes(), [0x95, 0x09, 0x00, 0x00]);
    assert_eq!(v.to_bytes_with(Endian::Big), vec![0x00, 0x00, 0x09, 0x95]);
}

#[test]
fn test_bitwise() {
    let v = Int32::new(0xab);

    assert_eq!(v.and(Int32::new(0xff)), Int32::new(0xab));
    assert_eq!(v.not(), Int32::from_i64(0xffffff54));
    assert_eq!(v.or(Int32::new(0xf0)), Int32::new(0xfb));
    assert_eq!(v.xor(Int32::new(0xf0)), Int32::new(0x5b));

    assert_eq!(Int32::new(0x02).add_bitmask(Int32::new(0x04)), Int32::new(0x06));
    assert!(Int32::new(0x06).has_bitmask(Int32::new(0x04)));
    assert_eq!(Int32::new(0x06).remove_bitmask(Int32::new(0x04)), Int32::new(0x02));
}
