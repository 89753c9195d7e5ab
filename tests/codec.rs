//! Boundary behavior of the integer, token and coded index encodings.

use cilmeta::{
    metadata::token::write_compressed_token,
    prelude::*,
    utils::compressed_uint_size,
};
use strum::IntoEnumIterator;

#[test]
fn unsigned_boundaries() {
    let cases: [(u32, &[u8]); 6] = [
        (0x00, &[0x00]),
        (0x7F, &[0x7F]),
        (0x80, &[0x80, 0x80]),
        (0x3FFF, &[0xBF, 0xFF]),
        (0x4000, &[0xC0, 0x00, 0x40, 0x00]),
        (0x1FFF_FFFF, &[0xDF, 0xFF, 0xFF, 0xFF]),
    ];

    for (value, expected) in cases {
        let mut buffer = Vec::new();
        write_compressed_uint(value, &mut buffer).unwrap();
        assert_eq!(buffer, expected, "encoding 0x{value:X}");
        assert_eq!(compressed_uint_size(value).unwrap(), expected.len());
        assert_eq!(read_compressed_uint(&buffer).unwrap(), (value, expected.len()));
    }

    let mut buffer = Vec::new();
    assert!(matches!(
        write_compressed_uint(0x2000_0000, &mut buffer),
        Err(Error::IntegerRange(0x2000_0000))
    ));
    assert!(buffer.is_empty());
}

#[test]
fn signed_boundaries() {
    let cases: [(i32, usize); 7] = [
        (-0x40, 1),
        (0x3F, 1),
        (-0x41, 2),
        (0x1FFF, 2),
        (-0x2000, 2),
        (0x0FFF_FFFF, 4),
        (-0x1000_0000, 4),
    ];

    for (value, length) in cases {
        let mut buffer = Vec::new();
        write_compressed_int(value, &mut buffer).unwrap();
        assert_eq!(buffer.len(), length, "encoding {value}");
        assert_eq!(read_compressed_int(&buffer).unwrap(), (value, length));
    }

    let mut buffer = Vec::new();
    write_compressed_int(-1, &mut buffer).unwrap();
    assert_eq!(buffer, vec![0x7F]);

    assert!(write_compressed_int(0x1000_0000, &mut Vec::new()).is_err());
    assert!(write_compressed_int(-0x1000_0001, &mut Vec::new()).is_err());
}

#[test]
fn truncated_input() {
    assert!(matches!(read_compressed_uint(&[]), Err(Error::OutOfBounds)));
    assert!(matches!(read_compressed_uint(&[0x80]), Err(Error::OutOfBounds)));
    assert!(matches!(read_compressed_uint(&[0xC0, 0x00, 0x00]), Err(Error::OutOfBounds)));
    assert!(read_compressed_uint(&[0xE0, 0x00, 0x00, 0x00]).is_err());

    let mut parser = Parser::new(&[0x03, 0x80, 0x80, 0x7E]);
    assert_eq!(parser.read_compressed_uint().unwrap(), 3);
    assert_eq!(parser.read_compressed_uint().unwrap(), 0x80);
    assert_eq!(parser.read_compressed_int().unwrap(), 0x3F);
    assert!(parser.read_compressed_uint().is_err());
}

#[test]
fn tokens() {
    let token = Token::from_parts(TableId::TypeDef, 1).unwrap();
    assert_eq!(token.value(), 0x0200_0001);
    assert_eq!(token.decode().unwrap(), (TableId::TypeDef, 1));
    assert_eq!(token.decode_zero_based().unwrap(), (TableId::TypeDef, 0));

    assert!(matches!(
        Token::new(0x0200_0000).decode_zero_based(),
        Err(Error::NullIndex(_))
    ));
    assert!(matches!(Token::new(0x2D00_0001).decode(), Err(Error::UnknownTable(0x2D))));
    assert!(matches!(
        Token::from_parts(TableId::Field, 0x0100_0000),
        Err(Error::IntegerRange(_))
    ));

    for token in [0x0200_0001, 0x0100_0012, 0x1B00_0003] {
        let token = Token::new(token);
        let mut buffer = Vec::new();
        write_compressed_token(token, &mut buffer).unwrap();
        assert_eq!(Parser::new(&buffer).read_compressed_token().unwrap(), token);
    }

    assert!(Token::new(0x0600_0001).encode_type_def_or_ref().is_err());
    assert!(Token::decode_type_def_or_ref(0x03).is_err());
}

#[test]
fn coded_index_kinds() {
    assert_eq!(CodedIndexType::iter().count(), 13);

    for kind in CodedIndexType::iter() {
        let tables = kind.tables();
        let width = kind.tag_bits();
        assert!(tables.len() <= 1 << width, "{kind:?}");
        assert!(tables.len() > 1 << (width - 1), "{kind:?}");

        for (tag, table) in tables.iter().enumerate() {
            match table {
                Some(table) => {
                    let encoded = kind.encode(*table, 5).unwrap();
                    assert_eq!(encoded, (5 << width) | tag as u32);
                    assert_eq!(kind.decode(encoded).unwrap(), (*table, 5));

                    let index = CodedIndex::new(*table, 5);
                    assert_eq!(index.zero_based().unwrap(), (*table, 4));
                }
                None => {
                    assert!(matches!(
                        kind.decode((5 << width) | tag as u32),
                        Err(Error::InvalidCodedIndex { .. })
                    ));
                }
            }
        }

        assert_eq!(kind.encode(TableId::Module, 0).unwrap(), 0);
        assert!(kind.decode(0).unwrap().1 == 0);
    }

    assert_eq!(
        CodedIndexType::CustomAttributeType.tables(),
        &[None, None, Some(TableId::MethodDef), Some(TableId::MemberRef), None]
    );
    assert_eq!(CodedIndexType::CustomAttributeType.tag_bits(), 3);
    assert!(matches!(
        CodedIndexType::HasSemantics.encode(TableId::TypeDef, 1),
        Err(Error::InvalidCodedIndex { .. })
    ));
    assert!(matches!(
        CodedIndex::null().zero_based(),
        Err(Error::NullIndex(_))
    ));
}
