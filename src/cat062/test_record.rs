use super::*;

use crate::record::DecoderOptions;
use crate::trace::FieldLog;
use crate::trace::NoTrace;

const SAMPLE: [u8; 55] = [
    0xbf, 0x4f, 0xad, 0x03, 0x02, 0x46, 0x10, 0x00, 0x67, 0xac, 0xe9, 0x00, 0x92, 0x60, 0xdd,
    0x00, 0x2d, 0x95, 0x51, 0xef, 0x5b, 0x3f, 0xf3, 0x9e, 0xa7, 0xfd, 0x79, 0x02, 0x6c, 0x0b,
    0x0c, 0x05, 0xc1, 0x01, 0x01, 0x01, 0x00, 0x20, 0x03, 0xf8, 0x05, 0xac, 0x85, 0xac, 0xff,
    0x69, 0x18, 0x05, 0xac, 0x0b, 0x0c, 0x04, 0x02, 0x00, 0x20,
];

fn decode(input: &[u8]) -> crate::error::Result<Record<Cat062>> {
    Record::<Cat062>::decode(input, 0, input.len(), &DecoderOptions::default(), &mut NoTrace)
}

#[test]
fn test_sample() {
    let record = decode(&SAMPLE).unwrap();

    assert_eq!(62, record.category());
    assert_eq!(5, record.fspec_len());
    assert_eq!(16, record.present_count());
    assert_eq!(55, record.len());

    let frns: Vec<usize> = record.items().map(|(frn, _)| frn).collect();

    assert_eq!(
        vec![1, 3, 4, 5, 6, 7, 9, 12, 13, 14, 15, 17, 19, 20, 28, 35],
        frns
    );
}

#[test]
fn test_sample_items() {
    let record = decode(&SAMPLE).unwrap();

    let source = record.item(1).unwrap();
    assert_eq!("I062/010", source.id);
    assert_eq!(vec![0x46, 0x10], source.data);

    let track_status = record.item(13).unwrap();
    assert_eq!("I062/080", track_status.id);
    assert_eq!(vec![0x01, 0x01, 0x01, 0x00], track_status.data);

    let system_track_update_ages = record.item(14).unwrap();
    assert_eq!(vec![0x20, 0x03], system_track_update_ages.data);

    let mode_s_data = record.item(28).unwrap();
    assert_eq!("I062/340", mode_s_data.id);
    assert_eq!(vec![0x18, 0x05, 0xac, 0x0b, 0x0c], mode_s_data.data);

    let special_purpose = record.item(35).unwrap();
    assert_eq!("I062/SP", special_purpose.id);
    assert_eq!(vec![0x04, 0x02, 0x00, 0x20], special_purpose.data);

    assert_eq!(Some(0x05c1), record.track_number());
}

#[test]
fn test_sample_trace() {
    let mut log = FieldLog::new();

    Record::<Cat062>::decode(&SAMPLE, 0, SAMPLE.len(), &DecoderOptions::default(), &mut log)
        .unwrap();

    assert_eq!(Some("5"), log.get("FSPEC", "Octets"));
    assert_eq!(Some("16"), log.get("FSPEC", "Items"));
    assert_eq!(Some("[46, 10]"), log.get("I062/010", "Octets"));
}

#[test]
fn test_sample_truncated() {
    assert_eq!(
        Err(DecodeError::TruncatedBuffer {
            needed: 55,
            available: 54
        }),
        decode(&SAMPLE[..54])
    );
}

#[test]
fn test_spare_frn() {
    // FRN 2 is spare
    let input = [0x40, 0x00];

    assert_eq!(
        Err(DecodeError::UndefinedItem {
            category: 62,
            frn: 2
        }),
        decode(&input)
    );
}

#[test]
fn test_compound_mode_s_data() {
    // FRN 11, I380 with ADR and TID (two 15 octet entries)
    let mut input = vec![0x01, 0x10, 0x81, 0x40, 0xab, 0xcd, 0xef, 0x02];
    input.extend_from_slice(&[0x11; 30]);

    let record = decode(&input).unwrap();

    assert_eq!(38, record.len());

    let item = record.item(11).unwrap();

    assert_eq!("I062/380", item.id);
    assert_eq!(36, item.data.len());
}
