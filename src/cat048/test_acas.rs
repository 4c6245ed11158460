use super::*;

use crate::advisory::AraBits;
use crate::advisory::AuralCode;
use crate::advisory::TcasVersion;
use crate::altitude::Altitude;
use crate::item::DataItem;
use crate::trace::FieldLog;
use crate::trace::NoTrace;

const TTI: usize = 28;
const TID_ADDRESS: usize = 30;

// Sets `(index, width, value)` bit fields in an otherwise empty MB field
fn mb(fields: &[(usize, usize, u64)]) -> [u8; 7] {
    let mut mb = [0u8; 7];

    for &(index, width, value) in fields {
        for bit in 0..width {
            if value >> (width - 1 - bit) & 1 == 1 {
                let position = index + bit;
                mb[position / 8] |= 0x80 >> (position % 8);
            }
        }
    }

    mb
}

fn decode(input: &[u8], version: TcasVersion) -> crate::error::Result<AcasResolutionAdvisory> {
    let mut trace = NoTrace;
    let mut ctx = Context::new(version, &mut trace);

    AcasResolutionAdvisory::decode(input, 0, &mut ctx)
}

#[test]
fn test_no_threat_identity() {
    for tti in [0, 3] {
        let input = mb(&[(TTI, 2, tti), (TID_ADDRESS, 24, 0xabcdef)]);

        let advisory = decode(&input, TcasVersion::V604).unwrap();

        assert_eq!(tti as u8, advisory.threat_type_indicator);
        assert_eq!(ThreatIdentity::None, advisory.threat_identity);
        assert_eq!(None, advisory.tid_mode_s_address());
        assert_eq!(None, advisory.tid_altitude());
        assert_eq!(None, advisory.tid_range());
        assert_eq!(None, advisory.tid_bearing());
    }
}

#[test]
fn test_mode_s_threat() {
    let input = mb(&[(TTI, 2, 1), (TID_ADDRESS, 24, 0x4ca2d1)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert_eq!(
        ThreatIdentity::ModeS { address: 0x4ca2d1 },
        advisory.threat_identity
    );
    assert_eq!(Some(0x4ca2d1), advisory.tid_mode_s_address());
    assert_eq!(None, advisory.tid_altitude());
    assert_eq!(None, advisory.tid_range());
    assert_eq!(None, advisory.tid_bearing());
}

#[test]
fn test_position_threat() {
    // C2 alone is -1000 ft, D1 (index 38) must not change it
    let input = mb(&[
        (TTI, 2, 2),
        (32, 1, 1),
        (38, 1, 1),
        (43, 7, 85),
        (50, 6, 42),
    ]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    let expected = ThreatIdentity::Position {
        altitude: Altitude::Feet(-1000),
        range: 85,
        bearing: 42,
    };

    assert_eq!(expected, advisory.threat_identity);
    assert_eq!(Some(Altitude::Feet(-1000)), advisory.tid_altitude());
    assert_eq!(Some(85), advisory.tid_range());
    assert_eq!(Some(42), advisory.tid_bearing());
    assert_eq!(None, advisory.tid_mode_s_address());
}

#[test]
fn test_position_threat_invalid_altitude() {
    let input = mb(&[(TTI, 2, 2)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert_eq!(Some(Altitude::Invalid), advisory.tid_altitude());
}

#[test]
fn test_ra_complements() {
    let input = mb(&[(22, 1, 1), (25, 1, 1)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert_eq!(
        vec!["Do not pass below", "Do not turn right"],
        advisory.ra_complements
    );

    let input = mb(&[(22, 4, 0b1111)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert_eq!(
        vec![
            "Do not pass below",
            "Do not pass above",
            "Do not turn left",
            "Do not turn right"
        ],
        advisory.ra_complements
    );

    let advisory = decode(&[0; 7], TcasVersion::V604).unwrap();

    assert!(advisory.ra_complements.is_empty());
}

#[test]
fn test_flags() {
    let input = mb(&[(8, 10, 0b10_0000_0001), (26, 1, 1), (27, 1, 0)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert!(advisory.ara_bit(41));
    assert!(!advisory.ara_bit(42));
    assert!(advisory.ara_bit(50));
    assert_eq!(
        AraBits::new(AraBits::BIT_41 | AraBits::BIT_50),
        advisory.ara
    );
    assert!(advisory.ra_terminated);
    assert!(!advisory.multiple_threat);
}

#[test]
fn test_deterministic() {
    let input = [0x30, 0x8f, 0x3a, 0x55, 0x12, 0xfe, 0x01];

    assert_eq!(
        decode(&input, TcasVersion::V70),
        decode(&input, TcasVersion::V70)
    );
}

#[test]
fn test_truncated() {
    let input = [0xff; 6];

    assert_eq!(
        Err(DecodeError::TruncatedBuffer {
            needed: 7,
            available: 6
        }),
        decode(&input, TcasVersion::V604)
    );
}

#[test]
fn test_offset() {
    let mut input = vec![0xee, 0xee];
    input.extend_from_slice(&mb(&[(TTI, 2, 1), (TID_ADDRESS, 24, 0x123456)]));

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let advisory = AcasResolutionAdvisory::decode(&input, 2, &mut ctx).unwrap();

    assert_eq!(Some(0x123456), advisory.tid_mode_s_address());
}

#[test]
fn test_version_selects_tables() {
    let input = mb(&[(8, 10, AraBits::BIT_41 as u64)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert_eq!(Some(AuralCode::Climb), advisory.aural_code);
    assert_eq!(vec!["Climb"], advisory.active_advisories);

    let advisory = decode(&input, TcasVersion::V70).unwrap();

    assert_eq!(Some(AuralCode::MonitorVerticalSpeed), advisory.aural_code);
    assert_eq!(vec!["Don't descend"], advisory.active_advisories);
}

#[test]
fn test_unknown_combination() {
    let input = mb(&[(8, 10, 0b11_1111_1111)]);

    let advisory = decode(&input, TcasVersion::V604).unwrap();

    assert_eq!(None, advisory.aural_code);
    assert!(advisory.active_advisories.is_empty());
}

#[test]
fn test_trace_reports_fields() {
    let input = mb(&[
        (8, 10, AraBits::BIT_41 as u64),
        (23, 1, 1),
        (TTI, 2, 1),
        (TID_ADDRESS, 24, 0x4ca2d1),
    ]);

    let mut log = FieldLog::new();

    {
        let mut ctx = Context::new(TcasVersion::V604, &mut log);
        AcasResolutionAdvisory::decode(&input, 0, &mut ctx).unwrap();
    }

    let id = AcasResolutionAdvisory::ID;

    assert_eq!(Some("1"), log.get(id, "TTI"));
    assert_eq!(Some("4CA2D1"), log.get(id, "TID Mode S address"));
    assert_eq!(Some("true"), log.get(id, "ARA bit 41"));
    assert_eq!(Some("false"), log.get(id, "ARA bit 50"));
    assert_eq!(Some("false"), log.get(id, "MTE"));
    assert_eq!(Some("false"), log.get(id, "RAT"));
    assert_eq!(Some("Do not pass above"), log.get(id, "RAC"));
    assert_eq!(Some("CLB"), log.get(id, "Aural code"));
    assert_eq!(Some("Climb"), log.get(id, "ARA list"));
    assert_eq!(None, log.get(id, "TID altitude"));
}

#[test]
fn test_trace_does_not_change_result() {
    let input = [0x30, 0x8f, 0x3a, 0x55, 0x12, 0xfe, 0x01];

    let mut log = FieldLog::new();
    let traced = {
        let mut ctx = Context::new(TcasVersion::V604, &mut log);
        AcasResolutionAdvisory::decode(&input, 0, &mut ctx)
    };

    assert_eq!(decode(&input, TcasVersion::V604), traced);
    assert!(!log.entries().is_empty());
}
