use super::*;

use crate::advisory::AuralCode;
use crate::advisory::TcasVersion;
use crate::altitude::Altitude;
use crate::item::DataItem;
use crate::record::DecoderOptions;
use crate::trace::NoTrace;

// FRNs 1, 2, 10 and 22: I010, I140, I250 with a BDS 1,0 register announcing
// TCAS 7.0, and I260 with ARA bit 41 set
const RECORD: [u8; 25] = [
    0xc1, 0x21, 0x01, 0x80, // FSPEC
    0x08, 0x11, // I010
    0x00, 0x01, 0x00, // I140
    0x01, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x10, // I250
    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, // I260
];

fn decode(input: &[u8], options: &DecoderOptions) -> crate::error::Result<Record<Cat048>> {
    Record::<Cat048>::decode(input, 0, input.len(), options, &mut NoTrace)
}

#[test]
fn test_decode() {
    let record = decode(&RECORD, &DecoderOptions::default()).unwrap();

    assert_eq!(48, record.category());
    assert_eq!(25, record.len());
    assert_eq!(4, record.fspec_len());
    assert_eq!(4, record.present_count());

    assert!(record.is_present(1));
    assert!(record.is_present(2));
    assert!(!record.is_present(3));
    assert!(record.is_present(10));
    assert!(record.is_present(22));

    let frns: Vec<usize> = record.items().map(|(frn, _)| frn).collect();
    assert_eq!(vec![1, 2, 10, 22], frns);

    assert_eq!(
        Some(&DataSourceIdentifier { sac: 8, sic: 17 }),
        record.data_source()
    );

    match record.item(2) {
        Some(Cat048Item::TimeOfDay(time)) => assert_eq!(2.0, time.seconds()),
        other => panic!("unexpected item {:?}", other),
    }

    assert_eq!(None, record.aircraft_address());
}

#[test]
fn test_tcas_version_from_capability_report() {
    let record = decode(&RECORD, &DecoderOptions::default()).unwrap();

    assert_eq!(
        Some(TcasVersion::V70),
        record.bds_register_data().unwrap().tcas_version()
    );
    assert_eq!(TcasVersion::V70, record.tcas_version());

    let advisory = record.acas_resolution_advisory().unwrap();

    assert_eq!(Some(AuralCode::MonitorVerticalSpeed), advisory.aural_code);
}

#[test]
fn test_tcas_version_option_wins() {
    let options = DecoderOptions {
        tcas_version: Some(TcasVersion::V604),
        ..DecoderOptions::default()
    };

    let record = decode(&RECORD, &options).unwrap();

    assert_eq!(TcasVersion::V604, record.tcas_version());

    let advisory = record.acas_resolution_advisory().unwrap();

    assert_eq!(Some(AuralCode::Climb), advisory.aural_code);
}

#[test]
fn test_tcas_version_default() {
    let input = [
        0x01, 0x01, 0x01, 0x80, // FSPEC, FRN 22 only
        0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    let record = decode(&input, &DecoderOptions::default()).unwrap();

    assert_eq!(11, record.len());
    assert_eq!(TcasVersion::V604, record.tcas_version());
    assert_eq!(
        Some(AuralCode::Climb),
        record.acas_resolution_advisory().unwrap().aural_code
    );
}

#[test]
fn test_record_followed_by_another() {
    let mut input = vec![0xff];
    input.extend_from_slice(&RECORD);
    input.extend_from_slice(&RECORD);

    let options = DecoderOptions::default();

    let first = Record::<Cat048>::decode(&input, 1, input.len() - 1, &options, &mut NoTrace)
        .unwrap();

    assert_eq!(25, first.len());

    let second =
        Record::<Cat048>::decode(&input, 1 + first.len(), input.len() - 26, &options, &mut NoTrace)
            .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_truncated() {
    let input = &RECORD[..24];

    assert_eq!(
        Err(DecodeError::TruncatedBuffer {
            needed: 25,
            available: 24
        }),
        decode(input, &DecoderOptions::default())
    );
}

#[test]
fn test_length_bounds_record() {
    // the buffer holds the whole record but the caller only grants 20 octets
    let result = Record::<Cat048>::decode(&RECORD, 0, 20, &DecoderOptions::default(), &mut NoTrace);

    assert!(matches!(
        result,
        Err(DecodeError::TruncatedBuffer { available: 20, .. })
    ));
}

#[test]
fn test_malformed_fspec() {
    let input = [0x01; 8];

    assert_eq!(
        Err(DecodeError::MalformedFspec { max: 4 }),
        decode(&input, &DecoderOptions::default())
    );
}

#[test]
fn test_undefined_item() {
    let options = DecoderOptions {
        max_fspec_octets: Some(5),
        ..DecoderOptions::default()
    };

    let input = [0x01, 0x01, 0x01, 0x01, 0x80, 0x00];

    assert_eq!(
        Err(DecodeError::UndefinedItem {
            category: 48,
            frn: 29
        }),
        decode(&input, &options)
    );
}

#[test]
fn test_empty_record() {
    let record = decode(&[0x00], &DecoderOptions::default()).unwrap();

    assert_eq!(1, record.len());
    assert_eq!(0, record.present_count());
    assert_eq!(0, record.items().count());
    assert_eq!(None, record.acas_resolution_advisory());
}

#[test]
fn test_mode_c_altitude() {
    let input = [
        0x01, 0x01, 0x10, // FSPEC, FRN 18
        0x00, 0x80, 0x00, 0x00,
    ];

    let record = decode(&input, &DecoderOptions::default()).unwrap();

    match record.item(18) {
        Some(Cat048Item::ModeCCodeConfidence(mode_c)) => {
            assert_eq!(0x080, mode_c.code);
            assert_eq!(Altitude::Feet(-1200), mode_c.altitude);
        }
        other => panic!("unexpected item {:?}", other),
    }
}

#[test]
fn test_aircraft_identification() {
    let input = [0x04, 0x2c, 0x72, 0x82, 0x08, 0x20];

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let identification = AircraftIdentification::decode(&input, 0, &mut ctx).unwrap();

    assert_eq!("AB12    ", identification.call_sign);
}

#[test]
fn test_negative_flight_level() {
    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let level = FlightLevel::decode(&[0x3f, 0xfc], 0, &mut ctx).unwrap();

    assert_eq!(-4, level.quarter_flight_level);
    assert_eq!(-1.0, level.flight_level());
}

#[test]
fn test_explicit_fields() {
    let input = [
        0x01, 0x01, 0x01, 0x06, // FSPEC, FRNs 27 and 28
        0x03, 0xaa, 0xbb, // SP
        0x01, // RE
    ];

    let record = decode(&input, &DecoderOptions::default()).unwrap();

    assert_eq!(8, record.len());
    assert_eq!(
        Some(&Cat048Item::SpecialPurpose(SpecialPurpose {
            data: vec![0xaa, 0xbb]
        })),
        record.item(27)
    );
    assert_eq!(
        Some(&Cat048Item::ReservedExpansion(ReservedExpansion { data: vec![] })),
        record.item(28)
    );
}

#[test]
fn test_zero_explicit_length() {
    let input = [0x01, 0x01, 0x01, 0x04, 0x00];

    assert!(matches!(
        decode(&input, &DecoderOptions::default()),
        Err(DecodeError::MalformedItem { .. })
    ));
}

#[test]
fn test_radar_plot_extended_primary() {
    // FX set on a primary with no sub-fields in its second octet
    let input = [0x81, 0x00, 0x05];

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let plot = RadarPlotCharacteristics::decode(&input, 0, &mut ctx).unwrap();

    let expected = RadarPlotCharacteristics {
        ssr_runlength: Some(5),
        ssr_replies: None,
        ssr_amplitude: None,
        psr_runlength: None,
        psr_amplitude: None,
        range_difference: None,
        azimuth_difference: None,
    };

    assert_eq!(expected, plot);
}

#[test]
fn test_doppler_extended_primary() {
    let input = [0x41, 0x00, 0x01, 0x12, 0x34, 0x00, 0x00, 0x00, 0x00];

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let doppler = RadialDopplerSpeed::decode(&input, 0, &mut ctx).unwrap();

    let expected = RadialDopplerSpeed {
        calculated: None,
        raw: vec![RawDopplerSpeed {
            doppler: 0x1234,
            ambiguity: 0,
            frequency: 0,
        }],
    };

    assert_eq!(expected, doppler);
}

#[test]
fn test_comms_acas_capability() {
    // COM 1, STAT 2, SI, MSSC, ARC, B1A and B1B 6
    let input = [0x2a, 0xd6];

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let capability = CommsAcasCapability::decode(&input, 0, &mut ctx).unwrap();

    let expected = CommsAcasCapability {
        communications: 1,
        flight_status: 2,
        specific_service: true,
        mode_s_specific_service: true,
        altitude_reporting_25ft: true,
        aircraft_identification: false,
        bds_1_0_bit_16: true,
        bds_1_0_bits_37_40: 6,
    };

    assert_eq!(expected, capability);
}

#[test]
fn test_track_status() {
    let input = [0xd3, 0x00];

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let status = TrackStatus::decode(&input, 0, &mut ctx).unwrap();

    let expected = TrackStatus {
        tentative: true,
        radar: 2,
        doubtful: true,
        manoeuvre: false,
        climbing_mode: 1,
        extensions: vec![0x00],
    };

    assert_eq!(expected, status);
}

#[test]
fn test_target_report_descriptor() {
    let input = [0xb4];

    let mut trace = NoTrace;
    let mut ctx = Context::new(TcasVersion::V604, &mut trace);

    let descriptor = TargetReportDescriptor::decode(&input, 0, &mut ctx).unwrap();

    let expected = TargetReportDescriptor {
        typ: 5,
        simulated: true,
        rdp_chain_2: false,
        spi: true,
        field_monitor: false,
        extensions: vec![],
    };

    assert_eq!(expected, descriptor);
}
