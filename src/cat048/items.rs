use crate::advisory::TcasVersion;
use crate::altitude;
use crate::altitude::Altitude;
use crate::altitude::ModeCLayout;
use crate::bits;
use crate::error::Result;
use crate::fspec::Fspec;
use crate::item::Context;
use crate::item::DataItem;
use crate::item::Format;
use crate::item::MAX_COMPOUND_PRIMARY;

use nom::sequence::tuple;

use serde::Serialize;

/// I048/010
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataSourceIdentifier {
    pub sac: u8,
    pub sic: u8,
}

impl DataItem for DataSourceIdentifier {
    const ID: &'static str = "I048/010";
    const NAME: &'static str = "Data Source Identifier";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let sac = data[0];
        ctx.field(Self::ID, "SAC", &sac);
        let sic = data[1];
        ctx.field(Self::ID, "SIC", &sic);

        Ok(DataSourceIdentifier { sac, sic })
    }
}

/// I048/140, in 1/128 s since midnight UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub raw: u32,
}

impl TimeOfDay {
    pub fn seconds(&self) -> f64 {
        self.raw as f64 / 128.0
    }
}

impl DataItem for TimeOfDay {
    const ID: &'static str = "I048/140";
    const NAME: &'static str = "Time of Day";
    const FORMAT: Format = Format::Fixed(3);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let raw = bits::read(data, 0, 24)? as u32;
        ctx.field(Self::ID, "Time of day", &raw);

        Ok(TimeOfDay { raw })
    }
}

/// I048/020, first extension octets are kept raw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetReportDescriptor {
    pub typ: u8,
    pub simulated: bool,
    pub rdp_chain_2: bool,
    pub spi: bool,
    pub field_monitor: bool,
    pub extensions: Vec<u8>,
}

impl DataItem for TargetReportDescriptor {
    const ID: &'static str = "I048/020";
    const NAME: &'static str = "Target Report Descriptor";
    const FORMAT: Format = Format::Extended {
        primary: 1,
        secondary: 1,
    };

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let (typ, simulated, rdp_chain_2, spi, field_monitor) = bits::parse(
            data,
            tuple((bits::field(3), bits::bit, bits::bit, bits::bit, bits::bit)),
        )?;

        ctx.field(Self::ID, "TYP", &typ);
        ctx.field(Self::ID, "SIM", &simulated);
        ctx.field(Self::ID, "RDP", &rdp_chain_2);
        ctx.field(Self::ID, "SPI", &spi);
        ctx.field(Self::ID, "RAB", &field_monitor);

        let extensions = data[1..].to_vec();

        Ok(TargetReportDescriptor {
            typ,
            simulated,
            rdp_chain_2,
            spi,
            field_monitor,
            extensions,
        })
    }
}

/// I048/040, rho in 1/256 NM and theta in 360/2^16 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasuredPositionPolar {
    pub rho: u16,
    pub theta: u16,
}

impl MeasuredPositionPolar {
    pub fn rho_nm(&self) -> f64 {
        self.rho as f64 / 256.0
    }

    pub fn theta_degrees(&self) -> f64 {
        self.theta as f64 * 360.0 / 65536.0
    }
}

impl DataItem for MeasuredPositionPolar {
    const ID: &'static str = "I048/040";
    const NAME: &'static str = "Measured Position in Polar Co-ordinates";
    const FORMAT: Format = Format::Fixed(4);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let rho = bits::read(data, 0, 16)? as u16;
        ctx.field(Self::ID, "RHO", &rho);
        let theta = bits::read(data, 16, 16)? as u16;
        ctx.field(Self::ID, "THETA", &theta);

        Ok(MeasuredPositionPolar { rho, theta })
    }
}

/// Validated, garbled and (optionally) local flags shared by the Mode 1, 2
/// and 3/A code items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeFlags {
    pub not_validated: bool,
    pub garbled: bool,
    pub local: bool,
}

fn code_flags(data: &[u8], id: &'static str, ctx: &mut Context<'_>) -> Result<CodeFlags> {
    let not_validated = bits::flag(data, 0)?;
    ctx.field(id, "V", &not_validated);
    let garbled = bits::flag(data, 1)?;
    ctx.field(id, "G", &garbled);
    let local = bits::flag(data, 2)?;
    ctx.field(id, "L", &local);

    Ok(CodeFlags {
        not_validated,
        garbled,
        local,
    })
}

/// I048/070, `code` holds the A4..D1 reply bits (display with `{:04o}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode3ACode {
    pub flags: CodeFlags,
    pub code: u16,
}

impl DataItem for Mode3ACode {
    const ID: &'static str = "I048/070";
    const NAME: &'static str = "Mode-3/A Code in Octal Representation";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let flags = code_flags(data, Self::ID, ctx)?;
        let code = bits::read(data, 4, 12)? as u16;
        ctx.field(Self::ID, "Mode 3/A", &format!("{:04o}", code));

        Ok(Mode3ACode { flags, code })
    }
}

/// I048/090, in 1/4 FL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlightLevel {
    pub not_validated: bool,
    pub garbled: bool,
    pub quarter_flight_level: i16,
}

impl FlightLevel {
    pub fn flight_level(&self) -> f64 {
        self.quarter_flight_level as f64 / 4.0
    }
}

impl DataItem for FlightLevel {
    const ID: &'static str = "I048/090";
    const NAME: &'static str = "Flight Level in Binary Representation";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let not_validated = bits::flag(data, 0)?;
        ctx.field(Self::ID, "V", &not_validated);
        let garbled = bits::flag(data, 1)?;
        ctx.field(Self::ID, "G", &garbled);
        let quarter_flight_level = bits::signed(bits::read(data, 2, 14)?, 14) as i16;
        ctx.field(Self::ID, "Flight level", &quarter_flight_level);

        Ok(FlightLevel {
            not_validated,
            garbled,
            quarter_flight_level,
        })
    }
}

const RADAR_PLOT_SUBFIELDS: [Format; 7] = [Format::Fixed(1); 7];

/// I048/130, sub-fields in their raw units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RadarPlotCharacteristics {
    pub ssr_runlength: Option<u8>,
    pub ssr_replies: Option<u8>,
    pub ssr_amplitude: Option<i8>,
    pub psr_runlength: Option<u8>,
    pub psr_amplitude: Option<i8>,
    pub range_difference: Option<i8>,
    pub azimuth_difference: Option<i8>,
}

impl DataItem for RadarPlotCharacteristics {
    const ID: &'static str = "I048/130";
    const NAME: &'static str = "Radar Plot Characteristics";
    const FORMAT: Format = Format::Compound(&RADAR_PLOT_SUBFIELDS);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let primary = Fspec::decode(data, 0, MAX_COMPOUND_PRIMARY)?;
        let mut cursor = primary.len();
        let mut values = [None; 7];

        for (index, value) in values.iter_mut().enumerate() {
            if primary.is_present(index + 1) {
                *value = Some(data[cursor]);
                cursor += 1;
            }
        }

        let [srl, srr, sam, prl, pam, rpd, apd] = values;

        let plot = RadarPlotCharacteristics {
            ssr_runlength: srl,
            ssr_replies: srr,
            ssr_amplitude: sam.map(|v| v as i8),
            psr_runlength: prl,
            psr_amplitude: pam.map(|v| v as i8),
            range_difference: rpd.map(|v| v as i8),
            azimuth_difference: apd.map(|v| v as i8),
        };

        for (name, value) in ["SRL", "SRR", "SAM", "PRL", "PAM", "RPD", "APD"]
            .iter()
            .zip(values.iter())
        {
            if let Some(value) = value {
                ctx.field(Self::ID, *name, value);
            }
        }

        Ok(plot)
    }
}

/// I048/220
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AircraftAddress {
    pub address: u32,
}

impl DataItem for AircraftAddress {
    const ID: &'static str = "I048/220";
    const NAME: &'static str = "Aircraft Address";
    const FORMAT: Format = Format::Fixed(3);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let address = bits::read(data, 0, 24)? as u32;
        ctx.field(Self::ID, "Aircraft address", &format!("{:06X}", address));

        Ok(AircraftAddress { address })
    }
}

/// I048/240
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftIdentification {
    pub call_sign: String,
}

impl DataItem for AircraftIdentification {
    const ID: &'static str = "I048/240";
    const NAME: &'static str = "Aircraft Identification";
    const FORMAT: Format = Format::Fixed(6);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let call_sign = (0..8)
            .map(|i| bits::read(data, i * 6, 6).map(|c| call_sign_character(c as u32)))
            .collect::<Result<String>>()?;
        ctx.field(Self::ID, "Call sign", &call_sign);

        Ok(AircraftIdentification { call_sign })
    }
}

fn call_sign_character(c: u32) -> char {
    match c {
        1..=26 => char::from_u32(c + 64).unwrap_or('?'),
        32 => ' ',
        48..=57 => char::from_u32(c).unwrap_or('?'),
        _ => '?',
    }
}

/// One Comm-B register reported in I048/250
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BdsRegister {
    pub mb: [u8; 7],
    pub bds1: u8,
    pub bds2: u8,
}

impl BdsRegister {
    /// Bit `n` (1 to 56) of the MB field
    pub fn mb_bit(&self, n: usize) -> bool {
        matches!(bits::flag(&self.mb, n - 1), Ok(true))
    }
}

/// I048/250
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BdsRegisterData {
    pub registers: Vec<BdsRegister>,
}

impl BdsRegisterData {
    pub fn register(&self, bds1: u8, bds2: u8) -> Option<&BdsRegister> {
        self.registers
            .iter()
            .find(|r| r.bds1 == bds1 && r.bds2 == bds2)
    }

    /// TCAS version announced by a BDS 1,0 data link capability report
    pub fn tcas_version(&self) -> Option<TcasVersion> {
        self.register(1, 0)
            .map(|r| TcasVersion::from_capability_bit(r.mb_bit(39)))
    }
}

impl DataItem for BdsRegisterData {
    const ID: &'static str = "I048/250";
    const NAME: &'static str = "Mode S MB Data";
    const FORMAT: Format = Format::Repetitive(8);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let registers: Vec<BdsRegister> = data[1..]
            .chunks_exact(8)
            .map(|entry| {
                let mut mb = [0u8; 7];
                mb.copy_from_slice(&entry[..7]);

                BdsRegister {
                    mb,
                    bds1: entry[7] >> 4,
                    bds2: entry[7] & 0x0f,
                }
            })
            .collect();

        for register in &registers {
            ctx.field(
                Self::ID,
                "BDS",
                &format!("{},{}", register.bds1, register.bds2),
            );
        }

        let data = BdsRegisterData { registers };

        if ctx.derive_tcas_version {
            if let Some(version) = data.tcas_version() {
                ctx.field(Self::ID, "TCAS version", &version);
                ctx.tcas_version = version;
            }
        }

        Ok(data)
    }
}

/// I048/161
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackNumber {
    pub number: u16,
}

impl DataItem for TrackNumber {
    const ID: &'static str = "I048/161";
    const NAME: &'static str = "Track Number";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let number = bits::read(data, 4, 12)? as u16;
        ctx.field(Self::ID, "Track number", &number);

        Ok(TrackNumber { number })
    }
}

/// I048/042, in 1/128 NM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatedPositionCartesian {
    pub x: i16,
    pub y: i16,
}

impl DataItem for CalculatedPositionCartesian {
    const ID: &'static str = "I048/042";
    const NAME: &'static str = "Calculated Position in Cartesian Co-ordinates";
    const FORMAT: Format = Format::Fixed(4);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let x = bits::read(data, 0, 16)? as u16 as i16;
        ctx.field(Self::ID, "X", &x);
        let y = bits::read(data, 16, 16)? as u16 as i16;
        ctx.field(Self::ID, "Y", &y);

        Ok(CalculatedPositionCartesian { x, y })
    }
}

/// I048/200, ground speed in 2^-14 NM/s and heading in 360/2^16 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatedVelocityPolar {
    pub ground_speed: u16,
    pub heading: u16,
}

impl DataItem for CalculatedVelocityPolar {
    const ID: &'static str = "I048/200";
    const NAME: &'static str = "Calculated Track Velocity in Polar Representation";
    const FORMAT: Format = Format::Fixed(4);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let ground_speed = bits::read(data, 0, 16)? as u16;
        ctx.field(Self::ID, "Ground speed", &ground_speed);
        let heading = bits::read(data, 16, 16)? as u16;
        ctx.field(Self::ID, "Heading", &heading);

        Ok(CalculatedVelocityPolar {
            ground_speed,
            heading,
        })
    }
}

/// I048/170
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackStatus {
    pub tentative: bool,
    pub radar: u8,
    pub doubtful: bool,
    pub manoeuvre: bool,
    pub climbing_mode: u8,
    pub extensions: Vec<u8>,
}

impl DataItem for TrackStatus {
    const ID: &'static str = "I048/170";
    const NAME: &'static str = "Track Status";
    const FORMAT: Format = Format::Extended {
        primary: 1,
        secondary: 1,
    };

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let (tentative, radar, doubtful, manoeuvre, climbing_mode) = bits::parse(
            data,
            tuple((bits::bit, bits::field(2), bits::bit, bits::bit, bits::field(2))),
        )?;

        ctx.field(Self::ID, "CNF", &tentative);
        ctx.field(Self::ID, "RAD", &radar);
        ctx.field(Self::ID, "DOU", &doubtful);
        ctx.field(Self::ID, "MAH", &manoeuvre);
        ctx.field(Self::ID, "CDM", &climbing_mode);

        Ok(TrackStatus {
            tentative,
            radar,
            doubtful,
            manoeuvre,
            climbing_mode,
            extensions: data[1..].to_vec(),
        })
    }
}

/// I048/210
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackQuality {
    pub sigma_x: u8,
    pub sigma_y: u8,
    pub sigma_v: u8,
    pub sigma_h: u8,
}

impl DataItem for TrackQuality {
    const ID: &'static str = "I048/210";
    const NAME: &'static str = "Track Quality";
    const FORMAT: Format = Format::Fixed(4);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let quality = TrackQuality {
            sigma_x: data[0],
            sigma_y: data[1],
            sigma_v: data[2],
            sigma_h: data[3],
        };

        ctx.field(Self::ID, "Sigma X", &quality.sigma_x);
        ctx.field(Self::ID, "Sigma Y", &quality.sigma_y);
        ctx.field(Self::ID, "Sigma V", &quality.sigma_v);
        ctx.field(Self::ID, "Sigma H", &quality.sigma_h);

        Ok(quality)
    }
}

/// I048/030
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningErrorConditions {
    pub codes: Vec<u8>,
}

impl DataItem for WarningErrorConditions {
    const ID: &'static str = "I048/030";
    const NAME: &'static str = "Warning/Error Conditions";
    const FORMAT: Format = Format::Extended {
        primary: 1,
        secondary: 1,
    };

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let codes: Vec<u8> = data.iter().map(|octet| octet >> 1).collect();
        for code in &codes {
            ctx.field(Self::ID, "W/E", code);
        }

        Ok(WarningErrorConditions { codes })
    }
}

/// I048/080, I048/060 and I048/065 quality pulse bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeConfidence {
    pub quality: u16,
}

fn code_confidence(
    data: &[u8],
    width: usize,
    id: &'static str,
    ctx: &mut Context<'_>,
) -> Result<CodeConfidence> {
    let quality = bits::read(data, data.len() * 8 - width, width)? as u16;
    ctx.field(id, "Quality", &format!("{:b}", quality));

    Ok(CodeConfidence { quality })
}

/// I048/080
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode3ACodeConfidence(pub CodeConfidence);

impl DataItem for Mode3ACodeConfidence {
    const ID: &'static str = "I048/080";
    const NAME: &'static str = "Mode-3/A Code Confidence Indicator";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        Ok(Mode3ACodeConfidence(code_confidence(
            data,
            12,
            Self::ID,
            ctx,
        )?))
    }
}

// V G 0 0 C1 A1 C2 A2 C4 A4 B1 D1 B2 D2 B4 D4
const MODE_C_CODE: ModeCLayout = ModeCLayout {
    c1: 4,
    a1: 5,
    c2: 6,
    a2: 7,
    c4: 8,
    a4: 9,
    b1: 10,
    b2: 12,
    d2: 13,
    b4: 14,
    d4: 15,
};

/// I048/100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeCCodeConfidence {
    pub not_validated: bool,
    pub garbled: bool,
    pub code: u16,
    pub altitude: Altitude,
    pub quality: u16,
}

impl DataItem for ModeCCodeConfidence {
    const ID: &'static str = "I048/100";
    const NAME: &'static str = "Mode-C Code and Confidence Indicator";
    const FORMAT: Format = Format::Fixed(4);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let not_validated = bits::flag(data, 0)?;
        ctx.field(Self::ID, "V", &not_validated);
        let garbled = bits::flag(data, 1)?;
        ctx.field(Self::ID, "G", &garbled);
        let code = bits::read(data, 4, 12)? as u16;
        ctx.field(Self::ID, "Mode C code", &format!("{:012b}", code));
        let altitude = altitude::decode_mode_c(data, &MODE_C_CODE)?;
        ctx.field(Self::ID, "Altitude", &altitude);
        let quality = bits::read(data, 20, 12)? as u16;
        ctx.field(Self::ID, "Quality", &format!("{:012b}", quality));

        Ok(ModeCCodeConfidence {
            not_validated,
            garbled,
            code,
            altitude,
            quality,
        })
    }
}

/// I048/110, in 25 ft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Height3D {
    pub height: i16,
}

impl Height3D {
    pub fn feet(&self) -> i32 {
        self.height as i32 * 25
    }
}

impl DataItem for Height3D {
    const ID: &'static str = "I048/110";
    const NAME: &'static str = "Height Measured by a 3D Radar";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let height = bits::signed(bits::read(data, 2, 14)?, 14) as i16;
        ctx.field(Self::ID, "3D height", &height);

        Ok(Height3D { height })
    }
}

const DOPPLER_SUBFIELDS: [Format; 2] = [Format::Fixed(2), Format::Repetitive(6)];

/// One raw Doppler speed entry of I048/120
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawDopplerSpeed {
    pub doppler: u16,
    pub ambiguity: u16,
    pub frequency: u16,
}

/// I048/120, speeds in m/s
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadialDopplerSpeed {
    pub calculated: Option<(bool, i16)>,
    pub raw: Vec<RawDopplerSpeed>,
}

impl DataItem for RadialDopplerSpeed {
    const ID: &'static str = "I048/120";
    const NAME: &'static str = "Radial Doppler Speed";
    const FORMAT: Format = Format::Compound(&DOPPLER_SUBFIELDS);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let primary = Fspec::decode(data, 0, MAX_COMPOUND_PRIMARY)?;
        let mut cursor = primary.len();

        let calculated = if primary.is_present(1) {
            let doubtful = bits::flag(data, cursor * 8)?;
            let speed = bits::signed(bits::read(data, cursor * 8 + 6, 10)?, 10) as i16;
            ctx.field(Self::ID, "D", &doubtful);
            ctx.field(Self::ID, "CAL", &speed);
            cursor += 2;

            Some((doubtful, speed))
        } else {
            None
        };

        let mut raw = Vec::new();

        if primary.is_present(2) {
            let repetitions = data[cursor] as usize;
            cursor += 1;

            for _ in 0..repetitions {
                let base = cursor * 8;
                let entry = RawDopplerSpeed {
                    doppler: bits::read(data, base, 16)? as u16,
                    ambiguity: bits::read(data, base + 16, 16)? as u16,
                    frequency: bits::read(data, base + 32, 16)? as u16,
                };
                ctx.field(Self::ID, "DOP", &entry.doppler);
                ctx.field(Self::ID, "AMB", &entry.ambiguity);
                ctx.field(Self::ID, "FRQ", &entry.frequency);

                raw.push(entry);
                cursor += 6;
            }
        }

        Ok(RadialDopplerSpeed { calculated, raw })
    }
}

/// I048/230
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommsAcasCapability {
    pub communications: u8,
    pub flight_status: u8,
    pub specific_service: bool,
    pub mode_s_specific_service: bool,
    pub altitude_reporting_25ft: bool,
    pub aircraft_identification: bool,
    pub bds_1_0_bit_16: bool,
    pub bds_1_0_bits_37_40: u8,
}

impl DataItem for CommsAcasCapability {
    const ID: &'static str = "I048/230";
    const NAME: &'static str = "Communications/ACAS Capability and Flight Status";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let capability = bits::parse(
            data,
            tuple((
                bits::field(3),
                bits::field(3),
                bits::bit,
                bits::field(1),
                bits::bit,
                bits::bit,
                bits::bit,
                bits::bit,
                bits::field(4),
            )),
        )
        .map(
            |(communications, flight_status, specific_service, _, mssc, arc, aic, b1a, b1b)| {
                CommsAcasCapability {
                    communications,
                    flight_status,
                    specific_service,
                    mode_s_specific_service: mssc,
                    altitude_reporting_25ft: arc,
                    aircraft_identification: aic,
                    bds_1_0_bit_16: b1a,
                    bds_1_0_bits_37_40: b1b,
                }
            },
        )?;

        ctx.field(Self::ID, "COM", &capability.communications);
        ctx.field(Self::ID, "STAT", &capability.flight_status);
        ctx.field(Self::ID, "SI", &capability.specific_service);
        ctx.field(Self::ID, "MSSC", &capability.mode_s_specific_service);
        ctx.field(Self::ID, "ARC", &capability.altitude_reporting_25ft);
        ctx.field(Self::ID, "AIC", &capability.aircraft_identification);
        ctx.field(Self::ID, "B1A", &capability.bds_1_0_bit_16);
        ctx.field(Self::ID, "B1B", &capability.bds_1_0_bits_37_40);

        Ok(capability)
    }
}

/// I048/055
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode1Code {
    pub flags: CodeFlags,
    pub code: u8,
}

impl DataItem for Mode1Code {
    const ID: &'static str = "I048/055";
    const NAME: &'static str = "Mode-1 Code in Octal Representation";
    const FORMAT: Format = Format::Fixed(1);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let flags = code_flags(data, Self::ID, ctx)?;
        let code = bits::read(data, 3, 5)? as u8;
        ctx.field(Self::ID, "Mode 1", &format!("{:02o}", code));

        Ok(Mode1Code { flags, code })
    }
}

/// I048/050
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode2Code {
    pub flags: CodeFlags,
    pub code: u16,
}

impl DataItem for Mode2Code {
    const ID: &'static str = "I048/050";
    const NAME: &'static str = "Mode-2 Code in Octal Representation";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        let flags = code_flags(data, Self::ID, ctx)?;
        let code = bits::read(data, 4, 12)? as u16;
        ctx.field(Self::ID, "Mode 2", &format!("{:04o}", code));

        Ok(Mode2Code { flags, code })
    }
}

/// I048/065
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode1CodeConfidence(pub CodeConfidence);

impl DataItem for Mode1CodeConfidence {
    const ID: &'static str = "I048/065";
    const NAME: &'static str = "Mode-1 Code Confidence Indicator";
    const FORMAT: Format = Format::Fixed(1);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        Ok(Mode1CodeConfidence(code_confidence(data, 5, Self::ID, ctx)?))
    }
}

/// I048/060
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode2CodeConfidence(pub CodeConfidence);

impl DataItem for Mode2CodeConfidence {
    const ID: &'static str = "I048/060";
    const NAME: &'static str = "Mode-2 Code Confidence Indicator";
    const FORMAT: Format = Format::Fixed(2);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = Self::FORMAT.slice(input, offset)?;

        Ok(Mode2CodeConfidence(code_confidence(data, 12, Self::ID, ctx)?))
    }
}

fn explicit_data(
    input: &[u8],
    offset: usize,
    id: &'static str,
    ctx: &mut Context<'_>,
) -> Result<Vec<u8>> {
    let data = Format::Explicit.slice(input, offset)?;
    ctx.field(id, "Length", &data.len());

    Ok(data[1..].to_vec())
}

/// Reserved expansion field, contents without the length octet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservedExpansion {
    pub data: Vec<u8>,
}

impl DataItem for ReservedExpansion {
    const ID: &'static str = "I048/RE";
    const NAME: &'static str = "Reserved Expansion Field";
    const FORMAT: Format = Format::Explicit;

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = explicit_data(input, offset, Self::ID, ctx)?;

        Ok(ReservedExpansion { data })
    }
}

/// Special purpose field, contents without the length octet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialPurpose {
    pub data: Vec<u8>,
}

impl DataItem for SpecialPurpose {
    const ID: &'static str = "I048/SP";
    const NAME: &'static str = "Special Purpose Field";
    const FORMAT: Format = Format::Explicit;

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let data = explicit_data(input, offset, Self::ID, ctx)?;

        Ok(SpecialPurpose { data })
    }
}
