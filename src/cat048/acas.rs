use crate::advisory;
use crate::advisory::AraBits;
use crate::advisory::AuralCode;
use crate::altitude;
use crate::altitude::Altitude;
use crate::altitude::ModeCLayout;
use crate::bits;
use crate::error::Result;
use crate::item::Context;
use crate::item::DataItem;
use crate::item::Format;

use serde::Serialize;

// Bit indices within the 56 bit MB field, MB bit n is index n - 1
const ARA: (usize, usize) = (8, 10);
const RAC: [(usize, &str); 4] = [
    (22, "Do not pass below"),
    (23, "Do not pass above"),
    (24, "Do not turn left"),
    (25, "Do not turn right"),
];
const RAT: usize = 26;
const MTE: usize = 27;
const TTI: (usize, usize) = (28, 2);
const TID_ADDRESS: (usize, usize) = (30, 24);
const TID_RANGE: (usize, usize) = (43, 7);
const TID_BEARING: (usize, usize) = (50, 6);

// C1 A1 C2 A2 C4 A4 X B1 D1 B2 D2 B4 D4 in MB bits 31 to 43
const TID_ALTITUDE: ModeCLayout = ModeCLayout {
    c1: 30,
    a1: 31,
    c2: 32,
    a2: 33,
    c4: 34,
    a4: 35,
    b1: 37,
    b2: 39,
    d2: 40,
    b4: 41,
    d4: 42,
};

/// Threat identity data, shaped by the threat type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThreatIdentity {
    /// TTI 0 (no identity data) or 3 (reserved)
    None,
    /// TTI 1
    ModeS { address: u32 },
    /// TTI 2, range and bearing in raw units
    Position {
        altitude: Altitude,
        range: u8,
        bearing: u8,
    },
}

/// I048/260 ACAS Resolution Advisory Report.
///
/// The currently active resolution advisory of the ACAS associated with the
/// reporting transponder, as the BDS 3,0 MB field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcasResolutionAdvisory {
    pub ara: AraBits,
    pub ra_complements: Vec<&'static str>,
    pub ra_terminated: bool,
    pub multiple_threat: bool,
    pub threat_type_indicator: u8,
    pub threat_identity: ThreatIdentity,
    pub aural_code: Option<AuralCode>,
    pub active_advisories: Vec<&'static str>,
}

impl DataItem for AcasResolutionAdvisory {
    const ID: &'static str = "I048/260";
    const NAME: &'static str = "ACAS Resolution Advisory Report";
    const FORMAT: Format = Format::Fixed(7);

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self> {
        let mb = Self::FORMAT.slice(input, offset)?;

        let threat_type_indicator = bits::read(mb, TTI.0, TTI.1)? as u8;
        ctx.field(Self::ID, "TTI", &threat_type_indicator);

        let threat_identity = threat_identity(mb, threat_type_indicator, ctx)?;

        let ara = AraBits::new(bits::read(mb, ARA.0, ARA.1)? as u16);
        for number in 41..=50 {
            ctx.field(Self::ID, ara_bit_name(number), &ara.is_set(number));
        }

        let multiple_threat = bits::flag(mb, MTE)?;
        ctx.field(Self::ID, "MTE", &multiple_threat);

        let ra_terminated = bits::flag(mb, RAT)?;
        ctx.field(Self::ID, "RAT", &ra_terminated);

        let mut ra_complements = Vec::with_capacity(RAC.len());
        for (index, directive) in RAC {
            if bits::flag(mb, index)? {
                ra_complements.push(directive);
            }
        }
        ctx.field(Self::ID, "RAC", &ra_complements.join(","));

        let aural_code = advisory::aural_code(ara, multiple_threat, ctx.tcas_version);
        ctx.field(
            Self::ID,
            "Aural code",
            &aural_code.map(|code| code.code()).unwrap_or(""),
        );

        let active_advisories =
            advisory::active_advisories(ara, multiple_threat, ctx.tcas_version);
        ctx.field(Self::ID, "ARA list", &active_advisories.join(","));

        Ok(AcasResolutionAdvisory {
            ara,
            ra_complements,
            ra_terminated,
            multiple_threat,
            threat_type_indicator,
            threat_identity,
            aural_code,
            active_advisories,
        })
    }
}

fn threat_identity(mb: &[u8], tti: u8, ctx: &mut Context<'_>) -> Result<ThreatIdentity> {
    let id = AcasResolutionAdvisory::ID;

    match tti {
        1 => {
            let address = bits::read(mb, TID_ADDRESS.0, TID_ADDRESS.1)? as u32;
            ctx.field(id, "TID Mode S address", &format!("{:06X}", address));

            Ok(ThreatIdentity::ModeS { address })
        }
        2 => {
            let altitude = altitude::decode_mode_c(mb, &TID_ALTITUDE)?;
            ctx.field(id, "TID altitude", &altitude);

            let range = bits::read(mb, TID_RANGE.0, TID_RANGE.1)? as u8;
            ctx.field(id, "TID range", &range);

            let bearing = bits::read(mb, TID_BEARING.0, TID_BEARING.1)? as u8;
            ctx.field(id, "TID bearing", &bearing);

            Ok(ThreatIdentity::Position {
                altitude,
                range,
                bearing,
            })
        }
        _ => Ok(ThreatIdentity::None),
    }
}

fn ara_bit_name(number: u8) -> &'static str {
    match number {
        41 => "ARA bit 41",
        42 => "ARA bit 42",
        43 => "ARA bit 43",
        44 => "ARA bit 44",
        45 => "ARA bit 45",
        46 => "ARA bit 46",
        47 => "ARA bit 47",
        48 => "ARA bit 48",
        49 => "ARA bit 49",
        _ => "ARA bit 50",
    }
}

impl AcasResolutionAdvisory {
    /// Whether ARA bit `number` (41 to 50) is set
    pub fn ara_bit(&self, number: u8) -> bool {
        self.ara.is_set(number)
    }

    pub fn tid_mode_s_address(&self) -> Option<u32> {
        match self.threat_identity {
            ThreatIdentity::ModeS { address } => Some(address),
            _ => None,
        }
    }

    pub fn tid_altitude(&self) -> Option<Altitude> {
        match self.threat_identity {
            ThreatIdentity::Position { altitude, .. } => Some(altitude),
            _ => None,
        }
    }

    pub fn tid_range(&self) -> Option<u8> {
        match self.threat_identity {
            ThreatIdentity::Position { range, .. } => Some(range),
            _ => None,
        }
    }

    pub fn tid_bearing(&self) -> Option<u8> {
        match self.threat_identity {
            ThreatIdentity::Position { bearing, .. } => Some(bearing),
            _ => None,
        }
    }
}
