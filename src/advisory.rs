//! ACAS advisory calculators.
//!
//! Derives the aural alert and the list of active advisories from the
//! Active Resolution Advisory bits (ARA 41 to 50) and the multiple threat
//! encounter flag. The meaning of the ARA bits changed between TCAS II
//! version 6.04A and version 7.0, so each version has its own table. Both
//! tables are keyed on the exact combination of set bits; combinations that
//! are not listed produce no aural code and an empty advisory list.

use serde::Deserialize;
use serde::Serialize;

use std::fmt;
use std::str::FromStr;

/// TCAS II logic version of the reporting transponder.
///
/// 7.0 and 7.1 are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TcasVersion {
    #[serde(rename = "6.04")]
    V604,
    #[serde(rename = "7.0")]
    V70,
}

impl TcasVersion {
    /// Version from bit 39 of the BDS 1,0 data link capability report
    pub fn from_capability_bit(bit_39: bool) -> Self {
        if bit_39 {
            TcasVersion::V70
        } else {
            TcasVersion::V604
        }
    }
}

impl Default for TcasVersion {
    fn default() -> Self {
        TcasVersion::V604
    }
}

impl fmt::Display for TcasVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TcasVersion::V604 => write!(f, "6.04"),
            TcasVersion::V70 => write!(f, "7.0"),
        }
    }
}

impl FromStr for TcasVersion {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6.04" | "6.04A" | "604" => Ok(TcasVersion::V604),
            "7.0" | "7.1" | "7" | "70" => Ok(TcasVersion::V70),
            _ => Err("expected TCAS version 6.04 or 7.0"),
        }
    }
}

/// The ten ARA bits, bit 41 in the most significant position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AraBits(u16);

impl AraBits {
    pub const BIT_41: u16 = 0x200;
    pub const BIT_42: u16 = 0x100;
    pub const BIT_43: u16 = 0x080;
    pub const BIT_44: u16 = 0x040;
    pub const BIT_45: u16 = 0x020;
    pub const BIT_46: u16 = 0x010;
    pub const BIT_47: u16 = 0x008;
    pub const BIT_48: u16 = 0x004;
    pub const BIT_49: u16 = 0x002;
    pub const BIT_50: u16 = 0x001;

    pub fn new(bits: u16) -> Self {
        AraBits(bits & 0x3ff)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Whether ARA bit `number` (41 to 50) is set
    pub fn is_set(&self, number: u8) -> bool {
        match number {
            41..=50 => self.0 & (0x200 >> (number - 41)) != 0,
            _ => false,
        }
    }
}

impl fmt::Display for AraBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010b}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuralCode {
    Climb,
    Descend,
    CrossingClimb,
    CrossingDescend,
    IncreaseClimb,
    IncreaseDescent,
    ClimbNow,
    DescendNow,
    AdjustVerticalSpeed,
    MonitorVerticalSpeed,
    MaintainVerticalSpeed,
    CrossingMaintain,
}

impl AuralCode {
    pub fn code(&self) -> &'static str {
        match self {
            AuralCode::Climb => "CLB",
            AuralCode::Descend => "DES",
            AuralCode::CrossingClimb => "CCL",
            AuralCode::CrossingDescend => "CDE",
            AuralCode::IncreaseClimb => "ICL",
            AuralCode::IncreaseDescent => "IDE",
            AuralCode::ClimbNow => "CLN",
            AuralCode::DescendNow => "DEN",
            AuralCode::AdjustVerticalSpeed => "AVS",
            AuralCode::MonitorVerticalSpeed => "MVS",
            AuralCode::MaintainVerticalSpeed => "MNT",
            AuralCode::CrossingMaintain => "CMN",
        }
    }

    /// Cockpit annunciation
    pub fn annunciation(&self) -> &'static str {
        match self {
            AuralCode::Climb => "CLIMB, CLIMB",
            AuralCode::Descend => "DESCEND, DESCEND",
            AuralCode::CrossingClimb => "CLIMB, CROSSING CLIMB",
            AuralCode::CrossingDescend => "DESCEND, CROSSING DESCEND",
            AuralCode::IncreaseClimb => "INCREASE CLIMB, INCREASE CLIMB",
            AuralCode::IncreaseDescent => "INCREASE DESCENT, INCREASE DESCENT",
            AuralCode::ClimbNow => "CLIMB, CLIMB NOW",
            AuralCode::DescendNow => "DESCEND, DESCEND NOW",
            AuralCode::AdjustVerticalSpeed => "ADJUST VERTICAL SPEED, ADJUST",
            AuralCode::MonitorVerticalSpeed => "MONITOR VERTICAL SPEED",
            AuralCode::MaintainVerticalSpeed => "MAINTAIN VERTICAL SPEED, MAINTAIN",
            AuralCode::CrossingMaintain => "MAINTAIN VERTICAL SPEED, CROSSING MAINTAIN",
        }
    }
}

impl fmt::Display for AuralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

struct Advisory {
    ara: u16,
    mte: bool,
    aural: AuralCode,
    active: &'static [&'static str],
}

const fn advisory(
    ara: u16,
    mte: bool,
    aural: AuralCode,
    active: &'static [&'static str],
) -> Advisory {
    Advisory {
        ara,
        mte,
        aural,
        active,
    }
}

// Version 6.04A: each bit is an advisory of its own
const CLIMB: u16 = AraBits::BIT_41;
const DONT_DESCEND: u16 = AraBits::BIT_42;
const DONT_DESCEND_500: u16 = AraBits::BIT_43;
const DONT_DESCEND_1000: u16 = AraBits::BIT_44;
const DONT_DESCEND_2000: u16 = AraBits::BIT_45;
const DESCEND: u16 = AraBits::BIT_46;
const DONT_CLIMB: u16 = AraBits::BIT_47;
const DONT_CLIMB_500: u16 = AraBits::BIT_48;
const DONT_CLIMB_1000: u16 = AraBits::BIT_49;
const DONT_CLIMB_2000: u16 = AraBits::BIT_50;

static VERSION_604: [Advisory; 13] = [
    advisory(CLIMB, false, AuralCode::Climb, &["Climb"]),
    advisory(DESCEND, false, AuralCode::Descend, &["Descend"]),
    advisory(
        DONT_DESCEND,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't descend"],
    ),
    advisory(
        DONT_DESCEND_500,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't descend faster than 500 fpm"],
    ),
    advisory(
        DONT_DESCEND_1000,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't descend faster than 1000 fpm"],
    ),
    advisory(
        DONT_DESCEND_2000,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't descend faster than 2000 fpm"],
    ),
    advisory(
        DONT_CLIMB,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't climb"],
    ),
    advisory(
        DONT_CLIMB_500,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't climb faster than 500 fpm"],
    ),
    advisory(
        DONT_CLIMB_1000,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't climb faster than 1000 fpm"],
    ),
    advisory(
        DONT_CLIMB_2000,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't climb faster than 2000 fpm"],
    ),
    advisory(
        DONT_DESCEND | DONT_CLIMB,
        false,
        AuralCode::MaintainVerticalSpeed,
        &["Don't descend", "Don't climb"],
    ),
    advisory(
        CLIMB | DONT_CLIMB_2000,
        false,
        AuralCode::Climb,
        &["Climb", "Don't climb faster than 2000 fpm"],
    ),
    advisory(
        DESCEND | DONT_DESCEND_2000,
        false,
        AuralCode::Descend,
        &["Descend", "Don't descend faster than 2000 fpm"],
    ),
];

// Version 7.0, one threat: bit 41 set, bits 42 to 47 qualify the RA
const RA: u16 = AraBits::BIT_41;
const CORRECTIVE: u16 = AraBits::BIT_42;
const DOWNWARD: u16 = AraBits::BIT_43;
const INCREASED: u16 = AraBits::BIT_44;
const REVERSAL: u16 = AraBits::BIT_45;
const CROSSING: u16 = AraBits::BIT_46;
const POSITIVE: u16 = AraBits::BIT_47;

// Version 7.0, multiple threats: bit 41 clear
const MT_UP: u16 = AraBits::BIT_42;
const MT_CLIMB: u16 = AraBits::BIT_43;
const MT_DOWN: u16 = AraBits::BIT_44;
const MT_DESCEND: u16 = AraBits::BIT_45;
const MT_CROSSING: u16 = AraBits::BIT_46;
const MT_REVERSAL: u16 = AraBits::BIT_47;

static VERSION_70: [Advisory; 24] = [
    advisory(RA | CORRECTIVE | POSITIVE, false, AuralCode::Climb, &["Climb"]),
    advisory(
        RA | CORRECTIVE | CROSSING | POSITIVE,
        false,
        AuralCode::CrossingClimb,
        &["Climb", "Altitude crossing"],
    ),
    advisory(
        RA | CORRECTIVE | INCREASED | POSITIVE,
        false,
        AuralCode::IncreaseClimb,
        &["Increase climb"],
    ),
    advisory(
        RA | CORRECTIVE | REVERSAL | POSITIVE,
        false,
        AuralCode::ClimbNow,
        &["Climb", "Sense reversal"],
    ),
    advisory(
        RA | CORRECTIVE | DOWNWARD | POSITIVE,
        false,
        AuralCode::Descend,
        &["Descend"],
    ),
    advisory(
        RA | CORRECTIVE | DOWNWARD | CROSSING | POSITIVE,
        false,
        AuralCode::CrossingDescend,
        &["Descend", "Altitude crossing"],
    ),
    advisory(
        RA | CORRECTIVE | DOWNWARD | INCREASED | POSITIVE,
        false,
        AuralCode::IncreaseDescent,
        &["Increase descent"],
    ),
    advisory(
        RA | CORRECTIVE | DOWNWARD | REVERSAL | POSITIVE,
        false,
        AuralCode::DescendNow,
        &["Descend", "Sense reversal"],
    ),
    advisory(
        RA | CORRECTIVE,
        false,
        AuralCode::AdjustVerticalSpeed,
        &["Reduce descent"],
    ),
    advisory(
        RA | CORRECTIVE | DOWNWARD,
        false,
        AuralCode::AdjustVerticalSpeed,
        &["Reduce climb"],
    ),
    advisory(
        RA,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't descend"],
    ),
    advisory(
        RA | DOWNWARD,
        false,
        AuralCode::MonitorVerticalSpeed,
        &["Don't climb"],
    ),
    advisory(
        RA | POSITIVE,
        false,
        AuralCode::MaintainVerticalSpeed,
        &["Maintain climb"],
    ),
    advisory(
        RA | DOWNWARD | POSITIVE,
        false,
        AuralCode::MaintainVerticalSpeed,
        &["Maintain descent"],
    ),
    advisory(
        RA | CROSSING | POSITIVE,
        false,
        AuralCode::CrossingMaintain,
        &["Maintain climb", "Altitude crossing"],
    ),
    advisory(
        RA | DOWNWARD | CROSSING | POSITIVE,
        false,
        AuralCode::CrossingMaintain,
        &["Maintain descent", "Altitude crossing"],
    ),
    advisory(
        MT_UP | MT_CLIMB,
        true,
        AuralCode::Climb,
        &["Correction in upward sense", "Positive climb"],
    ),
    advisory(
        MT_UP | MT_CLIMB | MT_CROSSING,
        true,
        AuralCode::CrossingClimb,
        &["Correction in upward sense", "Positive climb", "Altitude crossing"],
    ),
    advisory(
        MT_UP | MT_CLIMB | MT_REVERSAL,
        true,
        AuralCode::ClimbNow,
        &["Correction in upward sense", "Positive climb", "Sense reversal"],
    ),
    advisory(
        MT_DOWN | MT_DESCEND,
        true,
        AuralCode::Descend,
        &["Correction in downward sense", "Positive descend"],
    ),
    advisory(
        MT_DOWN | MT_DESCEND | MT_CROSSING,
        true,
        AuralCode::CrossingDescend,
        &[
            "Correction in downward sense",
            "Positive descend",
            "Altitude crossing",
        ],
    ),
    advisory(
        MT_DOWN | MT_DESCEND | MT_REVERSAL,
        true,
        AuralCode::DescendNow,
        &[
            "Correction in downward sense",
            "Positive descend",
            "Sense reversal",
        ],
    ),
    advisory(
        MT_UP,
        true,
        AuralCode::AdjustVerticalSpeed,
        &["Correction in upward sense"],
    ),
    advisory(
        MT_UP | MT_DOWN,
        true,
        AuralCode::MonitorVerticalSpeed,
        &["Correction in upward sense", "Correction in downward sense"],
    ),
];

fn lookup(ara: AraBits, mte: bool, version: TcasVersion) -> Option<&'static Advisory> {
    match version {
        // 6.04A has no multiple threat encoding in the ARA bits
        TcasVersion::V604 => VERSION_604.iter().find(|a| a.ara == ara.bits()),
        TcasVersion::V70 => VERSION_70
            .iter()
            .find(|a| a.ara == ara.bits() && a.mte == mte),
    }
}

/// The aural alert for an ARA combination, `None` when it is not a known
/// advisory
pub fn aural_code(ara: AraBits, mte: bool, version: TcasVersion) -> Option<AuralCode> {
    lookup(ara, mte, version).map(|a| a.aural)
}

/// The active advisories for an ARA combination, empty when it is not a
/// known advisory
pub fn active_advisories(ara: AraBits, mte: bool, version: TcasVersion) -> Vec<&'static str> {
    lookup(ara, mte, version)
        .map(|a| a.active.to_vec())
        .unwrap_or_default()
}
