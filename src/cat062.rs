//! Category 062, system track data.
//!
//! Items are kept as raw octets. The UAP below knows the length rules for
//! every item, which is enough to walk complete records.

use crate::bits;
use crate::error::DecodeError;
use crate::error::Result;
use crate::item::Context;
use crate::item::Format;
use crate::record::Category;
use crate::record::Record;

use serde::Serialize;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cat062;

/// The octets of one Category 062 item
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Cat062Item {
    pub id: &'static str,
    pub data: Vec<u8>,
}

impl fmt::Debug for Cat062Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02x?}", self.id, self.data)
    }
}

const I110: [Format; 7] = [
    Format::Fixed(1),
    Format::Fixed(4),
    Format::Fixed(6),
    Format::Fixed(2),
    Format::Fixed(2),
    Format::Fixed(1),
    Format::Fixed(1),
];

const I290: [Format; 10] = [
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(2),
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(1),
];

const I295: [Format; 31] = [Format::Fixed(1); 31];

const I340: [Format; 6] = [
    Format::Fixed(2),
    Format::Fixed(4),
    Format::Fixed(2),
    Format::Fixed(2),
    Format::Fixed(2),
    Format::Fixed(1),
];

const I380: [Format; 28] = [
    Format::Fixed(3),       // ADR
    Format::Fixed(6),       // ID
    Format::Fixed(2),       // MHG
    Format::Fixed(2),       // IAS
    Format::Fixed(2),       // TAS
    Format::Fixed(2),       // SAL
    Format::Fixed(2),       // FSS
    Format::Fixed(1),       // TIS
    Format::Repetitive(15), // TID
    Format::Fixed(2),       // COM
    Format::Fixed(2),       // SAB
    Format::Fixed(7),       // ACS
    Format::Fixed(2),       // BVR
    Format::Fixed(2),       // GVR
    Format::Fixed(2),       // RAN
    Format::Fixed(2),       // TAR
    Format::Fixed(2),       // TAN
    Format::Fixed(2),       // GSP
    Format::Fixed(1),       // VUN
    Format::Fixed(8),       // MET
    Format::Fixed(1),       // EMC
    Format::Fixed(6),       // POS
    Format::Fixed(2),       // GAL
    Format::Fixed(1),       // PUN
    Format::Repetitive(8),  // MB
    Format::Fixed(2),       // IAR
    Format::Fixed(2),       // MAC
    Format::Fixed(2),       // BPS
];

const I390: [Format; 18] = [
    Format::Fixed(2),      // TAG
    Format::Fixed(7),      // CSN
    Format::Fixed(4),      // IFI
    Format::Fixed(1),      // FCT
    Format::Fixed(4),      // TAC
    Format::Fixed(1),      // WTC
    Format::Fixed(4),      // DEP
    Format::Fixed(4),      // DST
    Format::Fixed(3),      // RDS
    Format::Fixed(2),      // CFL
    Format::Fixed(2),      // CTL
    Format::Repetitive(4), // TOD
    Format::Fixed(6),      // AST
    Format::Fixed(1),      // STS
    Format::Fixed(7),      // STD
    Format::Fixed(7),      // STA
    Format::Fixed(2),      // PEM
    Format::Fixed(7),      // PEC
];

const I500: [Format; 8] = [
    Format::Fixed(4),
    Format::Fixed(2),
    Format::Fixed(4),
    Format::Fixed(1),
    Format::Fixed(1),
    Format::Fixed(2),
    Format::Fixed(2),
    Format::Fixed(1),
];

const EXTENDED_ONE: Format = Format::Extended {
    primary: 1,
    secondary: 1,
};

/// UAP in FRN order, `None` for spare FRNs
const UAP: [Option<(&str, Format)>; 35] = [
    Some(("I062/010", Format::Fixed(2))),
    None,
    Some(("I062/015", Format::Fixed(1))),
    Some(("I062/070", Format::Fixed(3))),
    Some(("I062/105", Format::Fixed(8))),
    Some(("I062/100", Format::Fixed(6))),
    Some(("I062/185", Format::Fixed(4))),
    Some(("I062/210", Format::Fixed(2))),
    Some(("I062/060", Format::Fixed(2))),
    Some(("I062/245", Format::Fixed(7))),
    Some(("I062/380", Format::Compound(&I380))),
    Some(("I062/040", Format::Fixed(2))),
    Some(("I062/080", EXTENDED_ONE)),
    Some(("I062/290", Format::Compound(&I290))),
    Some(("I062/200", Format::Fixed(1))),
    Some(("I062/295", Format::Compound(&I295))),
    Some(("I062/136", Format::Fixed(2))),
    Some(("I062/130", Format::Fixed(2))),
    Some(("I062/135", Format::Fixed(2))),
    Some(("I062/220", Format::Fixed(2))),
    Some(("I062/390", Format::Compound(&I390))),
    Some(("I062/270", EXTENDED_ONE)),
    Some(("I062/300", Format::Fixed(1))),
    Some(("I062/110", Format::Compound(&I110))),
    Some(("I062/120", Format::Fixed(2))),
    Some((
        "I062/510",
        Format::Extended {
            primary: 3,
            secondary: 3,
        },
    )),
    Some(("I062/500", Format::Compound(&I500))),
    Some(("I062/340", Format::Compound(&I340))),
    None,
    None,
    None,
    None,
    None,
    Some(("I062/RE", Format::Explicit)),
    Some(("I062/SP", Format::Explicit)),
];

pub const FRN_TRACK_NUMBER: usize = 12;

impl Category for Cat062 {
    const CATEGORY: u8 = 62;
    const FRNS: usize = UAP.len();

    type Item = Cat062Item;

    fn decode_item(
        frn: usize,
        input: &[u8],
        offset: usize,
        ctx: &mut Context<'_>,
    ) -> Result<(Cat062Item, usize)> {
        let (id, format) = frn
            .checked_sub(1)
            .and_then(|index| UAP.get(index).copied().flatten())
            .ok_or(DecodeError::UndefinedItem {
                category: Cat062::CATEGORY,
                frn,
            })?;

        let data = format.slice(input, offset)?;
        ctx.field(id, "Octets", &format!("{:02x?}", data));

        let item = Cat062Item {
            id,
            data: data.to_vec(),
        };

        Ok((item, data.len()))
    }
}

impl Record<Cat062> {
    pub fn track_number(&self) -> Option<u16> {
        let item = self.item(FRN_TRACK_NUMBER)?;

        bits::read(&item.data, 0, 16).ok().map(|number| number as u16)
    }
}

#[cfg(test)]
mod test_record;
