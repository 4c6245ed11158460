//! Field specification (FSPEC) presence bitmaps.
//!
//! Each octet carries presence flags for the next seven FRNs in bits 8 to 2
//! and the FX continuation flag in bit 1. The same layout is used for the
//! primary sub-field of compound items.

use crate::bits;
use crate::error::DecodeError;
use crate::error::Result;

use serde::Serialize;

const FX: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fspec {
    octets: Vec<u8>,
}

impl Fspec {
    /// Reads FX-chained octets starting at `offset`.
    ///
    /// A chain longer than `max_octets` is `MalformedFspec`, a chain that runs
    /// off the end of `input` is `TruncatedBuffer`.
    pub fn decode(input: &[u8], offset: usize, max_octets: usize) -> Result<Fspec> {
        let mut octets = Vec::with_capacity(max_octets.min(8));

        loop {
            if octets.len() == max_octets {
                return Err(DecodeError::MalformedFspec { max: max_octets });
            }

            let octet = bits::octet(input, offset + octets.len())?;
            octets.push(octet);

            if octet & FX == 0 {
                break;
            }
        }

        Ok(Fspec { octets })
    }

    /// Octets consumed by the bitmap
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Number of FRNs the bitmap can describe
    pub fn frn_count(&self) -> usize {
        self.octets.len() * 7
    }

    /// Whether the item with field reference number `frn` (from 1) is present
    pub fn is_present(&self, frn: usize) -> bool {
        if frn == 0 || frn > self.frn_count() {
            return false;
        }

        let index = frn - 1;
        let octet = self.octets[index / 7];

        octet & (0x80 >> (index % 7)) != 0
    }

    /// Present FRNs in ascending order
    pub fn present(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.frn_count()).filter(move |frn| self.is_present(*frn))
    }

    pub fn present_count(&self) -> usize {
        self.octets
            .iter()
            .map(|octet| (octet & !FX).count_ones() as usize)
            .sum()
    }

    pub fn octets(&self) -> &[u8] {
        &self.octets
    }
}
