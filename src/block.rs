//! ASTERIX data blocks.
//!
//! A data block is a one octet category (CAT), a two octet big endian length
//! (LEN) that counts the whole block including these three octets, and the
//! records of that category back to back.

use crate::bits;
use crate::cat048::Cat048;
use crate::cat062::Cat062;
use crate::error::DecodeError;
use crate::error::Result;
use crate::record::Category;
use crate::record::DecoderOptions;
use crate::record::Record;
use crate::trace::Trace;

use log::debug;

use serde::Serialize;

pub const HEADER_LEN: usize = 3;

/// Reads the CAT and LEN of the block at the start of `input`
pub fn header(input: &[u8]) -> Result<(u8, usize)> {
    let category = bits::octet(input, 0)?;
    let length = bits::read(input, 8, 16)? as usize;

    if length < HEADER_LEN {
        return Err(DecodeError::InvalidBlockLength { category, length });
    }

    Ok((category, length))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DataBlock {
    Cat048(Vec<Record<Cat048>>),
    Cat062(Vec<Record<Cat062>>),
    /// A category without a catalog, record octets kept as they are
    Unsupported { category: u8, data: Vec<u8> },
}

impl DataBlock {
    /// Decodes the data block at the start of `input`. Octets after LEN are
    /// ignored.
    pub fn decode(input: &[u8], options: &DecoderOptions, trace: &mut dyn Trace) -> Result<Self> {
        let (category, length) = header(input)?;

        let data = bits::octets(input, 0, length)
            .map_err(|_| DecodeError::InvalidBlockLength { category, length })?;

        debug!("CAT{:03} data block of {} octets", category, length);

        match category {
            Cat048::CATEGORY => Ok(DataBlock::Cat048(records(data, options, trace)?)),
            Cat062::CATEGORY => Ok(DataBlock::Cat062(records(data, options, trace)?)),
            _ => Ok(DataBlock::Unsupported {
                category,
                data: data[HEADER_LEN..].to_vec(),
            }),
        }
    }

    pub fn category(&self) -> u8 {
        match self {
            DataBlock::Cat048(_) => Cat048::CATEGORY,
            DataBlock::Cat062(_) => Cat062::CATEGORY,
            DataBlock::Unsupported { category, .. } => *category,
        }
    }

    /// Number of decoded records, zero for unsupported categories
    pub fn record_count(&self) -> usize {
        match self {
            DataBlock::Cat048(records) => records.len(),
            DataBlock::Cat062(records) => records.len(),
            DataBlock::Unsupported { .. } => 0,
        }
    }
}

fn records<C: Category>(
    data: &[u8],
    options: &DecoderOptions,
    trace: &mut dyn Trace,
) -> Result<Vec<Record<C>>> {
    let mut offset = HEADER_LEN;
    let mut records = Vec::new();

    while offset < data.len() {
        let record = Record::<C>::decode(data, offset, data.len() - offset, options, trace)?;

        offset += record.len();
        records.push(record);
    }

    Ok(records)
}
