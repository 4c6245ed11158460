//! The data item decoding contract.

use crate::advisory::TcasVersion;
use crate::bits;
use crate::error::DecodeError;
use crate::error::Result;
use crate::fspec::Fspec;
use crate::trace::Trace;

/// How many octets an item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Always this many octets
    Fixed(usize),
    /// A `primary` part followed by `secondary` sized extents while the
    /// last octet of the previous part has its FX bit set
    Extended { primary: usize, secondary: usize },
    /// A one octet repetition count followed by that many `size` octet entries
    Repetitive(usize),
    /// A one octet length that includes itself
    Explicit,
    /// An FX-chained primary sub-field selecting the listed sub-fields
    Compound(&'static [Format]),
}

/// Compound primary sub-fields never exceed this many octets
pub(crate) const MAX_COMPOUND_PRIMARY: usize = 8;

impl Format {
    /// Octets occupied by an item of this format starting at `offset`
    pub fn length(&self, input: &[u8], offset: usize) -> Result<usize> {
        match *self {
            Format::Fixed(size) => Ok(size),
            Format::Extended { primary, secondary } => {
                let mut length = primary;

                while bits::octet(input, offset + length - 1)? & 0x01 != 0 {
                    length += secondary;
                }

                Ok(length)
            }
            Format::Repetitive(size) => {
                let repetitions = bits::octet(input, offset)? as usize;

                Ok(1 + repetitions * size)
            }
            Format::Explicit => match bits::octet(input, offset)? {
                0 => Err(DecodeError::MalformedItem {
                    item: "explicit length item",
                    reason: "length octet is zero",
                }),
                length => Ok(length as usize),
            },
            Format::Compound(subfields) => {
                let primary = Fspec::decode(input, offset, MAX_COMPOUND_PRIMARY)?;
                let mut length = primary.len();

                for index in primary.present() {
                    let subfield =
                        subfields
                            .get(index - 1)
                            .ok_or(DecodeError::MalformedItem {
                                item: "compound item",
                                reason: "sub-field indicator beyond defined sub-fields",
                            })?;

                    length += subfield.length(input, offset + length)?;
                }

                Ok(length)
            }
        }
    }

    /// The octets of an item of this format starting at `offset`
    pub fn slice<'a>(&self, input: &'a [u8], offset: usize) -> Result<&'a [u8]> {
        let length = self.length(input, offset)?;

        bits::octets(input, offset, length)
    }
}

/// State shared by the items of one record while it decodes
pub struct Context<'t> {
    /// Selects the advisory tables used by ACAS items
    pub tcas_version: TcasVersion,
    /// Whether an item carrying a capability report may replace `tcas_version`
    pub derive_tcas_version: bool,
    pub trace: &'t mut dyn Trace,
}

impl<'t> Context<'t> {
    pub fn new(tcas_version: TcasVersion, trace: &'t mut dyn Trace) -> Self {
        Context {
            tcas_version,
            derive_tcas_version: false,
            trace,
        }
    }

    pub fn field(&mut self, item: &'static str, name: &'static str, value: &dyn std::fmt::Display) {
        self.trace.field(item, name, value);
    }
}

/// A catalog data item.
///
/// `decode` builds a fresh value from exactly `length` octets at `offset` and
/// never reads past them.
pub trait DataItem: Sized {
    /// Catalog identifier such as `I048/260`
    const ID: &'static str;
    /// Display name for diagnostics
    const NAME: &'static str;
    const FORMAT: Format;

    fn length(input: &[u8], offset: usize) -> Result<usize> {
        Self::FORMAT.length(input, offset)
    }

    fn decode(input: &[u8], offset: usize, ctx: &mut Context<'_>) -> Result<Self>;
}
