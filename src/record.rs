//! Record assembly.
//!
//! A record is an FSPEC followed by the items it flags, in FRN order. Each
//! category describes its items through `Category`, and `Record` walks the
//! FSPEC and hands every present FRN to the category to decode.

use crate::advisory::TcasVersion;
use crate::bits;
use crate::error::Result;
use crate::fspec::Fspec;
use crate::item::Context;
use crate::item::DataItem;
use crate::trace::Trace;

use log::debug;

use serde::Deserialize;
use serde::Serialize;

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// The item catalog (UAP) of one ASTERIX category
pub trait Category: fmt::Debug + Clone + PartialEq {
    const CATEGORY: u8;

    /// Number of FRNs in the UAP, including spares
    const FRNS: usize;

    type Item: fmt::Debug + Clone + PartialEq + Serialize;

    /// Longest FSPEC a record of this category may carry
    fn max_fspec_octets() -> usize {
        (Self::FRNS + 6) / 7
    }

    /// Decodes the item for `frn` at `offset`, returning it and the octets it
    /// occupied. FRNs outside the catalog are `UndefinedItem`.
    fn decode_item(
        frn: usize,
        input: &[u8],
        offset: usize,
        ctx: &mut Context<'_>,
    ) -> Result<(Self::Item, usize)>;
}

/// Decodes `I` at `offset` and wraps it in a catalog variant
pub fn decode_as<I, T>(
    input: &[u8],
    offset: usize,
    ctx: &mut Context<'_>,
    variant: impl FnOnce(I) -> T,
) -> Result<(T, usize)>
where
    I: DataItem,
{
    let length = I::length(input, offset)?;
    let item = I::decode(input, offset, ctx)?;

    debug!("{} {} ({} octets)", I::ID, I::NAME, length);

    Ok((variant(item), length))
}

/// Decoder settings, usually loaded from the `--config` TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// Advisory tables to use; derived from the record when absent
    pub tcas_version: Option<TcasVersion>,
    /// Overrides the category's FSPEC length bound
    pub max_fspec_octets: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Record<C: Category> {
    category: u8,
    fspec: Fspec,
    length: usize,
    tcas_version: TcasVersion,
    items: BTreeMap<usize, C::Item>,
    #[serde(skip)]
    catalog: PhantomData<C>,
}

impl<C: Category> Record<C> {
    /// Decodes one record from the `length` octets at `offset`.
    ///
    /// The record may end before `length`; `len` reports how many octets it
    /// used. Nothing past `offset + length` is read.
    pub fn decode(
        input: &[u8],
        offset: usize,
        length: usize,
        options: &DecoderOptions,
        trace: &mut dyn Trace,
    ) -> Result<Self> {
        let data = bits::octets(input, offset, length)?;

        let max_fspec_octets = options
            .max_fspec_octets
            .unwrap_or_else(C::max_fspec_octets);
        let fspec = Fspec::decode(data, 0, max_fspec_octets)?;

        let mut ctx = Context::new(options.tcas_version.unwrap_or_default(), trace);
        ctx.derive_tcas_version = options.tcas_version.is_none();

        ctx.field("FSPEC", "Octets", &fspec.len());
        ctx.field("FSPEC", "Items", &fspec.present_count());

        let mut cursor = fspec.len();
        let mut items = BTreeMap::new();

        for frn in fspec.present() {
            let (item, item_length) = C::decode_item(frn, data, cursor, &mut ctx)?;

            cursor += item_length;
            items.insert(frn, item);
        }

        debug!(
            "CAT{:03} record: {} items in {} octets",
            C::CATEGORY,
            items.len(),
            cursor
        );

        Ok(Record {
            category: C::CATEGORY,
            fspec,
            length: cursor,
            tcas_version: ctx.tcas_version,
            items,
            catalog: PhantomData,
        })
    }

    pub fn category(&self) -> u8 {
        self.category
    }

    /// Whether the FSPEC flags the item with field reference number `frn`
    pub fn is_present(&self, frn: usize) -> bool {
        self.fspec.is_present(frn)
    }

    pub fn fspec(&self) -> &Fspec {
        &self.fspec
    }

    /// Octets consumed by the FSPEC
    pub fn fspec_len(&self) -> usize {
        self.fspec.len()
    }

    pub fn present_count(&self) -> usize {
        self.fspec.present_count()
    }

    /// Octets consumed by the whole record
    pub fn len(&self) -> usize {
        self.length
    }

    /// Advisory tables the record's ACAS items were decoded with
    pub fn tcas_version(&self) -> TcasVersion {
        self.tcas_version
    }

    pub fn item(&self, frn: usize) -> Option<&C::Item> {
        self.items.get(&frn)
    }

    /// Decoded items in FRN order
    pub fn items(&self) -> impl Iterator<Item = (usize, &C::Item)> + '_ {
        self.items.iter().map(|(frn, item)| (*frn, item))
    }
}
