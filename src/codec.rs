use anyhow::Error;

use bytes::Buf;
use bytes::BytesMut;

use crate::block;
use crate::block::DataBlock;
use crate::error::DecodeError;
use crate::metrics;
use crate::record::DecoderOptions;
use crate::trace::LogTrace;

use log::warn;

use serde::Serialize;

use tokio_util::codec::Decoder;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Frame {
    Block(DataBlock),
    /// A block that could not be decoded. Its `length` octets have been
    /// consumed so the stream continues with the next block.
    Malformed {
        category: u8,
        length: usize,
        error: DecodeError,
    },
}

/// Splits a byte stream into ASTERIX data blocks
pub struct Codec {
    options: DecoderOptions,
}

impl Codec {
    pub fn new(options: DecoderOptions) -> Codec {
        Codec { options }
    }

    fn malformed(&self, category: u8, length: usize, error: DecodeError) -> Frame {
        warn!(
            "Skipping CAT{:03} data block of {} octets: {}",
            category, length, error
        );
        metrics::decode_error(category, &error);

        Frame::Malformed {
            category,
            length,
            error,
        }
    }
}

impl Decoder for Codec {
    type Item = Frame;
    type Error = Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let (category, length) = match block::header(buf) {
            Ok(header) => header,
            Err(DecodeError::TruncatedBuffer { .. }) => return Ok(None),
            Err(error) => {
                // LEN is unusable, drop the header and try the next octets
                let category = buf[0];
                buf.advance(block::HEADER_LEN);
                metrics::data_block(category);

                return Ok(Some(self.malformed(category, block::HEADER_LEN, error)));
            }
        };

        if buf.len() < length {
            buf.reserve(length - buf.len());

            return Ok(None);
        }

        let bytes = buf.split_to(length);
        metrics::data_block(category);

        match DataBlock::decode(&bytes, &self.options, &mut LogTrace) {
            Ok(block) => {
                metrics::records_decoded(category, block.record_count());

                Ok(Some(Frame::Block(block)))
            }
            Err(error) => Ok(Some(self.malformed(category, length, error))),
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(frame) = self.decode(buf)? {
            return Ok(Some(frame));
        }

        if buf.is_empty() {
            return Ok(None);
        }

        let category = buf[0];
        let available = buf.len();
        let needed = match block::header(buf) {
            Ok((_, length)) => length,
            Err(_) => block::HEADER_LEN,
        };
        buf.clear();

        let error = DecodeError::TruncatedBuffer { needed, available };

        Ok(Some(self.malformed(category, available, error)))
    }
}
