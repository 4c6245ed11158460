use crate::error::DecodeError;

use anyhow::Result;

use lazy_static::lazy_static;

use prometheus::register_int_counter_vec;
use prometheus::Encoder;
use prometheus::IntCounterVec;
use prometheus::TextEncoder;

lazy_static! {
    static ref DATA_BLOCKS: IntCounterVec = register_int_counter_vec!(
        "asterix_data_blocks_total",
        "Number of ASTERIX data blocks read",
        &["category"],
    )
    .unwrap();
    static ref RECORDS: IntCounterVec = register_int_counter_vec!(
        "asterix_records_decoded_total",
        "Number of ASTERIX records decoded",
        &["category"],
    )
    .unwrap();
    static ref ERRORS: IntCounterVec = register_int_counter_vec!(
        "asterix_decode_errors_total",
        "Number of ASTERIX data blocks that failed to decode",
        &["category", "error_type"],
    )
    .unwrap();
}

fn label(category: u8) -> String {
    format!("{:03}", category)
}

pub fn data_block(category: u8) {
    DATA_BLOCKS.with_label_values(&[&label(category)]).inc();
}

pub fn records_decoded(category: u8, count: usize) {
    RECORDS
        .with_label_values(&[&label(category)])
        .inc_by(count as u64);
}

pub fn decode_error(category: u8, error: &DecodeError) {
    ERRORS
        .with_label_values(&[&label(category), error.kind()])
        .inc();
}

/// All registered metrics in the Prometheus text format
pub fn render() -> Result<String> {
    let mut buffer = Vec::new();

    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
