pub mod advisory;
pub mod altitude;
pub mod bits;
pub mod block;
pub mod cat048;
pub mod cat062;
pub mod codec;
mod configuration;
pub mod error;
pub mod fspec;
pub mod item;
pub mod metrics;
pub mod record;
pub mod trace;

pub use crate::block::DataBlock;
pub use crate::configuration::load_options;
pub use crate::configuration::Configuration;
pub use crate::error::DecodeError;
pub use crate::record::DecoderOptions;
pub use crate::record::Record;
