use anyhow::Context;
use anyhow::Result;

use asterix_decoder::codec::Codec;
use asterix_decoder::codec::Frame;
use asterix_decoder::metrics;
use asterix_decoder::Configuration;

use clap::Parser;

use env_logger::Builder;
use env_logger::Env;

use futures_util::StreamExt;

use log::info;

use tokio::fs::File;

use tokio_util::codec::Framed;

#[tokio::main]
async fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = Configuration::parse();
    let options = configuration.decoder_options()?;

    let stream = File::open(&configuration.file)
        .await
        .with_context(|| format!("Unable to open {}", configuration.file.display()))?;

    let mut reader = Framed::new(stream, Codec::new(options));

    let mut blocks = 0;
    let mut malformed = 0;

    while let Some(frame) = reader.next().await {
        let frame = frame?;

        match frame {
            Frame::Block(_) => blocks += 1,
            Frame::Malformed { .. } => malformed += 1,
        }

        if configuration.json {
            println!("{}", serde_json::to_string(&frame)?);
        } else {
            println!("{:#?}", frame);
        }
    }

    info!(
        "Read {} data blocks from {}, {} malformed",
        blocks + malformed,
        configuration.file.display(),
        malformed
    );

    if configuration.stats {
        print!("{}", metrics::render()?);
    }

    Ok(())
}
