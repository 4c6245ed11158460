use crate::advisory::TcasVersion;
use crate::record::DecoderOptions;

use anyhow::Context;
use anyhow::Result;

use clap::Parser;

use std::path::Path;
use std::path::PathBuf;

/// Decode a file of ASTERIX data blocks
#[derive(Parser)]
#[clap(about, version)]
pub struct Configuration {
    /// Process a file containing concatenated ASTERIX data blocks
    #[clap(long)]
    pub file: PathBuf,

    /// TCAS version for ACAS advisories (6.04 or 7.0), derived from BDS 1,0
    /// when not given
    #[clap(long, parse(try_from_str = parse_tcas_version))]
    pub tcas_version: Option<TcasVersion>,

    /// TOML file with decoder options
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Print frames as JSON lines
    #[clap(long)]
    pub json: bool,

    /// Print decode metrics when done
    #[clap(long)]
    pub stats: bool,
}

impl Configuration {
    /// Options from `--config`, with `--tcas-version` taking precedence
    pub fn decoder_options(&self) -> Result<DecoderOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => DecoderOptions::default(),
        };

        if self.tcas_version.is_some() {
            options.tcas_version = self.tcas_version;
        }

        Ok(options)
    }
}

fn parse_tcas_version(s: &str) -> Result<TcasVersion, &'static str> {
    s.parse()
}

pub fn load_options(path: &Path) -> Result<DecoderOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;

    toml::from_str(&text).with_context(|| format!("Invalid decoder options in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml() {
        let options: DecoderOptions =
            toml::from_str("tcas_version = \"7.0\"\nmax_fspec_octets = 6\n").unwrap();

        assert_eq!(Some(TcasVersion::V70), options.tcas_version);
        assert_eq!(Some(6), options.max_fspec_octets);

        let options: DecoderOptions = toml::from_str("").unwrap();

        assert_eq!(DecoderOptions::default(), options);
    }

    #[test]
    fn test_arguments() {
        let configuration = Configuration::try_parse_from(&[
            "dump_asterix",
            "--file",
            "blocks.ast",
            "--tcas-version",
            "7.0",
            "--json",
        ])
        .unwrap();

        assert_eq!(PathBuf::from("blocks.ast"), configuration.file);
        assert!(configuration.json);
        assert!(!configuration.stats);

        let options = configuration.decoder_options().unwrap();

        assert_eq!(Some(TcasVersion::V70), options.tcas_version);
    }

    #[test]
    fn test_invalid_tcas_version() {
        let result =
            Configuration::try_parse_from(&["dump_asterix", "--file", "x", "--tcas-version", "8"]);

        assert!(result.is_err());
    }
}
