use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use zeroize::Zeroizing;

use crate::domain::{ShareFiles, ThresholdParams};

/// Value of `--initial` that reads the mnemonic from stdin instead
pub const STDIN_MARKER: &str = "-";

#[derive(Parser)]
#[command(name = "seedshare")]
#[command(about = "Split a BIP39 mnemonic into M-of-N mnemonic shares, or combine shares back")]
pub struct Cli {
    /// Create shares from --initial instead of combining shares from --input
    #[arg(long)]
    pub create_shares: bool,

    /// Minimum number of shares needed to reconstruct the secret
    #[arg(short = 'm', value_name = "MIN_SHARES")]
    pub min_shares: Option<u32>,

    /// Total number of shares to create (must be greater than -m)
    #[arg(short = 'n', value_name = "TOTAL_SHARES")]
    pub total_shares: Option<u32>,

    /// Mnemonic to split, or "-" to type it in hidden
    #[arg(long, value_name = "MNEMONIC")]
    pub initial: Option<String>,

    /// File to read "mnemonic,index" shares from [default: shares.txt]
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// File to append "mnemonic,index" shares to [default: shares.txt]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Where the secret mnemonic comes from
pub enum MnemonicSource {
    Argument(Zeroizing<String>),
    Stdin,
}

impl fmt::Debug for MnemonicSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(_) => f.write_str("Argument(<redacted>)"),
            Self::Stdin => f.write_str("Stdin"),
        }
    }
}

/// A validated invocation
#[derive(Debug)]
pub enum Mode {
    Split {
        mnemonic: MnemonicSource,
        params: ThresholdParams,
        output: PathBuf,
    },
    Combine {
        input: PathBuf,
    },
}

impl Cli {
    /// Checks flag combinations and resolves defaults
    ///
    /// # Errors
    /// Returns an error if split and combine flags are mixed, the threshold
    /// parameters are invalid, or `--create-shares` is given without `--initial`
    pub fn into_mode(self) -> Result<Mode> {
        let files = ShareFiles::new(self.input.clone(), self.output.clone());

        if !self.create_shares {
            if self.initial.is_some()
                || self.min_shares.is_some()
                || self.total_shares.is_some()
                || self.output.is_some()
            {
                bail!("--initial, -m, -n and --output are only valid with --create-shares");
            }
            return Ok(Mode::Combine { input: files.input });
        }

        if self.input.is_some() {
            bail!(
                "Cannot use --input when creating shares. Pass the mnemonic with --initial=\"<MNEMONIC>\""
            );
        }

        let params = ThresholdParams::from_flags(self.min_shares, self.total_shares)?;

        let mnemonic = match self.initial {
            Some(value) if value == STDIN_MARKER => MnemonicSource::Stdin,
            Some(value) => MnemonicSource::Argument(Zeroizing::new(value)),
            None => bail!("--create-shares requires the mnemonic to split via --initial"),
        };

        Ok(Mode::Split {
            mnemonic,
            params,
            output: files.output,
        })
    }
}
