use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use seedshare::cli::{Cli, MnemonicSource, Mode};
use seedshare::commands;
use seedshare::domain::{Request, Response};
use seedshare::shares_file;

/// Read a mnemonic securely from stdin (hidden input when TTY available)
fn read_mnemonic() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter mnemonic to split:");
        let mnemonic =
            rpassword::read_password().context("Failed to read mnemonic from stdin")?;
        Ok(Zeroizing::new(mnemonic))
    } else {
        // Piped input: read a single line
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut mnemonic = Zeroizing::new(String::new());
        handle
            .read_line(&mut mnemonic)
            .context("Failed to read mnemonic from stdin")?;
        Ok(Zeroizing::new(mnemonic.trim().to_string()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seedshare=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (request, output) = match cli.into_mode()? {
        Mode::Split {
            mnemonic,
            params,
            output,
        } => {
            let mnemonic = match mnemonic {
                MnemonicSource::Argument(mnemonic) => mnemonic,
                MnemonicSource::Stdin => read_mnemonic()?,
            };
            (Request::Split { mnemonic, params }, Some(output))
        }
        Mode::Combine { input } => {
            let shares = shares_file::read_shares(&input)?;
            (Request::Combine { shares }, None)
        }
    };

    match commands::run(request)? {
        Response::Shares(shares) => {
            println!("Share mnemonics:");
            for share in &shares {
                println!("{share}");
            }
            if let Some(output) = output {
                shares_file::write_shares(&output, &shares)?;
            }
        }
        Response::Secret(mnemonic) => {
            println!("Recreated: {}", mnemonic.as_str());
        }
    }

    Ok(())
}
