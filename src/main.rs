mod charset;
mod entropy;
mod errors;
mod generator;
mod output;

use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::charset::{ Config, build_pools };
use crate::output::Report;

#[derive(Parser)]
#[command(
    name = "fortipass",
    version,
    about = "Generates random passwords from selectable character classes"
)]
struct Cli {
    /// Password length
    #[arg(
        short = 'L',
        long,
        default_value_t = 16,
        value_parser = clap::value_parser!(u8).range(6..=64)
    )]
    length: u8,

    /// Leave uppercase letters out of the password
    #[arg(short = 'u', long)]
    no_uppercase: bool,

    /// Leave lowercase letters out of the password
    #[arg(short = 'l', long)]
    no_lowercase: bool,

    /// Leave digits out of the password
    #[arg(short = 'n', long)]
    no_digits: bool,

    /// Leave symbols out of the password
    #[arg(short = 's', long)]
    no_symbols: bool,

    /// Drop characters that are easy to misread (I l 1 O 0 and friends)
    #[arg(short = 'a', long)]
    exclude_ambiguous: bool,

    /// Copy the password to the system clipboard
    #[arg(short = 'c', long)]
    copy: bool,

    /// Append the password to a file (default name: password-<timestamp>.txt)
    #[arg(short = 'o', long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    out: Option<PathBuf>,

    /// Print a JSON report instead of the plain password
    #[arg(long)]
    json: bool,
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config {
        uppercase: !cli.no_uppercase,
        lowercase: !cli.no_lowercase,
        digits: !cli.no_digits,
        symbols: !cli.no_symbols,
        exclude_ambiguous: cli.exclude_ambiguous,
        length: cli.length as usize,
    };

    let (alphabet, pools) = build_pools(&config);
    debug!("alphabet of {} characters across {} classes", alphabet.len(), pools.len());

    let mut rng = rand::rng();
    let password = match generator::generate(&mut rng, config.length, &alphabet, &pools) {
        Ok(password) => password,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let estimate = entropy::estimate(config.length, alphabet.len());

    if cli.json {
        output::print_json(&Report {
            password: &password,
            length: config.length,
            alphabet_size: alphabet.len(),
            entropy_bits: estimate.bits,
            strength: estimate.label,
        });
    } else {
        output::print_summary(&password, &estimate);
    }

    if cli.copy {
        output::copy_to_clipboard(&password);
    }

    if let Some(path) = cli.out {
        let path = if path.as_os_str().is_empty() {
            output::default_export_path()
        } else {
            path
        };
        output::export_to_file(&path, &password)?;
    }

    Ok(())
}
