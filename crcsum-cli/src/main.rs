use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crcsum_core::config::{Config, ConfigSource, Mode, Overwrite};
use crcsum_core::output::{AlwaysOverwrite, NeverOverwrite, OverwritePolicy};
use crcsum_core::progress::{percent, Event, Reporter};
use crcsum_core::run::{run, Outcome};
use crcsum_core::verify::VerifySummary;
use crcsum_core::CrcError;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "crcsum", version, about = "CRC32 manifests for files and folders")]
struct Args {
    /// File or folder to checksum; with --read, the manifest to check
    path: PathBuf,
    /// Save the manifest here (relative paths land next to the checksummed files)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Read a manifest and verify the files it lists
    #[arg(short = 'r', long)]
    read: bool,
    /// Descend into subfolders
    #[arg(short = 'R', long)]
    recursive: bool,
    /// Indent the saved manifest
    #[arg(short = 'p', long = "pretty-output")]
    pretty_output: bool,
    /// Overwrite an existing manifest without asking
    #[arg(short = 'y', long, conflicts_with = "no_clobber")]
    yes: bool,
    /// Never overwrite an existing manifest
    #[arg(short = 'n', long = "no-clobber")]
    no_clobber: bool,
    /// With --read: resolve manifest entries here instead of the manifest's folder
    #[arg(long)]
    root: Option<PathBuf>,
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

/// Command-line front-end for `Config`.
struct ArgsSource(Args);

impl ConfigSource for ArgsSource {
    fn load(self) -> Result<Config> {
        let a = self.0;
        let overwrite = if a.yes {
            Overwrite::Always
        } else if a.no_clobber {
            Overwrite::Never
        } else {
            Overwrite::Prompt
        };
        Ok(Config {
            path: a.path,
            output: a.output,
            mode: if a.read { Mode::Verify } else { Mode::Generate },
            recursive: a.recursive,
            pretty: a.pretty_output,
            overwrite,
            root: a.root,
        })
    }
}

struct Console;

impl Reporter for Console {
    fn report(&mut self, event: Event) {
        match event {
            Event::Processed { index, total } => {
                println!("Processed [{} / {}] ({:.2}%)", index, total, percent(index, total))
            }
            Event::Hashed { path, crc } => println!("{} : {}", crc, path.display()),
            Event::Checked(r) => println!("{r}"),
            // Logged by the core.
            Event::Skipped { .. } | Event::Unreadable { .. } => {}
        }
    }
}

/// Asks on the terminal; anything but `y` declines.
struct Prompt;

impl OverwritePolicy for Prompt {
    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        print!("The file path {} already exists. Do you want to overwrite? (y/N) : ", path.display());
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;
    let cfg = ArgsSource(args).load()?;

    let mut policy: Box<dyn OverwritePolicy> = match cfg.overwrite {
        Overwrite::Prompt => Box::new(Prompt),
        Overwrite::Always => Box::new(AlwaysOverwrite),
        Overwrite::Never => Box::new(NeverOverwrite),
    };
    if cfg.mode == Mode::Verify {
        println!("reading crc file {}", cfg.path.display());
    }

    match run(&cfg, &mut Console, policy.as_mut()) {
        Ok(Outcome::Generated { manifest, saved_to, candidates }) => {
            if candidates == 0 {
                eprintln!("No files found to process.");
            }
            let json = manifest.to_json(cfg.pretty)?;
            println!("{}", String::from_utf8_lossy(&json));
            if let Some(p) = saved_to {
                eprintln!("Wrote {} entries to {}", manifest.len(), p.display());
            }
        }
        Ok(Outcome::Verified(results)) => {
            let s = VerifySummary::from_results(&results);
            eprintln!("{} ok, {} failed", s.ok, s.failed());
        }
        Err(CrcError::OutputCollision(_)) => println!("Cancelled."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
