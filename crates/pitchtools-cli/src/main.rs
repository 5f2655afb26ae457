//! pitchtools CLI - Command-line interface for pitch conversion and spelling
//!
//! This binary converts between notenames, midinotes and frequencies, and
//! respells, transposes and quantizes notenames.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use pitchtools::DEFAULT_REFERENCE_FREQ;
use pitchtools_cli::commands;
use pitchtools_cli::commands::convert::Conversion;

/// pitchtools - Convert and spell musical pitches
#[derive(Parser)]
#[command(name = "pitchtools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert notenames to midinotes
    N2m {
        /// Notenames, e.g. 4C#+20 or Eb4- (use -- before negative octaves)
        #[arg(required = true)]
        notenames: Vec<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Convert midinotes to notenames
    M2n {
        /// Midinotes, e.g. 61.2
        #[arg(required = true, allow_negative_numbers = true)]
        midinotes: Vec<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Convert notenames to frequencies
    N2f {
        /// Notenames, e.g. 4A
        #[arg(required = true)]
        notenames: Vec<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Convert frequencies to notenames
    F2n {
        /// Frequencies in Hz
        #[arg(required = true)]
        freqs: Vec<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Show how a notename or midinote is notated
    Notate {
        /// Notename or midinote
        pitch: String,

        /// Divisions per semitone (1, 2 or 4)
        #[arg(short, long, default_value = "4")]
        divisions: u32,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Respell notenames with their enharmonic equivalent
    Enharmonic {
        /// Notenames to respell
        #[arg(required = true)]
        notenames: Vec<String>,
    },

    /// Transpose a notename by an interval in semitones
    Transpose {
        /// Notename to transpose
        notename: String,

        /// Interval in semitones (fractional and negative values allowed)
        #[arg(allow_negative_numbers = true)]
        interval: f64,

        /// Replace E#, Fb, B# and Cb by F, E, C and B
        #[arg(long)]
        no_unusual: bool,
    },

    /// List the consistent enharmonic spellings of a set of notes
    Variations {
        /// Notes of the chord or scale
        #[arg(required = true)]
        notes: Vec<String>,

        /// Fix the direction of a quarter-tone slot, e.g. 2=flat (repeatable)
        #[arg(long = "fix", value_name = "SLOT=DIR")]
        fix: Vec<String>,

        /// Return the notes unchanged when no spelling is consistent
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Quantize notenames or midinotes to a pitch grid
    Quantize {
        /// Notenames or midinotes
        #[arg(required = true)]
        pitches: Vec<String>,

        /// Divisions per semitone (1, 2 or 4)
        #[arg(short, long, default_value = "4")]
        divisions: u32,

        /// Quantization method
        #[arg(short, long, default_value = "round", value_parser = ["round", "floor"])]
        method: String,
    },
}

/// Flags shared by the conversion commands.
#[derive(clap::Args, Debug, Clone, Copy)]
struct TuningArgs {
    /// Frequency of 4A in Hz
    #[arg(long, default_value_t = DEFAULT_REFERENCE_FREQ)]
    a4: f64,

    /// Write 25 and 75 cents numerically instead of as > and <
    #[arg(long)]
    no_eighth_tones: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp(None)
    .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::N2m { notenames, tuning } => {
            commands::convert::run(Conversion::N2m, &notenames, tuning.a4, tuning.no_eighth_tones)
        }
        Commands::M2n { midinotes, tuning } => {
            commands::convert::run(Conversion::M2n, &midinotes, tuning.a4, tuning.no_eighth_tones)
        }
        Commands::N2f { notenames, tuning } => {
            commands::convert::run(Conversion::N2f, &notenames, tuning.a4, tuning.no_eighth_tones)
        }
        Commands::F2n { freqs, tuning } => {
            commands::convert::run(Conversion::F2n, &freqs, tuning.a4, tuning.no_eighth_tones)
        }
        Commands::Notate {
            pitch,
            divisions,
            json,
        } => commands::notate::run(&pitch, divisions, json),
        Commands::Enharmonic { notenames } => commands::spell::run_enharmonic(&notenames),
        Commands::Transpose {
            notename,
            interval,
            no_unusual,
        } => commands::spell::run_transpose(&notename, interval, no_unusual),
        Commands::Variations {
            notes,
            fix,
            force,
            json,
        } => commands::spell::run_variations(&notes, &fix, force, json),
        Commands::Quantize {
            pitches,
            divisions,
            method,
        } => commands::quantize::run(&pitches, divisions, &method),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
