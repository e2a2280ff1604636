//! Development tasks for the ranmath workspace.
//!
//! ```text
//! cargo xtask constants print
//! cargo xtask constants verify --kind f32 --max-ulps 0
//! ```

use clap::Parser;
use ranmath::constants;
use snafu::prelude::*;

#[derive(clap::Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Inspect the bit-exact float constants
    Constants {
        #[command(subcommand)]
        action: ConstantsAction,
    },
}

#[derive(clap::Subcommand)]
enum ConstantsAction {
    /// Print every constant with its bit pattern and value
    Print {
        #[arg(long, value_enum, default_value_t = Kind::All)]
        kind: Kind,
    },
    /// Check every constant against a value derived from the standard library
    Verify {
        #[arg(long, value_enum, default_value_t = Kind::All)]
        kind: Kind,
        /// Largest accepted distance from the derived value, in units in the
        /// last place
        #[arg(long, default_value_t = 1)]
        max_ulps: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
enum Kind {
    F32,
    F64,
    All,
}

impl Kind {
    fn includes(self, other: Kind) -> bool {
        self == Kind::All || self == other
    }
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("No reference derivation for constant {name}"))]
    UnknownConstant { name: String },

    #[snafu(display("{failures} constant(s) are more than {max_ulps} ulp(s) from their reference"))]
    Mismatch { failures: usize, max_ulps: u64 },
}

/// One table entry compared against its derived reference.
#[derive(Debug)]
struct Check {
    kind: Kind,
    name: &'static str,
    bits: u64,
    reference: u64,
    /// Distance in units in the last place, `None` if the two values are not
    /// comparable (differing signs, or only one of them NaN).
    ulps: Option<u64>,
}

fn reference_f64(name: &str) -> Option<f64> {
    use std::f64::consts;
    Some(match name {
        "EPSILON" => f64::EPSILON,
        "HUGE" => f64::MAX,
        "INFINITY" => f64::INFINITY,
        "NAN" => f64::NAN,
        "PI" => consts::PI,
        "TWO_PI" => consts::TAU,
        "PI_SQUARED" => consts::PI * consts::PI,
        "SQRT_PI" => consts::PI.sqrt(),
        "RSQRT_PI" => 1.0 / consts::PI.sqrt(),
        "HALF_PI" => consts::FRAC_PI_2,
        "FRAC_1_PI" => consts::FRAC_1_PI,
        "FRAC_2_PI" => consts::FRAC_2_PI,
        "DEG2RAD" => consts::PI / 180.0,
        "RAD2DEG" => 180.0 / consts::PI,
        _ => return None,
    })
}

fn reference_f32(name: &str) -> Option<f32> {
    match name {
        "EPSILON" => Some(f32::EPSILON),
        "HUGE" => Some(f32::MAX),
        _ => reference_f64(name).map(|x| x as f32),
    }
}

fn ulps_apart(a: u64, b: u64, sign_bit: u64) -> Option<u64> {
    if (a ^ b) & sign_bit != 0 {
        None
    } else {
        Some(a.abs_diff(b))
    }
}

fn check_f32() -> Result<Vec<Check>, Error> {
    constants::f32::TABLE
        .iter()
        .map(|(name, bits)| {
            let missing = UnknownConstantSnafu { name: *name };
            let reference = reference_f32(name).context(missing)?;
            let value = f32::from_bits(*bits);
            let ulps = if value.is_nan() || reference.is_nan() {
                (value.is_nan() && reference.is_nan()).then_some(0)
            } else {
                ulps_apart(*bits as u64, reference.to_bits() as u64, 1 << 31)
            };
            Ok(Check {
                kind: Kind::F32,
                name: *name,
                bits: *bits as u64,
                reference: reference.to_bits() as u64,
                ulps,
            })
        })
        .collect()
}

fn check_f64() -> Result<Vec<Check>, Error> {
    constants::f64::TABLE
        .iter()
        .map(|(name, bits)| {
            let missing = UnknownConstantSnafu { name: *name };
            let reference = reference_f64(name).context(missing)?;
            let value = f64::from_bits(*bits);
            let ulps = if value.is_nan() || reference.is_nan() {
                (value.is_nan() && reference.is_nan()).then_some(0)
            } else {
                ulps_apart(*bits, reference.to_bits(), 1 << 63)
            };
            Ok(Check {
                kind: Kind::F64,
                name: *name,
                bits: *bits,
                reference: reference.to_bits(),
                ulps,
            })
        })
        .collect()
}

fn checks(kind: Kind) -> Result<Vec<Check>, Error> {
    let mut checks = vec![];
    if kind.includes(Kind::F32) {
        checks.extend(check_f32()?);
    }
    if kind.includes(Kind::F64) {
        checks.extend(check_f64()?);
    }
    Ok(checks)
}

fn print(kind: Kind) {
    if kind.includes(Kind::F32) {
        for (name, bits) in constants::f32::TABLE {
            println!("f32 {name:<12} {bits:#010x} {:e}", f32::from_bits(*bits));
        }
    }
    if kind.includes(Kind::F64) {
        for (name, bits) in constants::f64::TABLE {
            println!("f64 {name:<12} {bits:#018x} {:e}", f64::from_bits(*bits));
        }
    }
}

fn verify(kind: Kind, max_ulps: u64) -> Result<(), Error> {
    let checks = checks(kind)?;
    let mut failures = 0usize;
    for check in checks.iter() {
        let Check {
            kind,
            name,
            bits,
            reference,
            ulps,
        } = check;
        match ulps {
            Some(0) => log::debug!("{kind:?} {name}: {bits:#x} exact"),
            Some(n) if *n <= max_ulps => {
                log::warn!("{kind:?} {name}: {bits:#x} is {n} ulp(s) from {reference:#x}")
            }
            Some(n) => {
                failures += 1;
                log::error!("{kind:?} {name}: {bits:#x} is {n} ulp(s) from {reference:#x}");
            }
            None => {
                failures += 1;
                log::error!("{kind:?} {name}: {bits:#x} is not comparable to {reference:#x}");
            }
        }
    }
    ensure!(failures == 0, MismatchSnafu { failures, max_ulps });
    log::info!("{} constant(s) within {max_ulps} ulp(s)", checks.len());
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Constants { action } => match action {
            ConstantsAction::Print { kind } => {
                print(kind);
                Ok(())
            }
            ConstantsAction::Verify { kind, max_ulps } => verify(kind, max_ulps),
        },
    };
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
