//! Prints a sample of every generator.
//!
//! Settings come from `SAMPLE_DATA_*` environment variables and command-line
//! flags. Set `SAMPLE_DATA_SEED` to make the output reproducible and
//! `RUST_LOG=debug` to watch datasets being cached.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use sample_data::color::{self, ColorOptions};
use sample_data::date::{self, DateOptions};
use sample_data::number::{self, NumberOptions};
use sample_data::person::{self, PersonOptions};
use sample_data::{Generator, SampleDataSettings};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = match SampleDataSettings::load_from_iter(env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "invalid settings: {err}") {
                drop(write_err);
            }
            return ExitCode::FAILURE;
        }
    };

    let generator = Generator::from_settings(&settings);
    info!(
        seed = ?settings.seed,
        locale = settings.locale(),
        samples = settings.samples(),
        "generating samples"
    );

    match write_samples(&mut io::stdout().lock(), &generator, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!(error = %err, "failed to write samples");
            ExitCode::FAILURE
        }
    }
}

fn write_samples(
    out: &mut impl Write,
    generator: &Generator,
    settings: &SampleDataSettings,
) -> io::Result<()> {
    let locale = settings.locale();
    let colors = ColorOptions::default().with_locale(locale);
    let dates = DateOptions::default().with_locale(locale);
    let numbers = NumberOptions::default()
        .with_int_max(1_000)
        .with_hex_max(0xffff)
        .with_hex_prefix(true);
    let people = PersonOptions::default().with_locale(locale);

    for _ in 0..settings.samples() {
        writeln!(
            out,
            "color   {} {} {} {}",
            color::name(generator, &colors),
            color::rgba(generator),
            color::hsl(generator),
            color::cmyk(generator)
        )?;
        writeln!(
            out,
            "date    {} | {} {} | {}",
            date::any(generator, &dates).to_rfc3339(),
            date::weekday(generator, &dates),
            date::month(generator, &dates),
            date::timezone(generator, &dates)
        )?;
        writeln!(
            out,
            "number  {} {} {} {}",
            number::int(generator, &numbers),
            number::float(generator, &numbers),
            number::hex(generator, &numbers),
            number::roman(generator, &numbers)
        )?;

        let record = person::person(generator, &people);
        let json = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(out, "person  {json}")?;
    }

    Ok(())
}
