use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use itertools::Itertools;

use reviewidx::prelude::*;

fn parse_args() -> ArgMatches {
    Command::new("rvi-indices")
        .about("Print the vocabulary word indices of reviews")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Mapping format: text or toml (default: text)"),
        )
        .arg(
            Arg::new("lossy")
                .long("lossy")
                .action(ArgAction::SetTrue)
                .help("Replace invalid UTF-8 in reviews instead of failing"),
        )
        .arg(
            Arg::new("MAPPING")
                .help("Word index mapping file")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::new("REVIEWS")
                .help("Reviews file, one review per line (default: standard input)")
                .index(2),
        )
        .get_matches()
}

struct Config {
    mapping_filename: String,
    mapping_format: MappingFormat,
    reviews_filename: Option<String>,
    lossy: bool,
}

fn config_from_matches(matches: &ArgMatches) -> Result<Config> {
    let mapping_filename = matches
        .get_one::<String>("MAPPING")
        .context("Missing mapping file")?
        .to_owned();

    let mapping_format = matches
        .get_one::<String>("format")
        .map(|f| MappingFormat::try_from(f.as_str()).context("Cannot parse mapping format"))
        .transpose()?
        .unwrap_or(MappingFormat::Text);

    Ok(Config {
        mapping_filename,
        mapping_format,
        reviews_filename: matches.get_one::<String>("REVIEWS").cloned(),
        lossy: matches.get_flag("lossy"),
    })
}

fn read_input(config: &Config) -> Result<Vec<String>> {
    let reviews = match (&config.reviews_filename, config.lossy) {
        (Some(filename), false) => load_reviews(filename),
        (Some(filename), true) => load_reviews_lossy(filename),
        (None, false) => read_reviews(&mut io::stdin().lock()),
        (None, true) => read_reviews_lossy(&mut io::stdin().lock()),
    };

    reviews.context("Cannot read reviews")
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = parse_args();
    let config = config_from_matches(&matches)?;

    let mapping = read_mapping(&config.mapping_filename, config.mapping_format)
        .context("Cannot read word index mapping")?;
    let reviews = read_input(&config)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for review in &reviews {
        let indices = review.word_indices(&mapping);
        writeln!(writer, "{}", indices.into_iter().sorted().join(" "))
            .context("Cannot write word indices")?;
    }

    writer.flush().context("Cannot flush output")?;

    Ok(())
}
