use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Env;
use log::info;

use cigarfilter::filter::{CigarFilter, MAX_SKIPPED_BASES};
use cigarfilter::pipeline::{filter_sam_file, FilterOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let default_max_skip = MAX_SKIPPED_BASES.to_string();
    let matches = App::new("cigarfilter")
        .version("0.1.0")
        .about("Keeps SAM records whose CIGAR is valid and skips at most N reference bases")
        .arg(
            Arg::with_name("input")
                .short('i')
                .long("input")
                .value_name("SAM")
                .help("Path to the input SAM file, or - for stdin")
                .takes_value(true)
                .default_value("-"),
        )
        .arg(
            Arg::with_name("output")
                .short('o')
                .long("output")
                .value_name("SAM")
                .help("Path to the output SAM file, or - for stdout")
                .takes_value(true)
                .default_value("-"),
        )
        .arg(
            Arg::with_name("max-skip")
                .short('n')
                .long("max-skip")
                .value_name("N")
                .help("Largest total of skipped (N) bases a record may have")
                .takes_value(true)
                .default_value(&default_max_skip),
        )
        .arg(
            Arg::with_name("no-header")
                .long("no-header")
                .help("Drop @ header lines from the output"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap_or("-");
    let output = matches.value_of("output").unwrap_or("-");
    let max_skip: u64 = matches
        .value_of("max-skip")
        .unwrap_or(&default_max_skip)
        .parse()
        .context("--max-skip must be a non-negative integer")?;

    let options = FilterOptions {
        filter: CigarFilter::new(max_skip),
        keep_header: !matches.is_present("no-header"),
    };

    let summary = filter_sam_file(input, output, &options).context("Failed to filter SAM file")?;

    info!("{}", summary);
    Ok(())
}
