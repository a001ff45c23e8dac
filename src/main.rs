use film_locations::config::ScanOpts;
use film_locations::geocoder::nominatim::Nominatim;
use film_locations::map::{write_map, DEFAULT_MAP_PATH};
use film_locations::{get_subscriber, init_subscriber, scan_file, Resolver};
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;
use time::OffsetDateTime;
use tracing::info;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "film-map",
    about = "map the filming locations closest to you",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    #[structopt(flatten)]
    scan: ScanOpts,
    /// html map output path
    #[structopt(short, long, env = "MAP_OUTPUT", default_value = DEFAULT_MAP_PATH, parse(from_os_str))]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::from_args();
    init_subscriber(get_subscriber("info".into()))?;

    let geocoder = Nominatim::new(opt.scan.nominatim())?;
    let mut resolver = Resolver::new(geocoder);
    let user = opt.scan.user();

    let started = OffsetDateTime::now_utc();
    let nearest = scan_file(&opt.scan.path, opt.scan.year, user, &mut resolver)?;
    let elapsed = OffsetDateTime::now_utc() - started;
    info!(
        year = opt.scan.year,
        found = nearest.len(),
        seconds = elapsed.as_seconds_f64(),
        "locations scanned"
    );

    write_map(&opt.output, user, &nearest)?;
    Ok(())
}
