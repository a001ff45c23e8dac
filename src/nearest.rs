use film_locations::config::ScanOpts;
use film_locations::geocoder::nominatim::Nominatim;
use film_locations::{get_subscriber, init_subscriber, scan_file, Resolver};
use serde_json::json;
use std::error::Error;
use std::io::{self, Write};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "nearest",
    about = "print the filming locations closest to you as json lines",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    #[structopt(flatten)]
    scan: ScanOpts,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_subscriber(get_subscriber("warn".into()))?;

    let geocoder = Nominatim::new(opt.scan.nominatim())?;
    let mut resolver = Resolver::new(geocoder);
    let nearest = scan_file(&opt.scan.path, opt.scan.year, opt.scan.user(), &mut resolver)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in nearest {
        let output = json!({
            "film": record.film,
            "lat": record.coordinate.lat,
            "lon": record.coordinate.lon,
            "distance_km": record.distance,
        });
        writeln!(out, "{}", output)?;
    }
    Ok(())
}
