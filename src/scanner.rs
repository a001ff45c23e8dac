use crate::distance::distance;
use crate::error::Error;
use crate::extract::parse_line;
use crate::geocoder::{Geocoder, Resolver};
use crate::location::Coordinate;
use crate::selector::{NearestLocations, Record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Default, PartialEq)]
struct ScanStats {
    lines: usize,
    candidates: usize,
    skipped: usize,
    /// offers taken by the set, later evictions included
    accepted: usize,
}

/// Decodes a raw line, dropping invalid UTF-8 sequences.
fn decode(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn scan_counted<R: BufRead, G: Geocoder>(
    mut reader: R,
    year: i32,
    user: Coordinate,
    resolver: &mut Resolver<G>,
) -> Result<(NearestLocations, ScanStats), Error> {
    let mut nearest = NearestLocations::new();
    let mut stats = ScanStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines += 1;
        let line = decode(&buf);

        let parsed = match parse_line(&line, year) {
            Some(parsed) => parsed,
            None => continue,
        };
        stats.candidates += 1;
        if parsed.location.is_empty() {
            debug!(line = stats.lines, "no location name");
            stats.skipped += 1;
            continue;
        }
        let coordinate = match resolver.resolve(&parsed.location) {
            Some(coordinate) => coordinate,
            None => {
                debug!(line = stats.lines, location = %parsed.location, "unresolved location");
                stats.skipped += 1;
                continue;
            }
        };

        let km = distance(&user, &coordinate);
        if nearest.offer(Record::new(parsed.film, coordinate, km)) {
            stats.accepted += 1;
        }
    }
    Ok((nearest, stats))
}

/// Finds the locations of films released in `year` that are closest to `user`.
pub fn scan<R: BufRead, G: Geocoder>(
    reader: R,
    year: i32,
    user: Coordinate,
    resolver: &mut Resolver<G>,
) -> Result<NearestLocations, Error> {
    let (nearest, stats) = scan_counted(reader, year, user, resolver)?;
    info!(
        lines = stats.lines,
        candidates = stats.candidates,
        skipped = stats.skipped,
        accepted = stats.accepted,
        kept = nearest.len(),
        geocoded = resolver.cached(),
        "scan finished"
    );
    Ok(nearest)
}

#[instrument(skip(resolver))]
pub fn scan_file<G: Geocoder>(
    path: &Path,
    year: i32,
    user: Coordinate,
    resolver: &mut Resolver<G>,
) -> Result<NearestLocations, Error> {
    let file = File::open(path)?;
    scan(BufReader::new(file), year, user, resolver)
}
