use easybench::bench;
use film_locations::distance::distance;
use film_locations::extract::{location_name, parse_line};
use film_locations::{Coordinate, NearestLocations, Record};

const LINE: &str = "\"#1 Single\" (2006) {Cats and Dogs (#1.4)}\t\tLos Angeles, California, USA\t(studio)";

fn main() {
    let lviv = Coordinate::new(49.8397, 24.0297);
    let sumy = Coordinate::new(50.9077, 34.7981);

    println!("distance:      {}", bench(|| distance(&lviv, &sumy)));
    println!(
        "location_name: {}",
        bench(|| location_name("\t\tLos Angeles, California, USA\t(studio)"))
    );
    println!("parse_line:    {}", bench(|| parse_line(LINE, 2006)));
    println!(
        "offer x100:    {}",
        bench(|| {
            let mut nearest = NearestLocations::new();
            for i in 0..100 {
                let coordinate = Coordinate::new(f64::from(i % 90), 0.0);
                nearest.offer(Record::new("film", coordinate, f64::from(100 - i)));
            }
            nearest
        })
    );
}
