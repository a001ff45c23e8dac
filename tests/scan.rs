use film_locations::error::GeocodeError;
use film_locations::{scan, scan_file, Coordinate, Error, Geocoder, Resolver};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;

const LVIV: Coordinate = Coordinate::new(49.8397, 24.0297);
const DATA: &str = "./tests/data/locations.list";

struct Gazetteer {
    places: HashMap<&'static str, Coordinate>,
    lookups: RefCell<Vec<String>>,
}

impl Gazetteer {
    fn new() -> Self {
        let places = vec![
            ("Lviv, Ukraine", Coordinate::new(49.8419, 24.0316)),
            ("Lemberg", Coordinate::new(49.8419, 24.0316)),
            ("Kyiv, Ukraine", Coordinate::new(50.4501, 30.5234)),
            ("Krakow, Poland", Coordinate::new(50.0647, 19.945)),
            ("Warsaw, Poland", Coordinate::new(52.2297, 21.0122)),
            ("Budapest, Hungary", Coordinate::new(47.4979, 19.0402)),
            ("Vienna, Austria", Coordinate::new(48.2082, 16.3738)),
            ("Prague, Czech Republic", Coordinate::new(50.0755, 14.4378)),
            ("Berlin, Germany", Coordinate::new(52.52, 13.405)),
            ("Bucharest, Romania", Coordinate::new(44.4268, 26.1025)),
            ("Odesa, Ukraine", Coordinate::new(46.4825, 30.7233)),
            ("Paris, France", Coordinate::new(48.8566, 2.3522)),
            ("London, UK", Coordinate::new(51.5074, -0.1278)),
            ("Madrid, Spain", Coordinate::new(40.4168, -3.7038)),
        ]
        .into_iter()
        .collect();
        Gazetteer {
            places,
            lookups: RefCell::new(vec![]),
        }
    }

    fn lookups_of(&self, name: &str) -> usize {
        self.lookups.borrow().iter().filter(|n| *n == name).count()
    }
}

impl Geocoder for Gazetteer {
    fn lookup(&self, name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.lookups.borrow_mut().push(name.to_string());
        Ok(self.places.get(name).copied())
    }
}

#[test]
fn finds_ten_closest_unique_locations() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);

    let nearest = scan_file(Path::new(DATA), 2015, LVIV, &mut resolver).unwrap();

    let films: Vec<&str> = nearest.iter().map(|r| r.film.as_str()).collect();
    assert_eq!(
        films,
        [
            "Lviv Story",
            "Krakow Film",
            "Warsaw Film",
            "Budapest Film",
            "Kyiv Film",
            "Vienna Film",
            "Odesa Film",
            "Bucharest Film",
            "Prague Film",
            "Berlin Film",
        ]
    );
    assert!(nearest.records()[0].distance < 1.0);
    assert_eq!(nearest.records()[9].distance as i64, 800);
    assert!(nearest
        .records()
        .windows(2)
        .all(|pair| pair[0].distance <= pair[1].distance));
}

#[test]
fn looks_up_each_name_once() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);

    scan_file(Path::new(DATA), 2015, LVIV, &mut resolver).unwrap();

    assert_eq!(gazetteer.lookups_of("Lviv, Ukraine"), 1);
    assert_eq!(gazetteer.lookups_of("Atlantis"), 1);
    assert_eq!(gazetteer.lookups_of(""), 0);
    assert_eq!(gazetteer.lookups.borrow().len(), 15);
}

#[test]
fn other_years_are_ignored() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);

    let nearest = scan_file(Path::new(DATA), 1999, LVIV, &mut resolver).unwrap();

    assert_eq!(nearest.len(), 1);
    assert_eq!(nearest.records()[0].film, "\"Old Film\"");
    assert_eq!(
        nearest.records()[0].coordinate,
        Coordinate::new(50.4501, 30.5234)
    );

    let nearest = scan_file(Path::new(DATA), 1984, LVIV, &mut resolver).unwrap();
    assert!(nearest.is_empty());
}

#[test]
fn far_away_user_still_gets_ten() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);
    let madrid = Coordinate::new(40.4168, -3.7038);

    let nearest = scan_file(Path::new(DATA), 2015, madrid, &mut resolver).unwrap();

    assert_eq!(nearest.len(), 10);
    assert_eq!(nearest.records()[0].film, "\"Madrid Nights\"");
    assert_eq!(nearest.records()[0].distance, 0.0);
    let films: Vec<&str> = nearest.iter().map(|r| r.film.as_str()).collect();
    assert!(films.contains(&"Paris Film"));
    assert!(films.contains(&"London Calling"));
    assert!(!films.contains(&"Kyiv Film"));
}

#[test]
fn tolerates_invalid_bytes() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);
    let data: &[u8] = b"Lviv Story (2015)\t\xffLviv, Ukraine\n\xfe\xfd\nBerlin Film (2015)\tBerlin, Germany";

    let nearest = scan(Cursor::new(data), 2015, LVIV, &mut resolver).unwrap();

    let films: Vec<&str> = nearest.iter().map(|r| r.film.as_str()).collect();
    assert_eq!(films, ["Lviv Story", "Berlin Film"]);
}

#[test]
fn missing_file_is_an_error() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);

    let result = scan_file(Path::new("./tests/data/missing.list"), 2015, LVIV, &mut resolver);

    assert!(matches!(result, Err(Error::Io(_))));
}

/// Serves one good line, then fails like a dropped network mount.
struct BrokenSource {
    served: bool,
}

impl Read for BrokenSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "device went away"));
        }
        self.served = true;
        let line = b"Lviv Story (2015)\tLviv, Ukraine\n";
        buf[..line.len()].copy_from_slice(line);
        Ok(line.len())
    }
}

#[test]
fn read_error_aborts_the_scan() {
    let gazetteer = Gazetteer::new();
    let mut resolver = Resolver::new(&gazetteer);
    let source = BufReader::new(BrokenSource { served: false });

    let result = scan(source, 2015, LVIV, &mut resolver);

    match result {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::Other),
        other => panic!("expected read error, got {:?}", other),
    }
    assert_eq!(gazetteer.lookups_of("Lviv, Ukraine"), 1);
}
