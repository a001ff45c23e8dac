use crate::location::Coordinate;

/// Size of the result set.
pub const NEAREST_LIMIT: usize = 10;

/// A film location that resolved successfully, with its distance to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub film: String,
    pub coordinate: Coordinate,
    /// km
    pub distance: f64,
}

impl Record {
    pub fn new(film: impl Into<String>, coordinate: Coordinate, distance: f64) -> Self {
        Record {
            film: film.into(),
            coordinate,
            distance,
        }
    }
}

/// The closest records seen so far, ascending by distance and unique by
/// coordinate. Records with equal distances keep the order they were
/// offered in.
#[derive(Debug, Clone, Default)]
pub struct NearestLocations {
    records: Vec<Record>,
}

impl NearestLocations {
    pub fn new() -> Self {
        NearestLocations {
            records: Vec::with_capacity(NEAREST_LIMIT),
        }
    }

    fn contains(&self, coordinate: &Coordinate) -> bool {
        self.records
            .iter()
            .any(|record| record.coordinate == *coordinate)
    }

    fn insert(&mut self, record: Record) {
        self.records.push(record);
        // sort_by is stable
        self.records.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    /// Offers a record to the set, returns whether it was kept.
    pub fn offer(&mut self, record: Record) -> bool {
        if self.contains(&record.coordinate) {
            return false;
        }
        if self.records.len() < NEAREST_LIMIT {
            self.insert(record);
            return true;
        }
        match self.records.last() {
            Some(max) if record.distance < max.distance => {
                self.records.pop();
                self.insert(record);
                true
            }
            _ => false,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl IntoIterator for NearestLocations {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
