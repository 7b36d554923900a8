use crate::constants::{MAX_YEAR, YEAR_BASE};
use std::cmp::Ordering;
use std::fmt;

/// A film, identified by its title and release year.
///
/// Two films are equal only if both the title and the year match. Ordering is
/// byte-wise on the title (the order `strcmp` produces, which is how the movie
/// index is sorted on disk), with ties broken by year ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Film {
    pub title: String,
    pub year: u16,
}

impl Film {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    /// Returns the byte stored after the title on disk, or `None` when the year
    /// falls outside `1900..=2155` and therefore cannot appear in a movie file.
    #[inline]
    pub fn year_byte(&self) -> Option<u8> {
        if (YEAR_BASE..=MAX_YEAR).contains(&self.year) {
            Some((self.year - YEAR_BASE) as u8)
        } else {
            None
        }
    }

    /// Three-way comparison of a raw on-disk key against this film.
    ///
    /// The result is the ordering of `(title, year)` *relative to* `self`, which is
    /// the orientation `binary_search_by` style callbacks expect.
    #[inline]
    pub fn cmp_raw(&self, title: &[u8], year: u16) -> Ordering {
        title
            .cmp(self.title.as_bytes())
            .then_with(|| year.cmp(&self.year))
    }
}

impl Ord for Film {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .as_bytes()
            .cmp(other.title.as_bytes())
            .then_with(|| self.year.cmp(&other.year))
    }
}

impl PartialOrd for Film {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.title, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_title_then_year() {
        let mut films = vec![
            Film::new("Heat", 1995),
            Film::new("Heat", 1986),
            Film::new("Alien", 1979),
            Film::new("Aliens", 1986),
        ];
        films.sort();

        assert_eq!(
            films,
            vec![
                Film::new("Alien", 1979),
                Film::new("Aliens", 1986),
                Film::new("Heat", 1986),
                Film::new("Heat", 1995),
            ]
        );
    }

    #[test]
    fn title_order_is_bytewise() {
        // Uppercase sorts before lowercase, as with strcmp.
        assert!(Film::new("Zorro", 2000) < Film::new("alien", 2000));
    }

    #[test]
    fn year_byte_covers_representable_range() {
        assert_eq!(Film::new("a", 1900).year_byte(), Some(0));
        assert_eq!(Film::new("a", 2155).year_byte(), Some(255));
        assert_eq!(Film::new("a", 1899).year_byte(), None);
        assert_eq!(Film::new("a", 2156).year_byte(), None);
    }

    #[test]
    fn cmp_raw_agrees_with_ord() {
        let heat = Film::new("Heat", 1995);
        for other in [
            Film::new("Heat", 1986),
            Film::new("Heat", 1995),
            Film::new("Heat", 2000),
            Film::new("Hea", 2000),
            Film::new("Heats", 1900),
        ] {
            assert_eq!(
                heat.cmp_raw(other.title.as_bytes(), other.year),
                other.cmp(&heat),
                "{other} vs {heat}"
            );
        }
    }

    #[test]
    fn displays_title_and_year() {
        assert_eq!(Film::new("Film1", 2000).to_string(), "\"Film1\" (2000)");
    }
}
