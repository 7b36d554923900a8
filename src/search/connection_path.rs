use six_degrees_record::Film;
use std::fmt;

/// One hop: the film shared with the previous actor, and the actor reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub film: Film,
    pub actor: String,
}

/// An alternating chain of actors and films, starting and ending with an actor.
///
/// A fresh path holds only its starting actor and has zero hops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionPath {
    start: String,
    links: Vec<Connection>,
}

impl ConnectionPath {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            links: Vec::new(),
        }
    }

    /// Extends the path by one hop through `film` to `actor`.
    pub fn add_connection(&mut self, film: Film, actor: impl Into<String>) {
        self.links.push(Connection {
            film,
            actor: actor.into(),
        });
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn links(&self) -> &[Connection] {
        &self.links
    }

    /// Number of films in the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.links.len()
    }

    /// The actor at the end of the path (the start, for an empty path).
    pub fn last_actor(&self) -> &str {
        self.links
            .last()
            .map_or(self.start.as_str(), |link| link.actor.as_str())
    }

    /// Every actor on the path, starting actor first.
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.start.as_str()).chain(self.links.iter().map(|l| l.actor.as_str()))
    }

    pub fn films(&self) -> impl Iterator<Item = &Film> {
        self.links.iter().map(|l| &l.film)
    }
}

/// One line per hop: `Alice was in "Film1" (2000) with Bob.`
impl fmt::Display for ConnectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous = self.start.as_str();
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{previous} was in {} with {}.", link.film, link.actor)?;
            previous = &link.actor;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConnectionPath {
        let mut path = ConnectionPath::new("Alice");
        path.add_connection(Film::new("Film1", 2000), "Bob");
        path.add_connection(Film::new("Film2", 2001), "Carol");
        path
    }

    #[test]
    fn empty_path_ends_at_start() {
        let path = ConnectionPath::new("Alice");
        assert_eq!(path.hops(), 0);
        assert_eq!(path.last_actor(), "Alice");
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn tracks_hops_and_terminal_actor() {
        let path = sample();
        assert_eq!(path.hops(), 2);
        assert_eq!(path.last_actor(), "Carol");
        assert_eq!(path.actors().collect::<Vec<_>>(), ["Alice", "Bob", "Carol"]);
        assert_eq!(path.films().count(), 2);
    }

    #[test]
    fn displays_one_line_per_hop() {
        assert_eq!(
            sample().to_string(),
            "Alice was in \"Film1\" (2000) with Bob.\nBob was in \"Film2\" (2001) with Carol."
        );
    }
}
