use crate::Result;
use crate::film_db::traits::CreditsReader;
use crate::search::ConnectionPath;
use crate::utils::Xxh3BuildHasher;
use six_degrees_record::Film;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Breadth-first search for a shortest chain of shared films from `start` to `goal`.
///
/// Partial paths are expanded in FIFO order, so the first path that reaches
/// `goal` has the fewest possible hops. Actors and films are marked seen the
/// first time they are reached, across all paths; each is expanded at most once
/// and the returned path never repeats either.
///
/// # Parameters
/// - `reader`: Source of credits and casts.
/// - `start`, `goal`: Actor names. Callers are expected to have rejected
///   `start == goal` and checked that both exist (see
///   [`crate::search::ConnectionRequest`]); an unknown `start` simply has no films.
/// - `max_hops`: Upper bound on the hop count of a returned path.
///
/// # Returns
/// - `Ok(Some(path))`: A shortest path with `path.hops() <= max_hops`.
/// - `Ok(None)`: No path exists within `max_hops`.
/// - `Err(DatabaseError::Malformed)`: A record reached during the search was corrupt.
pub fn shortest_connection<R>(
    reader: &R,
    start: &str,
    goal: &str,
    max_hops: usize,
) -> Result<Option<ConnectionPath>>
where
    R: CreditsReader + ?Sized,
{
    let mut frontier = VecDeque::from([ConnectionPath::new(start)]);
    let mut seen_actors: HashSet<String, Xxh3BuildHasher> =
        HashSet::with_hasher(Xxh3BuildHasher);
    let mut seen_films: HashSet<Film, Xxh3BuildHasher> = HashSet::with_hasher(Xxh3BuildHasher);
    seen_actors.insert(start.to_owned());

    while let Some(path) = frontier.pop_front() {
        // Paths leave the queue in hop order, so nothing after this one is shorter.
        if path.hops() >= max_hops {
            break;
        }

        let films = reader
            .films_of_actor(path.last_actor())?
            .unwrap_or_default();

        for film in films {
            if !seen_films.insert(film.clone()) {
                continue;
            }

            let cast = reader.actors_of_film(&film)?.unwrap_or_default();
            for actor in cast {
                if !seen_actors.insert(actor.clone()) {
                    continue;
                }

                let mut next = path.clone();
                next.add_connection(film.clone(), actor);

                if next.last_actor() == goal {
                    debug!(
                        start,
                        goal,
                        hops = next.hops(),
                        actors_seen = seen_actors.len(),
                        films_seen = seen_films.len(),
                        "Connection found."
                    );
                    return Ok(Some(next));
                }

                if next.hops() < max_hops {
                    frontier.push_back(next);
                }
            }
        }
    }

    debug!(
        start,
        goal,
        max_hops,
        actors_seen = seen_actors.len(),
        films_seen = seen_films.len(),
        "No connection within the hop bound."
    );
    Ok(None)
}
