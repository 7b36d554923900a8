use crate::Result;
use six_degrees_record::Film;
use std::sync::Arc;

/// The two navigation queries the connection search needs.
pub trait CreditsReader {
    /// Returns every film the named actor appears in.
    ///
    /// # Returns:
    /// - `Ok(Some(films))`: The actor exists; `films` may be empty.
    /// - `Ok(None)`: No actor by that name.
    /// - `Err(DatabaseError::Malformed)`: The matched record could not be decoded.
    fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>>;

    /// Returns every actor credited in `film`.
    ///
    /// # Returns:
    /// - `Ok(Some(actors))`: The film exists.
    /// - `Ok(None)`: No film with that exact title and year.
    /// - `Err(DatabaseError::Malformed)`: The matched record could not be decoded.
    fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>>;
}

impl<T: CreditsReader + ?Sized> CreditsReader for &T {
    fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        (**self).films_of_actor(actor)
    }

    fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>> {
        (**self).actors_of_film(film)
    }
}

impl<T: CreditsReader + ?Sized> CreditsReader for Arc<T> {
    fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        (**self).films_of_actor(actor)
    }

    fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>> {
        (**self).actors_of_film(film)
    }
}

impl<T: CreditsReader + ?Sized> CreditsReader for Box<T> {
    fn films_of_actor(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        (**self).films_of_actor(actor)
    }

    fn actors_of_film(&self, film: &Film) -> Result<Option<Vec<String>>> {
        (**self).actors_of_film(film)
    }
}
