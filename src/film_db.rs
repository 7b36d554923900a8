mod film_database;
pub use film_database::FilmDatabase;

mod cached_film_database;
pub use cached_film_database::CachedFilmDatabase;

pub mod integrity;

mod mapped_file;
use mapped_file::MappedFile;

mod sorted_index;
pub use sorted_index::SortedIndex;

pub mod traits;
