use six_degrees::traits::CreditsReader;
use six_degrees::{Film, FilmDatabase};
use six_degrees_testkit::{FixtureBuilder, samples};
use tempfile::TempDir;

/// Helper function to write a fixture and open it
fn open_fixture(builder: &FixtureBuilder) -> (TempDir, FilmDatabase) {
    let dir = builder.write_temp().expect("Failed to write fixture");
    let db = FilmDatabase::open(dir.path()).expect("Failed to open database");
    (dir, db)
}

#[test]
fn test_credits_and_cast_match_the_fixture() {
    let builder = samples::branching_cast();
    let (_dir, db) = open_fixture(&builder);

    assert!(db.is_healthy());
    assert_eq!(db.actor_count().unwrap(), builder.actor_names().len());
    assert_eq!(db.movie_count().unwrap(), builder.films().len());

    for name in builder.actor_names() {
        assert_eq!(
            db.films_of_actor(name).unwrap(),
            builder.credits_of(name),
            "Credits differ for {name}"
        );
    }

    for film in builder.films() {
        assert_eq!(
            db.actors_of_film(film).unwrap(),
            builder.cast_of(film),
            "Cast differs for {film}"
        );
    }
}

#[test]
fn test_every_indexed_key_round_trips() {
    let (_dir, db) = open_fixture(&samples::actor_chain(40));

    for name in db.actor_names().unwrap() {
        let name = name.unwrap();
        let offset = db.actor_offset(&name).unwrap().expect("indexed actor");
        assert_eq!(db.decode_actor_at(offset).unwrap().name, name);
    }

    for film in db.films().unwrap() {
        let film = film.unwrap();
        let offset = db.movie_offset(&film).unwrap().expect("indexed film");
        assert_eq!(Film::from(db.decode_movie_at(offset).unwrap()), film);
    }
}

#[test]
fn test_credits_and_casts_are_symmetric() {
    let (_dir, db) = open_fixture(&samples::branching_cast());

    for name in db.actor_names().unwrap() {
        let name = name.unwrap();
        for film in db.films_of_actor(&name).unwrap().unwrap() {
            let cast = db.actors_of_film(&film).unwrap().expect("linked film exists");
            assert!(cast.contains(&name), "{film} does not list {name}");
        }
    }

    for film in db.films().unwrap() {
        let film = film.unwrap();
        for name in db.actors_of_film(&film).unwrap().unwrap() {
            let credits = db.films_of_actor(&name).unwrap().expect("linked actor exists");
            assert!(credits.contains(&film), "{name} does not list {film}");
        }
    }
}

#[test]
fn test_same_title_is_told_apart_by_year() {
    let mut builder = FixtureBuilder::new();
    builder
        .film("Hamlet", 1948, &["Laurence Olivier"])
        .film("Hamlet", 1990, &["Mel Gibson"])
        .film("Hamlet", 1996, &["Kenneth Branagh"]);
    let (_dir, db) = open_fixture(&builder);

    assert_eq!(
        db.actors_of_film(&Film::new("Hamlet", 1990)).unwrap(),
        Some(vec!["Mel Gibson".to_string()])
    );
    assert_eq!(db.actors_of_film(&Film::new("Hamlet", 2000)).unwrap(), None);
    assert_eq!(db.actors_of_film(&Film::new("Hamle", 1990)).unwrap(), None);
}

#[test]
fn test_lookups_are_case_and_byte_exact() {
    let (_dir, db) = open_fixture(&samples::alice_bob_carol());

    assert!(db.contains_actor("Alice").unwrap());
    assert!(!db.contains_actor("alice").unwrap());
    assert!(!db.contains_actor("Alice ").unwrap());
    assert!(!db.contains_actor("").unwrap());
}

#[test]
fn test_names_outside_ascii_survive() {
    let mut builder = FixtureBuilder::new();
    builder.film("Amélie", 2001, &["Audrey Tautou", "Mathieu Kassovitz"]);
    builder.film("Léon", 1994, &["Jean Reno"]);
    let (_dir, db) = open_fixture(&builder);

    assert_eq!(
        db.films_of_actor("Jean Reno").unwrap(),
        Some(vec![Film::new("Léon", 1994)])
    );
    assert!(db.actors_of_film(&Film::new("Amélie", 2001)).unwrap().is_some());
}

#[test]
fn test_empty_database_finds_nothing() {
    let (_dir, db) = open_fixture(&FixtureBuilder::new());

    assert!(db.is_healthy());
    assert_eq!(db.actor_count().unwrap(), 0);
    assert_eq!(db.films_of_actor("Anyone").unwrap(), None);
    assert_eq!(db.actors_of_film(&Film::new("Anything", 2000)).unwrap(), None);
}

#[test]
fn test_close_releases_the_files() {
    let (dir, db) = open_fixture(&samples::alice_bob_carol());
    let sizes = db.file_sizes();
    db.close();

    // Reopening maps the same bytes again.
    let reopened = FilmDatabase::open(dir.path()).expect("Failed to reopen database");
    assert_eq!(reopened.file_sizes(), sizes);
    assert_eq!(reopened.size_in_bytes(), (sizes.0 + sizes.1) as u64);
}

#[test]
fn test_open_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = FilmDatabase::open(dir.path().join("nope")).unwrap_err();
    assert!(err.is_open_error(), "Unexpected error: {err:?}");
}
