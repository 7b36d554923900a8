use proptest::prelude::*;
use rand::seq::SliceRandom;
use six_degrees::traits::CreditsReader;
use six_degrees::{Film, FilmDatabase};
use six_degrees_testkit::FixtureBuilder;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_inserted_name_is_found(
        names in prop::collection::btree_set("[A-Za-zéñüß日本 .'-]{1,16}", 1..40),
        others in prop::collection::vec("[A-Za-zéñüß日本 .'-]{0,16}", 0..20),
    ) {
        let mut shuffled = names.iter().cloned().collect::<Vec<_>>();
        shuffled.shuffle(&mut rand::rng());

        let mut builder = FixtureBuilder::new();
        for name in &shuffled {
            builder.actor(name);
        }
        let dir = builder.write_temp().unwrap();
        let db = FilmDatabase::open(dir.path()).unwrap();

        for name in &names {
            prop_assert!(db.contains_actor(name).unwrap(), "{name:?} not found");
        }
        for name in &others {
            prop_assert_eq!(db.contains_actor(name).unwrap(), names.contains(name));
        }

        let listed = db.actor_names().unwrap().collect::<Result<Vec<_>, _>>().unwrap();
        prop_assert_eq!(listed, names.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn same_title_films_are_told_apart_by_year(
        years in prop::collection::btree_set(1900u16..=2155, 1..12),
        other_year in 1900u16..=2155,
    ) {
        let mut builder = FixtureBuilder::new();
        for &year in &years {
            let star = format!("Star {year}");
            builder.film("Remake", year, &[star.as_str()]);
        }
        let dir = builder.write_temp().unwrap();
        let db = FilmDatabase::open(dir.path()).unwrap();

        for &year in &years {
            let cast = db.actors_of_film(&Film::new("Remake", year)).unwrap();
            prop_assert_eq!(cast, Some(vec![format!("Star {year}")]));
        }

        let found = db.actors_of_film(&Film::new("Remake", other_year)).unwrap().is_some();
        prop_assert_eq!(found, years.contains(&other_year));

        let listed = db.films().unwrap().map(|film| film.unwrap().year).collect::<BTreeSet<_>>();
        prop_assert_eq!(listed, years);
    }

    #[test]
    fn mixed_titles_and_years_are_found_by_byte_order(
        films in prop::collection::btree_set(("[a-zA-Zéü日本ß ]{1,12}", 1900u16..=2155), 1..30),
        others in prop::collection::vec(("[a-zA-Zéü日本ß ]{1,12}", 1900u16..=2155), 0..20),
    ) {
        let mut shuffled = films.iter().cloned().collect::<Vec<_>>();
        shuffled.shuffle(&mut rand::rng());

        let mut builder = FixtureBuilder::new();
        for (i, (title, year)) in shuffled.iter().enumerate() {
            let star = format!("Cast {i}");
            builder.film(title, *year, &[star.as_str()]);
        }
        let dir = builder.write_temp().unwrap();
        let db = FilmDatabase::open(dir.path()).unwrap();

        for (title, year) in &films {
            let film = Film::new(title.as_str(), *year);
            prop_assert!(db.actors_of_film(&film).unwrap().is_some(), "{film} not found");
        }
        for (title, year) in &others {
            let found = db.actors_of_film(&Film::new(title.as_str(), *year)).unwrap().is_some();
            prop_assert_eq!(found, films.contains(&(title.clone(), *year)));
        }

        // `(String, u16)` tuples order by title bytes, then year.
        let listed = db.films().unwrap().collect::<Result<Vec<_>, _>>().unwrap();
        let expected = films
            .iter()
            .map(|(title, year)| Film::new(title.as_str(), *year))
            .collect::<Vec<_>>();
        prop_assert_eq!(listed, expected);
    }
}
