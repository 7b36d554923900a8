use crate::cli::{Cli, CliError, Commands, play};
use crate::film_db::integrity;
use crate::search::ConnectionRequest;
use crate::traits::CreditsReader;
use crate::utils::{format_bytes, locate_data_dir};
use crate::{CachedFilmDatabase, Film, FilmDatabase};
use std::io;
use std::process::ExitCode;
use tracing::{debug, warn};

/// Executes a parsed command line against the database it names.
///
/// Output goes to stdout. Failures are printed to stderr and turned into a
/// non-zero exit status.
///
/// # Command Handling
/// - `connect`, `credits`, `cast` and `play` go through the [`CreditsReader`]
///   seam, memoized by [`CachedFilmDatabase`] unless `--no-cache` is given.
/// - `info` and `verify` inspect the mapped files directly.
pub fn execute_command(cli: &Cli) -> ExitCode {
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let data_dir = locate_data_dir(&cli.data_dir);
    let db = FilmDatabase::open(&data_dir).map_err(|err| {
        warn!("{err}");
        CliError::Initialization(Some(err))
    })?;
    if !db.is_healthy() {
        return Err(CliError::Initialization(None));
    }

    match &cli.command {
        Commands::Connect { from, to, max_hops } => {
            connect(&*into_reader(db, cli.no_cache), from, to, *max_hops)
        }
        Commands::Credits { actor } => credits(&*into_reader(db, cli.no_cache), actor),
        Commands::Cast { title, year } => {
            cast(&*into_reader(db, cli.no_cache), Film::new(title.clone(), *year))
        }
        Commands::Play { max_hops } => {
            let reader = into_reader(db, cli.no_cache);
            let stdin = io::stdin();
            let stdout = io::stdout();
            play(&*reader, &mut stdin.lock(), &mut stdout.lock(), *max_hops)
        }
        Commands::Info => print_info(&db),
        Commands::Verify => verify(&db),
    }
}

fn into_reader(db: FilmDatabase, no_cache: bool) -> Box<dyn CreditsReader> {
    if no_cache {
        Box::new(db)
    } else {
        Box::new(CachedFilmDatabase::new(db))
    }
}

fn connect(reader: &dyn CreditsReader, from: &str, to: &str, max_hops: usize) -> Result<(), CliError> {
    let request = ConnectionRequest::new(reader, from, to)?;
    debug!(from = %request.start(), to = %request.goal(), max_hops, "Searching");

    match request.run(max_hops)? {
        Some(path) => {
            println!("{path}");
            Ok(())
        }
        None => Err(CliError::NoPath),
    }
}

fn credits(reader: &dyn CreditsReader, actor: &str) -> Result<(), CliError> {
    let films = reader
        .films_of_actor(actor)?
        .ok_or_else(|| CliError::NotFound(format!("\"{actor}\"")))?;
    for film in films {
        println!("{film}");
    }
    Ok(())
}

fn cast(reader: &dyn CreditsReader, film: Film) -> Result<(), CliError> {
    let actors = reader
        .actors_of_film(&film)?
        .ok_or_else(|| CliError::NotFound(film.to_string()))?;
    for actor in actors {
        println!("{actor}");
    }
    Ok(())
}

fn print_info(db: &FilmDatabase) -> Result<(), CliError> {
    let (actor_bytes, movie_bytes) = db.file_sizes();

    println!("\n{:=^50}", " DATABASE INFO ");
    println!("{:<25} {:?}", "DATA DIRECTORY:", db.data_dir());
    println!("{:<25} {:?}", "ACTOR FILE:", db.actor_path());
    println!("{:<25} {:?}", "MOVIE FILE:", db.movie_path());
    println!("{:-<50}", "");

    println!("{:<25} {}", "ACTORS:", db.actor_count()?);
    println!("{:<25} {}", "FILMS:", db.movie_count()?);
    println!(
        "{:<25} {}",
        "ACTOR FILE SIZE:",
        format_bytes(actor_bytes as u64)
    );
    println!(
        "{:<25} {}",
        "MOVIE FILE SIZE:",
        format_bytes(movie_bytes as u64)
    );
    println!("{:<25} {}", "TOTAL SIZE:", format_bytes(db.size_in_bytes()));

    println!("{:=<50}", "");
    Ok(())
}

fn verify(db: &FilmDatabase) -> Result<(), CliError> {
    let report = integrity::verify(db)?;

    for violation in &report.violations {
        println!("{violation}");
    }
    println!(
        "Checked {} actors, {} films and {} links.",
        report.actors_checked, report.films_checked, report.links_checked
    );

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::Integrity(report.violations.len()))
    }
}
