use crate::cli::CliError;
use crate::search::shortest_connection;
use crate::traits::CreditsReader;
use std::io::{BufRead, Write};
use tracing::debug;

/// Asks for a name until one is found in `db` or the answer is empty.
///
/// Returns `Ok(None)` on an empty line or end of input.
pub fn prompt_for_actor<R, I, O>(
    prompt: &str,
    db: &R,
    input: &mut I,
    output: &mut O,
) -> Result<Option<String>, CliError>
where
    R: CreditsReader + ?Sized,
    I: BufRead,
    O: Write,
{
    loop {
        write!(output, "{prompt} [or <enter> to quit]: ")?;
        output.flush()?;

        let mut response = String::new();
        if input.read_line(&mut response)? == 0 {
            return Ok(None);
        }
        let response = response.trim_end_matches(['\n', '\r']);
        if response.is_empty() {
            return Ok(None);
        }

        if db.films_of_actor(response)?.is_some() {
            return Ok(Some(response.to_owned()));
        }
        writeln!(
            output,
            "We couldn't find \"{response}\" in the movie database. Please try again."
        )?;
    }
}

/// The interactive loop: two names in, a connection (or an apology) out.
pub fn play<R, I, O>(db: &R, input: &mut I, output: &mut O, max_hops: usize) -> Result<(), CliError>
where
    R: CreditsReader + ?Sized,
    I: BufRead,
    O: Write,
{
    loop {
        let Some(source) = prompt_for_actor("Actor or actress", db, input, output)? else {
            break;
        };
        let Some(target) = prompt_for_actor("Another actor or actress", db, input, output)? else {
            break;
        };

        if source == target {
            writeln!(
                output,
                "Good one.  This is only interesting if you specify two different people."
            )?;
            continue;
        }

        debug!(%source, %target, max_hops, "Searching");
        match shortest_connection(db, &source, &target, max_hops)? {
            Some(path) => writeln!(output, "{path}\n")?,
            None => writeln!(
                output,
                "\nNo path between those two people could be found.\n"
            )?,
        }
    }

    writeln!(output, "Thanks for playing!")?;
    Ok(())
}
