use crate::search::DEFAULT_MAX_HOPS;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest chain of shared films between two actors
    Connect {
        /// Actor the chain starts from
        from: String,

        /// Actor the chain must reach
        to: String,

        /// Longest chain, in films, worth reporting
        #[arg(short = 'm', long = "max-hops", value_name = "N", default_value_t = DEFAULT_MAX_HOPS)]
        max_hops: usize,
    },

    /// List the films an actor appeared in
    Credits {
        /// The actor to look up
        actor: String,
    },

    /// List the cast of a film
    Cast {
        /// Film title, exactly as stored
        title: String,

        /// Release year
        year: u16,
    },

    /// Prompt for pairs of actors until an empty line
    Play {
        #[arg(short = 'm', long = "max-hops", value_name = "N", default_value_t = DEFAULT_MAX_HOPS)]
        max_hops: usize,
    },

    /// Show record counts and file sizes
    Info,

    /// Check both files for ordering, lookup and link consistency
    Verify,
}
