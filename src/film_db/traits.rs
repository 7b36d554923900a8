mod credits_reader;
pub use credits_reader::CreditsReader;
