/// Longest chain, in actor-to-actor hops, that a search will return.
pub const DEFAULT_MAX_HOPS: usize = 6;
