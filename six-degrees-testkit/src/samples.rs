use crate::FixtureBuilder;

/// `Alice -[Film1 (2000)]- Bob -[Film2 (2001)]- Carol`.
pub fn alice_bob_carol() -> FixtureBuilder {
    let mut builder = FixtureBuilder::new();
    builder
        .film("Film1", 2000, &["Alice", "Bob"])
        .film("Film2", 2001, &["Bob", "Carol"]);
    builder
}

/// A chain `A0 - A1 - ... - A{len}` where film `F{i}` pairs `A{i}` and `A{i+1}`,
/// plus an isolated actor `Loner`. The distance from `A0` to `A{k}` is `k`.
pub fn actor_chain(len: usize) -> FixtureBuilder {
    let mut builder = FixtureBuilder::new();
    for i in 0..len {
        let left = format!("A{i}");
        let right = format!("A{}", i + 1);
        builder.film(&format!("F{i}"), 1950 + (i % 100) as u16, &[&left, &right]);
    }
    builder.actor("Loner");
    builder
}

/// Two routes from `Start` to `Goal`: a direct two-hop route through `Mid`
/// and a three-hop detour, plus films sharing a title across years.
pub fn branching_cast() -> FixtureBuilder {
    let mut builder = FixtureBuilder::new();
    builder
        .film("Detour", 1990, &["Start", "X"])
        .film("Detour", 1991, &["X", "Y"])
        .film("Long Way", 1992, &["Y", "Goal"])
        .film("Opening", 2010, &["Start", "Mid", "Extra"])
        .film("Closing", 2011, &["Mid", "Goal"])
        .film("Unrelated", 2020, &["Extra"]);
    builder
}
