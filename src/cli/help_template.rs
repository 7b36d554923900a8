use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Shortest connection between two actors
      %BINARY_NAME% connect "Kevin Bacon" "Meryl Streep"

      # Only accept chains of at most three films
      %BINARY_NAME% connect "Kevin Bacon" "Meryl Streep" --max-hops 3

      # Films of an actor
      %BINARY_NAME% credits "Kevin Bacon"

      # Cast of a film
      %BINARY_NAME% cast "Apollo 13" 1995

      # Interactive prompt
      %BINARY_NAME% play

      # Use another data directory
      SIX_DEGREES_DATA=/srv/imdb %BINARY_NAME% info
      %BINARY_NAME% --data-dir /srv/imdb verify
"#};
