use unidecode::unidecode;

/// Folds an airport name into its lookup form: ASCII, lowercase, single spaces.
pub fn normalize_airport_name(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
