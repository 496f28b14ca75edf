/// Splits `input` on every `delim`.
///
/// Empty input yields no fields. Otherwise empty fields are kept, including a
/// trailing one after a final delimiter.
pub fn str_split(input: &str, delim: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(delim).map(String::from).collect()
}
