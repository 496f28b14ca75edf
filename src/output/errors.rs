pub fn print_errors<I>(errors: I)
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    eprint!("{}", make_errors(errors));
}

pub fn make_errors<I>(errors: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let lines: Vec<String> = errors.into_iter().map(|err| format!("  {err}\n")).collect();
    format!(
        "\n{} value(s) could not be read:\n{}",
        lines.len(),
        lines.concat()
    )
}
