use console::{measure_text_width, pad_str, Alignment};

pub struct Row {
    pub input: String,
    pub output: String,
}

pub fn print_table(rows: &[Row], show_input: bool) {
    print!("{}", make_table(rows, show_input));
}

/// Renders one row per line: the bare output, or, with `show_input`, the
/// input left-aligned next to the output right-aligned.
pub fn make_table(rows: &[Row], show_input: bool) -> String {
    let mut table = String::new();

    if !show_input {
        for row in rows {
            table.push_str(&row.output);
            table.push('\n');
        }
        return table;
    }

    let input_width = max_width(rows.iter().map(|r| r.input.as_str()));
    let output_width = max_width(rows.iter().map(|r| r.output.as_str()));

    for row in rows {
        table.push_str(&crate::str_format!(
            "{}   {}\n",
            pad_str(&row.input, input_width, Alignment::Left, None),
            pad_str(&row.output, output_width, Alignment::Right, None),
        ));
    }

    table
}

fn max_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(measure_text_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        [("1500", "1.5k"), ("0.0015", "1.5m"), ("7", "7")]
            .into_iter()
            .map(|(input, output)| Row {
                input: input.to_string(),
                output: output.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(make_table(&rows(), false), "1.5k\n1.5m\n7\n");
    }

    #[test]
    fn test_aligned_table() {
        let expected = "1500     1.5k\n0.0015   1.5m\n7           7\n";
        assert_eq!(make_table(&rows(), true), expected);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(make_table(&[], true), "");
        assert_eq!(make_table(&[], false), "");
    }
}
