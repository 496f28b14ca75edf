/// Expands a format template into an owned `String`.
///
/// The output buffer grows as needed, so long expansions are never truncated.
#[macro_export]
macro_rules! str_format {
    ($($arg: tt)*) => {
        ::std::fmt::format(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! ok_or {
    ($result: expr, $err: pat => $block: expr) => {
        match $result {
            Ok(val) => val,
            Err($err) => $block,
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_str_format() {
        assert_eq!(crate::str_format!(""), "");
        assert_eq!(crate::str_format!("{}-{}", 1, "a"), "1-a");
        assert_eq!(crate::str_format!("{:>5}", 42), "   42");

        let long = "x".repeat(1000);
        assert_eq!(crate::str_format!("<{long}>").len(), 1002);
    }

    #[test]
    fn test_ok_or() {
        let parse = |s: &str| -> i32 { crate::ok_or!(s.parse::<i32>(), _ => -1) };
        assert_eq!(parse("7"), 7);
        assert_eq!(parse("seven"), -1);
    }
}
