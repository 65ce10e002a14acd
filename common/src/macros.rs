/// Build a `PathBuf` from a list of components.
///
#[macro_export]
macro_rules! makepath {
    ($($item:expr),+) => {
        [
        $(::std::path::PathBuf::from($item),)+
        ]
        .iter()
        .collect::<::std::path::PathBuf>()
    };
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    #[rstest]
    #[case(makepath!("a"), "a")]
    #[case(makepath!("a", "b"), "a/b")]
    #[case(makepath!("/etc", "quakemap", "config.hcl"), "/etc/quakemap/config.hcl")]
    fn test_makepath(#[case] p: PathBuf, #[case] want: &str) {
        assert_eq!(PathBuf::from(want), p);
    }
}
