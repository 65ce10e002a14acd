use tabled::builder::Builder;
use tabled::settings::Style;

use quakemap_formats::Format;

/// List of supported input formats and their description.
///
pub fn list_formats() -> String {
    let mut builder = Builder::default();
    builder.push_record(vec!["Name", "Description"]);

    [Format::Usgs, Format::Pb2002].iter().for_each(|f| {
        builder.push_record(vec![f.to_string(), f.description().to_string()]);
    });

    let table = builder.build().with(Style::rounded()).to_string();
    format!("Listing all formats:\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats() {
        let s = list_formats();

        assert!(s.contains("usgs"));
        assert!(s.contains("pb2002"));
        assert!(!s.contains("none"));
    }
}
