use tabled::builder::Builder;
use tabled::settings::Style;

use crate::Legend;

/// Depth legend as a table, same bands & colors as the map.
///
pub fn show_legend() -> String {
    let legend = Legend::depth();

    let mut builder = Builder::default();
    builder.push_record(vec!["Depth (km)", "Color"]);
    legend.entries.iter().for_each(|e| {
        builder.push_record(vec![e.label.clone(), e.color.to_string()]);
    });

    let table = builder.build().with(Style::rounded()).to_string();
    format!("{}:\n{table}", legend.title)
}
