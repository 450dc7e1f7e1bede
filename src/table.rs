use sungrow_rs::model::Readings;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Render `readings` as an ASCII table, with an identifier column when `details` is set.
pub fn render(readings: &Readings, details: bool) -> String {
    let mut builder = Builder::default();
    if details {
        builder.push_record(["Item", "Value", "ID"]);
    } else {
        builder.push_record(["Item", "Value"]);
    }

    for (id, reading) in readings {
        let value = format!("{} {}", reading.value, reading.unit);
        if details {
            builder.push_record([reading.description.as_str(), value.as_str(), id.as_str()]);
        } else {
            builder.push_record([reading.description.as_str(), value.as_str()]);
        }
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
