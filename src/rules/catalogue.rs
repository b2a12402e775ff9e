//! Rule catalogue table.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::rules::Rule;

/// Write every rule, in evaluation order, as a table.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_catalogue(mut out: impl io::Write) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Code", "Legacy", "Field", "Requirement"]);

    for rule in Rule::ALL {
        builder.push_record([
            rule.position().to_string(),
            rule.code().to_string(),
            rule.legacy_code().to_string(),
            rule.field().unwrap_or("-").to_string(),
            rule.description().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(0..1), Alignment::right());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "{table}")
}
