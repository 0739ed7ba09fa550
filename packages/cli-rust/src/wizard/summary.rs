//! Summary display
//!
//! Shows what is about to be registered and launched.

use comfy_table::{Cell, Table};
use console::style;
use rdp_launcher_core::{PasswordSource, Selection};

use crate::constants::PASSWORD_MASK;

/// Build the summary table rows
pub fn summary_rows(selection: &Selection) -> Vec<(&'static str, String)> {
    let credential = &selection.credential;
    let origin = match selection.password_source {
        PasswordSource::Configuration => "from config",
        PasswordSource::Prompt => "entered",
    };
    vec![
        (
            "Host:",
            format!("{} ({})", selection.host_name, credential.address),
        ),
        ("User:", credential.user.clone()),
        ("Password:", format!("{PASSWORD_MASK} ({origin})")),
    ]
}

/// Display the connection summary
pub fn display_summary(selection: &Selection) {
    println!("{}", style("Connection Summary").bold());
    println!("{}", style("-".repeat(18)).dim());

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    for (label, value) in summary_rows(selection) {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");
}
