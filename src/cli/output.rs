//! Colored terminal output helpers.
//!
//! Status messages go to stderr so stdout carries only command results
//! and stays pipeable.

use comfy_table::{ContentArrangement, Table};
use console::style;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One row of the `inspect` table.
pub struct SegmentRow {
    pub name: &'static str,
    pub len: usize,
    pub fingerprint: String,
}

/// Build a table of envelope segments (Segment, Bytes, Fingerprint).
pub fn segments_table(rows: &[SegmentRow]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Segment", "Bytes", "Fingerprint"]);

    for row in rows {
        table.add_row(vec![
            row.name.to_string(),
            row.len.to_string(),
            row.fingerprint.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_segment() {
        let rows = [
            SegmentRow {
                name: "key",
                len: 344,
                fingerprint: "AA:BB".into(),
            },
            SegmentRow {
                name: "data",
                len: 40,
                fingerprint: "CC:DD".into(),
            },
        ];
        let rendered = segments_table(&rows).to_string();
        assert!(rendered.contains("Segment"));
        assert!(rendered.contains("344"));
        assert!(rendered.contains("CC:DD"));
    }
}
