use std::io::{self, Write};

use swish_models::{Category, CategoryStats, CategoryTable};
use swish_utils::format_bytes;

const COLUMN_WIDTH: usize = 20;

/// Writes `table` as a fixed-width grid: one column per category, one row
/// per counter.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_table<W: Write>(out: &mut W, table: &CategoryTable) -> io::Result<()> {
    write!(out, "{:<COLUMN_WIDTH$}", "Freed")?;
    for category in Category::ALL {
        write!(out, "{:<COLUMN_WIDTH$}", category.label())?;
    }
    writeln!(out)?;

    let rows: [(&str, fn(&CategoryStats) -> String); 3] = [
        ("Space", |s| format_bytes(s.bytes_freed)),
        ("Files", |s| s.files_deleted.to_string()),
        ("Directories", |s| s.dirs_removed.to_string()),
    ];

    for (label, cell) in rows {
        write!(out, "{label:<COLUMN_WIDTH$}")?;
        for (_, stats) in table.iter() {
            write!(out, "{:<COLUMN_WIDTH$}", cell(stats))?;
        }
        writeln!(out)?;
    }

    writeln!(out)
}
