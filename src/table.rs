//! Rendering of the generated table.
//!
//! One record per accepted position: the quoted move-string, a colon, and
//! the ascending best-column list, with a trailing comma so records paste
//! directly into the consuming lookup literal. The closing-brace trailer
//! finishes that literal; callers producing a different format switch it
//! off.

use std::io::{self, Write};

use crate::score::BestMoves;

/// Output settings, loadable from the `[output]` config section.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit the closing `}` after the last record.
    pub emit_closer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { emit_closer: true }
    }
}

/// Render a single table record, e.g. `"123456": [0, 2, 6],`
pub fn render_record(best: &BestMoves) -> String {
    let columns: Vec<String> = best.columns.iter().map(usize::to_string).collect();
    format!("{:?}: [{}],", best.position, columns.join(", "))
}

/// Stream records to a writer, one line each, followed by the closer when
/// requested.
pub fn write_table<W, I>(writer: &mut W, records: I, emit_closer: bool) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = BestMoves>,
{
    for record in records {
        writeln!(writer, "{}", render_record(&record))?;
    }
    if emit_closer {
        writeln!(writer, "}}")?;
    }
    Ok(())
}
