use std::io::{self, Write};

use chrono::{DateTime, TimeDelta, Utc};
use unicode_width::UnicodeWidthStr;

use crate::types::Build;

/// Shown in both STATUS and AGE for builds that have no worker yet.
pub const UNASSIGNED: &str = "???";

const HEADER: [&str; 6] = ["ID", "TYPE", "PROVIDER", "PROJECT", "STATUS", "AGE"];
const COLUMN_GAP: &str = "  ";

/// The display fields of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRow {
    pub id: String,
    pub build_type: String,
    pub provider: String,
    pub project: String,
    pub status: String,
    pub age: String,
}

impl BuildRow {
    /// Derives the row for `build` as seen at `now`.
    ///
    /// The age is measured from the worker's end time whatever its status, so a
    /// worker that has not stopped yet reports the time since its zero end time.
    pub fn new(build: &Build, now: DateTime<Utc>) -> Self {
        let (status, age) = match &build.worker {
            Some(worker) => (
                worker.status.to_string(),
                short_human_duration(now - worker.end_time),
            ),
            None => (UNASSIGNED.to_string(), UNASSIGNED.to_string()),
        };

        Self {
            id: build.id.clone(),
            build_type: build.build_type.clone(),
            provider: build.provider.clone(),
            project: build.project_id.clone(),
            status,
            age,
        }
    }

    fn cells(&self) -> [&str; 6] {
        [
            &self.id,
            &self.build_type,
            &self.provider,
            &self.project,
            &self.status,
            &self.age,
        ]
    }
}

/// Formats an elapsed time in its coarsest whole unit: `42s`, `5m`, `3h`, `2d`, `1y`.
///
/// Up to a second of negative skew reads as `0s`; anything earlier is `<invalid>`.
pub fn short_human_duration(d: TimeDelta) -> String {
    let seconds = d.num_seconds();
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 60 {
        return format!("{seconds}s");
    }

    let minutes = d.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = d.num_hours();
    if hours < 24 {
        format!("{hours}h")
    } else if hours < 24 * 365 {
        format!("{}d", hours / 24)
    } else {
        format!("{}y", hours / 24 / 365)
    }
}

/// Renders `builds` as an aligned table, header first, rows in input order.
///
/// The returned text always ends with a newline.
pub fn render_table(builds: &[Build], now: DateTime<Utc>) -> String {
    let rows: Vec<BuildRow> = builds.iter().map(|b| BuildRow::new(b, now)).collect();

    // Terminal columns, so wide characters line up.
    let mut widths = HEADER.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADER, &widths);
    for row in &rows {
        push_line(&mut out, row.cells(), &widths);
    }
    out
}

/// Renders the table and writes it to `out` in one piece.
pub fn write_table<W: Write>(
    out: &mut W,
    builds: &[Build],
    now: DateTime<Utc>,
) -> io::Result<()> {
    out.write_all(render_table(builds, now).as_bytes())?;
    out.flush()
}

fn push_line(out: &mut String, cells: [&str; 6], widths: &[usize; 6]) {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        out.push_str(cell);
        if i != last {
            out.push_str(&" ".repeat(width - cell.width()));
            out.push_str(COLUMN_GAP);
        }
    }
    out.push('\n');
}
