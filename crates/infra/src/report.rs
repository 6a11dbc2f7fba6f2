// crates/infra/src/report.rs
use std::io::Write;

use count_values_ports::report::{CountReport, ReportWriter};
use count_values_shared_kernel::Result;

/// Pretty-printed JSON array of `{"key", "value", "count"}` objects.
pub struct JsonReportWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_report(&mut self, report: &CountReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &report.entries)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonLinesReportWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonLinesReportWriter<W> {
    fn write_report(&mut self, report: &CountReport) -> Result<()> {
        for entry in &report.entries {
            serde_json::to_writer(&mut self.out, entry)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Aligned `KEY VALUE COUNT` columns followed by a per-column footer.
pub struct TableReportWriter<W: Write> {
    out: W,
}

impl<W: Write> TableReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TableReportWriter<W> {
    fn write_report(&mut self, report: &CountReport) -> Result<()> {
        let key_width = report.entries.iter().map(|e| width(&e.key)).fold(width("KEY"), usize::max);
        let value_width = report.entries.iter().map(|e| width(&e.value)).fold(width("VALUE"), usize::max);

        writeln!(self.out, "{}  {}  {:>9}", pad("KEY", key_width), pad("VALUE", value_width), "COUNT")?;
        writeln!(self.out, "{}", "-".repeat(key_width + value_width + 13))?;
        for entry in &report.entries {
            writeln!(
                self.out,
                "{}  {}  {:>9}",
                pad(&entry.key, key_width),
                pad(&entry.value, value_width),
                entry.count
            )?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "{} rows", report.rows)?;
        for column in &report.columns {
            writeln!(self.out, "{}: {} distinct / {} total", column.column, column.distinct, column.total)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

// Display width approximated by char count.
fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, target: usize) -> String {
    let mut padded = String::with_capacity(s.len() + target);
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', target.saturating_sub(width(s))));
    padded
}
