// Adapters layer: everything that turns a report into text or writes it somewhere.

pub mod console;
pub mod format;
pub mod render;

use crate::core::report::Report;
use crate::domain::ports::{OutputFormat, ReportSink};
use crate::utils::error::Result;

/// Renders `report` in `format` and hands it to `sink`.
pub fn publish<S: ReportSink>(report: &Report, format: OutputFormat, sink: &mut S) -> Result<()> {
    let text = match format {
        OutputFormat::Text => render::render_text(report),
        OutputFormat::Json => {
            let mut json = render::render_json(report)?;
            json.push('\n');
            json
        }
    };
    sink.emit(&text)
}
