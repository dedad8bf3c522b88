//! Command module structure for the tally CLI

use tally::record::{CountedRecord, CounterError};
use tally::ui::format::capitalize;
use tally::ui::Output;

pub mod config;
pub mod record;
pub mod session;

/// Report the outcome of a counter update: the new value on success, the
/// rejection as a warning otherwise. Rejections never abort the command.
pub fn report_counter<R: CountedRecord>(
    output: &Output,
    record: &R,
    result: Result<(), CounterError>,
) {
    match result {
        Ok(()) => output.success(&format!(
            "{}: {}",
            capitalize(record.counter().label()),
            record.count()
        )),
        Err(e) => {
            output.warn(&e.to_string());
            output.detail(&format!(
                "{} unchanged at {}",
                record.counter().label(),
                record.count()
            ));
        }
    }
}
