use core::convert::Infallible;

use tracing::Level;

use storage_events::{EventSink, StorageEvent, StorageEvents};

/// Writes every consumed event as one structured log record.
///
/// Fields: `index` (position in the collection), `event_type`, `attribute_count`
/// and `attributes` as compact JSON (`[{"key":..,"value":..}]`), so the wire
/// field names show up unchanged in the logs.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl TracingSink {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    fn log(&self, index: usize, event: &StorageEvent) {
        let attributes = serde_json::to_string(event.attributes())
            .unwrap_or_else(|e| format!("<unencodable: {e}>"));

        macro_rules! record {
            ($lvl:expr) => {
                tracing::event!(
                    $lvl,
                    index,
                    event_type = event.event_type(),
                    attribute_count = event.attributes().len(),
                    attributes = %attributes,
                    "storage event"
                )
            };
        }

        // Callsite levels are static, so each one gets its own macro expansion.
        if self.level == Level::TRACE {
            record!(Level::TRACE)
        } else if self.level == Level::DEBUG {
            record!(Level::DEBUG)
        } else if self.level == Level::INFO {
            record!(Level::INFO)
        } else if self.level == Level::WARN {
            record!(Level::WARN)
        } else {
            record!(Level::ERROR)
        }
    }
}

impl EventSink for TracingSink {
    type Error = Infallible;

    fn consume(&mut self, events: &StorageEvents) -> Result<(), Self::Error> {
        for (index, event) in events.iter().enumerate() {
            self.log(index, event);
        }
        Ok(())
    }
}
