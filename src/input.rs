//! Logical input events and the CSV event-log format used to replay them.
//!
//! Pointer and touch devices feed the same three gestures (down, move, end).
//! `pointerup`, `pointerleave` and `touchend` all finish a stroke; the
//! distinction is kept only so recorded logs stay faithful to the device.

use crate::error::{CfResult, CircleForgeError};
use crate::geometry::{Point, SurfaceDimensions};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// Device family that produced an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputSource {
    #[default]
    Pointer,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Down { source: InputSource, at: Point },
    Move { source: InputSource, at: Point },
    Up { source: InputSource },
    Leave { source: InputSource },
    Clear,
    Resize(SurfaceDimensions),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Down,
    Move,
    Up,
    Leave,
    Clear,
    Resize,
}

/// One row of an event log: `source,kind,x,y`.
///
/// For `resize` rows `x` and `y` carry the new width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub source: Option<InputSource>,
    pub kind: EventKind,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl EventRecord {
    pub fn into_event(self) -> CfResult<InputEvent> {
        let source = self.source.unwrap_or_default();
        let event = match self.kind {
            EventKind::Down => InputEvent::Down {
                source,
                at: self.coords()?,
            },
            EventKind::Move => InputEvent::Move {
                source,
                at: self.coords()?,
            },
            EventKind::Up => InputEvent::Up { source },
            EventKind::Leave => InputEvent::Leave { source },
            EventKind::Clear => InputEvent::Clear,
            EventKind::Resize => {
                let p = self.coords()?;
                InputEvent::Resize(SurfaceDimensions::new(p.x, p.y)?)
            }
        };
        Ok(event)
    }

    fn coords(&self) -> CfResult<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Point::new(x, y)),
            _ => Err(CircleForgeError::Validation(format!(
                "'{}' event requires finite x and y",
                self.kind
            ))),
        }
    }
}

pub fn read_event_log<R: Read>(reader: R) -> CfResult<Vec<InputEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut events = Vec::new();
    for (i, result) in rdr.deserialize::<EventRecord>().enumerate() {
        let record = result?;
        let event = record.into_event().map_err(|e| {
            // Row 1 is the header
            CircleForgeError::Validation(format!("Event log row {}: {}", i + 2, e))
        })?;
        events.push(event);
    }
    Ok(events)
}

pub fn load_event_log<P: AsRef<Path>>(path: P) -> CfResult<Vec<InputEvent>> {
    let file = File::open(path)?;
    read_event_log(file)
}
