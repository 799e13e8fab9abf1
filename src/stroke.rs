//! Stroke lifecycle: a pure reducer over stroke events plus a thin stateful
//! wrapper that a session drives one event at a time.

use crate::geometry::Point;
use crate::input::{InputEvent, InputSource};

/// Append-only sequence of samples for the stroke being drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn starting_at(at: Point) -> Self {
        Self { points: vec![at] }
    }

    pub fn push(&mut self, at: Point) {
        self.points.push(at);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Seals the stroke. A finished stroke can be read but never extended.
    pub fn finish(self) -> FinishedStroke {
        FinishedStroke {
            points: self.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinishedStroke {
    points: Vec<Point>,
}

impl FinishedStroke {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Events the collector understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeEvent {
    Down { source: InputSource, at: Point },
    Move { source: InputSource, at: Point },
    End { source: InputSource },
    Clear,
}

impl StrokeEvent {
    /// Maps an input event onto the collector. Resizes are handled by the
    /// session and have no direct stroke counterpart.
    pub fn from_input(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::Down { source, at } => Some(Self::Down { source, at }),
            InputEvent::Move { source, at } => Some(Self::Move { source, at }),
            InputEvent::Up { source } | InputEvent::Leave { source } => {
                Some(Self::End { source })
            }
            InputEvent::Clear => Some(Self::Clear),
            InputEvent::Resize(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CollectorState {
    #[default]
    Idle,
    Drawing {
        source: InputSource,
        stroke: Stroke,
    },
}

impl CollectorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// What the session should do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Event had no effect in the current state.
    Ignored,
    /// A new stroke began; any previous trace should be wiped.
    Started,
    /// A point was appended but the stroke is still too short for a live score.
    Appended,
    /// A point was appended and the stroke is long enough for a live score.
    Sampled { count: usize },
    Finished(FinishedStroke),
    Cleared,
}

/// Pure transition function of the collector.
pub fn reduce(
    state: CollectorState,
    event: StrokeEvent,
    live_min_points: usize,
) -> (CollectorState, Effect) {
    match (state, event) {
        (_, StrokeEvent::Clear) => (CollectorState::Idle, Effect::Cleared),

        // Restarting mid-stroke abandons the old stroke
        (_, StrokeEvent::Down { source, at }) => (
            CollectorState::Drawing {
                source,
                stroke: Stroke::starting_at(at),
            },
            Effect::Started,
        ),

        (CollectorState::Drawing { source, mut stroke }, StrokeEvent::Move { source: from, at })
            if from == source =>
        {
            stroke.push(at);
            let count = stroke.len();
            let effect = if count >= live_min_points {
                Effect::Sampled { count }
            } else {
                Effect::Appended
            };
            (CollectorState::Drawing { source, stroke }, effect)
        }

        (CollectorState::Drawing { source, stroke }, StrokeEvent::End { source: from })
            if from == source =>
        {
            (CollectorState::Idle, Effect::Finished(stroke.finish()))
        }

        (state, _) => (state, Effect::Ignored),
    }
}

#[derive(Debug, Clone)]
pub struct StrokeCollector {
    state: CollectorState,
    live_min_points: usize,
}

impl StrokeCollector {
    pub fn new(live_min_points: usize) -> Self {
        Self {
            state: CollectorState::Idle,
            live_min_points,
        }
    }

    pub fn apply(&mut self, event: StrokeEvent) -> Effect {
        let state = std::mem::take(&mut self.state);
        let (next, effect) = reduce(state, event, self.live_min_points);
        self.state = next;
        effect
    }

    pub fn state(&self) -> &CollectorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Points of the stroke in progress, empty while idle.
    pub fn points(&self) -> &[Point] {
        match &self.state {
            CollectorState::Drawing { stroke, .. } => stroke.points(),
            CollectorState::Idle => &[],
        }
    }
}

impl Default for StrokeCollector {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_LIVE_MIN_POINTS)
    }
}
