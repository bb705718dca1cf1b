use crate::animation::{Micros, SpringBack};
use crate::dial::{DialLayout, digit_max_degrees};
use crate::geometry::Point;

/// Largest forward jump accepted between two drag updates. Anything bigger
/// is the angle wrapping around past the start of the drag.
pub const MAX_ROTATION_STEP: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    /// A finger holds `digit` and may be dragging it.
    Pressed { digit: u8, first_touch: Point },
    Returning(SpringBack),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitEvent {
    Selected(u8),
    Confirmed(u8),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub should_redraw: bool,
    pub event: Option<DigitEvent>,
}

impl Outcome {
    pub fn new(should_redraw: bool, event: Option<DigitEvent>) -> Self {
        Self {
            should_redraw,
            event,
        }
    }

    fn redraw() -> Self {
        Self::new(true, None)
    }
}

/// Single-finger touch handling for the rotary dial.
#[derive(Debug, Clone)]
pub struct Dial {
    layout: DialLayout,
    max_step: f64,
    phase: Phase,
    rotation: f64,
}

impl Dial {
    pub fn new(layout: DialLayout) -> Self {
        Self {
            layout,
            max_step: MAX_ROTATION_STEP,
            phase: Phase::Idle,
            rotation: 0.0,
        }
    }

    pub fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn set_max_step(&mut self, max_step: f64) {
        self.max_step = max_step;
    }

    pub fn layout(&self) -> &DialLayout {
        &self.layout
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current rotation in degrees, clockwise.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_returning(&self) -> bool {
        matches!(self.phase, Phase::Returning(_))
    }

    pub fn resize(&mut self, layout: DialLayout) {
        self.layout = layout;
    }

    pub fn press(&mut self, point: Point) -> Outcome {
        if self.phase != Phase::Idle {
            return Outcome::default();
        }

        match self.layout.digit_at(point) {
            Some(digit) => {
                log::debug!("Pressed on {}", digit);
                self.phase = Phase::Pressed {
                    digit,
                    first_touch: point,
                };
                Outcome::new(false, Some(DigitEvent::Selected(digit)))
            }
            None => Outcome::default(),
        }
    }

    pub fn drag(&mut self, point: Point, now: Micros) -> Outcome {
        let Phase::Pressed { digit, first_touch } = self.phase else {
            return Outcome::default();
        };

        let angle = self.layout.center.angle_with(first_touch, point);
        if angle <= self.rotation || angle - self.rotation >= self.max_step {
            return Outcome::default();
        }

        self.rotation = angle;
        if angle >= digit_max_degrees(digit) {
            self.spring_back(now);
            return Outcome::new(true, Some(DigitEvent::Confirmed(digit)));
        }
        Outcome::redraw()
    }

    pub fn release(&mut self, now: Micros) -> Outcome {
        if let Phase::Pressed { .. } = self.phase {
            self.phase = Phase::Idle;
            if self.rotation != 0.0 {
                self.spring_back(now);
                return Outcome::redraw();
            }
        }
        Outcome::default()
    }

    /// Advances the return animation.
    pub fn tick(&mut self, now: Micros) -> Outcome {
        let Phase::Returning(anim) = self.phase else {
            return Outcome::default();
        };

        if anim.is_finished(now) {
            self.rotation = 0.0;
            self.phase = Phase::Idle;
        } else {
            self.rotation = anim.value_at(now);
        }
        Outcome::redraw()
    }

    fn spring_back(&mut self, now: Micros) {
        self.phase = Phase::Returning(SpringBack::new(self.rotation, now));
    }
}
