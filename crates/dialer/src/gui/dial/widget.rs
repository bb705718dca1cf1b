use super::DIAL_PADDING;
use super::view::{self, DiscCache};
use crate::config::{Config, DialConfig, ThemeConfig};
use crate::gui::theme::ThemeColors;
use gtk::prelude::*;
use gtk4 as gtk;
use rotary::dial::{DialLayout, Padding};
use rotary::event::Event;
use rotary::geometry::Point;
use rotary::gesture::{Dial, DigitEvent, Outcome};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialSettings {
    pub outer_padding: f64,
    pub inner_padding: f64,
    pub max_rotation_step: f64,
    pub text_size: f64,
}

impl From<&DialConfig> for DialSettings {
    fn from(cfg: &DialConfig) -> Self {
        Self {
            outer_padding: cfg.outer_padding,
            inner_padding: cfg.inner_padding,
            max_rotation_step: cfg.max_rotation_step,
            text_size: cfg.text_size,
        }
    }
}

impl DialSettings {
    pub fn layout(&self, width: i32, height: i32) -> DialLayout {
        DialLayout::new(
            width as f64,
            height as f64,
            Padding::uniform(DIAL_PADDING),
            self.outer_padding,
            self.inner_padding,
        )
    }
}

pub struct DialState {
    pub dial: Dial,
    pub settings: DialSettings,
    pub theme: ThemeConfig,
    pub disc: Option<DiscCache>,
    size: (i32, i32),
    ticking: bool,
}

impl DialState {
    pub fn new(config: &Config) -> Self {
        let settings = DialSettings::from(&config.dial);
        Self {
            dial: Dial::new(DialLayout::default()).with_max_step(settings.max_rotation_step),
            settings,
            theme: config.theme.clone(),
            disc: None,
            size: (0, 0),
            ticking: false,
        }
    }

    /// Lays the dial out for a new widget size. The disc cache notices the
    /// size change on its own.
    pub fn fit(&mut self, width: i32, height: i32) {
        if self.size != (width, height) {
            self.size = (width, height);
            self.dial.resize(self.settings.layout(width, height));
        }
    }

    pub fn apply_config(&mut self, config: &Config) {
        self.settings = DialSettings::from(&config.dial);
        self.theme = config.theme.clone();
        self.dial.set_max_step(self.settings.max_rotation_step);
        self.dial
            .resize(self.settings.layout(self.size.0, self.size.1));
        self.disc = None;
    }
}

/// The rotary dial drawn into a `DrawingArea`. Selection and confirmation
/// of digits are published through the two events.
#[derive(Clone)]
pub struct DialView {
    area: gtk::DrawingArea,
    state: Rc<RefCell<DialState>>,
    pub number_selected: Rc<Event<u8>>,
    pub number_confirmed: Rc<Event<u8>>,
}

impl DialView {
    pub fn new(area: gtk::DrawingArea, config: &Config) -> Self {
        let view = Self {
            area,
            state: Rc::new(RefCell::new(DialState::new(config))),
            number_selected: Rc::new(Event::new()),
            number_confirmed: Rc::new(Event::new()),
        };
        view.install_draw_func();
        view.install_controllers();
        view
    }

    pub fn area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn apply_config(&self, config: &Config) {
        self.state.borrow_mut().apply_config(config);
        self.area.queue_draw();
    }

    fn install_draw_func(&self) {
        let state = self.state.clone();
        self.area.set_draw_func(move |area, cr, width, height| {
            let mut state = state.borrow_mut();
            let colors = ThemeColors::from_context(&area.style_context(), &state.theme);
            if let Err(e) = view::draw(cr, &mut state, &colors, width, height) {
                log::error!("Drawing error: {}", e);
            }
        });

        let state = self.state.clone();
        self.area.connect_resize(move |_, width, height| {
            state.borrow_mut().fit(width, height);
        });
    }

    fn install_controllers(&self) {
        let drag = gtk::GestureDrag::new();

        let view = self.clone();
        drag.connect_drag_begin(move |_, x, y| {
            let outcome = view.state.borrow_mut().dial.press(Point::new(x, y));
            view.handle(outcome);
        });

        let view = self.clone();
        drag.connect_drag_update(move |gesture, dx, dy| {
            if let Some((x, y)) = gesture.start_point() {
                let outcome = view
                    .state
                    .borrow_mut()
                    .dial
                    .drag(Point::new(x + dx, y + dy), glib::monotonic_time());
                view.handle(outcome);
            }
        });

        let view = self.clone();
        drag.connect_drag_end(move |_, _, _| {
            let outcome = view
                .state
                .borrow_mut()
                .dial
                .release(glib::monotonic_time());
            view.handle(outcome);
        });

        self.area.add_controller(drag);
    }

    fn handle(&self, outcome: Outcome) {
        if outcome.should_redraw {
            self.area.queue_draw();
        }
        if self.state.borrow().dial.is_returning() {
            self.start_spring_back();
        }
        match outcome.event {
            Some(DigitEvent::Selected(digit)) => self.number_selected.emit(&digit),
            Some(DigitEvent::Confirmed(digit)) => self.number_confirmed.emit(&digit),
            None => {}
        }
    }

    /// Drives the return animation from the frame clock until the dial is
    /// back at rest.
    fn start_spring_back(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.ticking {
                return;
            }
            state.ticking = true;
        }

        let state = self.state.clone();
        self.area.add_tick_callback(move |area, clock| {
            let mut state = state.borrow_mut();
            let outcome = state.dial.tick(clock.frame_time());
            if outcome.should_redraw {
                area.queue_draw();
            }
            if state.dial.is_returning() {
                glib::ControlFlow::Continue
            } else {
                state.ticking = false;
                glib::ControlFlow::Break
            }
        });
    }
}
