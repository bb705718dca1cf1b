use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::dial::DialView;
use crate::gui::theme;
use crate::sys::call::{self, CallError};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use rotary::number::{NumberEntry, PhoneNumber};
use std::time::Duration;

const HOLD_BACKSPACE_HINT: &str = "Hold backspace to clear the whole number";
const HINT_TIMEOUT: Duration = Duration::from_secs(3);

pub struct AppModel {
    pub entry: NumberEntry,
    pub config: Config,
    pub dial: DialView,
    pub hint_visible: bool,
}

#[derive(Debug)]
pub enum AppMsg {
    DigitConfirmed(u8),
    Backspace,
    ClearNumber,
    HideHint,
    Call,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PhoneNumber, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Rotary Dialer"),
            set_default_size: (420, 640),

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 16,

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,

                    gtk::Label {
                        set_hexpand: true,
                        set_xalign: 0.0,
                        set_selectable: true,
                        add_css_class: "dialer-number",
                        #[watch]
                        set_label: model.entry.number().as_str(),
                    },

                    gtk::Button {
                        set_icon_name: "edit-clear-symbolic",
                        set_tooltip_text: Some("Delete (hold to clear)"),
                        connect_clicked => AppMsg::Backspace,

                        add_controller = gtk::GestureLongPress {
                            connect_pressed[sender] => move |gesture, _, _| {
                                // keeps the button from also seeing a click
                                gesture.set_state(gtk::EventSequenceState::Claimed);
                                sender.input(AppMsg::ClearNumber);
                            }
                        },
                    },
                },

                gtk::Revealer {
                    #[watch]
                    set_reveal_child: model.hint_visible,

                    gtk::Label {
                        set_label: HOLD_BACKSPACE_HINT,
                        add_css_class: "dialer-hint",
                    },
                },

                #[local_ref]
                drawing_area -> gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                },

                gtk::Button {
                    set_icon_name: "call-start-symbolic",
                    set_halign: gtk::Align::Center,
                    add_css_class: "dialer-call",
                    add_css_class: "suggested-action",
                    connect_clicked => AppMsg::Call,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, initial, rx) = init;

        theme::load_css();

        let drawing_area = gtk::DrawingArea::default();
        let dial = DialView::new(drawing_area.clone(), &config);

        dial.number_selected
            .subscribe(|digit| log::debug!("Selected {}", digit));
        {
            let sender = sender.clone();
            dial.number_confirmed
                .subscribe(move |digit| sender.input(AppMsg::DigitConfirmed(*digit)));
        }

        let model = AppModel {
            entry: NumberEntry::new(initial),
            config,
            dial,
            hint_visible: false,
        };

        let widgets = view_output!();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DigitConfirmed(digit) => {
                self.feedback();
                self.entry.push_digit(digit);
                self.hint_visible = false;
                log::info!("Number confirmed: {}", digit);
            }
            AppMsg::Backspace => {
                if self.entry.backspace() && self.config.feedback.hints {
                    self.hint_visible = true;
                    let sender = sender.clone();
                    glib::timeout_add_local_once(HINT_TIMEOUT, move || {
                        sender.input(AppMsg::HideHint);
                    });
                }
            }
            AppMsg::ClearNumber => {
                self.feedback();
                self.entry.clear();
                self.hint_visible = false;
            }
            AppMsg::HideHint => {
                self.hint_visible = false;
            }
            AppMsg::Call => {
                let number = self.entry.number();
                match call::place_call(&self.config.call, number) {
                    Ok(placed) => log::info!("Calling {} via {:?}", number, placed),
                    Err(CallError::EmptyNumber) => log::warn!("Nothing to call"),
                    Err(e) => log::error!("Failed to place call to {}: {}", number, e),
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.dial.apply_config(&new_config);
                    self.config = new_config;
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn feedback(&self) {
        if self.config.feedback.beep {
            self.dial.area().display().beep();
        }
    }
}
