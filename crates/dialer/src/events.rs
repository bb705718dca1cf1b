/// Events raised outside the GTK main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ConfigReload,
}
