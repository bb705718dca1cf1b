use crate::config::ThemeConfig;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use palette::rgb::{FromHexError, Srgb};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Invalid colour '{0}': {1}")]
    InvalidColor(String, FromHexError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub dial: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    /// Configured colours win over the GTK theme.
    pub fn from_context(context: &gtk::StyleContext, theme: &ThemeConfig) -> Self {
        Self {
            dial: Self::configured(theme.dial_color.as_deref()).unwrap_or_else(|| {
                Self::lookup_color(
                    context,
                    "accent_bg_color",
                    Self::lookup_color(
                        context,
                        "theme_selected_bg_color",
                        Srgba::new(0.247, 0.318, 0.710, 1.0),
                    ),
                )
            }),
            text: Self::configured(theme.text_color.as_deref()).unwrap_or_else(|| {
                Self::lookup_color(context, "theme_fg_color", Srgba::new(0.0, 0.0, 0.0, 1.0))
            }),
        }
    }

    fn configured(hex: Option<&str>) -> Option<Srgba<f64>> {
        match parse_hex(hex?) {
            Ok(c) => Some(c),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }
}

/// Parses `#rrggbb` (the `#` is optional) into an opaque colour.
pub fn parse_hex(hex: &str) -> Result<Srgba<f64>, ThemeError> {
    let rgb: Srgb<u8> = hex
        .trim()
        .parse()
        .map_err(|e| ThemeError::InvalidColor(hex.to_string(), e))?;
    let rgb = rgb.into_format::<f64>();
    Ok(Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0))
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.dialer-number {
    font-size: 28pt;
    font-family: monospace;
    letter-spacing: 2px;
}
.dialer-hint {
    opacity: 0.7;
    font-size: small;
}
.dialer-call {
    min-width: 64px;
    min-height: 64px;
    border-radius: 32px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c = parse_hex("#ff0000").unwrap();
        assert_eq!((c.red, c.green, c.blue, c.alpha), (1.0, 0.0, 0.0, 1.0));

        let c = parse_hex("  0000ff ").unwrap();
        assert_eq!(c.blue, 1.0);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["", "#12", "blue", "#gg0000"] {
            assert!(parse_hex(bad).is_err(), "{bad} should not parse");
        }
    }
}
