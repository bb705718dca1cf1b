use super::FONT_FACE;
use super::widget::DialState;
use crate::gui::theme::ThemeColors;
use cairo::{Context, Format, ImageSurface, Operator};
use palette::Srgba;
use rotary::dial::DialLayout;
use std::f64::consts::PI;

/// The disc with its holes punched out, rendered once per size and colour.
pub struct DiscCache {
    surface: ImageSurface,
    width: i32,
    height: i32,
    color: Srgba<f64>,
}

impl DiscCache {
    pub fn render(
        width: i32,
        height: i32,
        layout: &DialLayout,
        color: Srgba<f64>,
    ) -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, width.max(1), height.max(1))?;
        {
            let cr = Context::new(&surface)?;
            let (r, g, b, a) = color.into_components();
            cr.set_source_rgba(r, g, b, a);
            cr.arc(layout.center.x, layout.center.y, layout.radius, 0.0, 2.0 * PI);
            cr.fill()?;

            if layout.hole_radius > 0.0 {
                cr.set_operator(Operator::Clear);
                for (_, pos) in layout.hole_positions() {
                    cr.new_sub_path();
                    cr.arc(pos.x, pos.y, layout.hole_radius, 0.0, 2.0 * PI);
                }
                cr.fill()?;
            }
        }

        Ok(Self {
            surface,
            width,
            height,
            color,
        })
    }

    pub fn matches(&self, width: i32, height: i32, color: Srgba<f64>) -> bool {
        self.width == width && self.height == height && self.color == color
    }
}

pub fn draw(
    cr: &Context,
    state: &mut DialState,
    colors: &ThemeColors,
    width: i32,
    height: i32,
) -> Result<(), cairo::Error> {
    state.fit(width, height);

    let layout = *state.dial.layout();
    if !state
        .disc
        .as_ref()
        .is_some_and(|d| d.matches(width, height, colors.dial))
    {
        state.disc = Some(DiscCache::render(width, height, &layout, colors.dial)?);
    }

    draw_digits(cr, &layout, state.settings.text_size, colors)?;

    if let Some(disc) = &state.disc {
        draw_disc(cr, disc, &layout, state.dial.rotation())?;
    }
    Ok(())
}

fn draw_digits(
    cr: &Context,
    layout: &DialLayout,
    text_size: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.text.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face(FONT_FACE, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(text_size);

    for (digit, pos) in layout.hole_positions() {
        let text = digit.to_string();
        let ext = cr.text_extents(&text)?;
        // centre the ink box on the hole
        cr.move_to(
            pos.x - (ext.width() / 2.0 + ext.x_bearing()),
            pos.y - (ext.height() / 2.0 + ext.y_bearing()),
        );
        cr.show_text(&text)?;
    }
    Ok(())
}

fn draw_disc(
    cr: &Context,
    disc: &DiscCache,
    layout: &DialLayout,
    rotation: f64,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(layout.center.x, layout.center.y);
    cr.rotate(rotation.to_radians());
    cr.translate(-layout.center.x, -layout.center.y);
    cr.set_source_surface(&disc.surface, 0.0, 0.0)?;
    cr.paint()?;
    cr.restore()
}
