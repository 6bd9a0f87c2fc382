use std::time::Duration;

use chrono::{Local, Timelike};
use eframe::egui::{
    self, vec2, FontData, FontDefinitions, FontFamily, FontId, Id, Pos2, Rect, RichText, Sense,
    ViewportCommand,
};
use fontdb::{Database, Family, Query, Style, Weight};
use tokio::{task, time};
use tracing::{info, warn};

use crate::clock;
use crate::geometry;
use crate::settings::Settings;

const CLOCK_FONT: &str = "topclock-font";

pub struct ClockApp {
    settings: Settings,
    font_family: FontFamily,
    placed: bool,
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let font_family = install_configured_font(&cc.egui_ctx, &settings);

        // Once-a-second repaint ticker. Each tick is scheduled relative to the
        // completion of the previous one, so there is no drift correction.
        let ctx = cc.egui_ctx.clone();
        task::spawn(async move {
            let mut interval = time::interval(Duration::from_millis(1000));
            interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                ctx.request_repaint();
            }
        });

        Self {
            settings,
            font_family,
            placed: false,
        }
    }

    fn font_id(&self) -> FontId {
        FontId::new(self.settings.font_size as f32, self.font_family.clone())
    }

    /// One-shot startup pass: measure the placeholder text at the configured
    /// font, scale it into the window size, and anchor the window on the
    /// screen. The window never moves or resizes after this.
    fn place_window(&mut self, ctx: &egui::Context) {
        let Some(screen) = ctx
            .input(|input| input.viewport().monitor_size)
            .filter(|size| size.x > 0.0 && size.y > 0.0)
        else {
            // Monitor info can lag a frame on some backends; retry next tick.
            return;
        };

        let placeholder = clock::placeholder_text(self.settings.show_seconds);
        let galley = ctx.fonts(|fonts| {
            fonts.layout_no_wrap(
                placeholder.to_owned(),
                self.font_id(),
                self.settings.font_color,
            )
        });
        let window = geometry::window_size(
            galley.size(),
            self.settings.width_scale,
            self.settings.height_scale,
        );
        let position = geometry::window_position(self.settings.anchor_position, screen, window);

        info!(
            width = window.x,
            height = window.y,
            x = position.x,
            y = position.y,
            "placing clock window"
        );
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(window));
        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(position));
        self.placed = true;
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.placed {
            self.place_window(ctx);
        }

        let now = Local::now();
        let text = clock::time_text(now.time(), self.settings.show_seconds);

        let background = egui::Frame::none().fill(self.settings.background_color);
        egui::CentralPanel::default()
            .frame(background)
            .show(ctx, |ui| {
                let app_rect = ui.max_rect();
                let response = ui.interact(app_rect, Id::new("clock"), Sense::click());
                if response.double_clicked() {
                    ui.ctx().send_viewport_cmd(ViewportCommand::Close);
                }

                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(text)
                            .font(self.font_id())
                            .color(self.settings.font_color),
                    );
                });

                let bar_height = self.settings.seconds_bar_height as f32;
                if bar_height > 0.0 {
                    let bar_width = geometry::seconds_bar_width(now.second(), app_rect.width());
                    let bar = Rect::from_min_size(
                        Pos2::new(app_rect.left(), app_rect.bottom() - bar_height),
                        vec2(bar_width, bar_height),
                    );
                    ui.painter()
                        .rect_filled(bar, 0.0, self.settings.seconds_bar_color);
                }
            });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.settings.background_color.to_normalized_gamma_f32()
    }
}

/// Looks the configured family up in the system font database and registers
/// the matching face with egui. The `font_style` string selects the face
/// (weight and slant) queried; a family the database cannot resolve falls
/// through to the toolkit's built-in proportional font.
fn install_configured_font(ctx: &egui::Context, settings: &Settings) -> FontFamily {
    let (weight, style) = face_selection(&settings.font_style);
    let mut db = Database::new();
    db.load_system_fonts();
    let query = Query {
        families: &[Family::Name(&settings.font_name)],
        weight,
        style,
        ..Query::default()
    };
    let Some(id) = db.query(&query) else {
        warn!(family = %settings.font_name, "font family not found, using the built-in font");
        return FontFamily::Proportional;
    };
    let Some(data) = db.with_face_data(id, |data, _index| data.to_vec()) else {
        warn!(family = %settings.font_name, "font face could not be read, using the built-in font");
        return FontFamily::Proportional;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CLOCK_FONT.to_owned(), FontData::from_owned(data));
    fonts.families.insert(
        FontFamily::Name(CLOCK_FONT.into()),
        vec![CLOCK_FONT.to_owned()],
    );
    ctx.set_fonts(fonts);
    FontFamily::Name(CLOCK_FONT.into())
}

fn face_selection(style: &str) -> (Weight, Style) {
    let style = style.to_ascii_lowercase();
    let weight = if style.contains("bold") {
        Weight::BOLD
    } else {
        Weight::NORMAL
    };
    let slant = if style.contains("italic") {
        Style::Italic
    } else {
        Style::Normal
    };
    (weight, slant)
}
