use crate::CatalogApp;
use egui::{Context, RichText, Visuals};

/// Cabecera del layout compacto
pub fn compact_header(app: &CatalogApp, ctx: &Context) {
    egui::TopBottomPanel::top("compact_header").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(&app.config.exam_title).strong().size(18.0));
            ui.add_space(6.0);
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}
