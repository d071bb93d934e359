use crate::CatalogApp;
use crate::ui::helpers::subject_color;
use egui::{Button, Context, RichText, TopBottomPanel, Vec2};

/// Pestañas de asignatura del layout compacto
pub fn ui_subject_tabs(app: &mut CatalogApp, ctx: &Context) {
    TopBottomPanel::top("subject_tabs").show(ctx, |ui| {
        ui.add_space(4.0);
        let tab_w = ((ui.available_width() - 16.0) / 3.0).max(60.0);

        ui.horizontal(|ui| {
            for info in app.subject_infos() {
                let text = RichText::new(format!("{}\n{}", info.icon, info.subject.short_label()))
                    .color(subject_color(info.subject));
                let tab = Button::new(text)
                    .selected(info.active)
                    .min_size(Vec2::new(tab_w, 44.0));
                if ui.add(tab).clicked() && !info.active {
                    app.engine.set_active_subject(info.subject);
                }
            }
        });
        ui.add_space(4.0);
    });
}
