use crate::CatalogApp;
use crate::ui::helpers::subject_glyph;
use egui::{Button, Context, RichText, SidePanel, Vec2};

pub fn ui_subject_sidebar(app: &mut CatalogApp, ctx: &Context) {
    SidePanel::left("subject_sidebar")
        .resizable(false)
        .exact_width(256.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading(app.config.exam_title.as_str());
            ui.label(RichText::new(&app.config.exam_tagline).small().weak());
            ui.add_space(20.0);

            let width = ui.available_width();
            for info in app.subject_infos() {
                let clicked = ui
                    .horizontal(|ui| {
                        subject_glyph(ui, info.subject, info.icon);
                        let label = format!("{} PYQs", info.subject.title());
                        ui.add(
                            Button::new(label)
                                .selected(info.active)
                                .min_size(Vec2::new(width - 40.0, 32.0)),
                        )
                        .clicked()
                    })
                    .inner;

                if clicked && !info.active {
                    app.engine.set_active_subject(info.subject);
                }
                ui.add_space(6.0);
            }
        });
}
