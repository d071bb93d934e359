use crate::CatalogApp;
use crate::ui::helpers::subject_glyph;
use crate::ui::views::filter_bar::ui_filter_bar;
use crate::view_models::{ChapterSummary, truncate_name};
use egui::{CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, Sense, Ui};

pub fn ui_chapter_list(app: &mut CatalogApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        if !app.compact {
            subject_heading(app, ui);
            ui.add_space(12.0);
        }

        ui_filter_bar(app, ui);
        ui.add_space(8.0);

        let compact = app.compact;
        let name_limit = app.config.compact_name_limit;
        // Filas prestadas de la caché; solo se reconstruyen al cambiar la revisión
        let rows = app.summaries();

        if rows.is_empty() {
            ui.label("No chapters match the current filters.");
            return;
        }

        let mut clicked = None;
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            for row in rows {
                if chapter_card(ui, row, compact, name_limit) {
                    clicked = Some(row.index);
                }
                ui.add_space(6.0);
            }
        });

        if let Some(index) = clicked {
            app.engine.select_chapter(index);
        }
    });
}

fn subject_heading(app: &CatalogApp, ui: &mut Ui) {
    let subject = app.engine.filters().active_subject;
    let glyph = crate::icons::glyph_for(subject.icon_key());
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            subject_glyph(ui, subject, glyph);
            ui.heading(format!("{} PYQs", subject.title()));
        });
        ui.label(
            RichText::new(format!("Chapter-wise Collection of {} PYQs", subject.title()))
                .small()
                .weak(),
        );
    });
}

/// Dibuja una tarjeta; true si se ha pulsado
fn chapter_card(ui: &mut Ui, row: &ChapterSummary, compact: bool, name_limit: usize) -> bool {
    let name = if compact {
        truncate_name(&row.chapter_name, name_limit)
    } else {
        row.chapter_name.clone()
    };
    let (arrow, arrow_color) = if row.is_increasing {
        ("⬆", Color32::from_rgb(34, 197, 94))
    } else {
        ("⬇", Color32::from_rgb(239, 68, 68))
    };

    let response = Frame::group(ui.style())
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(row.icon).size(18.0));
                ui.label(RichText::new(name).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(row.progress_label()).weak());
                    ui.label(RichText::new("|").weak());
                    ui.label(RichText::new(ChapterSummary::year_label(&row.second_latest)).weak());
                    ui.label(RichText::new(arrow).color(arrow_color));
                    ui.label(RichText::new(ChapterSummary::year_label(&row.latest)).weak());
                });
            });
        })
        .response
        .interact(Sense::click());

    response.clicked()
}
