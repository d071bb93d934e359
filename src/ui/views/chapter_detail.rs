use crate::CatalogApp;
use crate::ui::helpers::{badge, status_color, subject_glyph};
use crate::view_models::ChapterDetail;
use egui::{Button, Color32, Context, Grid, ProgressBar, RichText, ScrollArea, Ui, Window};

pub fn ui_chapter_detail(app: &mut CatalogApp, ctx: &Context) {
    let Some(detail) = app.detail() else {
        return;
    };

    let mut open = true;
    let mut go_previous = false;
    let mut go_next = false;

    Window::new(RichText::new(&detail.chapter_name).strong())
        .id(egui::Id::new("chapter_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(560.0)
        .show(ctx, |ui| {
            // Cabecera + navegación
            ui.horizontal(|ui| {
                subject_glyph(ui, detail.subject, detail.icon);
                ui.label(RichText::new(detail.subtitle()).weak());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    go_next = ui.add_enabled(detail.has_next, Button::new("▶")).clicked();
                    ui.label(detail.position_label());
                    go_previous = ui.add_enabled(detail.has_previous, Button::new("◀")).clicked();
                });
            });
            ui.separator();

            ScrollArea::vertical().max_height(520.0).show(ui, |ui| {
                status_section(ui, &detail);
                ui.add_space(12.0);
                statistics_section(ui, &detail);
                ui.add_space(12.0);
                distribution_section(ui, &detail);
            });
        });

    if !open {
        app.engine.close_detail();
    } else if go_previous {
        app.engine.previous();
    } else if go_next {
        app.engine.next();
    }
}

fn status_section(ui: &mut Ui, detail: &ChapterDetail) {
    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Status").strong());
        cols[0].horizontal(|ui| {
            badge(ui, detail.status.label(), status_color(detail.status));
            if detail.is_weak {
                badge(ui, "Weak Chapter", Color32::from_rgb(220, 38, 38));
            }
        });

        cols[1].label(RichText::new("Progress").strong());
        cols[1].horizontal(|ui| {
            ui.label("Questions Solved");
            ui.label(format!("{} / {}", detail.questions_solved, detail.total_questions));
        });
        cols[1].add(ProgressBar::new(detail.completion_percentage / 100.0).desired_height(8.0));
        cols[1].label(
            RichText::new(format!("{:.1}% completed", detail.completion_percentage))
                .small()
                .weak(),
        );
    });
}

fn statistics_section(ui: &mut Ui, detail: &ChapterDetail) {
    ui.label(RichText::new("Question Statistics").strong());
    Grid::new("chapter_stats_grid")
        .num_columns(4)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new(detail.total_questions.to_string()).heading());
            ui.label(
                RichText::new(detail.questions_solved.to_string())
                    .heading()
                    .color(Color32::from_rgb(22, 163, 74)),
            );
            ui.label(
                RichText::new(detail.remaining.to_string())
                    .heading()
                    .color(Color32::from_rgb(234, 88, 12)),
            );
            ui.label(
                RichText::new(format!("{:.0}%", detail.completion_percentage))
                    .heading()
                    .color(Color32::from_rgb(37, 99, 235)),
            );
            ui.end_row();

            ui.label(RichText::new("Total Questions").small().weak());
            ui.label(RichText::new("Solved").small().weak());
            ui.label(RichText::new("Remaining").small().weak());
            ui.label(RichText::new("Complete").small().weak());
            ui.end_row();
        });
}

fn distribution_section(ui: &mut Ui, detail: &ChapterDetail) {
    ui.label(RichText::new("Year-wise Question Distribution").strong());
    if detail.year_bars.is_empty() {
        ui.label(RichText::new("No yearly data.").weak());
        return;
    }
    for bar in &detail.year_bars {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&bar.year).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{} questions", bar.count)).weak());
            });
        });
        ui.add(ProgressBar::new(bar.proportion).desired_height(6.0));
    }
}
