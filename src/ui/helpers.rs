// src/ui/helpers.rs
use crate::model::{ChapterStatus, Subject};
use egui::{Button, Color32, Frame, Margin, RichText, Ui};

pub fn subject_color(subject: Subject) -> Color32 {
    match subject {
        Subject::Physics => Color32::from_rgb(249, 115, 22),
        Subject::Chemistry => Color32::from_rgb(34, 197, 94),
        Subject::Mathematics => Color32::from_rgb(59, 130, 246),
    }
}

pub fn status_color(status: ChapterStatus) -> Color32 {
    match status {
        ChapterStatus::Completed => Color32::from_rgb(34, 197, 94),
        ChapterStatus::InProgress => Color32::from_rgb(234, 179, 8),
        ChapterStatus::NotStarted => Color32::from_rgb(107, 114, 128),
    }
}

/// Etiqueta con fondo de color
pub fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    Frame::default()
        .fill(fill)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).small().strong());
        });
}

/// Icono de asignatura sobre su color
pub fn subject_glyph(ui: &mut Ui, subject: Subject, glyph: &str) {
    Frame::default()
        .fill(subject_color(subject))
        .inner_margin(Margin::symmetric(4, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(glyph).color(Color32::WHITE));
        });
}

/// Botón on/off. Devuelve true si se ha pulsado.
pub fn toggle_button(ui: &mut Ui, label: &str, on: bool) -> bool {
    ui.add(Button::new(label).selected(on)).clicked()
}
