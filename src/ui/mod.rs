mod helpers;
pub mod layout;
pub mod views;

use crate::app::CatalogApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, compact_header};

impl App for CatalogApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.update_layout(ctx.screen_rect().width());

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Compacto: cabecera + pestañas. Ancho: barra lateral de asignaturas
        if self.compact {
            compact_header(self, ctx);
            views::subject_tabs::ui_subject_tabs(self, ctx);
        } else {
            views::sidebar::ui_subject_sidebar(self, ctx);
        }

        views::chapter_list::ui_chapter_list(self, ctx);

        // El detalle va encima de todo lo demás
        views::chapter_detail::ui_chapter_detail(self, ctx);
    }
}
