use crate::CatalogApp;
use crate::ui::helpers::toggle_button;
use egui::{ScrollArea, Ui};

/// Selectores de clase y unidad, toggles y orden.
/// Solo recogen clics y los pasan al motor.
pub fn ui_filter_bar(app: &mut CatalogApp, ui: &mut Ui) {
    if app.compact {
        // En móvil la barra se desplaza en horizontal
        ScrollArea::horizontal()
            .id_salt("filter_scroll")
            .show(ui, |ui| ui.horizontal(|ui| filter_controls(app, ui)));
    } else {
        ui.horizontal_wrapped(|ui| filter_controls(app, ui));
    }

    ui.add_space(6.0);
    ui.label(format!("Showing {} chapters", app.engine.derived_len()));
}

fn filter_controls(app: &mut CatalogApp, ui: &mut Ui) {
    let classes = app.engine.derive_available_classes();
    let units = app.engine.derive_available_units();

    // 1) Clases
    let selected = app.engine.filters().selected_classes.len();
    ui.menu_button(menu_label("Class", selected), |ui| {
        ui.label("Classes");
        for class_label in &classes {
            let mut checked = app.engine.filters().selected_classes.contains(class_label);
            if ui.checkbox(&mut checked, class_label.as_str()).changed() {
                app.engine.toggle_class(class_label);
            }
        }
    });

    // 2) Unidades
    let selected = app.engine.filters().selected_units.len();
    ui.menu_button(menu_label("Units", selected), |ui| {
        ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
            ui.label("Units");
            for unit in &units {
                let mut checked = app.engine.filters().selected_units.contains(unit);
                if ui.checkbox(&mut checked, unit.as_str()).changed() {
                    app.engine.toggle_unit(unit);
                }
            }
        });
    });

    // 3) Toggles
    if toggle_button(ui, "Not Started", app.engine.filters().show_only_not_started) {
        app.engine.toggle_show_not_started();
    }
    if toggle_button(ui, "Weak Chapters", app.engine.filters().show_only_weak) {
        app.engine.toggle_show_weak();
    }

    // 4) Orden
    let sort_label = if app.engine.filters().sort_ascending {
        "⬆ Sort"
    } else {
        "⬇ Sort"
    };
    if ui.button(sort_label).clicked() {
        app.engine.toggle_sort_direction();
    }
}

// "Class (2)" cuando hay seleccionados
fn menu_label(name: &str, selected: usize) -> String {
    if selected > 0 {
        format!("{name} ({selected})")
    } else {
        name.to_owned()
    }
}
