use super::*;
use crate::model::Subject;
use std::collections::BTreeSet;

impl ChapterEngine {
    pub fn set_active_subject(&mut self, subject: Subject) {
        log::debug!("filters: asignatura -> {subject}");
        self.filters.active_subject = subject;
        self.recompute();
    }

    /// Sustituye el conjunto entero (no acumula)
    pub fn set_selected_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.selected_classes = classes.into_iter().map(Into::into).collect();
        self.recompute();
    }

    pub fn set_selected_units<I, S>(&mut self, units: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.selected_units = units.into_iter().map(Into::into).collect();
        self.recompute();
    }

    pub fn toggle_class(&mut self, name: &str) {
        toggle_member(&mut self.filters.selected_classes, name);
        self.recompute();
    }

    pub fn toggle_unit(&mut self, name: &str) {
        toggle_member(&mut self.filters.selected_units, name);
        self.recompute();
    }

    pub fn toggle_show_not_started(&mut self) {
        self.filters.show_only_not_started = !self.filters.show_only_not_started;
        self.recompute();
    }

    pub fn toggle_show_weak(&mut self) {
        self.filters.show_only_weak = !self.filters.show_only_weak;
        self.recompute();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.filters.sort_ascending = !self.filters.sort_ascending;
        self.recompute();
    }
}

// Diferencia simétrica de un solo elemento
fn toggle_member(set: &mut BTreeSet<String>, name: &str) {
    if !set.remove(name) {
        set.insert(name.to_owned());
    }
}
