use super::*;

impl ChapterEngine {
    /// Abre el detalle en la posición `index` de la lista derivada.
    /// Fuera de rango no hace nada.
    pub fn select_chapter(&mut self, index: usize) -> bool {
        if index >= self.derived.len() {
            return false;
        }
        self.selection = SelectionState {
            current_index: index,
            is_open: true,
        };
        self.revision += 1;
        log::debug!("nav: abrir detalle en {index}");
        true
    }

    /// No-op si `new_index < 0` o `new_index >= len`
    pub fn navigate_to(&mut self, new_index: isize) -> bool {
        let Ok(index) = usize::try_from(new_index) else {
            return false;
        };
        if index >= self.derived.len() {
            return false;
        }
        self.selection.current_index = index;
        self.revision += 1;
        log::debug!("nav: ir a {index}");
        true
    }

    pub fn close_detail(&mut self) {
        if self.selection.is_open {
            self.selection.is_open = false;
            self.revision += 1;
            log::debug!("nav: cerrar detalle");
        }
    }

    pub fn has_previous(&self) -> bool {
        self.selection.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.selection.current_index + 1 < self.derived.len()
    }

    pub fn previous(&mut self) -> bool {
        self.navigate_to(self.selection.current_index as isize - 1)
    }

    pub fn next(&mut self) -> bool {
        self.navigate_to(self.selection.current_index as isize + 1)
    }
}
