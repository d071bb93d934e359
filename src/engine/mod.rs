//! Motor de filtrado de capítulos.
//!
//! Única fuente de verdad para el estado de filtros, la lista derivada
//! (filtrada y ordenada) y la selección del detalle. Las vistas leen a través
//! del motor en cada frame y nunca guardan copias propias de [`FilterState`].

use crate::model::{ChapterRecord, FilterState, SelectionState};

// Submódulos
pub mod filters;
pub mod navigation;
pub mod queries;

#[cfg(test)]
mod tests;

pub struct ChapterEngine {
    dataset: Vec<ChapterRecord>,
    filters: FilterState,
    // Índices en `dataset`, en el orden de la lista derivada
    derived: Vec<usize>,
    selection: SelectionState,
    // Sube con cada mutación de estado; las vistas cachean contra ella
    revision: u64,
}

impl ChapterEngine {
    pub fn new(dataset: Vec<ChapterRecord>) -> Self {
        let mut engine = Self {
            dataset,
            filters: FilterState::default(),
            derived: Vec::new(),
            selection: SelectionState::default(),
            revision: 0,
        };
        engine.derived = derive_chapter_list(&engine.dataset, &engine.filters);
        engine
    }

    pub fn dataset(&self) -> &[ChapterRecord] {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recalcula la lista derivada completa y reconcilia la selección
    pub(crate) fn recompute(&mut self) {
        let previous = self.selected_dataset_index();
        self.derived = derive_chapter_list(&self.dataset, &self.filters);
        self.reconcile_selection(previous);
        self.revision += 1;
        log::debug!(
            "engine: {} capítulos para {:?} (rev {})",
            self.derived.len(),
            self.filters,
            self.revision
        );
    }

    fn selected_dataset_index(&self) -> Option<usize> {
        if !self.selection.is_open {
            return None;
        }
        self.derived.get(self.selection.current_index).copied()
    }

    /// Si el capítulo abierto sigue en la lista lo seguimos; si no, recortamos
    /// el índice. Lista vacía: se cierra el detalle.
    fn reconcile_selection(&mut self, previous: Option<usize>) {
        if !self.selection.is_open {
            return;
        }
        if self.derived.is_empty() {
            self.selection.is_open = false;
            self.selection.current_index = 0;
            log::debug!("engine: lista vacía, se cierra el detalle");
            return;
        }
        let followed = previous.and_then(|ds| self.derived.iter().position(|&i| i == ds));
        self.selection.current_index = match followed {
            Some(pos) => pos,
            None => self.selection.current_index.min(self.derived.len() - 1),
        };
    }
}

/// Filtra y ordena el dataset. Devuelve índices en `dataset`.
///
/// La ordenación es estable: a igualdad de total se mantiene el orden del
/// dataset, también en orden descendente.
pub fn derive_chapter_list(dataset: &[ChapterRecord], filters: &FilterState) -> Vec<usize> {
    let mut indices: Vec<usize> = dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.matches(record))
        .map(|(i, _)| i)
        .collect();

    // sort_by_key es estable; para descendente se invierte la clave, no la lista
    if filters.sort_ascending {
        indices.sort_by_key(|&i| dataset[i].total_questions());
    } else {
        indices.sort_by_key(|&i| std::cmp::Reverse(dataset[i].total_questions()));
    }
    indices
}
