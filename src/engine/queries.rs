use super::*;

impl ChapterEngine {
    /// Clases disponibles para la asignatura activa.
    ///
    /// Solo depende de la asignatura: activar un filtro nunca reduce las
    /// opciones de otro. Orden de primera aparición en el dataset.
    pub fn derive_available_classes(&self) -> Vec<String> {
        self.distinct_for_subject(|record| &record.class_label)
    }

    pub fn derive_available_units(&self) -> Vec<String> {
        self.distinct_for_subject(|record| &record.unit)
    }

    fn distinct_for_subject<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&ChapterRecord) -> &String,
    {
        let mut out: Vec<String> = Vec::new();
        for record in self
            .dataset
            .iter()
            .filter(|r| r.subject == self.filters.active_subject)
        {
            let value = field(record);
            if !out.contains(value) {
                out.push(value.clone());
            }
        }
        out
    }

    /// La lista derivada, en orden
    pub fn derived_list(&self) -> impl Iterator<Item = &ChapterRecord> + '_ {
        self.derived.iter().map(|&i| &self.dataset[i])
    }

    pub fn derived_len(&self) -> usize {
        self.derived.len()
    }

    pub fn chapter_at(&self, index: usize) -> Option<&ChapterRecord> {
        self.derived.get(index).map(|&i| &self.dataset[i])
    }

    /// Capítulo abierto en el detalle, si lo hay
    pub fn selected_chapter(&self) -> Option<&ChapterRecord> {
        if !self.selection.is_open {
            return None;
        }
        self.chapter_at(self.selection.current_index)
    }
}
