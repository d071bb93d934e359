use super::*;
use crate::icons::glyph_for;
use crate::model::Subject;
use crate::view_models::{ChapterDetail, SubjectInfo};

impl CatalogApp {
    /// Filas de la lista derivada; se recalculan solo si el motor cambió
    pub fn summaries(&mut self) -> &[ChapterSummary] {
        let revision = self.engine.revision();
        if self.summaries.revision != Some(revision) {
            self.summaries.rows = self
                .engine
                .derived_list()
                .enumerate()
                .map(|(i, record)| ChapterSummary::from_record(i, record))
                .collect();
            self.summaries.revision = Some(revision);
        }
        &self.summaries.rows
    }

    pub fn detail(&self) -> Option<ChapterDetail> {
        let selection = self.engine.selection();
        let record = self.engine.selected_chapter()?;
        Some(ChapterDetail::from_record(
            record,
            selection.current_index,
            self.engine.derived_len(),
        ))
    }

    pub fn subject_infos(&self) -> Vec<SubjectInfo> {
        let active = self.engine.filters().active_subject;
        Subject::ALL
            .iter()
            .map(|&subject| SubjectInfo {
                subject,
                icon: glyph_for(subject.icon_key()),
                active: subject == active,
            })
            .collect()
    }
}
