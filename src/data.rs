// src/data.rs

use crate::error::DatasetError;
use crate::model::{ChapterRecord, Subject};
use std::collections::HashSet;

/// Carga el banco de capítulos desde el YAML embebido
pub fn read_chapters_embedded() -> Result<Vec<ChapterRecord>, DatasetError> {
    let file_content = include_str!("data/chapters.yaml");
    parse_chapters(file_content)
}

/// Parsea una lista de capítulos. Respeta el orden del documento.
pub fn parse_chapters(yaml: &str) -> Result<Vec<ChapterRecord>, DatasetError> {
    let chapters: Vec<ChapterRecord> = serde_yaml::from_str(yaml)?;

    // Nombres repetidos dentro de una asignatura: solo avisamos
    let mut seen: HashSet<(Subject, &str)> = HashSet::new();
    for chapter in &chapters {
        if !seen.insert((chapter.subject, chapter.chapter_name.as_str())) {
            log::warn!(
                "dataset: capítulo repetido en {}: {}",
                chapter.subject,
                chapter.chapter_name
            );
        }
    }

    log::info!("dataset: {} capítulos cargados", chapters.len());
    Ok(chapters)
}
