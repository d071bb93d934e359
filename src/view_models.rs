// src/view_models.rs

use crate::model::{ChapterRecord, ChapterStatus, Subject};
use std::cmp::Reverse;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCount {
    pub year: String,
    pub count: u32,
}

/// Una fila de la lista de capítulos
#[derive(Clone, Debug, PartialEq)]
pub struct ChapterSummary {
    pub index: usize, // posición en la lista derivada
    pub chapter_name: String,
    pub icon: &'static str,
    pub latest: Option<YearCount>,
    pub second_latest: Option<YearCount>,
    pub is_increasing: bool,
    pub questions_solved: u32,
    pub total_questions: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YearBar {
    pub year: String,
    pub count: u32,
    pub proportion: f32, // 0.0..=1.0 respecto al año con más preguntas
}

/// Todo lo que pinta la ventana de detalle
#[derive(Clone, Debug, PartialEq)]
pub struct ChapterDetail {
    pub chapter_name: String,
    pub icon: &'static str,
    pub subject: Subject,
    pub class_label: String,
    pub unit: String,
    pub status: ChapterStatus,
    pub is_weak: bool,
    pub position: usize,
    pub count: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub total_questions: u64,
    pub questions_solved: u32,
    pub remaining: u64,
    pub completion_percentage: f32,
    pub year_bars: Vec<YearBar>,
}

#[derive(Clone, Debug)]
pub struct SubjectInfo {
    pub subject: Subject,
    pub icon: &'static str,
    pub active: bool,
}

/// Años ordenados del más reciente al más antiguo.
/// Las etiquetas que no son numéricas van al final.
pub fn years_newest_first(counts: &BTreeMap<String, u32>) -> Vec<YearCount> {
    let mut years: Vec<YearCount> = counts
        .iter()
        .map(|(year, &count)| YearCount {
            year: year.clone(),
            count,
        })
        .collect();
    // None < Some(_), así que con Reverse los fallos quedan los últimos
    years.sort_by_key(|y| Reverse(leading_year(&y.year)));
    years
}

/// Entero al principio de la etiqueta: "2024 (Shift 1)" -> 2024, "2023-24" -> 2023.
/// None si no empieza por dígitos (tras espacios y un signo opcional).
pub fn leading_year(label: &str) -> Option<i64> {
    let label = label.trim_start();
    let (negative, rest) = match label.as_bytes().first() {
        Some(b'-') => (true, &label[1..]),
        Some(b'+') => (false, &label[1..]),
        _ => (false, label),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Demasiados dígitos para i64: se satura en vez de perder el año
    let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

pub fn completion_percentage(solved: u32, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (solved as f64 / total as f64 * 100.0) as f32
}

pub fn year_bars(record: &ChapterRecord) -> Vec<YearBar> {
    let max = record.max_yearly_count();
    record
        .yearly_question_counts
        .iter()
        .map(|(year, &count)| YearBar {
            year: year.clone(),
            count,
            proportion: if max > 0 { count as f32 / max as f32 } else { 0.0 },
        })
        .collect()
}

/// Recorta el nombre para el layout compacto
pub fn truncate_name(name: &str, limit: usize) -> String {
    if name.chars().count() <= limit {
        return name.to_owned();
    }
    let head: String = name.chars().take(limit).collect();
    format!("{head}...")
}

impl ChapterSummary {
    pub fn from_record(index: usize, record: &ChapterRecord) -> Self {
        let mut years = years_newest_first(&record.yearly_question_counts).into_iter();
        let latest = years.next();
        let second_latest = years.next();
        let latest_count = latest.as_ref().map_or(0, |y| y.count);
        let second_count = second_latest.as_ref().map_or(0, |y| y.count);

        Self {
            index,
            chapter_name: record.chapter_name.clone(),
            icon: crate::icons::glyph_for(&record.chapter_name),
            latest,
            second_latest,
            is_increasing: latest_count > second_count,
            questions_solved: record.questions_solved,
            total_questions: record.total_questions(),
        }
    }

    pub fn year_label(year: &Option<YearCount>) -> String {
        match year {
            Some(y) => format!("{}: {} Qs", y.year, y.count),
            None => "-: 0 Qs".to_owned(),
        }
    }

    pub fn progress_label(&self) -> String {
        format!("{}/{} Qs", self.questions_solved, self.total_questions)
    }
}

impl ChapterDetail {
    pub fn from_record(record: &ChapterRecord, position: usize, count: usize) -> Self {
        let total = record.total_questions();
        Self {
            chapter_name: record.chapter_name.clone(),
            icon: crate::icons::glyph_for(&record.chapter_name),
            subject: record.subject,
            class_label: record.class_label.clone(),
            unit: record.unit.clone(),
            status: record.status,
            is_weak: record.is_weak,
            position,
            count,
            has_previous: position > 0,
            has_next: position + 1 < count,
            total_questions: total,
            questions_solved: record.questions_solved,
            remaining: total.saturating_sub(u64::from(record.questions_solved)),
            completion_percentage: completion_percentage(record.questions_solved, total),
            year_bars: year_bars(record),
        }
    }

    /// "3 of 12"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.position + 1, self.count)
    }

    pub fn subtitle(&self) -> String {
        format!("{} • {} • {}", self.subject.key(), self.class_label, self.unit)
    }
}
