use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Subject {
    #[default]
    Physics,
    Chemistry,
    Mathematics,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("asignatura desconocida: {0:?}")]
pub struct ParseSubjectError(pub String);

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    /// Clave en minúsculas, la misma que usa el dataset
    pub fn key(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Mathematics => "mathematics",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        }
    }

    /// Etiqueta corta para las pestañas del layout compacto
    pub fn short_label(self) -> &'static str {
        match self {
            Subject::Physics => "Phy",
            Subject::Chemistry => "Chem",
            Subject::Mathematics => "Math",
        }
    }

    // Nombre con el que se resuelve el icono (matemáticas usa "maths")
    pub fn icon_key(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Mathematics => "maths",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physics" => Ok(Subject::Physics),
            "chemistry" => Ok(Subject::Chemistry),
            "mathematics" => Ok(Subject::Mathematics),
            _ => Err(ParseSubjectError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Subject {
    type Error = ParseSubjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.key().to_owned()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChapterStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ChapterStatus {
    pub fn label(self) -> &'static str {
        match self {
            ChapterStatus::NotStarted => "Not Started",
            ChapterStatus::InProgress => "In Progress",
            ChapterStatus::Completed => "Completed",
        }
    }
}

/// Un capítulo tal y como viene en el dataset embebido. Nunca se modifica.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChapterRecord {
    pub subject: Subject,
    #[serde(rename = "chapter")]
    pub chapter_name: String,
    #[serde(rename = "class")]
    pub class_label: String,
    pub unit: String,
    #[serde(rename = "yearWiseQuestionCount", default)]
    pub yearly_question_counts: BTreeMap<String, u32>,
    #[serde(rename = "questionSolved", default)]
    pub questions_solved: u32,
    pub status: ChapterStatus,
    #[serde(rename = "isWeakChapter", default)]
    pub is_weak: bool,
}

impl ChapterRecord {
    /// Suma de preguntas de todos los años (0 si no hay años).
    /// Se acumula en u64: cada año cabe en u32, la suma no tiene por qué.
    pub fn total_questions(&self) -> u64 {
        self.yearly_question_counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn max_yearly_count(&self) -> u32 {
        self.yearly_question_counts.values().copied().max().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub active_subject: Subject,
    pub selected_classes: BTreeSet<String>, // vacío = sin restricción
    pub selected_units: BTreeSet<String>,   // vacío = sin restricción
    pub show_only_not_started: bool,
    pub show_only_weak: bool,
    pub sort_ascending: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_subject: Subject::Physics,
            selected_classes: BTreeSet::new(),
            selected_units: BTreeSet::new(),
            show_only_not_started: false,
            show_only_weak: false,
            sort_ascending: true,
        }
    }
}

impl FilterState {
    /// Los cinco predicados de filtrado, en conjunción
    pub fn matches(&self, record: &ChapterRecord) -> bool {
        record.subject == self.active_subject
            && (self.selected_classes.is_empty() || self.selected_classes.contains(&record.class_label))
            && (self.selected_units.is_empty() || self.selected_units.contains(&record.unit))
            && (!self.show_only_not_started || record.status == ChapterStatus::NotStarted)
            && (!self.show_only_weak || record.is_weak)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_index: usize,
    pub is_open: bool,
}
