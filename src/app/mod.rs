use crate::config::AppConfig;
use crate::engine::ChapterEngine;
use crate::view_models::ChapterSummary;

// Submódulos
pub mod view_models;

// Filas de la lista calculadas para una revisión concreta del motor
#[derive(Default)]
pub(crate) struct SummaryCache {
    revision: Option<u64>,
    rows: Vec<ChapterSummary>,
}

pub struct CatalogApp {
    pub engine: ChapterEngine,
    pub config: AppConfig,
    /// Layout compacto (pestañas en vez de barra lateral)
    pub compact: bool,
    pub(crate) summaries: SummaryCache,
}

impl CatalogApp {
    /// El motor se construye fuera y se inyecta aquí
    pub fn new(mut engine: ChapterEngine, config: AppConfig) -> Self {
        if engine.filters().active_subject != config.default_subject {
            engine.set_active_subject(config.default_subject);
        }
        log::info!(
            "app: {} capítulos en el dataset, asignatura inicial {}",
            engine.dataset().len(),
            config.default_subject
        );
        Self {
            engine,
            config,
            compact: false,
            summaries: SummaryCache::default(),
        }
    }

    /// Actualiza el flag de layout según el ancho disponible
    pub fn update_layout(&mut self, screen_width: f32) {
        let compact = self.config.is_compact(screen_width);
        if compact != self.compact {
            log::debug!("app: layout compacto = {compact}");
            self.compact = compact;
        }
    }
}
