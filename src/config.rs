// src/config.rs

use crate::error::ConfigError;
use crate::model::Subject;
use serde::{Deserialize, Serialize};

/// Variable de entorno con la ruta a un YAML de configuración (solo nativo)
pub const CONFIG_ENV: &str = "PYQ_CATALOG_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub initial_window_size: [f32; 2],
    /// Por debajo de este ancho se usa el layout compacto
    pub compact_breakpoint: f32,
    pub exam_title: String,
    pub exam_tagline: String,
    pub default_subject: Subject,
    pub compact_name_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "JEE Main PYQs".to_owned(),
            initial_window_size: [1100.0, 760.0],
            compact_breakpoint: 768.0,
            exam_title: "JEE Main".to_owned(),
            exam_tagline: "2025 - 2009 | 173 Papers | 15825 Qs".to_owned(),
            default_subject: Subject::Physics,
            compact_name_limit: 20,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Config del fichero indicado en `PYQ_CATALOG_CONFIG`, o la de por defecto.
    /// Un fichero roto se avisa por log y no impide arrancar.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = std::path::PathBuf::from(path);
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("config: cargada desde {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("config: {} ignorado ({e}), se usan valores por defecto", path.display());
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    pub fn is_compact(&self, screen_width: f32) -> bool {
        screen_width < self.compact_breakpoint
    }
}
