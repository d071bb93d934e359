use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no se pudo parsear el dataset de capítulos: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer el fichero de configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuración inválida: {0}")]
    Parse(#[from] serde_yaml::Error),
}
