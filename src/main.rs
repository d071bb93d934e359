use pyq_catalog::config::AppConfig;
use pyq_catalog::data::read_chapters_embedded;
use pyq_catalog::{CatalogApp, ChapterEngine};

// Dataset y motor se construyen aquí y se inyectan en la app
fn build_app(config: AppConfig) -> CatalogApp {
    let chapters = match read_chapters_embedded() {
        Ok(chapters) => chapters,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    };
    CatalogApp::new(ChapterEngine::new(chapters), config)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Lee RUST_LOG; por defecto info
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = AppConfig::load();
    log::info!("{} arrancando...", config.window_title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.initial_window_size),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(build_app(config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("web: no hay document");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("web: falta el canvas #the_canvas_id");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(build_app(AppConfig::load())))),
            )
            .await;
        if let Err(e) = result {
            log::error!("web: no se pudo arrancar eframe: {e:?}");
        }
    });
}
