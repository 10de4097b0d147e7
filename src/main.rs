use interview_portal::config::CONFIG;
use interview_portal::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} starting ({})", CONFIG.app_title, CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("🔧 API base URL: {}", CONFIG.api_base_url);
    }

    yew::Renderer::<App>::new().render();
}
