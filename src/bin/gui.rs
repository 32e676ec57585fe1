fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    escape_explorer::run_gui(escape_explorer::ExplorerConfig::default())
}
