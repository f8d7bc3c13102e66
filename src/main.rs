fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = curve_explorer::ExplorerConfig::default();
    curve_explorer::explorer_controller(&config)
}
