fn main() -> Result<(), eframe::Error> {
    // Set up logging (filter with RUST_LOG)
    env_logger::init();

    // Run the gallery application
    infinite_gallery::run_app()
}
