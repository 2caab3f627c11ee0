fn main() {
    env_logger::init();
    reskit::app::cli::run();
}
