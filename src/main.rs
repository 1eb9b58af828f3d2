use test_rust::demo;

fn main() {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    demo::run();
}
