use secret_message::{get_encoded_message, logger};

fn main() {
    logger::setup_logger();

    log::info!("[Encoded Text] {}", get_encoded_message());
}
