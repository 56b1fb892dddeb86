use secret_message::{EXPECTED_ENCODED_MESSAGE, logger, verify_encoded_message};

fn main() {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [expected base64]", args[0]);
        std::process::exit(1);
    }

    let expected = args
        .get(1)
        .map_or(EXPECTED_ENCODED_MESSAGE, String::as_str);

    if let Err(e) = verify_encoded_message(expected) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    log::info!("[Check] Encoded message matches");
}
