use secret_message::{encoder::Base64Codec, logger};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <base64 string>", args[0]);
        std::process::exit(1);
    }

    let decoded = Base64Codec.decode_to_string(&args[1])?;
    log::info!("[Decoded Text] {decoded}");

    Ok(())
}
