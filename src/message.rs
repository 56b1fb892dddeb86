const MESSAGE: &str = "Random message, really secure stuff *TOP_SECRET*";

/// Returns the fixed message that gets encoded by [`crate::get_encoded_message`].
pub fn generate_message() -> &'static str {
    MESSAGE
}
