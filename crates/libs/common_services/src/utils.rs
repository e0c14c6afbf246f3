use app_state::UPLOAD_KEY_EXTENSION;

/// Number of random bytes in a generated object key.
const OBJECT_KEY_RANDOM_BYTES: usize = 16;

/// Generate an unpredictable object key: 16 random bytes, hex encoded, plus `.jpeg`.
#[must_use]
pub fn generate_object_key() -> String {
    let bytes: [u8; OBJECT_KEY_RANDOM_BYTES] = rand::random();
    format!("{}.{UPLOAD_KEY_EXTENSION}", hex::encode(bytes))
}

/// Similarity as shown to clients: always two decimals.
#[must_use]
pub fn format_similarity(similarity: f32) -> String {
    format!("{similarity:.2}")
}
