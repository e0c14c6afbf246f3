pub const SETTINGS_PATH: &str = "assets/settings.yaml";

/// Images already registered in the bucket when the suite starts.
pub const SEEDED_IMAGES: [&str; 3] = ["alice.jpeg", "bob.jpeg", "carol.jpeg"];

pub const CAPTURED_FRAME: &[u8] = b"\xFF\xD8\xFF\xE0 captured frame";

pub const UPLOAD_KEY_LEN: usize = 32 + ".jpeg".len();
