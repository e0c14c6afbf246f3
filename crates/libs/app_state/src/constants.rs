/// Collection searched and populated when none is configured.
pub const DEFAULT_COLLECTION_ID: &str = "prototype-users";

/// Minimum similarity (0-100) a candidate needs to be returned by a face search.
pub const DEFAULT_FACE_MATCH_THRESHOLD: f32 = 85.0;

/// Upper bound on the number of matches a single face search returns.
pub const DEFAULT_MAX_FACES: i32 = 50;

pub const DEFAULT_UPLOAD_URL_EXPIRY_SECS: u64 = 60;
pub const DEFAULT_IMAGE_URL_EXPIRY_SECS: u64 = 3600;

/// Content type of captured frames, and the extension of their object keys.
pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";
pub const UPLOAD_KEY_EXTENSION: &str = "jpeg";

/// Number of faces `list-faces` prints unless told otherwise.
pub const DEFAULT_LIST_FACES_MAX_RESULTS: i32 = 100;

pub(crate) const fn default_face_match_threshold() -> f32 {
    DEFAULT_FACE_MATCH_THRESHOLD
}

pub(crate) const fn default_max_faces() -> i32 {
    DEFAULT_MAX_FACES
}

pub(crate) const fn default_upload_url_expiry_secs() -> u64 {
    DEFAULT_UPLOAD_URL_EXPIRY_SECS
}

pub(crate) const fn default_image_url_expiry_secs() -> u64 {
    DEFAULT_IMAGE_URL_EXPIRY_SECS
}

pub(crate) fn default_collection_id() -> String {
    DEFAULT_COLLECTION_ID.to_owned()
}
