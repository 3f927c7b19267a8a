use rand::distributions::Alphanumeric;
use rand::Rng;

pub const ALBUM_PREFIX: &str = "album";
pub const SONG_PREFIX: &str = "song";

const ID_LEN: usize = 16;

/// Prefixed random identifier, e.g. `album-Qbax5Oy7L8WKf74l`.
/// Generated once at creation; identifiers are immutable thereafter.
pub fn generate(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect();
    format!("{}-{}", prefix, suffix)
}
