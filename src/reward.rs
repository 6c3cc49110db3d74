//! Reward codes handed out for a player victory.

use rand::Rng;

/// Permitted characters: uppercase letters and digits minus the
/// confusable `0`, `O`, `I` and `1`.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Code length in characters.
const CODE_LENGTH: usize = 5;

/// Generates a random 5-character reward code.
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
