//! Identifier and timestamp generators.

use rand::Rng;

const LOWER_ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC time as an RFC 3339 string with millisecond precision and a
/// trailing `Z`, the shape `Date.toISOString()` emits. Every `created_at` /
/// `updated_at` field in the store carries this format.
pub fn now_iso() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn random_chars(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Entity identifier: `id-<epoch millis>-<6 random alphanumerics>`.
///
/// Collision-resistant rather than collision-proof; the store never checks
/// uniqueness, and clients are free to supply their own ids on create.
pub fn entity_id() -> String {
    format!("id-{}-{}", now_millis(), random_chars(LOWER_ALNUM, 6))
}

/// Human-facing order number, e.g. `ORD-20260823-4K7Q`. Display only.
pub fn order_number() -> String {
    format!(
        "ORD-{}-{}",
        chrono::Utc::now().format("%Y%m%d"),
        random_chars(UPPER_ALNUM, 4)
    )
}

/// URL slug a customer portal is served under.
pub fn portal_slug() -> String {
    random_chars(LOWER_ALNUM, 8)
}
