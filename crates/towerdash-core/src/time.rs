/// Milliseconds since the Unix epoch. Animation and timer expiries in the
/// simulation are expressed against this clock so they stay correct when
/// the tick rate varies.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
