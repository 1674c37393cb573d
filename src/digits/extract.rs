use log::debug;

/// Decompose a non-negative integer into its decimal digits, most
/// significant first. Zero decomposes to a single `0` digit so the
/// result is never empty.
pub fn digits_of(source: u64) -> Vec<u8> {
    if source == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    let mut rest = source;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();

    debug!("Decomposed {} into {} digits", source, digits.len());
    digits
}
