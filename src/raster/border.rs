/// Maps a possibly out-of-range index onto `[0, len)` by mirroring across
/// the borders with the edge sample repeated (`cba|abcd|dcb`).
///
/// The pattern has period `2 * len`, so arbitrarily distant indices still
/// land inside the image. `len` must be non-zero.
pub fn reflect_index(i: isize, len: usize) -> usize {
    debug_assert!(len > 0, "reflect_index on empty axis");
    let period = (2 * len) as isize;
    let r = i.rem_euclid(period) as usize;
    if r < len {
        r
    } else {
        2 * len - 1 - r
    }
}

#[cfg(test)]
mod tests {
    use super::reflect_index;

    #[test]
    fn reflect_len1_is_constant() {
        for i in -6..=6 {
            assert_eq!(reflect_index(i, 1), 0);
        }
    }

    #[test]
    fn reflect_repeats_edge_sample() {
        let cases_len4 = [
            (-9, 1),
            (-5, 3),
            (-4, 3),
            (-3, 2),
            (-2, 1),
            (-1, 0),
            (0, 0),
            (1, 1),
            (3, 3),
            (4, 3),
            (5, 2),
            (7, 0),
            (8, 0),
            (9, 1),
        ];

        for (i, expected) in cases_len4 {
            assert_eq!(reflect_index(i, 4), expected, "index {i}");
        }
    }
}
