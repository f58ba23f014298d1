use std::num::NonZeroU32;
use std::ops::Range;

/// Number of horizontal bands for `rows` rows: at most `max_bands`, and never
/// more bands than rows.
#[must_use]
pub fn calculate_band_count(max_bands: NonZeroU32, rows: u32) -> u32 {
    max_bands.get().min(rows).max(1)
}

/// Splits `0..rows` into contiguous, non-overlapping row ranges. Every band
/// gets `rows / bands` rows; the last band also takes the remainder.
#[must_use]
pub fn calculate_band_ranges(max_bands: NonZeroU32, rows: u32) -> Vec<Range<u32>> {
    let bands = calculate_band_count(max_bands, rows);
    let band_height = rows / bands;

    (0..bands)
        .map(|band| {
            let top = band * band_height;
            let bottom = if band == bands - 1 {
                rows
            } else {
                top + band_height
            };
            top..bottom
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn band_count_never_exceeds_rows() {
        assert_eq!(calculate_band_count(bands(4), 2), 2);
        assert_eq!(calculate_band_count(bands(4), 1), 1);
        assert_eq!(calculate_band_count(bands(4), 384), 4);
    }

    #[test]
    fn zero_rows_still_yields_one_empty_band() {
        assert_eq!(calculate_band_ranges(bands(4), 0), vec![0..0]);
    }

    #[test]
    fn even_split() {
        assert_eq!(
            calculate_band_ranges(bands(4), 384),
            vec![0..96, 96..192, 192..288, 288..384]
        );
    }

    #[test]
    fn last_band_takes_remainder_rows() {
        assert_eq!(calculate_band_ranges(bands(3), 10), vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn bands_cover_every_row_exactly_once() {
        for rows in 1..40 {
            for max in 1..8 {
                let ranges = calculate_band_ranges(bands(max), rows);
                let covered: Vec<u32> = ranges.into_iter().flatten().collect();

                assert_eq!(covered, (0..rows).collect::<Vec<_>>());
            }
        }
    }
}
