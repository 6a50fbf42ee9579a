//! Tests for merge sort

#[cfg(test)]
mod tests {
    use crate::{SAMPLE, assert_sorted_permutation, settle_order, sort_instantly};
    use sortviz::sorting::SortAlgorithm;

    // Tests merged ranges settle in post-order
    // Verified by merging the right half first
    #[test]
    fn test_merged_ranges_settle() {
        let (report, recorder) = sort_instantly(SortAlgorithm::Merge, &SAMPLE);

        assert_sorted_permutation(&SAMPLE, &report);
        assert_eq!(settle_order(&recorder), vec![0, 1, 2, 3, 4, 5]);
    }

    // Tests the first merged pair is ordered before anything else moves
    // Verified by merging with the halves swapped
    #[test]
    fn test_first_merge() {
        let (_, recorder) = sort_instantly(SortAlgorithm::Merge, &SAMPLE);
        let first_settled = recorder
            .sort_frames
            .iter()
            .find(|frame| !frame.settled.is_empty())
            .expect("Merge settles positions");

        assert_eq!(first_settled.settled, vec![0]);
        assert_eq!(&first_settled.values[..2], &[3, 5]);
        assert_eq!(&first_settled.values[2..], &SAMPLE[2..]);
    }

    // Tests odd lengths and duplicates
    // Verified by splitting at the upper midpoint
    #[test]
    fn test_odd_length_with_duplicates() {
        let input = [9, 1, 9, 3, 1, 7, 3];
        let (report, _) = sort_instantly(SortAlgorithm::Merge, &input);
        assert_sorted_permutation(&input, &report);
    }
}
