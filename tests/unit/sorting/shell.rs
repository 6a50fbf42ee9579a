//! Tests for shell sort

#[cfg(test)]
mod tests {
    use crate::{SAMPLE, assert_sorted_permutation, sort_instantly};
    use sortviz::sorting::SortAlgorithm;

    // Tests the example sequence
    // Verified by stopping before the gap reaches one
    #[test]
    fn test_sample() {
        let (report, _) = sort_instantly(SortAlgorithm::Shell, &SAMPLE);
        assert_eq!(report.values, vec![1, 2, 3, 5, 8, 9]);
    }

    // Tests the first gap pass only moves values a half-length apart
    // Verified by starting with a gap of one
    #[test]
    fn test_first_gap_pass() {
        let input = [4, 3, 2, 1];
        let (_, recorder) = sort_instantly(SortAlgorithm::Shell, &input);

        let first_move = recorder
            .sort_frames
            .iter()
            .find(|frame| frame.values != input.to_vec())
            .expect("Shell sort moves values");
        assert_eq!(first_move.values, vec![4, 3, 4, 1]);
    }

    // Tests reverse and duplicate-heavy input
    // Verified by comparing with greater-or-equal
    #[test]
    fn test_reverse_with_duplicates() {
        let input = [9, 9, 7, 7, 5, 5, 3, 3, 1, 1, 0];
        let (report, _) = sort_instantly(SortAlgorithm::Shell, &input);
        assert_sorted_permutation(&input, &report);
    }

    // Tests a settled slot can still change in a later gap pass
    // Verified by deferring settlement to the final gap
    #[test]
    fn test_settled_slot_moves_later() {
        let (report, recorder) = sort_instantly(SortAlgorithm::Shell, &[4, 3, 2, 1]);

        let early = recorder
            .sort_frames
            .iter()
            .find(|frame| frame.settled.contains(&1))
            .expect("Position 1 settles");
        assert_eq!(early.values[1], 1);
        assert_eq!(report.values[1], 2);
    }
}
