//! Tests for quick sort

#[cfg(test)]
mod tests {
    use crate::{SAMPLE, assert_sorted_permutation, settle_order, sort_instantly};
    use sortviz::sorting::SortAlgorithm;

    // Tests pivots settle as partitions finish, left subtree first
    // Verified by pushing the left range before the right
    #[test]
    fn test_pivot_settle_order() {
        let (report, recorder) = sort_instantly(SortAlgorithm::Quick, &SAMPLE);

        assert_sorted_permutation(&SAMPLE, &report);
        assert_eq!(settle_order(&recorder), vec![1, 0, 2, 4, 3, 5]);
    }

    // Tests every position is settled before the completion notification
    // Verified by dropping the one-element range settle
    #[test]
    fn test_settled_before_completion() {
        let (_, recorder) = sort_instantly(SortAlgorithm::Quick, &SAMPLE);
        let frames = &recorder.sort_frames;
        let before_last = &frames[frames.len() - 2];
        assert_eq!(before_last.settled.len(), SAMPLE.len());
    }

    // Tests already sorted input, the deepest partition chain
    // Verified by recursing past an empty range
    #[test]
    fn test_sorted_input() {
        let input: Vec<u32> = (1..=40).collect();
        let (report, _) = sort_instantly(SortAlgorithm::Quick, &input);
        assert_sorted_permutation(&input, &report);
    }

    // Tests all-equal input
    // Verified by using strict comparison in the partition
    #[test]
    fn test_all_equal() {
        let input = [6; 9];
        let (report, _) = sort_instantly(SortAlgorithm::Quick, &input);
        assert_sorted_permutation(&input, &report);
    }
}
