//! Tests for stepped jump search

#[cfg(test)]
mod tests {
    use crate::search_instantly;
    use sortviz::VisualizerError;
    use sortviz::engine::StepControl;
    use sortviz::engine::cancellation::NeverCancel;
    use sortviz::io::configuration::{RunOptions, Speed};
    use sortviz::io::error::{Result, notifier_error};
    use sortviz::searching::{SearchAlgorithm, run_search};
    use sortviz::searching::jump::block_size;

    // Tests the block size is the integer square root of the length
    // Verified by rounding the square root up
    #[test]
    fn test_block_size() {
        assert_eq!(block_size(0), 0);
        assert_eq!(block_size(1), 1);
        assert_eq!(block_size(10), 3);
        assert_eq!(block_size(16), 4);
        assert_eq!(block_size(50), 7);
    }

    // Tests a target above the maximum visits every block and nothing else
    // Verified by starting the linear scan after the last block
    #[test]
    fn test_target_above_maximum() {
        let input: Vec<u32> = (1..=16).collect();
        let (report, recorder) = search_instantly(SearchAlgorithm::Jump, &input, 99);

        assert_eq!(report.index, None);
        let visits: Vec<Vec<usize>> = recorder
            .search_frames
            .iter()
            .filter(|frame| frame.found.is_none())
            .map(|frame| frame.window.clone())
            .collect();
        assert_eq!(
            visits,
            vec![vec![0, 3], vec![4, 7], vec![8, 11], vec![12, 15]]
        );
        assert_eq!(report.notifications, 5);
    }

    // Tests block scan followed by a linear scan to the target
    // Verified by scanning linearly from the block end
    #[test]
    fn test_block_then_linear() {
        let input: Vec<u32> = (1..=16).collect();
        let (report, recorder) = search_instantly(SearchAlgorithm::Jump, &input, 10);

        assert_eq!(report.index, Some(9));
        let windows: Vec<Vec<usize>> = recorder
            .search_frames
            .iter()
            .map(|frame| frame.window.clone())
            .collect();
        assert_eq!(windows, vec![vec![0, 3], vec![4, 7], vec![8], vec![9]]);
    }

    // Tests a short final block is clamped to the sequence end
    // Verified by indexing the unclamped block end
    #[test]
    fn test_partial_last_block() {
        let input: Vec<u32> = (1..=10).collect();
        let (report, recorder) = search_instantly(SearchAlgorithm::Jump, &input, 11);

        assert_eq!(report.index, None);
        assert_eq!(recorder.search_frames[3].window, vec![9, 9]);
    }

    // Tests values below the minimum and gaps between values
    // Verified by returning the stopping index without an equality check
    #[test]
    fn test_absent_values() {
        let (below, below_frames) = search_instantly(SearchAlgorithm::Jump, &[5, 6, 7, 8], 1);
        assert_eq!(below.index, None);
        assert_eq!(below_frames.search_frames.len(), 1);

        let (gap, _) = search_instantly(SearchAlgorithm::Jump, &[1, 3, 5, 7, 9], 4);
        assert_eq!(gap.index, None);
    }

    // Tests the first and last positions are reachable
    // Verified by stopping the linear scan one short
    #[test]
    fn test_boundaries() {
        let input = [2, 4, 6, 8, 10, 12, 14];
        let (first, _) = search_instantly(SearchAlgorithm::Jump, &input, 2);
        let (last, _) = search_instantly(SearchAlgorithm::Jump, &input, 14);

        assert_eq!(first.index, Some(0));
        assert_eq!(last.index, Some(6));
    }

    // Tests a failing sink still receives the empty not-found window
    // Verified by returning the error before the terminal notification
    #[test]
    fn test_sink_failure_ends_not_found() {
        let mut frames: Vec<(Vec<usize>, Option<bool>)> = Vec::new();
        let mut sink = |window: &[usize], found: Option<bool>| -> Result<()> {
            frames.push((window.to_vec(), found));
            if frames.len() == 1 {
                return Err(notifier_error(&"display detached"));
            }
            Ok(())
        };
        let mut control =
            StepControl::searching(RunOptions::instant(), Speed::default(), &NeverCancel);
        let input: Vec<u32> = (0..20).collect();
        let result = run_search(SearchAlgorithm::Jump, &input, 30, &mut sink, &mut control);

        match result {
            Err(VisualizerError::Notifier { algorithm, reason }) => {
                assert_eq!(algorithm, "jump search");
                assert_eq!(reason, "display detached");
            }
            other => unreachable!("Expected notifier failure, got {other:?}"),
        }
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.last(), Some(&(Vec::new(), Some(false))));
    }
}
