//! Tests for GIF capture of sort and search runs

#[cfg(test)]
mod tests {
    use crate::{SAMPLE, search_instantly};
    use sortviz::engine::StepControl;
    use sortviz::engine::cancellation::NeverCancel;
    use sortviz::engine::notify::{SearchNotifier, SortNotifier};
    use sortviz::engine::settled::SettledSet;
    use sortviz::io::configuration::{RunOptions, Speed};
    use sortviz::io::visualization::AnimationCapture;
    use sortviz::searching::SearchAlgorithm;
    use sortviz::sorting::{SortAlgorithm, run_sort};

    // Tests a fresh capture holds no frames
    // Verified by initializing with a placeholder frame
    #[test]
    fn test_new_capture_is_empty() {
        assert_eq!(AnimationCapture::new().frame_count(), 0);
    }

    // Tests export fails when nothing was captured
    // Verified by removing the empty check
    #[test]
    fn test_export_without_frames() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = AnimationCapture::new().export_gif(&dir.path().join("empty.gif"), 40);
        assert!(result.is_err());
    }

    // Tests every sort notification becomes a frame and exports
    // Verified by capturing only settled frames
    #[test]
    fn test_capture_sort_run() {
        let mut capture = AnimationCapture::new();
        let mut control =
            StepControl::sorting(RunOptions::instant(), Speed::default(), &NeverCancel);
        let report = run_sort(SortAlgorithm::Heap, &SAMPLE, &mut capture, &mut control)
            .expect("Sort should complete");

        assert_eq!(capture.frame_count(), report.notifications);

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("heap.gif");
        capture.export_gif(&path, 5).expect("Export should succeed");
        assert!(path.metadata().expect("GIF was written").len() > 0);
    }

    // Tests search windows are captured over the backdrop
    // Verified by dropping terminal notifications
    #[test]
    fn test_capture_search_frames() {
        let (report, recorder) = search_instantly(SearchAlgorithm::Binary, &SAMPLE, 8);
        let mut capture = AnimationCapture::new().with_backdrop(report.sorted.clone());

        for frame in &recorder.search_frames {
            SearchNotifier::notify(&mut capture, &frame.window, frame.found)
                .expect("Capture never fails");
        }
        assert_eq!(capture.frame_count(), report.notifications);

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        capture
            .export_gif(&dir.path().join("search.gif"), 40)
            .expect("Export should succeed");
    }

    // Tests export reports an unwritable destination
    // Verified by ignoring file creation errors
    #[test]
    fn test_export_to_invalid_path() {
        let mut capture = AnimationCapture::new();
        SortNotifier::notify(&mut capture, &[1, 2], &SettledSet::new(2))
            .expect("Capture never fails");

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").expect("Failed to write blocker");

        assert!(capture.export_gif(&blocker.join("out.gif"), 40).is_err());
    }
}
