//! Tests for run serialization and per-family stop routing

#[cfg(test)]
mod tests {
    use sortviz::VisualizerError;
    use sortviz::engine::RunStatus;
    use sortviz::engine::notify::{Recorder, Silence};
    use sortviz::engine::session::Session;
    use sortviz::engine::settled::SettledSet;
    use sortviz::io::configuration::{RunOptions, Speed};
    use sortviz::io::error::Result;
    use sortviz::searching::SearchAlgorithm;
    use sortviz::sorting::{SortAlgorithm, SortReport};

    const INPUT: [u32; 6] = [5, 3, 8, 1, 9, 2];

    fn instant_session() -> Session {
        Session::new(RunOptions::instant(), Speed::default())
    }

    // Tests a second sort is rejected while one is in flight
    // Verified by removing the busy flag check
    #[test]
    fn test_overlapping_sort_rejected() {
        let session = instant_session();
        let mut nested: Option<Result<SortReport>> = None;

        let mut notifier = |_values: &[u32], _settled: &SettledSet| -> Result<()> {
            if nested.is_none() {
                assert!(session.is_sorting());
                nested = Some(session.sort(
                    SortAlgorithm::Heap,
                    &INPUT,
                    &mut Recorder::new(),
                    Silence,
                ));
            }
            Ok(())
        };
        let report = session
            .sort(SortAlgorithm::Bubble, &INPUT, &mut notifier, Silence)
            .expect("Outer sort should complete");

        assert!(report.completed());
        assert!(matches!(
            nested,
            Some(Err(VisualizerError::RunInProgress { family: "sort" }))
        ));
        assert!(!session.is_sorting());
    }

    // Tests the two families run independently
    // Verified by sharing one busy flag between families
    #[test]
    fn test_search_allowed_during_sort() {
        let session = instant_session();
        let mut searched = None;

        let mut notifier = |_values: &[u32], _settled: &SettledSet| -> Result<()> {
            if searched.is_none() {
                let mut recorder = Recorder::new();
                searched = Some(
                    session
                        .search(SearchAlgorithm::Binary, &INPUT, 8, &mut recorder, Silence)
                        .map(|report| report.index),
                );
            }
            Ok(())
        };
        session
            .sort(SortAlgorithm::Selection, &INPUT, &mut notifier, Silence)
            .expect("Sort should complete");

        assert!(matches!(searched, Some(Ok(Some(4)))));
    }

    // Tests a stop request restores the input and clears settled positions
    // Verified by skipping the restore notification
    #[test]
    fn test_stop_sorting_restores_input() {
        let session = instant_session();
        let mut frames = Vec::new();

        let mut notifier = |values: &[u32], settled: &SettledSet| -> Result<()> {
            frames.push((values.to_vec(), settled.count()));
            if frames.len() == 3 {
                session.stop_sorting();
            }
            Ok(())
        };
        let report = session
            .sort(SortAlgorithm::Quick, &INPUT, &mut notifier, Silence)
            .expect("Cancelled sort still reports");

        assert_eq!(report.status, RunStatus::Cancelled);
        assert_eq!(report.values, INPUT.to_vec());
        assert!(report.settled.is_empty());
        assert_eq!(frames.last(), Some(&(INPUT.to_vec(), 0)));
    }

    // Tests a stop from an earlier run does not leak into the next one
    // Verified by not resetting the token on acquire
    #[test]
    fn test_next_run_clears_stop() {
        let session = instant_session();
        session.stop_sorting();

        let report = session
            .sort(SortAlgorithm::Merge, &INPUT, &mut Recorder::new(), Silence)
            .expect("Sort should complete");
        assert!(report.completed());
        assert_eq!(report.values, vec![1, 2, 3, 5, 8, 9]);
    }

    // Tests stopping searches leaves sorts untouched
    // Verified by routing both stops to one token
    #[test]
    fn test_stop_searching_only_affects_searches() {
        let session = instant_session();
        let mut sort_status = None;

        let mut notifier = |_window: &[usize], found: Option<bool>| -> Result<()> {
            if found.is_none() {
                session.stop_searching();
                let report = session
                    .sort(SortAlgorithm::Shell, &INPUT, &mut Recorder::new(), Silence)?;
                sort_status = Some(report.status);
            }
            Ok(())
        };
        let report = session
            .search(SearchAlgorithm::Jump, &INPUT, 9, &mut notifier, Silence)
            .expect("Cancelled search still reports");

        assert_eq!(report.status, RunStatus::Cancelled);
        assert_eq!(report.index, None);
        assert_eq!(sort_status, Some(RunStatus::Completed));
    }

    // Tests option and speed changes apply to later runs
    // Verified by ignoring the setters
    #[test]
    fn test_settings_for_subsequent_runs() {
        let mut session = Session::default();
        assert!(session.options().show_animation);

        session.set_options(RunOptions::instant());
        session.set_speed(Speed::new(9).expect("Speed within range"));

        assert_eq!(session.options(), &RunOptions::instant());
        assert_eq!(session.speed().get(), 9);
        assert!(!session.is_searching());
    }
}
