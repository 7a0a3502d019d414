use cpu_sched_sim::{AlgorithmKind, ProcessSpec, Sim, SimError};

fn specs(raw: &[(u64, u64)]) -> Vec<ProcessSpec> {
    raw.iter()
        .map(|&(at, bt)| ProcessSpec::new(at, bt, 0))
        .collect()
}

fn waiting(outcome: &cpu_sched_sim::SimOutcome) -> Vec<u64> {
    outcome.processes.iter().map(|p| p.waiting_time).collect()
}

#[test]
fn fcfs_three_processes() {
    let outcome = Sim::default()
        .run(AlgorithmKind::Fcfs, &specs(&[(0, 5), (1, 3), (2, 8)]), None)
        .unwrap();

    assert_eq!(waiting(&outcome), vec![0, 4, 6]);
    let turnaround: Vec<_> = outcome.processes.iter().map(|p| p.turnaround_time).collect();
    assert_eq!(turnaround, vec![5, 7, 14]);
    assert_eq!(outcome.timeline.len(), 3);
}

#[test]
fn sjf_four_processes() {
    let outcome = Sim::default()
        .run(
            AlgorithmKind::Sjf,
            &specs(&[(0, 7), (2, 4), (4, 1), (5, 4)]),
            None,
        )
        .unwrap();

    assert_eq!(waiting(&outcome), vec![0, 6, 3, 7]);
}

#[test]
fn round_robin_quantum_two_full_trace() {
    let outcome = Sim::default()
        .run(AlgorithmKind::RoundRobin, &specs(&[(0, 5), (1, 4)]), Some(2))
        .unwrap();

    assert_eq!(
        outcome.slices(),
        vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 8), (1, 8, 9)]
    );
    assert_eq!(outcome.timeline.end_time(), Some(9));
    // P1 finishes at 9, P2 at 8
    assert_eq!(waiting(&outcome), vec![4, 3]);
}

#[test]
fn empty_input_is_invalid_process_count() {
    for kind in AlgorithmKind::ALL {
        let err = Sim::default().run(kind, &[], Some(2)).unwrap_err();
        assert!(matches!(err, SimError::InvalidProcessCount { count: 0, .. }));
    }
}

#[test]
fn round_robin_zero_quantum_is_invalid() {
    let err = Sim::default()
        .run(AlgorithmKind::RoundRobin, &specs(&[(0, 1)]), Some(0))
        .unwrap_err();
    assert_eq!(err, SimError::InvalidQuantum { quantum: Some(0) });
}

#[test]
fn priority_picks_most_urgent_arrived_process() {
    let input = [
        ProcessSpec::new(0, 3, 2),
        ProcessSpec::new(1, 2, 1),
        ProcessSpec::new(1, 4, 3),
        ProcessSpec::new(2, 1, 1),
    ];
    let outcome = Sim::default()
        .run(AlgorithmKind::Priority, &input, None)
        .unwrap();

    let order: Vec<_> = outcome.timeline.segments().iter().map(|s| s.pid).collect();
    assert_eq!(order, vec![1, 2, 4, 3]);
    assert_eq!(waiting(&outcome), vec![0, 2, 5, 3]);
}

#[test]
fn input_file_to_report() {
    let text = "# arrival burst priority\n0 5 1\n1 3 2\n2 8 3\n";
    let input = cpu_sched_sim::input::parse_process_specs(text).unwrap();
    let outcome = Sim::default()
        .run(AlgorithmKind::Fcfs, &input, None)
        .unwrap();

    let report = cpu_sched_sim::report::Report(&outcome).to_string();
    assert!(report.contains("3\t2\t8\t3\t6\t14"));
    assert!(report.contains(" | P1  | P2  | P3 |"));
}
