use dfa_engine::prelude::*;

fn d1() -> Automaton {
    let mut dfa = Automaton::new();
    dfa.set_alphabet(['0', '1']);
    assert!(dfa.add_state("q1", true, false).is_ok());
    assert!(dfa.add_state("q2", false, true).is_ok());
    assert!(dfa.add_state("q3", false, false).is_ok());
    for (p, a, q) in [
        ("q1", '0', "q1"),
        ("q1", '1', "q2"),
        ("q2", '0', "q3"),
        ("q2", '1', "q2"),
        ("q3", '0', "q2"),
        ("q3", '1', "q2"),
    ] {
        dfa.add_transition(p, a, q).unwrap();
    }
    dfa
}

#[test_log::test]
fn round_trip() {
    let dfa = d1();
    assert_eq!(dfa.validate(), Validity::Valid);
    assert!(dfa.accepts("1"));
    assert!(dfa.accepts("01"));
    assert!(!dfa.accepts("0"));
    assert!(dfa.accepts("0101010101"));
    assert!(dfa.accepts("100"));
    // the last 1 is followed by an odd number of 0s, which ends in q3
    assert!(!dfa.accepts("1000"));
}

#[test]
fn stepping() {
    let dfa = d1();
    assert_eq!(dfa.step("q1", '1'), Some("q2"));
    assert_eq!(dfa.step("q2", '1'), Some("q2"));
    assert_eq!(dfa.step("q9", '0'), None);
    assert_eq!(dfa.start_state_name(), Some("q1"));
}

#[test]
fn stepping_reproduces_walkthrough() {
    let dfa = d1();
    let input = "0110";
    let mut current = dfa.start_state_name().unwrap();
    let mut visited = vec![current];
    for symbol in input.chars() {
        current = dfa.step(current, symbol).unwrap();
        visited.push(current);
    }
    assert_eq!(dfa.walkthrough(input).visited().collect::<Vec<_>>(), visited);
    assert_eq!(dfa.accepts(input), dfa.is_accepting(current));
}

#[test]
fn first_write_wins() {
    let mut dfa = d1();
    let second = dfa.add_transition("q2", '1', "q1");
    assert_eq!(Status::from(&second), Status::DuplicateTransition);
    assert_eq!(dfa.transition("q2", '1'), Some("q2"));
}

#[test_log::test]
fn deleting_q3_invalidates_at_q2() {
    let mut dfa = d1();
    dfa.delete_state("q3").unwrap();
    assert!(dfa
        .transitions()
        .all(|(p, _, q)| p != "q3" && q != "q3"));
    let validity = dfa.validate();
    assert!(!validity.is_valid());
    assert_eq!(validity.reason().and_then(|r| r.state()), Some("q2"));
    assert!(validity.to_string().contains("q2"));
}

#[test]
fn duplicate_start_state_creates_nothing() {
    let mut dfa = d1();
    let result = dfa.add_state("q0", true, false);
    assert_eq!(Status::from(&result).code(), 1);
    assert!(!dfa.contains_state("q0"));
    assert_eq!(dfa.start_state_name(), Some("q1"));
}

#[test]
fn builder_and_incremental_agree() {
    let built = DfaBuilder::new("01")
        .with_states(["q1", "q2", "q3"])
        .with_start("q1")
        .with_accepting(["q2"])
        .with_transitions(d1().transitions().collect::<Vec<_>>())
        .build()
        .unwrap();
    let incremental = d1();
    for input in ["", "0", "1", "10", "100", "1000", "0101010101", "01a"] {
        assert_eq!(built.accepts(input), incremental.accepts(input));
    }
}
