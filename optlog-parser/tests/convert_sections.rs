//! Integration tests for the section state machine and conversion entry
//! points, driven by small hand-written MOCOM log excerpts.

use optlog_parser::mocom::{convert, convert_to_writer, ConvertError, ObjectiveFunctionCatalog, SectionKind};
use rstest::rstest;

fn catalog() -> ObjectiveFunctionCatalog {
    ObjectiveFunctionCatalog::from_descriptors(["AET", "SWE"])
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

const STARTING_POPULATION: &str = "\
Determining starting parameters...
----------------------------------
p1 p2
1: (0.10) (0.20) 0.30 0.40 1 00001
2: (0.15) (0.25) 0.35 0.45 1 00002

";

#[test]
fn starting_population_resolves_header_and_tags_generation_zero() {
    let log = lines(STARTING_POPULATION);
    let conversion = convert(&log, &catalog()).unwrap();

    let header = conversion.header.expect("header resolves");
    assert_eq!(
        header.columns(),
        &["setnum", "p1", "p2", "OF_AET", "OF_SWE", "rank", "soln_num", "gennum"]
    );
    assert_eq!(conversion.rows.len(), 2);
    assert_eq!(
        conversion.rows[0],
        vec!["1", "0.10", "0.20", "0.30", "0.40", "1", "00001", "0"]
    );
    for row in &conversion.rows {
        assert_eq!(row.last().map(String::as_str), Some("0"));
        assert_eq!(row.len(), header.len());
    }
}

#[test]
fn generation_block_tags_rows_with_successor_generation() {
    let log = lines(
        "\
Current generation for generation 5:
preamble one
preamble two
preamble three
1: (0.10) (0.20) 0.30 0.40 1 00001

",
    );
    let conversion = convert(&log, &catalog()).unwrap();
    assert_eq!(conversion.rows.len(), 1);
    assert_eq!(conversion.rows[0].last().map(String::as_str), Some("6"));
}

#[test]
fn final_results_reads_generation_from_following_line() {
    let log = lines(
        "\
Results for multi-objective global optimization:
generation 10 complete
preamble one
preamble two
1: (0.10) (0.20) 0.30 0.40 1 00001
2: (0.15) (0.25) 0.35 0.45 2 00002

",
    );
    let conversion = convert(&log, &catalog()).unwrap();
    assert_eq!(conversion.rows.len(), 2);
    for row in &conversion.rows {
        assert_eq!(row.last().map(String::as_str), Some("11"));
    }
    assert_eq!(conversion.total_generations, 10);
}

#[rstest]
#[case::starting_population(
    "\
Determining starting parameters...
----------------------------------
p1 p2
1: (0.10) (0.20) 0.30 0.40 1 00001
2: Bad starting point rejected 99 00002
3: (0.15) (0.25) 0.35 0.45 1 00003

",
    2
)]
#[case::generation_block(
    "\
Current generation for generation 3:
preamble one
preamble two
preamble three
1: (0.10) (0.20) 0.30 0.40 1 00001
2: Bad candidate rejected 99 00002
3: (0.15) (0.25) 0.35 0.45 1 00003

",
    2
)]
#[case::final_results(
    "\
Results for multi-objective global optimization:
generation 4 complete
preamble one
preamble two
1: (0.10) (0.20) 0.30 0.40 1 00001
2: Bad candidate rejected 99 00002
3: (0.15) (0.25) 0.35 0.45 1 00003

",
    2
)]
fn bad_rows_are_excluded_without_shifting_neighbors(#[case] log: &str, #[case] accepted: usize) {
    let log = lines(log);
    let conversion = convert(&log, &catalog()).unwrap();

    assert_eq!(conversion.rows.len(), accepted);
    assert_eq!(conversion.excluded_rows, 1);
    // Neighbors keep their own identity: no shift, no duplication
    assert_eq!(conversion.rows[0][0], "1");
    assert_eq!(conversion.rows[1][0], "3");
    for row in &conversion.rows {
        assert!(row.get(1).map(String::as_str) != Some("Bad"));
    }
}

#[test]
fn generation_counter_is_non_decreasing_across_blocks() {
    let log = lines(
        "\
Determining starting parameters...
----------------------------------
p1 p2
1: (0.10) (0.20) 0.30 0.40 1 00001

MOCOM-UA chatter between sections

Current generation for generation 0:
preamble one
preamble two
preamble three
1: (0.11) (0.21) 0.31 0.41 1 00001

Current generation for generation 1:
preamble one
preamble two
preamble three
1: (0.12) (0.22) 0.32 0.42 1 00001

Results for multi-objective global optimization:
generation 2 complete
preamble one
preamble two
1: (0.13) (0.23) 0.33 0.43 1 00001

",
    );
    let conversion = convert(&log, &catalog()).unwrap();

    let tags: Vec<i64> = conversion
        .rows
        .iter()
        .map(|row| row.last().unwrap().parse().unwrap())
        .collect();
    assert_eq!(tags, vec![0, 1, 2, 3]);
    assert!(tags.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(conversion.total_generations, 2);

    // Structural invariant: every row is as wide as the header
    let header_len = conversion.header.unwrap().len();
    for row in &conversion.rows {
        assert_eq!(row.len(), header_len);
    }
}

#[test]
fn truncated_block_is_a_malformed_section() {
    // Data loop hits end of input before the blank terminator
    let log = lines(
        "\
Current generation for generation 2:
preamble one
preamble two
preamble three
1: (0.10) (0.20) 0.30 0.40 1 00001",
    );
    let err = convert(&log, &catalog()).unwrap_err();
    match err {
        ConvertError::MalformedSection { section, .. } => {
            assert_eq!(section, SectionKind::GenerationBlock);
        }
        other => panic!("expected MalformedSection, got {:?}", other),
    }
}

#[test]
fn truncated_preamble_is_a_malformed_section() {
    let log = lines(
        "\
Determining starting parameters...
----------------------------------",
    );
    let err = convert(&log, &catalog()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::MalformedSection {
            section: SectionKind::StartingPopulation,
            ..
        }
    ));
}

#[test]
fn unparseable_generation_token_is_fatal() {
    let log = lines(
        "\
Current generation for generation umpteen:
preamble one
preamble two
preamble three

",
    );
    let err = convert(&log, &catalog()).unwrap_err();
    match err {
        ConvertError::InvalidGenerationToken { section, token, .. } => {
            assert_eq!(section, SectionKind::GenerationBlock);
            assert_eq!(token, "umpteen:");
        }
        other => panic!("expected InvalidGenerationToken, got {:?}", other),
    }
}

#[test]
fn catalog_shorter_than_objective_slots_is_fatal() {
    let short = ObjectiveFunctionCatalog::from_descriptors(["AET"]);
    let log = lines(STARTING_POPULATION);
    let err = convert(&log, &short).unwrap_err();
    assert_eq!(
        err,
        ConvertError::CatalogMismatch {
            required: 2,
            available: 1
        }
    );
}

#[test]
fn streaming_writer_emits_header_then_rows_in_order() {
    let log = lines(STARTING_POPULATION);
    let mut out = Vec::new();
    let summary = convert_to_writer(&log, &catalog(), &mut out).unwrap();

    assert_eq!(summary.rows_written, 2);
    assert_eq!(summary.excluded_rows, 0);

    let text = String::from_utf8(out).unwrap();
    let mut emitted = text.lines();
    assert_eq!(
        emitted.next(),
        Some("setnum,p1,p2,OF_AET,OF_SWE,rank,soln_num,gennum")
    );
    assert_eq!(emitted.next(), Some("1,0.10,0.20,0.30,0.40,1,00001,0"));
    assert_eq!(emitted.next(), Some("2,0.15,0.25,0.35,0.45,1,00002,0"));
    assert_eq!(emitted.next(), None);
}
