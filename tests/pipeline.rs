use std::collections::HashSet;
use std::io::Write;
use std::process::Command;

use lexmodel::config::ModelConfig;
use lexmodel::parsing::tokenize_sentences;
use lexmodel::stopwords::stopwords_for;
use lexmodel::{ranked_dump, text_as_string, AssociativeModel};

fn text(sentences: &[&[&str]]) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|s| s.iter().map(|w| w.to_string()).collect())
        .collect()
}

fn weather() -> Vec<Vec<String>> {
    text(&[
        &["rain", "cold", "wind"],
        &["rain", "cold", "storm"],
        &["wind", "storm", "night"],
        &["night", "wind", "rain", "cold"],
        &["storm", "night"],
    ])
}

#[test]
fn weather_document_end_to_end() {
    let config = ModelConfig::default();
    let model = AssociativeModel::build(&weather(), &HashSet::new(), &config).unwrap();

    // rain/cold share every sentence and fuse; storm sits exactly on the cut
    assert_eq!(model.stats().link_set, 5);
    assert_eq!(model.stats().attributive_removed, 0);
    assert_eq!(model.stats().phrases_merged, 1);
    assert_eq!(model.critical_power(), 2.0);
    assert_eq!(model.lexicon().active_ids().collect::<Vec<_>>(), vec![0, 2, 4]);

    let dump = text_as_string(&model, &config.output).unwrap();
    assert_eq!(
        dump,
        "rain cold\twind\t.\train cold\t.\twind\tnight\t.\tnight\twind\train cold\t.\tnight\t."
    );

    let ranked = ranked_dump(&model);
    let dominant: Vec<(&str, usize)> = ranked
        .dominant
        .iter()
        .map(|e| (e.surface.as_str(), e.power))
        .collect();
    let rest: Vec<(&str, usize)> = ranked
        .non_dominant
        .iter()
        .map(|e| (e.surface.as_str(), e.power))
        .collect();
    assert_eq!(dominant, vec![("rain cold", 3), ("wind", 3), ("night", 3)]);
    assert_eq!(rest, vec![("storm", 2)]);

    assert_eq!(model.existence_areas()[&0], vec![0, 1, 3]);
    assert_eq!(model.existence_areas()[&4], vec![2, 3, 4]);
    model.verify_invariants().unwrap();
}

/// Small documents over a ten-word vocabulary from a fixed linear congruential
/// sequence, so every run sees the same inputs.
fn generated_documents(count: usize) -> Vec<Vec<Vec<String>>> {
    const VOCABULARY: [&str; 10] = [
        "ash", "birch", "cedar", "elm", "fir", "hazel", "larch", "oak", "pine", "yew",
    ];
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = |bound: usize| -> usize {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as usize) % bound
    };

    let mut documents = Vec::with_capacity(count);
    for _ in 0..count {
        let vocabulary = 3 + next(8);
        let mut document = Vec::new();
        for _ in 0..1 + next(8) {
            let mut sentence = Vec::new();
            for _ in 0..1 + next(6) {
                sentence.push(VOCABULARY[next(vocabulary)].to_string());
            }
            document.push(sentence);
        }
        documents.push(document);
    }
    documents
}

#[test]
fn reducing_a_reduced_text_changes_nothing() {
    let config = ModelConfig::default();
    let stopwords = HashSet::new();
    for document in generated_documents(500) {
        let first = AssociativeModel::reduce(&document, &stopwords, &config).unwrap();
        let reduced = first.sentence_surfaces().unwrap();
        let second = AssociativeModel::reduce(&reduced, &stopwords, &config).unwrap();
        assert_eq!(second.sentence_surfaces().unwrap(), reduced, "from {:?}", document);
        assert_eq!(second.stats().attributive_removed, 0, "from {:?}", document);
        assert_eq!(second.stats().phrases_merged, 0, "from {:?}", document);
        second.verify_invariants().unwrap();
    }
}

#[test]
fn dominance_cut_is_not_stable_under_rebuild() {
    let config = ModelConfig::default();
    let document = text(&[&["a"], &["a", "c"], &["d"], &["a", "b", "d"], &["c", "b"]]);
    let first = AssociativeModel::build(&document, &HashSet::new(), &config).unwrap();
    // powers a=3 d=2 c=1 b=1: three distinct values, C = 1 + 0.5 * 3, only "a" stays
    assert_eq!(first.critical_power(), 2.5);
    let reduced = first.sentence_surfaces().unwrap();
    assert_eq!(reduced, text(&[&["a"], &["a"], &["a"]]));

    // alone in its sentences, "a" links to nothing and falls under C = 1.5
    let second = AssociativeModel::build(&reduced, &HashSet::new(), &config).unwrap();
    assert_eq!(second.critical_power(), 1.5);
    let scored: Vec<(&str, usize)> = second
        .scored_lexemes()
        .iter()
        .map(|e| (e.surface.as_str(), e.power))
        .collect();
    assert_eq!(scored, vec![("a", 0)]);
    assert!(second.sentence_surfaces().unwrap().is_empty());
}

#[test]
fn raw_text_with_english_stopwords() {
    let raw = "The rain was cold and the wind howled. Rain and cold came with a storm! \
               The wind and the storm lasted all night. At night the wind brought rain, cold rain. \
               Storm after storm through the night.";
    let sentences = tokenize_sentences(&raw.to_lowercase());
    let stopwords = stopwords_for("english").unwrap();
    let model = AssociativeModel::build(&sentences, &stopwords, &ModelConfig::default()).unwrap();
    model.verify_invariants().unwrap();
    for lexeme in model.scored_lexemes() {
        assert!(!stopwords.contains(&lexeme.surface));
    }
    let surviving: Vec<&str> = model
        .lexicon()
        .active_ids()
        .map(|id| model.lexicon().surface(id).unwrap())
        .collect();
    assert!(surviving.iter().all(|s| !s.is_empty()));
}

#[test]
fn empty_input_is_not_an_error() {
    let config = ModelConfig::default();
    let model = AssociativeModel::build(&[], &HashSet::new(), &config).unwrap();
    assert_eq!(text_as_string(&model, &config.output).unwrap(), "");
    let ranked = ranked_dump(&model);
    assert!(ranked.dominant.is_empty() && ranked.non_dominant.is_empty());
}

#[test]
fn ranked_dump_serializes() {
    let model =
        AssociativeModel::build(&weather(), &HashSet::new(), &ModelConfig::default()).unwrap();
    let json = ranked_dump(&model).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["dominant"][0]["surface"], "rain cold");
    assert_eq!(value["non_dominant"][0]["power"], 2);
    assert!(ranked_dump(&model).to_text().contains("storm\t2\n"));
}

#[test]
fn cli_without_argument_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_lexmodel")).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage:"));
}

#[test]
fn cli_missing_file_fails_without_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_lexmodel"))
        .arg("/no/such/input.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("io error"));
}

#[test]
fn cli_prints_reduced_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Rain cold wind. Rain cold storm.\nWind storm night.").unwrap();
    writeln!(file, "Night wind rain cold. Storm night.").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_lexmodel"))
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end_matches('\n'),
        "rain cold\twind\t.\train cold\t.\twind\tnight\t.\tnight\twind\train cold\t.\tnight\t."
    );
}
