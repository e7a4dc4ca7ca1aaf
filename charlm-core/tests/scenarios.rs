use std::fs;

use charlm_core::{LanguageModel, ModelError, ReaderSource, open_corpus};

fn records(model: &LanguageModel, context: &str) -> Vec<(char, usize, f64)> {
	model
		.get(context)
		.unwrap()
		.records()
		.iter()
		.map(|data| (data.character(), data.count(), data.probability()))
		.collect()
}

#[test]
fn test_periodic_corpus_is_degenerate() {
	let mut model = LanguageModel::new(3).unwrap();
	model.train(&mut "abcabcabcabc".chars()).unwrap();

	assert_eq!(records(&model, "abc"), vec![('a', 3, 1.0)]);
	assert_eq!(records(&model, "bca"), vec![('b', 3, 1.0)]);
	assert_eq!(records(&model, "cab"), vec![('c', 3, 1.0)]);

	// Single continuation everywhere, so any seed gives the same text
	assert_eq!(model.generate("abc", 7).unwrap(), "abcabca");
	for seed in [0, 1, 20, u64::MAX] {
		let mut seeded = LanguageModel::with_seed(3, seed).unwrap();
		seeded.train(&mut "abcabcabcabc".chars()).unwrap();
		assert_eq!(seeded.generate("abc", 7).unwrap(), "abcabca");
	}
}

#[test]
fn test_empty_corpus() {
	let mut model = LanguageModel::with_seed(3, 1).unwrap();
	model.train(&mut "".chars()).unwrap();

	assert!(model.is_empty());
	assert_eq!(model.generate("abc", 10).unwrap(), "abc");
}

#[test]
fn test_initial_text_shorter_than_window() {
	let mut model = LanguageModel::with_seed(3, 1).unwrap();
	model.train(&mut "abcabcabcabc".chars()).unwrap();

	let err = model.generate("ab", 10).unwrap_err();
	assert!(matches!(err, ModelError::InitialTextTooShort { .. }));
	assert_eq!(err.to_string(), "initial text shorter than window length (2 < 3)");
}

#[test]
fn test_short_initial_text_returned_when_target_reached() {
	let mut model = LanguageModel::with_seed(3, 1).unwrap();
	model.train(&mut "abcabcabcabc".chars()).unwrap();

	assert_eq!(model.generate("ab", 1).unwrap(), "ab");
	assert_eq!(model.generate("", 0).unwrap(), "");
}

#[test]
fn test_seeded_generation_is_reproducible() {
	let corpus = "she sells sea shells by the sea shore, the shells she sells are sea shells";
	let mut model = LanguageModel::with_seed(2, 20).unwrap();
	model.train(&mut corpus.chars()).unwrap();

	let first = model.generate("sh", 300).unwrap();
	let second = model.generate("sh", 300).unwrap();
	assert_eq!(first, second);
	assert!(first.chars().count() <= 300);
	assert!(first.starts_with("sh"));
}

#[test]
fn test_unseeded_generation_stays_in_model() {
	let corpus = "she sells sea shells by the sea shore";
	let mut model = LanguageModel::new(2).unwrap();
	model.train(&mut corpus.chars()).unwrap();

	let text = model.generate("se", 100).unwrap();
	let chars: Vec<char> = text.chars().collect();
	for window in chars.windows(3) {
		let context: String = window[..2].iter().collect();
		assert!(model.get(&context).and_then(|d| d.get(window[2])).is_some());
	}
}

#[test]
fn test_reader_source_matches_string_training() {
	let corpus = "über naïve café, über naïve café";
	let mut from_str = LanguageModel::new(2).unwrap();
	from_str.train(&mut corpus.chars()).unwrap();

	let mut from_reader = LanguageModel::new(2).unwrap();
	from_reader.train(&mut ReaderSource::new(corpus.as_bytes())).unwrap();

	assert_eq!(from_str.to_string(), from_reader.to_string());
}

#[test]
fn test_train_from_file() {
	let path = std::env::temp_dir().join(format!("charlm-corpus-{}.txt", std::process::id()));
	fs::write(&path, "to be or not to be").unwrap();

	let mut model = LanguageModel::with_seed(2, 3).unwrap();
	let result = model.train_passes(2, || open_corpus(&path));
	fs::remove_file(&path).unwrap();
	result.unwrap();

	// "to" is followed by ' ' twice per pass
	assert_eq!(records(&model, "to"), vec![(' ', 4, 1.0)]);
	assert_eq!(model.generate("to", 2).unwrap(), "to");
}

#[test]
fn test_missing_corpus_file() {
	let mut model = LanguageModel::new(2).unwrap();
	let result = model.train_passes(1, || open_corpus("./no/such/corpus.txt"));
	assert!(matches!(result, Err(ModelError::Io(_))));
	assert!(model.is_empty());
}
