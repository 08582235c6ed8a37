use std::process;
use std::sync::RwLock;

use rand::rngs::StdRng;
use rand::SeedableRng;

use ku_engine::harvest::{run_harvest, HarvestReport};
use ku_engine::ku_core::{estimate_syllables, generate, split_compound, Haiku, Vocabulary};
use ku_engine::source::{FileSource, TextSource};

pub fn syllables(words: &[String]) {
    for word in words {
        println!("{word}\t{}", estimate_syllables(word));
    }
}

pub fn split(tokens: &[String]) {
    for token in tokens {
        println!("{token}\t{}", split_compound(token).join(" "));
    }
}

/// Fresh vocabulary fed from one text file plus the built-in phrases.
///
/// A missing or unreadable file is fatal here, unlike a failing source
/// during a server harvest.
pub fn load_vocabulary(file: &str) -> Result<(Vocabulary, HarvestReport), String> {
    let source = FileSource::new(file);
    // Surface read errors before the harvest would log and skip them.
    source
        .fetch()
        .map_err(|e| format!("Error reading {file}: {e}"))?;
    let sources: Vec<Box<dyn TextSource>> = vec![Box::new(source)];
    let vocab = RwLock::new(Vocabulary::new());
    let report = run_harvest(&vocab, &sources);
    let vocab = vocab.into_inner().unwrap_or_else(|e| e.into_inner());
    Ok((vocab, report))
}

pub fn haikus(vocab: &mut Vocabulary, count: usize, seed: Option<u64>) -> Vec<Haiku> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..count).map(|_| generate(vocab, &mut rng)).collect()
}

pub fn haiku(file: &str, count: usize, seed: Option<u64>) {
    let (mut vocab, _) = load_or_die(file);
    for (i, h) in haikus(&mut vocab, count, seed).iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in &h.lines {
            println!("{line}");
        }
    }
}

pub fn stats(file: &str) {
    let (vocab, report) = load_or_die(file);
    let stats = vocab.stats();
    println!(
        "fragments={} tokens={} words={} pooled={}",
        report.fragments, report.ingest.tokens, report.ingest.words, report.ingest.pooled
    );
    println!("total_words={}", stats.total_words);
    for (syllables, n) in &stats.distribution {
        println!("  {syllables}: {n}");
    }
}

fn load_or_die(file: &str) -> (Vocabulary, HarvestReport) {
    load_vocabulary(file).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    })
}
