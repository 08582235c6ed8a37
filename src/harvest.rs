use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread;

use ku_core::phrases::common_error_fragments;
use ku_core::{IngestReport, Vocabulary};

use crate::source::TextSource;

/// Vocabulary state shared between the HTTP handlers and the harvest worker.
pub type SharedVocabulary = Arc<RwLock<Vocabulary>>;

/// Configured text sources, shared with the worker thread.
pub type SharedSources = Arc<Vec<Box<dyn TextSource>>>;

/// Read access that survives a panicked writer; every mutation leaves the
/// vocabulary consistent, so a poisoned lock is still usable.
pub fn read_vocab(vocab: &RwLock<Vocabulary>) -> RwLockReadGuard<'_, Vocabulary> {
    vocab.read().unwrap_or_else(|e| e.into_inner())
}

pub fn write_vocab(vocab: &RwLock<Vocabulary>) -> RwLockWriteGuard<'_, Vocabulary> {
    vocab.write().unwrap_or_else(|e| e.into_inner())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestReport {
    pub sources_ok: usize,
    pub sources_failed: usize,
    /// Fragments ingested, built-in phrases included.
    pub fragments: usize,
    pub ingest: IngestReport,
}

/// Fetch every source, append the built-in phrases and ingest the lot.
///
/// Fetching happens without holding the lock; only the final fold takes
/// the write lock.
pub fn run_harvest(vocab: &RwLock<Vocabulary>, sources: &[Box<dyn TextSource>]) -> HarvestReport {
    let mut report = HarvestReport::default();
    let mut fragments: Vec<String> = Vec::new();

    for source in sources {
        match source.fetch() {
            Ok(found) => {
                report.sources_ok += 1;
                fragments.extend(found);
            }
            Err(e) => {
                report.sources_failed += 1;
                tracing::warn!(source = source.name(), error = %e, "source failed, skipping");
            }
        }
    }
    fragments.extend(common_error_fragments());
    report.fragments = fragments.len();

    report.ingest = write_vocab(vocab).ingest(&fragments);
    tracing::info!(
        sources_ok = report.sources_ok,
        sources_failed = report.sources_failed,
        fragments = report.fragments,
        words = report.ingest.words,
        pooled = report.ingest.pooled,
        "harvest complete"
    );
    report
}

// ---------------------------------------------------------------------------
// HarvestWorker
// ---------------------------------------------------------------------------

struct HarvestWork {
    run: u64,
}

/// Background thread that runs harvests on request.
///
/// Submitting never blocks on the harvest itself; requests run one at a time
/// in submission order. Callers see the effect only through the vocabulary
/// (timestamp, pool sizes).
pub struct HarvestWorker {
    tx: mpsc::Sender<HarvestWork>,
    submitted: AtomicU64,
    completed: Arc<AtomicU64>,
}

impl HarvestWorker {
    pub fn spawn(vocab: SharedVocabulary, sources: SharedSources) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<HarvestWork>();
        let completed = Arc::new(AtomicU64::new(0));
        {
            let completed = Arc::clone(&completed);
            thread::Builder::new()
                .name("ku-harvest".into())
                .spawn(move || harvest_worker(rx, vocab, sources, completed))?;
        }
        Ok(Self {
            tx,
            submitted: AtomicU64::new(0),
            completed,
        })
    }

    /// Queue one harvest and return its run number.
    pub fn submit(&self) -> u64 {
        let run = self.submitted.fetch_add(1, Ordering::SeqCst) + 1;
        if self.tx.send(HarvestWork { run }).is_err() {
            tracing::error!(run, "harvest worker is gone, request dropped");
        }
        run
    }

    /// Run number of the most recently finished harvest (0 before any).
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }
}

fn harvest_worker(
    rx: mpsc::Receiver<HarvestWork>,
    vocab: SharedVocabulary,
    sources: SharedSources,
    completed: Arc<AtomicU64>,
) {
    while let Ok(work) = rx.recv() {
        tracing::info!(run = work.run, "harvest started");
        run_harvest(&vocab, &sources);
        completed.store(work.run, Ordering::SeqCst);
    }
}
