//! Fan-out of length tasks and the single writer that drains them.
//!
//! Each length runs on a worker of a bounded `rayon` pool and sends its
//! words in batches over a bounded channel. The calling thread is the only
//! writer: it owns the sink and the report, enforces the limit, and watches
//! the cancellation token. Batches are written in arrival order, so words
//! of different lengths may interleave while each length keeps its own
//! odometer order.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};

use wordgen_core::constants::{BATCH_SIZE, CHANNEL_DEPTH_PER_WORKER, LARGE_OUTPUT_THRESHOLD};
use wordgen_core::error::WordgenError;
use wordgen_core::progress::{CancellationToken, ProgressUpdate};
use wordgen_core::request::{GenerationRequest, LengthTask};

use crate::interfaces::GenerationContext;
use crate::report::{GenerationReport, Outcome};
use crate::sink::open_sink;

/// How long the writer waits for a batch before rechecking cancellation.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Batch = Vec<String>;

/// Generate every word of `request` into `sink`.
///
/// Never fails: interrupts, limits and I/O errors all end in a finished
/// report whose [`Outcome`] says what happened. Lines already handed to
/// `sink` are flushed before returning.
pub fn generate<W: Write>(
    request: &GenerationRequest,
    sink: W,
    ctx: &GenerationContext<'_>,
) -> GenerationReport {
    let expected = request.expected_total();
    let mut report = GenerationReport::new(expected, request.limit());

    if expected > LARGE_OUTPUT_THRESHOLD {
        ctx.presenter.present_warning(
            "This is a large wordlist. It may take some time to generate.",
        );
    }

    info!(
        expected,
        lengths = ?request.lengths(),
        workers = request.pool_size(),
        "Starting generation"
    );
    ctx.progress.begin(expected);

    let outcome = match run(request, sink, ctx, &mut report) {
        Ok(outcome) => outcome,
        Err(WordgenError::Interrupted) => Outcome::Interrupted,
        Err(e) => {
            warn!(error = %e, written = report.written(), "Generation failed");
            ctx.presenter.present_error(&e.to_string());
            Outcome::Failed(e.to_string())
        }
    };

    ctx.progress.complete();
    report.finish(outcome);
    info!(
        written = report.written(),
        outcome = ?report.outcome(),
        elapsed = ?report.elapsed(),
        "Generation ended"
    );
    report
}

/// Create (or truncate) `path` and generate into it.
///
/// If the file cannot be opened the error is presented and a failed
/// report with nothing written is returned.
pub fn generate_to_file(
    request: &GenerationRequest,
    path: &Path,
    ctx: &GenerationContext<'_>,
) -> GenerationReport {
    match open_sink(path) {
        Ok(sink) => generate(request, sink, ctx),
        Err(e) => {
            let message = format!("{}: {}", path.display(), WordgenError::from(e));
            warn!(error = %message, "Cannot open output file");
            ctx.presenter.present_error(&message);
            GenerationReport::failed(request.expected_total(), request.limit(), message)
        }
    }
}

fn run<W: Write>(
    request: &GenerationRequest,
    mut sink: W,
    ctx: &GenerationContext<'_>,
    report: &mut GenerationReport,
) -> Result<Outcome, WordgenError> {
    ctx.cancel.check_cancelled()?;

    let workers = request.pool_size();
    let total = request.product_total();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("wordgen-worker-{i}"))
        .build()
        .map_err(|e| WordgenError::WorkerPool(e.to_string()))?;

    let request = Arc::new(request.clone());
    let stop = CancellationToken::new();
    let capacity = workers.saturating_mul(CHANNEL_DEPTH_PER_WORKER);
    let (tx, rx) = crossbeam_channel::bounded::<Batch>(capacity);

    for task in request.tasks() {
        let tx = tx.clone();
        let stop = stop.clone();
        let cancel = ctx.cancel.clone();
        pool.spawn(move || produce(&task, &tx, &stop, &cancel));
    }
    drop(tx);

    let drained = drain(&rx, &mut sink, ctx, report, total);

    // Producers still running see the stop flag or a closed channel and
    // return; the pool is dropped without joining them.
    stop.cancel();
    drop(rx);

    let flushed = sink.flush();
    let outcome = drained?;
    flushed?;
    Ok(outcome)
}

/// Enumerate one length, sending full batches until done or told to stop.
fn produce(
    task: &LengthTask,
    tx: &Sender<Batch>,
    stop: &CancellationToken,
    cancel: &CancellationToken,
) {
    debug!(length = task.length(), size = %task.size(), "Length task started");
    let words = task.candidates();
    let capacity = usize::try_from(words.remaining()).map_or(BATCH_SIZE, |n| n.min(BATCH_SIZE));
    let mut batch = Vec::with_capacity(capacity);

    for word in words {
        batch.push(word);
        if batch.len() == BATCH_SIZE {
            if stop.is_cancelled() || cancel.is_cancelled() {
                debug!(length = task.length(), "Length task abandoned");
                return;
            }
            let full = std::mem::replace(&mut batch, Vec::with_capacity(BATCH_SIZE));
            if tx.send(full).is_err() {
                debug!(length = task.length(), "Writer gone, length task abandoned");
                return;
            }
        }
    }

    if !batch.is_empty() && tx.send(batch).is_err() {
        return;
    }
    debug!(length = task.length(), "Length task finished");
}

/// Write batches as they arrive until the producers finish, the limit is
/// hit, or the run is cancelled.
///
/// A limit that lands on the last of `total` words is a normal completion.
fn drain<W: Write>(
    rx: &Receiver<Batch>,
    sink: &mut W,
    ctx: &GenerationContext<'_>,
    report: &mut GenerationReport,
    total: u128,
) -> Result<Outcome, WordgenError> {
    let limit = report.limit();
    loop {
        ctx.cancel.check_cancelled()?;
        let batch = match rx.recv_timeout(POLL_INTERVAL) {
            Ok(batch) => batch,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(Outcome::Completed),
        };

        for mut word in batch {
            ctx.cancel.check_cancelled()?;
            word.push('\n');
            sink.write_all(word.as_bytes())?;
            let written = report.record_write();
            ctx.progress
                .report(&ProgressUpdate::new(written, report.expected()));
            if u128::from(written) >= total {
                return Ok(Outcome::Completed);
            }
            if limit > 0 && written >= limit {
                info!(limit, "Wordlist limit reached");
                return Ok(Outcome::LimitReached);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    use parking_lot::Mutex;
    use wordgen_core::enumerator::enumerate;

    use crate::interfaces::{NullPresenter, NullProgressReporter, ProgressReporter, ResultPresenter};

    #[derive(Default)]
    struct RecordingPresenter {
        warnings: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl ResultPresenter for RecordingPresenter {
        fn present_description(&self, _request: &GenerationRequest) {}
        fn present_warning(&self, message: &str) {
            self.warnings.lock().push(message.to_string());
        }
        fn present_summary(&self, _report: &GenerationReport, _destination: &str) {}
        fn present_error(&self, error: &str) {
            self.errors.lock().push(error.to_string());
        }
    }

    /// Cancels the token once `after` words have been written.
    struct CancelAfter {
        cancel: CancellationToken,
        after: u64,
    }

    impl ProgressReporter for CancelAfter {
        fn begin(&self, _expected: u64) {}
        fn report(&self, update: &ProgressUpdate) {
            if update.written >= self.after {
                self.cancel.cancel();
            }
        }
        fn complete(&self) {}
    }

    /// Accepts `budget` bytes, then fails every write.
    struct FailingWriter {
        data: Vec<u8>,
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.data.len() + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_to_lines(request: &GenerationRequest) -> (GenerationReport, Vec<String>) {
        let cancel = CancellationToken::new();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &NullPresenter);
        let mut buf = Vec::new();
        let report = generate(request, &mut buf, &ctx);
        let text = String::from_utf8(buf).unwrap();
        (report, text.lines().map(str::to_string).collect())
    }

    #[test]
    fn writes_full_product_for_every_length() {
        let request = GenerationRequest::new("ab", 1, 2).unwrap();
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.outcome(), &Outcome::Completed);
        assert_eq!(report.written(), 6);
        let set: HashSet<&str> = lines.iter().map(String::as_str).collect();
        let expected: HashSet<&str> = ["a", "b", "aa", "ab", "ba", "bb"].into_iter().collect();
        assert_eq!(set, expected);
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn affixes_in_charset_order() {
        let request = GenerationRequest::new("xy", 1, 1)
            .unwrap()
            .with_affixes("Q", "!");
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.written(), 2);
        assert_eq!(lines, ["Qx!", "Qy!"]);
    }

    #[test]
    fn limit_stops_early() {
        let request = GenerationRequest::new("ab", 1, 2).unwrap().with_limit(3);
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.outcome(), &Outcome::LimitReached);
        assert_eq!(report.written(), 3);
        assert_eq!(lines.len(), 3);
        let valid: HashSet<&str> = ["a", "b", "aa", "ab", "ba", "bb"].into_iter().collect();
        assert!(lines.iter().all(|l| valid.contains(l.as_str())));
    }

    #[test]
    fn limit_above_total_writes_everything() {
        let request = GenerationRequest::new("abc", 1, 2).unwrap().with_limit(1000);
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.outcome(), &Outcome::Completed);
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn limit_across_many_batches() {
        let request = GenerationRequest::new("0123456789", 1, 5)
            .unwrap()
            .with_limit(10_001)
            .with_workers(3)
            .unwrap();
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.written(), 10_001);
        assert_eq!(lines.len(), 10_001);
    }

    #[test]
    fn limit_equal_to_total_completes() {
        let request = GenerationRequest::new("ab", 1, 2).unwrap().with_limit(6);
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.outcome(), &Outcome::Completed);
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn huge_worker_count_is_capped_by_lengths() {
        let request = GenerationRequest::new("ab", 1, 1)
            .unwrap()
            .with_workers(usize::MAX)
            .unwrap();
        assert_eq!(request.pool_size(), 1);
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.outcome(), &Outcome::Completed);
        assert_eq!(lines, ["a", "b"]);
    }

    /// Length 5 spans many batches, so its lines may be split by batches
    /// of other lengths; its own order must survive that.
    #[test]
    fn within_length_order_across_batches() {
        let request = GenerationRequest::new("0123456789", 3, 5)
            .unwrap()
            .with_workers(3)
            .unwrap();
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.outcome(), &Outcome::Completed);
        assert_eq!(lines.len(), 111_000);

        let charset: Vec<char> = "0123456789".chars().collect();
        for length in 3..=5 {
            let got: Vec<&str> = lines
                .iter()
                .filter(|l| l.len() == length)
                .map(String::as_str)
                .collect();
            let want: Vec<String> = enumerate(&charset, length, "", "").collect();
            assert_eq!(got.len(), want.len(), "length {length}");
            assert!(got.iter().zip(&want).all(|(g, w)| g == w), "length {length}");
        }
    }

    #[test]
    fn within_length_order_is_preserved() {
        let request = GenerationRequest::new("abc", 1, 4)
            .unwrap()
            .with_workers(4)
            .unwrap();
        let (_, lines) = run_to_lines(&request);
        let charset = ['a', 'b', 'c'];
        for length in 1..=4 {
            let got: Vec<&String> = lines.iter().filter(|l| l.len() == length).collect();
            let want: Vec<String> = enumerate(&charset, length, "", "").collect();
            assert_eq!(got.len(), want.len());
            assert!(got.iter().zip(&want).all(|(g, w)| *g == w));
        }
    }

    #[test]
    fn single_worker_handles_many_lengths() {
        let request = GenerationRequest::new("01", 1, 6)
            .unwrap()
            .with_workers(1)
            .unwrap();
        let (report, lines) = run_to_lines(&request);
        assert_eq!(report.written(), 126);
        assert_eq!(lines.len(), 126);
    }

    #[test]
    fn pre_cancelled_run_writes_nothing() {
        let request = GenerationRequest::new("ab", 1, 3).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &NullPresenter);
        let mut buf = Vec::new();
        let report = generate(&request, &mut buf, &ctx);
        assert_eq!(report.outcome(), &Outcome::Interrupted);
        assert_eq!(report.written(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn interrupt_leaves_whole_lines() {
        let request = GenerationRequest::new("abcdef", 1, 6).unwrap();
        let cancel = CancellationToken::new();
        let progress = CancelAfter {
            cancel: cancel.clone(),
            after: 500,
        };
        let ctx = GenerationContext::new(&cancel, &progress, &NullPresenter);
        let mut buf = Vec::new();
        let report = generate(&request, &mut buf, &ctx);

        assert_eq!(report.outcome(), &Outcome::Interrupted);
        assert_eq!(report.written(), 500);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 500);
        assert!(lines
            .iter()
            .all(|l| (1..=6).contains(&l.len()) && l.chars().all(|c| "abcdef".contains(c))));
    }

    #[test]
    fn write_failure_is_reported() {
        let request = GenerationRequest::new("ab", 1, 3).unwrap();
        let cancel = CancellationToken::new();
        let presenter = RecordingPresenter::default();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &presenter);
        let mut sink = FailingWriter {
            data: Vec::new(),
            budget: 8,
        };
        let report = generate(&request, &mut sink, &ctx);

        assert!(matches!(report.outcome(), Outcome::Failed(msg) if msg.contains("disk full")));
        assert!(report.written() < 14);
        assert_eq!(presenter.errors.lock().len(), 1);
        let text = String::from_utf8(sink.data).unwrap();
        assert_eq!(text.lines().count() as u64, report.written());
    }

    #[test]
    fn large_output_warns() {
        let request = GenerationRequest::new("0123456789", 7, 7)
            .unwrap()
            .with_limit(0);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let presenter = RecordingPresenter::default();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &presenter);
        let report = generate(&request, io::sink(), &ctx);
        assert_eq!(report.expected(), 10_000_000);
        assert_eq!(presenter.warnings.lock().len(), 1);
    }

    #[test]
    fn small_output_does_not_warn() {
        let request = GenerationRequest::new("0123456789", 7, 7)
            .unwrap()
            .with_limit(5);
        let cancel = CancellationToken::new();
        let presenter = RecordingPresenter::default();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &presenter);
        let report = generate(&request, io::sink(), &ctx);
        assert_eq!(report.written(), 5);
        assert!(presenter.warnings.lock().is_empty());
    }

    #[test]
    fn generate_to_file_truncates_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale\nstale\nstale\nstale\nstale\nstale\nstale\n").unwrap();

        let request = GenerationRequest::new("ab", 1, 2).unwrap();
        let cancel = CancellationToken::new();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &NullPresenter);
        let report = generate_to_file(&request, &path, &ctx);

        assert_eq!(report.outcome(), &Outcome::Completed);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(!text.contains("stale"));
    }

    #[test]
    fn generate_to_file_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let request = GenerationRequest::new("ab", 1, 2).unwrap();
        let cancel = CancellationToken::new();
        let presenter = RecordingPresenter::default();
        let ctx = GenerationContext::new(&cancel, &NullProgressReporter, &presenter);
        let report = generate_to_file(&request, &path, &ctx);

        assert!(matches!(report.outcome(), Outcome::Failed(_)));
        assert_eq!(report.written(), 0);
        assert_eq!(presenter.errors.lock().len(), 1);
    }
}
