//! Diagnostics around replacing values the caller already set.

use keywell_core::{Document, FieldValue};
use keywell_generator::SeqGenerator;
use keywell_hook::{CreateHook, UniqueKey};
use keywell_storage::InMemoryCollection;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines so tests can assert on them.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    fn warning_count(&self) -> usize {
        self.contents().matches("WARN").count()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's warnings into a [`CapturedLog`] until the guard
/// drops. Tests each install their own, so they stay independent.
fn capture_warnings() -> (CapturedLog, tracing::subscriber::DefaultGuard) {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(log.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (log, guard)
}

fn hook_for(field: &str) -> UniqueKey<InMemoryCollection, SeqGenerator> {
    let collection = Arc::new(InMemoryCollection::new());
    let generator = SeqGenerator::with_prefix("gen");
    UniqueKey::for_field(field, collection, generator).unwrap()
}

#[tokio::test]
async fn replacing_a_set_value_warns_once() {
    let (log, _guard) = capture_warnings();
    let hook = hook_for("code");

    let mut document = Document::new().with("code", "old-7");
    hook.before_create(&mut document).await.unwrap();

    let output = log.contents();
    assert_eq!(log.warning_count(), 1);
    assert!(output.contains("overwriting existing value"));
    assert!(output.contains("field=code"));
    assert!(output.contains("\"old-7\""));
    assert_eq!(document.get("code"), Some(&FieldValue::from("gen000000")));
}

#[tokio::test]
async fn id_replacement_is_silent() {
    let (log, _guard) = capture_warnings();
    let collection = Arc::new(InMemoryCollection::new());
    let hook = UniqueKey::new(collection, SeqGenerator::with_prefix("gen"));

    let mut document = Document::new().with("_id", "placeholder");
    hook.before_create(&mut document).await.unwrap();

    assert_eq!(log.warning_count(), 0);
    assert_eq!(document.get("_id"), Some(&FieldValue::from("gen000000")));
}

#[tokio::test]
async fn unset_values_are_silent() {
    let (log, _guard) = capture_warnings();
    let hook = hook_for("code");

    let mut absent = Document::new();
    hook.before_create(&mut absent).await.unwrap();

    let mut null = Document::new().with("code", FieldValue::Null);
    hook.before_create(&mut null).await.unwrap();

    let mut empty = Document::new().with("code", "");
    hook.before_create(&mut empty).await.unwrap();

    assert_eq!(log.warning_count(), 0);
}

#[tokio::test]
async fn zero_and_false_count_as_set_values() {
    let (log, _guard) = capture_warnings();
    let hook = hook_for("code");

    let mut zero = Document::new().with("code", 0_i64);
    hook.before_create(&mut zero).await.unwrap();

    let mut off = Document::new().with("code", false);
    hook.before_create(&mut off).await.unwrap();

    let output = log.contents();
    assert_eq!(log.warning_count(), 2);
    assert!(output.contains("previous=0"));
    assert!(output.contains("previous=false"));
}

#[tokio::test]
async fn persisted_documents_never_warn() {
    let (log, _guard) = capture_warnings();
    let hook = hook_for("code");

    let mut document = Document::new().with("code", "kept");
    document.mark_persisted();
    hook.before_create(&mut document).await.unwrap();

    assert_eq!(log.warning_count(), 0);
    assert_eq!(document.get("code"), Some(&FieldValue::from("kept")));
}
