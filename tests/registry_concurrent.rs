use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

use client_paths::{PathSet, Paths};

#[derive(Clone, Default)]
struct SharedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn concurrent_init_stores_and_announces_one_set() {
    let log = SharedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let source: HashMap<String, String> = [
                    ("data-data-path", format!("/data{i}")),
                    ("data-tileset-path", "/tiles".to_string()),
                    ("data-ws", "/ws".to_string()),
                ]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();

                barrier.wait();
                Paths::init(&source).unwrap()
            })
        })
        .collect();

    let results: Vec<&'static PathSet> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let first = results[0];
    assert!(results.iter().all(|paths| std::ptr::eq(*paths, first)));
    assert!(first.data().starts_with("/data"));
    assert_eq!(first.font(), format!("{}/font", first.data()));

    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output.matches("path registry initialized").count(), 1);
}
