// Evaluation failures are logged on the `actions.eval` target.

use core_actions::{Action, DispatchOptions, dispatch};
use core_state::CalcState;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl<'a> Write for LockedWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

#[test]
fn malformed_expression_logs_token() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferWriter { inner: buf.clone() })
        .finish();

    let mut state = CalcState::new();
    state.set_display("1 + . × ");
    with_default(subscriber, || {
        dispatch(Action::Evaluate, &mut state, &DispatchOptions::default(), &[]);
    });

    let output = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(output.contains("actions.eval"), "{output}");
    assert!(output.contains("evaluation_failed"), "{output}");
    assert!(output.contains("index 2"), "{output}");
}
