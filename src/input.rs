// line input - read on a plain thread so an interrupt never waits on stdin

use crate::Error;
use std::io::{self, BufRead};
use tokio::sync::mpsc;

type Chunk = io::Result<Vec<u8>>;

/// Raw lines from a reader thread. The thread is detached, so a read that
/// never returns can't hold up shutdown.
pub struct Input {
    rx: mpsc::Receiver<Chunk>,
}

impl Input {
    pub fn stdin() -> Self {
        let (tx, input) = Self::channel();
        std::thread::spawn(move || read_lines(io::stdin().lock(), tx));
        input
    }

    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, input) = Self::channel();
        std::thread::spawn(move || read_lines(reader, tx));
        input
    }

    /// Input fed by hand. Nothing is read until the sender sends.
    pub fn channel() -> (mpsc::Sender<Chunk>, Self) {
        let (tx, rx) = mpsc::channel(1);
        (tx, Self { rx })
    }

    /// `None` at end of input. Bytes that aren't UTF-8 become U+FFFD.
    /// Cancel safe.
    pub async fn next_line(&mut self) -> Result<Option<String>, Error> {
        match self.rx.recv().await {
            None => Ok(None),
            Some(Ok(bytes)) => Ok(Some(decode(&bytes))),
            Some(Err(e)) => Err(e.into()),
        }
    }
}

fn read_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<Chunk>) {
    loop {
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                if tx.blocking_send(Ok(line)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                break;
            }
        }
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}
