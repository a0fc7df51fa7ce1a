//! Parallel lemmatization of a token batch.
//!
//! Tokens are split into chunks which a fixed set of workers pull from a
//! bounded channel. Each result carries its chunk index so the output is put
//! back together in input order.

extern crate crossbeam_channel;

use std::num::NonZeroUsize;

use crossbeam_channel::bounded;
use gdlemma::Lemmatizer;
use tracing::debug;

const MIN_CHUNK: usize = 256;

/// Lemmatizes `tokens` on `threads` workers. Returns one `(token, lemma)` pair
/// per token, in input order.
pub fn lemmatize_parallel(
    lemmatizer: &Lemmatizer,
    tokens: Vec<String>,
    threads: NonZeroUsize,
) -> Vec<(String, String)> {
    let threads = threads.get();

    if threads == 1 || tokens.len() <= MIN_CHUNK {
        return lemmatizer.lemmatize_all(tokens);
    }

    let chunk_size = tokens.len().div_ceil(threads).max(MIN_CHUNK);
    let total = tokens.len();

    let mut chunks = Vec::with_capacity(total.div_ceil(chunk_size));
    let mut rest = tokens;
    while !rest.is_empty() {
        let tail = rest.split_off(chunk_size.min(rest.len()));
        chunks.push(std::mem::replace(&mut rest, tail));
    }

    let chunk_count = chunks.len();
    debug!(total, threads, chunk_count, "lemmatizing in parallel");

    let (work_tx, work_rx) = bounded::<(usize, Vec<String>)>(threads);
    let (done_tx, done_rx) = bounded::<(usize, Vec<(String, String)>)>(threads);

    std::thread::scope(|scope| {
        for _ in 0..threads {
            let work_rx = work_rx.clone();
            let done_tx = done_tx.clone();

            scope.spawn(move || {
                for (index, chunk) in work_rx {
                    if done_tx.send((index, lemmatizer.lemmatize_all(chunk))).is_err() {
                        break;
                    }
                }
            });
        }

        drop(work_rx);
        drop(done_tx);

        scope.spawn(move || {
            for job in chunks.into_iter().enumerate() {
                if work_tx.send(job).is_err() {
                    break;
                }
            }
        });

        let mut slots: Vec<Option<Vec<(String, String)>>> = vec![None; chunk_count];
        for (index, pairs) in done_rx {
            slots[index] = Some(pairs);
        }

        slots.into_iter().flatten().flatten().collect()
    })
}
