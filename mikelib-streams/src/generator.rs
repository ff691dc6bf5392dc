use std::panic::resume_unwind;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};

use crate::error::StreamsError;

const PRODUCER_THREAD_NAME: &str = "mikelib-generator";

/// Receiving end of a channel fed by a producer thread, created by [`to_generator`].
///
/// The generator yields the elements of the source sequence in their original order and ends
/// once the producer has sent all of them.
///
/// When dropped, the channel is closed and the producer thread is joined. A producer that has not
/// finished yet stops on its next send. If the producer panicked, the panic is forwarded to the
/// thread dropping the `Generator`.
pub struct Generator<T> {
    recv: Option<Receiver<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T> Iterator for Generator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv.as_ref()?.recv().ok()
    }
}

impl<T> Drop for Generator<T> {
    fn drop(&mut self) {
        // Disconnect first, so that a producer blocked in `send` wakes up and exits.
        drop(self.recv.take());

        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                if !thread::panicking() {
                    resume_unwind(payload);
                }
            }
        }
    }
}

/// Starts a producer thread that sends every element of `xs` over an unbuffered channel and then
/// closes it.
///
/// Every send blocks until the consumer takes the element, so the producer never runs ahead of the
/// returned [`Generator`]. This is the inverse of [`collect`].
pub fn to_generator<I>(xs: I) -> Result<Generator<I::Item>, StreamsError>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let (sender, recv) = channel::bounded(0);
    let xs = xs.into_iter();

    let handle = thread::Builder::new()
        .name(PRODUCER_THREAD_NAME.into())
        .spawn(move || {
            log::trace!("{PRODUCER_THREAD_NAME} starting");
            let mut sent = 0usize;
            for x in xs {
                if sender.send(x).is_err() {
                    log::debug!("Generator dropped after {sent} items, stopping the producer");
                    return;
                }
                sent += 1;
            }

            log::trace!("{PRODUCER_THREAD_NAME} exhausted after {sent} items");
        })?;

    Ok(Generator {
        recv: Some(recv),
        handle: Some(handle),
    })
}

/// Drains `xs` until its producer closes the channel and returns the received values in arrival
/// order. This is the inverse of [`to_generator`].
///
/// Accepts a [`Generator`] as well as a raw [`crossbeam::channel::Receiver`].
///
/// If the sending side is never dropped, this function blocks forever.
pub fn collect<T>(xs: impl IntoIterator<Item = T>) -> Vec<T> {
    xs.into_iter().collect()
}
