use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use meltdown::Token;
use pin_project_lite::pin_project;
use tokio::signal::unix::{SignalKind, signal};
use tracing::info;

use crate::error::runtime::RuntimeError;

/// Names a meltdown service so its exit can be reported.
pub struct TaggedService<S> {
    tag: &'static str,
    service: S,
}

impl<S> TaggedService<S> {
    pub const fn new(tag: &'static str, service: S) -> Self {
        Self { tag, service }
    }
}

impl<S> meltdown::Service for TaggedService<S>
where
    S: meltdown::Service,
{
    type Future = TaggedFuture<S::Future>;

    fn run(self, token: Token) -> Self::Future {
        TaggedFuture {
            tag: self.tag,
            future: self.service.run(token),
        }
    }
}

pin_project! {
    pub struct TaggedFuture<F> {
        tag: &'static str,
        #[pin]
        future: F,
    }
}

impl<F: Future> Future for TaggedFuture<F> {
    type Output = (&'static str, F::Output);

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let tag = *this.tag;
        this.future.poll(cx).map(|output| (tag, output))
    }
}

/// Resolves on SIGINT, SIGTERM, or when another service triggers shutdown.
pub async fn wait_for_shutdown_signals(
    mut token: Token,
) -> Result<(), RuntimeError> {
    let mut sigint =
        signal(SignalKind::interrupt()).map_err(RuntimeError::Signal)?;
    let mut sigterm =
        signal(SignalKind::terminate()).map_err(RuntimeError::Signal)?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("received SIGTERM, shutting down");
        }
        () = &mut token => {}
    }
    Ok(())
}
