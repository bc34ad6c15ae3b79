use super::query::answer_query;
use crate::document::Vfs;
use crate::domain::{QueryReply, VfsEvent, VfsQuery};
use crate::error::VfsResult;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Bound on commands waiting for the actor; senders wait when it is full.
pub const COMMAND_QUEUE_CAPACITY: usize = 256;

#[derive(Debug)]
enum VfsCommand {
    /// Apply a state transition; no reply.
    Event(VfsEvent),
    Query {
        query: VfsQuery,
        reply: oneshot::Sender<VfsResult<QueryReply>>,
    },
    /// Hand out the current store value.
    Current { reply: oneshot::Sender<Vfs> },
}

/// Task that owns the store and applies commands one at a time.
pub(crate) struct VfsActor {
    vfs: Vfs,
    rx: mpsc::Receiver<VfsCommand>,
}

impl VfsActor {
    /// Run until every handle is dropped, then return the final store.
    async fn run(mut self) -> Vfs {
        while let Some(command) = self.rx.recv().await {
            self.handle(command).await;
        }
        log::debug!(target: "vfsync::runtime", "All handles dropped; actor stopping");
        self.vfs
    }

    async fn handle(&mut self, command: VfsCommand) {
        match command {
            VfsCommand::Event(event) => match self.vfs.apply_event(&event) {
                Ok(next) => self.vfs = next,
                Err(err) => {
                    log::error!(
                        target: "vfsync::runtime",
                        "Dropping event {:?}: {}",
                        event,
                        err
                    );
                }
            },
            VfsCommand::Query { query, reply } => {
                let result = match answer(self.vfs.clone(), &query).await {
                    Ok((answer, next)) => {
                        self.vfs = next;
                        Ok(answer)
                    }
                    Err(err) => Err(err),
                };
                if reply.send(result).is_err() {
                    log::debug!(
                        target: "vfsync::runtime",
                        "Query caller went away before the reply: {:?}",
                        query
                    );
                }
            }
            VfsCommand::Current { reply } => {
                let _ = reply.send(self.vfs.clone());
            }
        }
    }
}

/// Snapshot persistence writes a file, so it runs on the blocking pool.
/// The actor still waits for it before taking the next command.
async fn answer(vfs: Vfs, query: &VfsQuery) -> VfsResult<(QueryReply, Vfs)> {
    if !matches!(query, VfsQuery::PersistSnapshot { .. }) {
        return answer_query(&vfs, query);
    }
    let query = query.clone();
    tokio::task::spawn_blocking(move || answer_query(&vfs, &query))
        .await
        .map_err(std::io::Error::other)?
}

/// Cloneable sender side of the store actor.
#[derive(Clone, Debug)]
pub struct VfsHandle {
    tx: mpsc::Sender<VfsCommand>,
}

impl VfsHandle {
    /// Spawn an actor owning `vfs` on the current tokio runtime.
    ///
    /// The join handle resolves to the final store once all handles are
    /// dropped.
    pub fn spawn(vfs: Vfs) -> (Self, JoinHandle<Vfs>) {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let actor = VfsActor { vfs, rx };
        let join = tokio::spawn(actor.run());
        (Self { tx }, join)
    }

    /// Queue a state transition.
    pub async fn notify(&self, event: VfsEvent) -> VfsResult<()> {
        self.tx.send(VfsCommand::Event(event)).await?;
        Ok(())
    }

    /// Answer a query after every previously queued command has applied.
    pub async fn query(&self, query: VfsQuery) -> VfsResult<QueryReply> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(VfsCommand::Query { query, reply }).await?;
        rx.await?
    }

    /// The store as of every previously queued command.
    pub async fn current(&self) -> VfsResult<Vfs> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(VfsCommand::Current { reply }).await?;
        Ok(rx.await?)
    }
}
