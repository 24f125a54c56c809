//! # Generic Messages
//!
//! This module defines the message types exchanged between a [`ResourceClient`] and its
//! [`ResourceActor`].
//!
//! [`ResourceClient`]: crate::framework::ResourceClient
//! [`ResourceActor`]: crate::framework::ResourceActor

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// # The CRUD Pattern
/// Each variant is one unit of work against the whole collection. The actor handles a
/// variant completely (load, modify, save, reply) before it looks at the next one.
///
/// - **List**: Load the collection and return it in stored order.
/// - **Get**: Load the collection and find one record by id.
/// - **Create**: Load, allocate an id, append, save. Replies with the stored record.
/// - **Update**: Load, patch the record in place, save. Replies with the patched record.
/// - **Delete**: Load, splice the record out, save. Replies with the removed record.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
