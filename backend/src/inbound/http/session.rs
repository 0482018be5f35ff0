//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The only per-session state is the pending-update marker: the id of the
//! book a visitor asked to edit, kept until the next list render consumes it.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{BookId, Error};

pub(crate) const PENDING_UPDATE_KEY: &str = "pending_update_book_id";

/// Newtype wrapper exposing the pending-update marker operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Remember `id` as the book pending edit, replacing any earlier marker.
    pub fn stash_pending_update(&self, id: BookId) -> Result<(), Error> {
        self.0
            .insert(PENDING_UPDATE_KEY, id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Read the marker and clear it.
    ///
    /// A marker that cannot be decoded is discarded and reported as absent.
    pub fn take_pending_update(&self) -> Option<BookId> {
        match self.0.remove_as::<i64>(PENDING_UPDATE_KEY)? {
            Ok(raw) => Some(BookId::new(raw)),
            Err(raw) => {
                warn!(value = %raw, "discarding undecodable pending update marker");
                None
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(Self::new) })
    }
}
