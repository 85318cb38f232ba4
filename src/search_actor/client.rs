use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{SearchOutcome, SearchQuery};
use crate::error::SearchError;
use crate::messages::{SearchRequest, SearchStatus};

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, SearchError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| SearchError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| SearchError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle for talking to the [`SearchService`](super::SearchService) actor.
///
/// Dropping the future returned by [`SearchClient::search`] drops the reply
/// channel, which the actor treats as the caller aborting.
#[derive(Clone, Debug)]
pub struct SearchClient {
    sender: mpsc::Sender<SearchRequest>,
}

impl SearchClient {
    pub fn new(sender: mpsc::Sender<SearchRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SearchError> {
        debug!("Sending shutdown");
        self.sender
            .send(SearchRequest::Shutdown)
            .await
            .map_err(|_| SearchError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(SearchClient => fn search(query: SearchQuery) -> SearchOutcome as SearchRequest::Search);
client_method!(SearchClient => fn status() -> SearchStatus as SearchRequest::Status);
