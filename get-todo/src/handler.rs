//! The Lambda handler and the fetch it performs.

use crate::{error::FetchError, response::LambdaResponse};
use lamedh_runtime::{Context, Error};
use serde_json::Value;
use todo_store::{ObjectLocation, ObjectStore};
use tracing::{error, info_span, Instrument};

/// Read the object at `location` and return it as a `200` response.
///
/// The object must be UTF-8 text holding a JSON document. Its shape is not checked.
#[tracing::instrument(skip(store, location), fields(bucket = location.bucket, key = location.key))]
pub async fn fetch_todos<S>(store: &S, location: ObjectLocation) -> Result<LambdaResponse, FetchError>
where
    S: ObjectStore + ?Sized,
{
    let bytes = store.get_object(location).await?;
    let text = String::from_utf8(bytes.to_vec())?;
    let body: Value = serde_json::from_str(&text)?;
    Ok(LambdaResponse::ok(body))
}

/// Lambda handler. The event is ignored; every invocation returns the object at `location`.
///
/// Failures are returned to the runtime, which reports them as invocation errors.
pub async fn handle<S>(
    store: &S,
    location: ObjectLocation,
    _event: Value,
    context: Context,
) -> Result<LambdaResponse, Error>
where
    S: ObjectStore + ?Sized,
{
    let span = info_span!("invocation", request_id = %context.request_id);
    async move {
        fetch_todos(store, location).await.map_err(|err| {
            error!(error = %err, "failed to fetch todo data");
            Error::from(err)
        })
    }
    .instrument(span)
    .await
}
