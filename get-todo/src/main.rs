use get_todo::{handler, logging, Config};
use lamedh_runtime::{handler_fn, run, Context, Error};
use serde_json::Value;
use std::sync::Arc;
use todo_store::S3Store;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::load().await;
    info!(
        bucket = config.location.bucket,
        key = config.location.key,
        "starting get-todo"
    );

    // one client per execution environment, shared by warm invocations
    let store = Arc::new(S3Store::new(&config.sdk));
    let location = config.location;

    run(handler_fn(move |event: Value, context: Context| {
        let store = Arc::clone(&store);
        async move { handler::handle(store.as_ref(), location, event, context).await }
    }))
    .await?;
    Ok(())
}
