#![deny(missing_docs)]

//! AWS Lambda function that serves the group todo list.
//!
//! Every invocation reads `todo-data.json` from the `grp3-cap2b-data` bucket and
//! answers with `{"statusCode": 200, "body": <document>}`, where the body is the
//! parsed JSON document rather than a string.
//!
//! ```no_run
//! use get_todo::{handler, Config};
//! use lamedh_runtime::{handler_fn, run, Context, Error};
//! use serde_json::Value;
//! use std::sync::Arc;
//! use todo_store::S3Store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let config = Config::load().await;
//!     let store = Arc::new(S3Store::new(&config.sdk));
//!     let location = config.location;
//!     run(handler_fn(move |event: Value, context: Context| {
//!         let store = Arc::clone(&store);
//!         async move { handler::handle(store.as_ref(), location, event, context).await }
//!     }))
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
pub mod handler;
pub mod logging;
pub mod response;

pub use crate::{config::Config, error::FetchError, response::LambdaResponse};
