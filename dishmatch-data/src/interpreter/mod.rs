//! HTTP client for the natural-language query interpreter.
//!
//! [`HttpQueryInterpreter`] implements the synchronous
//! [`QueryInterpreter`](dishmatch_core::QueryInterpreter) trait by POSTing
//! `{"query": <text>}` to a configured endpoint and decoding the flat JSON
//! object it returns. The async HTTP call runs on a Tokio runtime owned by
//! the interpreter.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use dishmatch_core::QueryInterpreter;
//! use dishmatch_data::{HttpQueryInterpreter, HttpQueryInterpreterConfig};
//!
//! let config = HttpQueryInterpreterConfig::new("http://localhost:8000/interpret")
//!     .with_timeout(Duration::from_secs(5));
//! let interpreter = HttpQueryInterpreter::with_config(config)?;
//!
//! let attributes = interpreter.interpret("something sweet without lactose")?;
//! println!("{} attribute(s)", attributes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{
    DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, HttpQueryInterpreter, HttpQueryInterpreterConfig,
    InterpreterBuildError,
};
