//! # Models Module
//!
//! Data carried through a single fetch run: the option bag going in, the
//! resolved request, and the received response.

pub mod options;
pub mod request_spec;
pub mod response_view;

pub use options::OptionBag;
pub use request_spec::{
    BasicAuth, HttpHeaders, HttpMethod, RequestBody, RequestSpec, TransportConfig,
};
pub use response_view::{HeaderEntry, ResponseView};
