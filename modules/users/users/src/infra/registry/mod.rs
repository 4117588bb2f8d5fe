//! Registry ("Ruian") lookup adapters.

mod http_client;
mod stub_client;

pub use http_client::HttpRegistryClient;
pub use stub_client::StubRegistryClient;
