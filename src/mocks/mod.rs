//! Test doubles for the transport and auth seams.

mod mock_auth;
mod mock_transport;

pub use mock_auth::MockAuthManager;
pub use mock_transport::MockHttpTransport;
