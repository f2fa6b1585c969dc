/// Development utilities module
///
/// Mock data providers used by tests and by the `development` mock mode.

pub mod mock_client;
