pub mod constants;
pub use constants::DEFAULT_MAX_HOPS;

mod connection_path;
pub use connection_path::{Connection, ConnectionPath};

mod connection_request;
pub use connection_request::{ConnectionRequest, RequestError};

mod shortest_connection;
pub use shortest_connection::shortest_connection;
