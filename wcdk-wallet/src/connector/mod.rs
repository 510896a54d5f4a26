mod connector;

pub use connector::WcConnector;
