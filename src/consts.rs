pub mod cli_consts {
    //! Dashboard configuration constants.

    use std::time::Duration;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for the controller action channel.
    pub const ACTION_QUEUE_SIZE: usize = 32;

    /// How long to wait when establishing a connection to the API.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall per-request timeout. Mint transactions wait for on-chain
    /// confirmation server-side, so this is deliberately generous.
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    pub const fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }

    pub const fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
