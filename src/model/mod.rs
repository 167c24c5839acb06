pub use gridlife_core::AgentLogic;
pub mod agent {
    pub use gridlife_core::agent::*;
}
pub mod config {
    pub use gridlife_core::config::*;
}
pub mod environment {
    pub use gridlife_core::environment::*;
}
pub mod genetics {
    pub use gridlife_core::genetics::*;
}
pub mod lifecycle {
    pub use gridlife_core::lifecycle::*;
}
pub mod metrics {
    pub use gridlife_core::metrics::*;
}

pub mod snapshot;
pub mod world;

pub mod state {
    pub use gridlife_data::*;
}
