mod detect;
mod health;
mod responses;

pub use detect::{detect_handler, DetectionResponse};
pub use health::{health_handler, HealthResponse};
pub use responses::ErrorBody;
