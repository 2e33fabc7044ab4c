mod detection_service;
mod request_validator;

pub use detection_service::{Detection, DetectionError, DetectionService};
pub use request_validator::{
    DetectionRequest, RequestValidator, ValidatedDetection, ValidationError,
};
