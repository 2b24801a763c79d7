pub mod evaluation_request;
pub mod evaluation_response;

pub use evaluation_request::EvaluationRequest;
pub use evaluation_response::EvaluationResponse;
