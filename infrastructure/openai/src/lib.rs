pub mod client;
pub mod guide_responder;
