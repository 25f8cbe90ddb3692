pub mod client;
pub mod sms_notifier;
