mod sender_factory;
mod stdout;
mod webhook;

pub use sender_factory::create_sender;
pub use stdout::StdoutSender;
pub use webhook::WebhookSender;
