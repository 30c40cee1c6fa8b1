// Event routing: inbound socket events -> registry changes -> outbound broadcasts
pub use handlers::{GameEventHandlers, RelayError};
pub use router::GameEventRouter;

mod broadcast;
mod handlers;
mod router;
