//! Change notification for store subscribers

mod change_bus;

pub use change_bus::{ChangeBus, ChangeKind, StoreEvent, StoreNamespace, SubscriptionId};
