mod in_memory_exchange;
mod json_exchange;

pub use in_memory_exchange::InMemoryExchangeRepository;
pub use json_exchange::JsonExchangeRepository;
