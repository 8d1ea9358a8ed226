pub mod airport;
pub mod secret;
