pub mod client_entity;
