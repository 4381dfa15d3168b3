pub mod contact;
pub mod inputmap;
pub mod movement;
pub mod session;
