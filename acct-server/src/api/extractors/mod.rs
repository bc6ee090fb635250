pub mod session_identity;
