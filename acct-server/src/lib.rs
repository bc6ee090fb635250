pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod registration;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_identity::SessionIdentity,
    login::{login::login, login_request::LoginRequest, login_response::LoginResponse},
    password::{change_password_response::ChangePasswordResponse, password::change_password},
    register::{
        register::register, register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
