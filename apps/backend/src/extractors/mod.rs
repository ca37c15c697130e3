pub mod auth_token;
pub mod current_user;
pub mod maybe_user;
pub mod pagination;
pub mod path_id;
pub mod validated_json;

pub use current_user::CurrentUser;
pub use maybe_user::MaybeUser;
pub use pagination::Pagination;
pub use path_id::parse_id;
pub use validated_json::ValidatedJson;
