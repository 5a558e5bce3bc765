//! CrudService: generic CRUD using the safe SQL builder.

mod crud;
pub mod secrets;
mod validation;
pub use crud::CrudService;
pub(crate) use crud::row_to_json;
pub use validation::{body_to_map, filter_value, parse_id, validate_rating, RequestValidator, INVALID_ID_MESSAGE, RATING_MAX, RATING_MIN};
