pub mod resolved;
pub mod settings;
pub mod types;
pub mod validator;

pub use resolved::*;
pub use settings::AppConfig;
pub use types::*;
pub use validator::*;
